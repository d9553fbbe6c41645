use crate::prelude::*;
use crate::record::Line;
use std::fmt;

/// Prints every clause as it enters the knowledge base.
#[derive(Default)]
pub struct PrintTranscript;

impl Record for PrintTranscript {
    fn clause(&mut self, knowledge: &KnowledgeBase, id: Id<Clause>) {
        println!("{}", Line(knowledge, id));
    }
}

#[derive(Default)]
pub struct PrintStatistics;

impl Record for PrintStatistics {
    fn statistic<T: fmt::Display>(&mut self, key: &'static str, value: T) {
        println!("% {}: {}", key, value);
    }
}
