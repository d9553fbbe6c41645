use crate::prelude::*;
use std::fmt;

pub trait Record {
    fn clause(&mut self, _knowledge: &KnowledgeBase, _id: Id<Clause>) {}

    fn statistic<T: fmt::Display>(&mut self, _key: &'static str, _value: T) {}
}

pub struct Silent;
impl Record for Silent {}

/// One report line: number, literals, and the clauses it was resolved from.
pub struct Line<'a>(pub &'a KnowledgeBase, pub Id<Clause>);

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Line(knowledge, id) = self;
        let clause = &knowledge[*id];
        write!(f, "{}. {}", id, Pair(knowledge.symbols(), clause))?;
        match knowledge.origin(*id) {
            Origin::Resolvent(left, right) => {
                write!(f, "{{{}, {}}}", left, right)
            }
            Origin::Premise | Origin::NegatedQuery => write!(f, "{{}}"),
        }
    }
}

/// Keeps report lines in memory.
#[derive(Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Record for Transcript {
    fn clause(&mut self, knowledge: &KnowledgeBase, id: Id<Clause>) {
        self.lines.push(Line(knowledge, id).to_string());
    }
}
