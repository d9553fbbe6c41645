use resolute::io::input::{self, InputError};
use resolute::prelude::*;
use resolute::record::Transcript;
use resolute::search::{Outcome, Search};
use resolute::statistics::Statistics;
use std::path::PathBuf;

fn problem(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("problems");
    path.push(name);
    path
}

fn refute(knowledge: &mut KnowledgeBase) -> (Outcome, Vec<String>) {
    let mut transcript = Transcript::default();
    let mut statistics = Statistics::new(knowledge);
    knowledge.record_all(&mut transcript);
    let outcome =
        Search::default().run(knowledge, &mut transcript, &mut statistics);
    (outcome, transcript.lines().to_vec())
}

#[test]
fn chain_is_valid() {
    let mut knowledge = input::load(&problem("chain.kb")).unwrap();
    let (outcome, lines) = refute(&mut knowledge);
    assert!(outcome.is_valid());
    assert_eq!(lines.first().unwrap(), "1. P Q {}");
    assert_eq!(lines.last().unwrap(), "7. Contradiction {4, 3}");
}

#[test]
fn unit_premise_is_valid() {
    let mut knowledge = input::load(&problem("unit.kb")).unwrap();
    let (outcome, lines) = refute(&mut knowledge);
    assert!(outcome.is_valid());
    assert_eq!(
        lines,
        vec![
            "1. P Q {}",
            "2. ~P {}",
            "3. ~Q {}",
            "4. Q {2, 1}",
            "5. P {3, 1}",
            "6. Contradiction {4, 3}",
        ]
    );
}

#[test]
fn unrelated_query_fails() {
    let mut knowledge = input::load(&problem("unrelated.kb")).unwrap();
    let (outcome, lines) = refute(&mut knowledge);
    assert_eq!(outcome, Outcome::Exhausted);
    assert_eq!(lines, vec!["1. P {}", "2. ~Q {}"]);
}

#[test]
fn case_analysis_is_valid() {
    let mut knowledge = input::load(&problem("lawn.kb")).unwrap();
    let (outcome, lines) = refute(&mut knowledge);
    assert!(outcome.is_valid());
    assert!(lines.last().unwrap().contains("Contradiction"));

    let mut shown = std::collections::HashSet::new();
    for line in &lines {
        let literals = line.split(". ").nth(1).unwrap();
        let literals = literals.split('{').next().unwrap();
        let mut key: Vec<_> = literals.split_whitespace().collect();
        key.sort();
        assert!(shown.insert(key), "{} repeats an earlier clause", line);
    }
}

#[test]
fn satisfiable_knowledge_base_is_exhausted() {
    let mut knowledge = input::parse("P Q\n~Q R\nP").unwrap();
    let (outcome, _) = refute(&mut knowledge);
    assert_eq!(outcome, Outcome::Exhausted);
}

#[test]
fn missing_file() {
    let error = input::load(&problem("missing.kb")).unwrap_err();
    assert!(matches!(error, InputError::Io(_)));
}
