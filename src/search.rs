use crate::prelude::*;
use crate::redundancy::is_redundant;
use crate::resolution::{resolve, Resolution};
use crate::statistics::Statistics;
use log::{debug, info, trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The empty clause was derived: the query is entailed.
    ContradictionFound(Id<Clause>),
    /// Every pair was tried without deriving the empty clause.
    Exhausted,
    /// The configured number of resolution attempts ran out.
    StepLimit,
}

impl Outcome {
    pub fn is_valid(self) -> bool {
        matches!(self, Outcome::ContradictionFound(_))
    }
}

#[derive(Clone, Copy, Default)]
pub struct Search {
    pub steps: Option<usize>,
}

impl Search {
    pub fn new(steps: Option<usize>) -> Self {
        Self { steps }
    }

    /// Saturate `knowledge` by pairwise resolution.
    ///
    /// Each clause from the second onwards is resolved against every clause
    /// before it. The outer bound is the live length of the knowledge base,
    /// so retained resolvents are visited in turn.
    pub fn run<R: Record>(
        &self,
        knowledge: &mut KnowledgeBase,
        record: &mut R,
        statistics: &mut Statistics,
    ) -> Outcome {
        if knowledge.is_empty() {
            return Outcome::Exhausted;
        }
        let first = Id::new(1);
        let mut current = first.next();
        while current.number() <= knowledge.len() {
            let mut other = first;
            while other < current {
                if self.steps == Some(statistics.resolution_attempts()) {
                    warn!(
                        "step limit reached after {} clauses",
                        knowledge.len()
                    );
                    return Outcome::StepLimit;
                }
                statistics.increment_resolution_attempts();

                let step =
                    self.step(knowledge, record, statistics, current, other);
                if let Some(outcome) = step {
                    return outcome;
                }
                other = other.next();
            }
            current = current.next();
        }

        info!("exhausted {} clauses", knowledge.len());
        Outcome::Exhausted
    }

    fn step<R: Record>(
        &self,
        knowledge: &mut KnowledgeBase,
        record: &mut R,
        statistics: &mut Statistics,
        current: Id<Clause>,
        other: Id<Clause>,
    ) -> Option<Outcome> {
        let origin = Origin::Resolvent(current, other);
        match resolve(&knowledge[current], &knowledge[other]) {
            Resolution::NoMatch => {
                statistics.increment_unresolvable_pairs();
                None
            }
            Resolution::Tautology => {
                trace!("{} and {} resolve to a tautology", current, other);
                statistics.increment_tautologies();
                None
            }
            Resolution::Contradiction => {
                let id = knowledge.push(Clause::default(), origin);
                statistics.increment_retained_resolvents();
                record.clause(knowledge, id);
                info!("contradiction from {} and {}", current, other);
                Some(Outcome::ContradictionFound(id))
            }
            Resolution::Resolvent(clause) => {
                if is_redundant(&clause, knowledge, (current, other)) {
                    trace!(
                        "discarded redundant resolvent of {} and {}",
                        current,
                        other
                    );
                    statistics.increment_redundant_resolvents();
                    return None;
                }
                let id = knowledge.push(clause, origin);
                statistics.increment_retained_resolvents();
                record.clause(knowledge, id);
                debug!("retained {} from {} and {}", id, current, other);
                None
            }
        }
    }
}
