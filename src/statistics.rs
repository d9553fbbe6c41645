use crate::prelude::*;

#[derive(Default)]
pub struct Statistics {
    premises: usize,
    query_clauses: usize,
    resolution_attempts: usize,
    unresolvable_pairs: usize,
    tautologies: usize,
    redundant_resolvents: usize,
    retained_resolvents: usize,
}

impl Statistics {
    pub fn new(knowledge: &KnowledgeBase) -> Self {
        let mut statistics = Self::default();
        for id in knowledge.ids() {
            match knowledge.origin(id) {
                Origin::Premise => statistics.premises += 1,
                Origin::NegatedQuery => statistics.query_clauses += 1,
                Origin::Resolvent(_, _) => statistics.retained_resolvents += 1,
            }
        }
        statistics
    }

    pub fn record<R: Record>(&self, record: &mut R) {
        record.statistic("premises", self.premises);
        record.statistic("query clauses", self.query_clauses);
        record.statistic("resolution attempts", self.resolution_attempts);
        record.statistic("unresolvable pairs", self.unresolvable_pairs);
        record.statistic("tautologies", self.tautologies);
        record.statistic("redundant resolvents", self.redundant_resolvents);
        record.statistic("retained resolvents", self.retained_resolvents);
    }

    pub fn resolution_attempts(&self) -> usize {
        self.resolution_attempts
    }

    pub(crate) fn increment_resolution_attempts(&mut self) {
        self.resolution_attempts += 1;
    }

    pub(crate) fn increment_unresolvable_pairs(&mut self) {
        self.unresolvable_pairs += 1;
    }

    pub(crate) fn increment_tautologies(&mut self) {
        self.tautologies += 1;
    }

    pub(crate) fn increment_redundant_resolvents(&mut self) {
        self.redundant_resolvents += 1;
    }

    pub(crate) fn increment_retained_resolvents(&mut self) {
        self.retained_resolvents += 1;
    }
}
