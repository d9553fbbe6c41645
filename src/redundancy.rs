use crate::prelude::*;

/// Whether `candidate` duplicates a clause already in the knowledge base,
/// other than the two clauses it was resolved from.
///
/// Only exact literal-set equivalence counts: a strictly smaller clause
/// that subsumes `candidate` does not make it redundant.
pub fn is_redundant(
    candidate: &Clause,
    knowledge: &KnowledgeBase,
    excluding: (Id<Clause>, Id<Clause>),
) -> bool {
    let (left, right) = excluding;
    knowledge
        .equivalents(candidate)
        .any(|id| id != left && id != right)
}
