use crate::prelude::*;
use fnv::FnvHashMap;
use std::mem;
use std::ops::Index;

/// Where a clause came from. Not part of clause identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Premise,
    NegatedQuery,
    Resolvent(Id<Clause>, Id<Clause>),
}

/// The knowledge base: an append-only sequence of clauses.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    symbols: Symbols,
    clauses: Block<Clause>,
    origins: Block<Origin>,
    equivalents: FnvHashMap<Box<[Literal]>, Vec<Id<Clause>>>,
}

impl KnowledgeBase {
    pub fn push(&mut self, clause: Clause, origin: Origin) -> Id<Clause> {
        let key = clause.key();
        let id = self.clauses.push(clause);
        self.origins.push(origin);
        self.equivalents.entry(key).or_default().push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = Id<Clause>> {
        self.clauses.ids()
    }

    pub fn get(&self, id: Id<Clause>) -> Option<&Clause> {
        self.clauses.get(id)
    }

    pub fn origin(&self, id: Id<Clause>) -> Origin {
        self.origins[id.transmute::<Origin>()]
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Clauses with exactly the literals of `clause`.
    pub fn equivalents(
        &self,
        clause: &Clause,
    ) -> impl Iterator<Item = Id<Clause>> + '_ {
        self.equivalents
            .get(&clause.key())
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    pub fn record_all<R: Record>(&self, record: &mut R) {
        for id in self.ids() {
            record.clause(self, id);
        }
    }
}

impl Index<Id<Clause>> for KnowledgeBase {
    type Output = Clause;

    fn index(&self, id: Id<Clause>) -> &Self::Output {
        &self.clauses[id]
    }
}

/// Seeds a knowledge base from premises and a query.
#[derive(Default)]
pub struct KnowledgeBuilder {
    knowledge: KnowledgeBase,
    saved: Clause,
}

impl KnowledgeBuilder {
    pub fn finish(self) -> KnowledgeBase {
        debug_assert!(self.saved.is_empty(), "unfinished premise");
        self.knowledge
    }

    pub fn literal(
        &mut self,
        name: &str,
        polarity: bool,
    ) -> Result<(), Complementary> {
        let symbol = self.knowledge.symbols.intern(name);
        self.saved.insert(Literal::new(polarity, symbol))
    }

    pub fn premise(&mut self) -> Id<Clause> {
        let clause = mem::take(&mut self.saved);
        self.knowledge.push(clause, Origin::Premise)
    }

    /// Add the negation of one query literal as a unit clause.
    pub fn query(&mut self, name: &str, polarity: bool) -> Id<Clause> {
        let symbol = self.knowledge.symbols.intern(name);
        let literal = Literal::new(polarity, symbol).negated();
        self.knowledge
            .push(Clause::unit(literal), Origin::NegatedQuery)
    }
}
