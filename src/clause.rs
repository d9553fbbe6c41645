use crate::prelude::*;
use std::fmt;

/// Attempted to add the complement of a literal already in the clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Complementary(pub Literal);

/// A disjunction of literals.
///
/// Each symbol occurs at most once, so a clause can never contain both a
/// literal and its complement. Literals keep their insertion order for
/// reporting; identity ignores it.
#[derive(Clone, Debug, Default)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn unit(literal: Literal) -> Self {
        let literals = vec![literal];
        Self { literals }
    }

    pub fn insert(&mut self, literal: Literal) -> Result<(), Complementary> {
        match self.polarity(literal.symbol) {
            None => {
                self.literals.push(literal);
                Ok(())
            }
            Some(polarity) if polarity == literal.polarity => Ok(()),
            Some(_) => Err(Complementary(literal)),
        }
    }

    pub fn polarity(&self, symbol: Id<Symbol>) -> Option<bool> {
        self.literals
            .iter()
            .find(|literal| literal.symbol == symbol)
            .map(|literal| literal.polarity)
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.polarity(literal.symbol) == Some(literal.polarity)
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.literals().all(|literal| other.contains(literal))
    }

    /// Canonical form: the literals in sorted order.
    pub fn key(&self) -> Box<[Literal]> {
        let mut key = self.literals.clone();
        key.sort_unstable();
        key.into_boxed_slice()
    }
}

impl fmt::Display for Pair<&Symbols, &Clause> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Pair(symbols, clause) = self;
        if clause.is_empty() {
            return write!(f, "Contradiction ");
        }
        for literal in clause.literals() {
            write!(f, "{} ", Pair(*symbols, literal))?;
        }
        Ok(())
    }
}
