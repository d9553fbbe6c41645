use crate::prelude::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub polarity: bool,
    pub symbol: Id<Symbol>,
}

impl Literal {
    pub fn new(polarity: bool, symbol: Id<Symbol>) -> Self {
        Self { polarity, symbol }
    }

    pub fn negated(self) -> Self {
        Self::new(!self.polarity, self.symbol)
    }

    pub fn is_complement_of(self, other: Self) -> bool {
        self.symbol == other.symbol && self.polarity != other.polarity
    }
}

impl fmt::Display for Pair<&Symbols, Literal> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Pair(symbols, literal) = self;
        if !literal.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", Pair(*symbols, literal.symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complements() {
        let mut symbols = Symbols::default();
        let p = Literal::new(true, symbols.intern("P"));
        let q = Literal::new(true, symbols.intern("Q"));
        assert!(p.is_complement_of(p.negated()));
        assert!(!p.is_complement_of(p));
        assert!(!p.is_complement_of(q.negated()));
        assert_eq!(format!("{}", Pair(&symbols, p.negated())), "~P");
    }
}
