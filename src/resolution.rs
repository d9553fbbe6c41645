use crate::prelude::*;

/// The result of resolving two clauses.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// No complementary pair: nothing to infer.
    NoMatch,
    /// More than one complementary pair: the resolvent is trivially true.
    Tautology,
    /// The empty clause.
    Contradiction,
    Resolvent(Clause),
}

fn pivot(left: &Clause, right: &Clause) -> Option<Literal> {
    left.literals()
        .find(|literal| right.contains(literal.negated()))
}

/// Resolve `left` against `right` on the first complementary literal of
/// `left`. Surviving literals keep `left`'s order, then `right`'s.
pub fn resolve(left: &Clause, right: &Clause) -> Resolution {
    let pivot = match pivot(left, right) {
        Some(pivot) => pivot,
        None => return Resolution::NoMatch,
    };

    let mut resolvent = Clause::default();
    let survivors = left
        .literals()
        .filter(|literal| *literal != pivot)
        .chain(right.literals().filter(|literal| *literal != pivot.negated()));
    for literal in survivors {
        if resolvent.insert(literal).is_err() {
            return Resolution::Tautology;
        }
    }

    if resolvent.is_empty() {
        Resolution::Contradiction
    } else {
        Resolution::Resolvent(resolvent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(symbols: &mut Symbols, text: &str) -> Clause {
        let mut clause = Clause::default();
        for token in text.split_whitespace() {
            let (polarity, name) = match token.strip_prefix('~') {
                Some(name) => (false, name),
                None => (true, token),
            };
            clause
                .insert(Literal::new(polarity, symbols.intern(name)))
                .unwrap();
        }
        clause
    }

    fn render(symbols: &Symbols, resolution: Resolution) -> String {
        match resolution {
            Resolution::Resolvent(clause) => {
                format!("{}", Pair(symbols, &clause))
            }
            other => format!("{:?}", other),
        }
    }

    #[test]
    fn complementary_units_contradict() {
        let mut symbols = Symbols::default();
        let p = clause(&mut symbols, "P");
        let not_p = clause(&mut symbols, "~P");
        assert!(matches!(resolve(&p, &not_p), Resolution::Contradiction));
        assert!(matches!(resolve(&not_p, &p), Resolution::Contradiction));
    }

    #[test]
    fn two_complementary_pairs_are_tautological() {
        let mut symbols = Symbols::default();
        let left = clause(&mut symbols, "P Q");
        let right = clause(&mut symbols, "~P ~Q");
        assert!(matches!(resolve(&left, &right), Resolution::Tautology));

        let left = clause(&mut symbols, "P ~Q R");
        let right = clause(&mut symbols, "~P Q S");
        assert!(matches!(resolve(&left, &right), Resolution::Tautology));
    }

    #[test]
    fn no_complement_no_match() {
        let mut symbols = Symbols::default();
        let left = clause(&mut symbols, "P Q");
        let right = clause(&mut symbols, "Q ~R");
        assert!(matches!(resolve(&left, &right), Resolution::NoMatch));
    }

    #[test]
    fn shared_literals_are_kept_once() {
        let mut symbols = Symbols::default();
        let left = clause(&mut symbols, "~P Q");
        let right = clause(&mut symbols, "P Q");
        assert_eq!(render(&symbols, resolve(&left, &right)), "Q ");
    }

    #[test]
    fn survivors_keep_left_then_right_order() {
        let mut symbols = Symbols::default();
        let left = clause(&mut symbols, "R ~P S");
        let right = clause(&mut symbols, "T P R ~U");
        assert_eq!(render(&symbols, resolve(&left, &right)), "R S T ~U ");
    }

    #[test]
    fn pivot_follows_left_order() {
        let mut symbols = Symbols::default();
        let left = clause(&mut symbols, "Q P");
        let not_p = clause(&mut symbols, "~P");
        let not_q = clause(&mut symbols, "~Q");
        assert_eq!(render(&symbols, resolve(&left, &not_p)), "Q ");
        assert_eq!(render(&symbols, resolve(&left, &not_q)), "P ");
        assert_eq!(render(&symbols, resolve(&not_q, &left)), "P ");
    }
}
