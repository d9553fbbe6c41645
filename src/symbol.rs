use crate::prelude::*;
use fnv::FnvHashMap;
use std::fmt;

#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
}

/// Interned proposition names.
#[derive(Clone, Debug, Default)]
pub struct Symbols {
    symbols: Block<Symbol>,
    names: FnvHashMap<String, Id<Symbol>>,
}

impl Symbols {
    pub fn intern(&mut self, name: &str) -> Id<Symbol> {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        let symbol = Symbol {
            name: name.to_string(),
        };
        let id = self.symbols.push(symbol);
        self.names.insert(name.to_string(), id);
        id
    }

    pub fn lookup(&self, name: &str) -> Option<Id<Symbol>> {
        self.names.get(name).copied()
    }

    pub fn name(&self, id: Id<Symbol>) -> &str {
        &self.symbols[id].name
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Pair<&Symbols, Id<Symbol>> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Pair(symbols, id) = self;
        write!(f, "{}", symbols.name(*id))
    }
}
