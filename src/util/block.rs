use crate::prelude::*;
use std::ops::Index;

/// Append-only storage: items are never removed or replaced once pushed.
#[derive(Clone, Debug)]
pub struct Block<T> {
    items: Vec<T>,
}

impl<T> Block<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Id<T>) -> Option<&T> {
        self.items.get(id.slot())
    }

    pub fn push(&mut self, item: T) -> Id<T> {
        self.items.push(item);
        Id::new(self.items.len() as u32)
    }

    pub fn ids(&self) -> impl Iterator<Item = Id<T>> {
        (1..=self.items.len() as u32).map(Id::new)
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        let items = vec![];
        Self { items }
    }
}

impl<T> Index<Id<T>> for Block<T> {
    type Output = T;

    fn index(&self, id: Id<T>) -> &Self::Output {
        let index = id.slot();
        debug_assert!(index < self.items.len(), "out of range");
        &self.items[index]
    }
}
