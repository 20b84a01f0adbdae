//! Client-Side Stores
//!
//! In-memory mirrors of the backend collections. A load always replaces
//! the whole snapshot; loads are ticketed so an older response that
//! resolves late cannot overwrite a newer one.

use crate::models::{Email, Item};

/// Issued when a load starts, presented when its response arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct Collection<T> {
    entries: Vec<T>,
    issued: u64,
    applied: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> Collection<T> {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Replace the snapshot unless a newer load already landed.
    /// Returns whether the snapshot was taken.
    pub fn apply(&mut self, ticket: LoadTicket, entries: Vec<T>) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.entries = entries;
        true
    }

    pub fn all(&self) -> &[T] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type ItemStore = Collection<Item>;
pub type EmailStore = Collection<Email>;

impl Collection<Item> {
    pub fn find(&self, id: u32) -> Option<&Item> {
        self.entries.iter().find(|item| item.id == id)
    }

    /// Optimistically flip an item back to "checking"
    pub fn mark_checking(&mut self, id: u32) -> bool {
        match self.entries.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_available = None;
                true
            }
            None => false,
        }
    }
}
