//! Key-ordered sparse store backed by a `BTreeMap`
//!
//! Iteration follows coordinate order (lexicographic over components), not
//! insertion order.

use alloc::collections::btree_map::{self, BTreeMap};

use crate::{Coordinate, SparseStore};

/// Ordered map from coordinate to value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedStore<T, const N: usize> {
    entries: BTreeMap<Coordinate<N>, T>,
}

impl<T, const N: usize> OrderedStore<T, N> {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Iterate over stored entries in coordinate order
    pub fn iter(&self) -> btree_map::Iter<'_, Coordinate<N>, T> {
        self.entries.iter()
    }

    /// Iterate mutably over stored entries in coordinate order
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, Coordinate<N>, T> {
        self.entries.iter_mut()
    }

    /// Keep only the entries for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Coordinate<N>, &mut T) -> bool,
    {
        self.entries.retain(keep);
    }

    /// First stored entry in coordinate order
    pub fn first(&self) -> Option<(&Coordinate<N>, &T)> {
        self.entries.first_key_value()
    }

    /// Last stored entry in coordinate order
    pub fn last(&self) -> Option<(&Coordinate<N>, &T)> {
        self.entries.last_key_value()
    }
}

impl<T, const N: usize> Default for OrderedStore<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> SparseStore<N> for OrderedStore<T, N> {
    type Value = T;

    fn lookup(&self, coordinate: &Coordinate<N>) -> Option<&T> {
        self.entries.get(coordinate)
    }

    fn lookup_mut(&mut self, coordinate: &Coordinate<N>) -> Option<&mut T> {
        self.entries.get_mut(coordinate)
    }

    fn insert(&mut self, coordinate: Coordinate<N>, value: T) -> Option<T> {
        self.entries.insert(coordinate, value)
    }

    fn erase(&mut self, coordinate: &Coordinate<N>) -> Option<T> {
        self.entries.remove(coordinate)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T, const N: usize> IntoIterator for OrderedStore<T, N> {
    type Item = (Coordinate<N>, T);
    type IntoIter = btree_map::IntoIter<Coordinate<N>, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
