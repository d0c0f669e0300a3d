//! Iterators over materialized cells
//!
//! Iteration visits stored cells only, in coordinate order. Each item is
//! the cell's coordinate followed by its value.

use std::collections::btree_map;
use std::iter::FusedIterator;

use sparsend_core::Coordinate;

/// Iterator over `(coordinate, &value)` pairs of a [`Matrix`](crate::Matrix)
#[derive(Debug, Clone)]
pub struct Iter<'a, T, const N: usize> {
    inner: btree_map::Iter<'a, Coordinate<N>, T>,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(inner: btree_map::Iter<'a, Coordinate<N>, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = (&'a Coordinate<N>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

/// Iterator over `(coordinate, &mut value)` pairs of a [`Matrix`](crate::Matrix)
///
/// Values written through this iterator stay stored even when they equal
/// the default; see [`Matrix::prune`](crate::Matrix::prune).
#[derive(Debug)]
pub struct IterMut<'a, T, const N: usize> {
    inner: btree_map::IterMut<'a, Coordinate<N>, T>,
}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(inner: btree_map::IterMut<'a, Coordinate<N>, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = (&'a Coordinate<N>, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IterMut<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

/// Owning iterator over `(coordinate, value)` pairs of a [`Matrix`](crate::Matrix)
#[derive(Debug)]
pub struct IntoIter<T, const N: usize> {
    inner: btree_map::IntoIter<Coordinate<N>, T>,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(inner: btree_map::IntoIter<Coordinate<N>, T>) -> Self {
        Self { inner }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = (Coordinate<N>, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
