//! Storage trait for default-free coordinate maps

use crate::Coordinate;

/// Trait for backends that hold the materialized cells of a sparse matrix
///
/// A store is a plain map from coordinate to value. It does not know about
/// the matrix default: keeping default values out of the store is the
/// caller's responsibility.
pub trait SparseStore<const N: usize> {
    /// The value type stored per coordinate
    type Value;

    /// Look up the value stored at `coordinate`
    ///
    /// Returns `None` when nothing is stored there.
    fn lookup(&self, coordinate: &Coordinate<N>) -> Option<&Self::Value>;

    /// Look up the value stored at `coordinate` for in-place mutation
    fn lookup_mut(&mut self, coordinate: &Coordinate<N>) -> Option<&mut Self::Value>;

    /// Insert or overwrite the value at `coordinate`
    ///
    /// Returns the previously stored value, if any.
    fn insert(&mut self, coordinate: Coordinate<N>, value: Self::Value) -> Option<Self::Value>;

    /// Remove the value at `coordinate`
    ///
    /// Erasing an absent coordinate is a no-op returning `None`.
    fn erase(&mut self, coordinate: &Coordinate<N>) -> Option<Self::Value>;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Whether the store holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry
    fn clear(&mut self);
}
