//! Sparse N-dimensional matrix with default-value elision
//!
//! A [`Matrix`] looks like a dense, unbounded N-dimensional array. Only cells
//! whose value differs from the matrix default are stored; writing the
//! default erases a cell.

use std::ops::Index;

use sparsend_core::{
    Coordinate, MatrixElement, OrderedStore, Result, SparseError, SparseMatrix, SparseStore,
};
use tracing::{debug, trace};

use crate::accessor::ValueAccessor;
use crate::iter::{IntoIter, Iter, IterMut};

/// Sparse matrix of `T` with `N` dimensions
///
/// Invariant: `size()` always equals the number of stored entries, and
/// the write paths never store a value equal to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T, const N: usize = 2> {
    store: OrderedStore<T, N>,
    default: T,
    size: usize,
}

impl<T: MatrixElement + Default, const N: usize> Matrix<T, N> {
    /// Create an empty matrix whose default is `T::default()`
    pub fn new() -> Self {
        Self::with_default(T::default())
    }
}

impl<T: MatrixElement + Default, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement, const N: usize> Matrix<T, N> {
    /// Create an empty matrix where every unset cell reads as `default`
    pub fn with_default(default: T) -> Self {
        debug!(arity = N, "Created sparse matrix");
        Self {
            store: OrderedStore::new(),
            default,
            size: 0,
        }
    }

    /// Build a matrix from already default-free, unique entries
    ///
    /// Unlike [`Extend`], which applies write semantics, this rejects input
    /// that could not have come out of a matrix with the same default.
    pub fn try_from_entries<I>(default: T, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Coordinate<N>, T)>,
    {
        let mut matrix = Self::with_default(default);
        for (coordinate, value) in entries {
            if value.is_default(&matrix.default) {
                return Err(SparseError::DefaultValuedEntry);
            }
            if matrix.store.insert(coordinate, value).is_some() {
                return Err(SparseError::DuplicateCoordinate);
            }
            matrix.size += 1;
        }
        debug!(entries = matrix.size, "Built sparse matrix from entries");
        Ok(matrix)
    }

    /// The value unset cells read as
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of materialized cells, O(1)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether no cell is materialized
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether a value is stored at `coordinate`
    pub fn contains(&self, coordinate: impl Into<Coordinate<N>>) -> bool {
        self.store.lookup(&coordinate.into()).is_some()
    }

    /// Read the value at `coordinate`, or the default when unset
    pub fn get(&self, coordinate: impl Into<Coordinate<N>>) -> T {
        self.get_ref(coordinate).clone()
    }

    /// Borrow the value at `coordinate`, or the default when unset
    pub fn get_ref(&self, coordinate: impl Into<Coordinate<N>>) -> &T {
        self.store
            .lookup(&coordinate.into())
            .unwrap_or(&self.default)
    }

    /// Write `value` at `coordinate`
    ///
    /// Writing the default erases a stored cell; writing any other value
    /// inserts or overwrites it. Returns the previously stored value.
    pub fn set(&mut self, coordinate: impl Into<Coordinate<N>>, value: T) -> Option<T> {
        let coordinate = coordinate.into();
        let previous = if value.is_default(&self.default) {
            let previous = self.store.erase(&coordinate);
            if previous.is_some() {
                self.size -= 1;
                trace!(%coordinate, "Erased cell reset to default");
            }
            previous
        } else {
            let previous = self.store.insert(coordinate, value);
            if previous.is_none() {
                self.size += 1;
                trace!(%coordinate, "Materialized cell");
            }
            previous
        };
        debug_assert_eq!(self.size, self.store.len());
        previous
    }

    /// Read `indices` given as a runtime slice
    pub fn try_get(&self, indices: &[usize]) -> Result<T> {
        let coordinate = Coordinate::try_from(indices)?;
        Ok(self.get(coordinate))
    }

    /// Write `value` at `indices` given as a runtime slice
    pub fn try_set(&mut self, indices: &[usize], value: T) -> Result<Option<T>> {
        let coordinate = Coordinate::try_from(indices)?;
        Ok(self.set(coordinate, value))
    }

    /// Read/write handle for a complete coordinate
    pub fn entry(&mut self, coordinate: impl Into<Coordinate<N>>) -> ValueAccessor<&mut Self, N> {
        ValueAccessor::new(self, coordinate.into())
    }

    /// Read-only handle for a complete coordinate
    pub fn entry_ref(&self, coordinate: impl Into<Coordinate<N>>) -> ValueAccessor<&Self, N> {
        ValueAccessor::new(self, coordinate.into())
    }

    /// Iterate over materialized cells in coordinate order
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self.store.iter())
    }

    /// Iterate over materialized cells with mutable access to their values
    ///
    /// Setting a value to the default through this iterator does not erase
    /// the cell or change `size()`. Call [`prune`](Self::prune) afterwards to
    /// drop such cells.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(self.store.iter_mut())
    }

    /// Remove every materialized cell
    pub fn clear(&mut self) {
        debug!(entries = self.size, "Cleared sparse matrix");
        self.store.clear();
        self.size = 0;
    }

    /// Erase stored cells whose value has become the default
    ///
    /// Returns how many cells were erased.
    pub fn prune(&mut self) -> usize {
        let default = &self.default;
        let before = self.store.len();
        self.store.retain(|_, value| !value.is_default(default));
        let pruned = before - self.store.len();
        self.size = self.store.len();
        if pruned > 0 {
            debug!(pruned, "Pruned default-valued cells");
        }
        pruned
    }
}

impl<T: MatrixElement, const N: usize> SparseMatrix<N> for Matrix<T, N> {
    type Element = T;

    fn default_value(&self) -> &T {
        &self.default
    }

    fn get_element(&self, coordinate: &Coordinate<N>) -> &T {
        self.store.lookup(coordinate).unwrap_or(&self.default)
    }

    fn set_element(&mut self, coordinate: Coordinate<N>, value: T) -> Option<T> {
        self.set(coordinate, value)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn contains(&self, coordinate: &Coordinate<N>) -> bool {
        self.store.lookup(coordinate).is_some()
    }
}

impl<T: MatrixElement, const N: usize> Index<[usize; N]> for Matrix<T, N> {
    type Output = T;

    fn index(&self, indices: [usize; N]) -> &T {
        self.get_ref(indices)
    }
}

impl<T: MatrixElement, const N: usize> Index<Coordinate<N>> for Matrix<T, N> {
    type Output = T;

    fn index(&self, coordinate: Coordinate<N>) -> &T {
        self.get_ref(coordinate)
    }
}

// Bulk writes follow `set`: default values are elided, last write wins.
impl<T: MatrixElement, const N: usize> Extend<(Coordinate<N>, T)> for Matrix<T, N> {
    fn extend<I: IntoIterator<Item = (Coordinate<N>, T)>>(&mut self, entries: I) {
        for (coordinate, value) in entries {
            self.set(coordinate, value);
        }
    }
}

impl<T: MatrixElement + Default, const N: usize> FromIterator<(Coordinate<N>, T)>
    for Matrix<T, N>
{
    fn from_iter<I: IntoIterator<Item = (Coordinate<N>, T)>>(entries: I) -> Self {
        let mut matrix = Self::new();
        matrix.extend(entries);
        matrix
    }
}

impl<'a, T: MatrixElement, const N: usize> IntoIterator for &'a Matrix<T, N> {
    type Item = (&'a Coordinate<N>, &'a T);
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: MatrixElement, const N: usize> IntoIterator for &'a mut Matrix<T, N> {
    type Item = (&'a Coordinate<N>, &'a mut T);
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: MatrixElement, const N: usize> IntoIterator for Matrix<T, N> {
    type Item = (Coordinate<N>, T);
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.store.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_matrix_reads_default() {
        let matrix: Matrix<i32> = Matrix::with_default(-1);
        assert_eq!(matrix.size(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.get([0, 0]), -1);
        assert_eq!(matrix.get([usize::MAX, 17]), -1);
        assert_eq!(matrix[[3, 4]], -1);
        assert_eq!(matrix.size(), 0);
    }

    #[test]
    fn test_new_uses_type_default() {
        let matrix: Matrix<String, 3> = Matrix::new();
        assert_eq!(matrix.default_value(), "");
        assert_eq!(matrix.get([1, 2, 3]), "");
    }

    #[test]
    fn test_set_counts_only_new_cells() {
        let mut matrix: Matrix<i32> = Matrix::with_default(0);

        assert_eq!(matrix.set([1, 2], 5), None);
        assert_eq!(matrix.size(), 1);

        assert_eq!(matrix.set([1, 2], 6), Some(5));
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.get([1, 2]), 6);

        matrix.set([2, 1], 7);
        assert_eq!(matrix.size(), 2);
    }

    #[test]
    fn test_writing_default_erases() {
        let mut matrix: Matrix<i32> = Matrix::with_default(0);
        matrix.set([4, 4], 9);

        assert_eq!(matrix.set([4, 4], 0), Some(9));
        assert_eq!(matrix.size(), 0);
        assert!(!matrix.contains([4, 4]));

        // Already unset: nothing to erase
        assert_eq!(matrix.set([4, 4], 0), None);
        assert_eq!(matrix.set([8, 8], 0), None);
        assert_eq!(matrix.size(), 0);
    }

    #[test]
    fn test_slice_addressing() {
        let mut matrix: Matrix<u8, 3> = Matrix::new();
        assert_eq!(matrix.try_set(&[1, 2, 3], 4), Ok(None));
        assert_eq!(matrix.try_get(&[1, 2, 3]), Ok(4));

        assert_eq!(
            matrix.try_get(&[1, 2]),
            Err(SparseError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            matrix.try_set(&[1, 2, 3, 4], 1),
            Err(SparseError::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(matrix.size(), 1);
    }

    #[test]
    fn test_try_from_entries() {
        let matrix = Matrix::try_from_entries(
            0,
            [(Coordinate::new([0, 1]), 1), (Coordinate::new([1, 0]), 2)],
        )
        .unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.get([1, 0]), 2);

        let stored_default =
            Matrix::try_from_entries(0, [(Coordinate::new([0, 1]), 0)]);
        assert_eq!(stored_default, Err(SparseError::DefaultValuedEntry));

        let duplicate = Matrix::try_from_entries(
            0,
            [(Coordinate::new([0, 1]), 1), (Coordinate::new([0, 1]), 3)],
        );
        assert_eq!(duplicate, Err(SparseError::DuplicateCoordinate));
    }

    #[test]
    fn test_extend_applies_write_semantics() {
        let mut matrix: Matrix<i32> = [
            (Coordinate::new([0, 0]), 0),
            (Coordinate::new([0, 1]), 1),
            (Coordinate::new([0, 1]), 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.get([0, 1]), 2);

        matrix.extend([(Coordinate::new([0, 1]), 0)]);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_prune_after_iterator_mutation() {
        let mut matrix: Matrix<i32> = Matrix::with_default(0);
        matrix.set([0, 0], 1);
        matrix.set([0, 1], 2);
        matrix.set([0, 2], 3);

        for (coordinate, value) in matrix.iter_mut() {
            if coordinate.get(1) == Some(1) {
                *value = 0;
            }
        }

        // Iterator writes bypass erase-on-default
        assert_eq!(matrix.size(), 3);
        assert!(matrix.contains([0, 1]));
        assert_eq!(matrix.get([0, 1]), 0);

        assert_eq!(matrix.prune(), 1);
        assert_eq!(matrix.size(), 2);
        assert!(!matrix.contains([0, 1]));
        assert_eq!(matrix.prune(), 0);
    }

    #[test]
    fn test_clear() {
        let mut matrix: Matrix<i32, 1> = Matrix::with_default(-1);
        matrix.set([3], 3);
        matrix.set([4], 4);
        matrix.clear();
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.get([3]), -1);
        assert_eq!(matrix.iter().count(), 0);
    }

    #[test]
    fn test_sparse_matrix_trait() {
        fn materialize<M: SparseMatrix<2, Element = i32>>(matrix: &mut M) {
            matrix.set_element(Coordinate::new([1, 1]), 11);
            matrix.set_element(Coordinate::new([2, 2]), *matrix.default_value());
        }

        let mut matrix: Matrix<i32> = Matrix::with_default(-5);
        materialize(&mut matrix);
        assert_eq!(SparseMatrix::size(&matrix), 1);
        assert_eq!(*matrix.get_element(&Coordinate::new([1, 1])), 11);
        assert_eq!(*matrix.get_element(&Coordinate::new([2, 2])), -5);
        assert!(SparseMatrix::contains(&matrix, &Coordinate::new([1, 1])));
    }

    #[test]
    fn test_trait_contains_reports_stored_cells() {
        let mut matrix: Matrix<i32> = Matrix::with_default(0);
        matrix.set([3, 3], 9);
        for (_, value) in matrix.iter_mut() {
            *value = 0;
        }

        let coordinate = Coordinate::new([3, 3]);
        assert!(matrix.contains(coordinate));
        assert!(SparseMatrix::contains(&matrix, &coordinate));
        assert!(matrix.entry_ref(coordinate).is_materialized());

        matrix.prune();
        assert!(!matrix.contains(coordinate));
        assert!(!SparseMatrix::contains(&matrix, &coordinate));
    }
}
