//! Core matrix abstraction trait
//!
//! This module defines the read/write contract of a dense-looking sparse
//! matrix. Accessors in the `sparsend` crate are written against this trait
//! rather than a concrete matrix type.

use super::element::MatrixElement;
use crate::Coordinate;

/// Core sparse matrix trait for coordinate-addressed access
///
/// Every coordinate is readable; unset cells read as the default value.
pub trait SparseMatrix<const N: usize> {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// The value every unset cell reads as
    fn default_value(&self) -> &Self::Element;

    /// Get the value at `coordinate`, falling back to the default
    fn get_element(&self, coordinate: &Coordinate<N>) -> &Self::Element;

    /// Write `value` at `coordinate`
    ///
    /// Writing the default value erases the cell. Returns the previously
    /// materialized value, if any.
    fn set_element(
        &mut self,
        coordinate: Coordinate<N>,
        value: Self::Element,
    ) -> Option<Self::Element>;

    /// Number of materialized (non-default) cells
    fn size(&self) -> usize;

    /// Whether a value is stored at `coordinate`
    ///
    /// A stored value may equal the default after an in-place write, so this
    /// asks the backing store rather than comparing against the default.
    fn contains(&self, coordinate: &Coordinate<N>) -> bool;
}
