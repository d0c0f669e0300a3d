//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be stored
//! as cells of a sparse matrix.

/// Trait for types that can be stored as matrix elements
///
/// Elements must be:
/// - Clone: reads hand out owned copies of stored or default values
/// - PartialEq: equality against the default decides whether a cell is stored
///
/// Equality must behave as a total relation for the default value. A float
/// default of `NaN` never compares equal to itself, so `NaN` writes would be
/// stored instead of elided.
pub trait MatrixElement: Clone + PartialEq {
    /// Whether this value is the "unset" value for a matrix with `default`
    #[inline]
    fn is_default(&self, default: &Self) -> bool {
        self == default
    }
}

impl<T: Clone + PartialEq> MatrixElement for T {}
