//! Chained subscript accessors
//!
//! `matrix.at(i).at(j).at(k)` assembles a coordinate one dimension at a
//! time. Every call consumes the previous accessor and returns the next one,
//! so the partially built coordinate travels with the expression and is never
//! stored in the matrix. The last subscript yields a [`ValueAccessor`] that
//! reads or writes the addressed cell.
//!
//! The number of pending subscripts is part of the accessor type, which
//! makes indexing with too few or too many subscripts a compile error:
//!
//! ```
//! use sparsend::Matrix;
//!
//! let mut matrix: Matrix<i32, 3> = Matrix::with_default(0);
//! matrix.at(1).at(2).at(3).set(7);
//! assert_eq!(matrix.at_ref(1).at(2).at(3).get(), 7);
//! ```
//!
//! ```compile_fail
//! use sparsend::Matrix;
//!
//! let mut matrix: Matrix<i32, 3> = Matrix::with_default(0);
//! matrix.at(1).at(2).set(7);
//! ```
//!
//! Chains are generated for matrices of up to 8 dimensions. Higher arities
//! are addressed with whole coordinates through [`Matrix::entry`],
//! [`Matrix::get`] and [`Matrix::set`].

use std::ops::{Deref, DerefMut};

use sparsend_core::{Coordinate, CoordinateBuilder, MatrixElement, SparseMatrix};

use crate::matrix::Matrix;

/// Partially indexed matrix with `R` subscripts still pending
///
/// `M` is the borrowed matrix: `&Matrix` for read-only chains started with
/// [`Matrix::at_ref`], `&mut Matrix` for chains started with [`Matrix::at`].
#[derive(Debug)]
pub struct DimensionAccessor<M, const N: usize, const R: usize> {
    matrix: M,
    builder: CoordinateBuilder<N>,
}

impl<M, const N: usize, const R: usize> DimensionAccessor<M, N, R> {
    fn start(matrix: M, index: usize) -> Self {
        let mut builder = CoordinateBuilder::new();
        builder.push(index);
        Self { matrix, builder }
    }

    /// Components fixed so far, in subscript order
    pub fn fixed(&self) -> &[usize] {
        self.builder.fixed()
    }

    /// Number of subscripts still needed to reach a cell
    pub const fn remaining(&self) -> usize {
        R
    }

    fn narrow<const NEXT: usize>(mut self, index: usize) -> DimensionAccessor<M, N, NEXT> {
        self.builder.push(index);
        DimensionAccessor {
            matrix: self.matrix,
            builder: self.builder,
        }
    }

    fn complete(mut self, index: usize) -> ValueAccessor<M, N> {
        self.builder.push(index);
        ValueAccessor::new(self.matrix, self.builder.finish())
    }
}

macro_rules! narrow_dimension {
    ($($remaining:literal => $next:literal),* $(,)?) => {
        $(
            impl<M, const N: usize> DimensionAccessor<M, N, $remaining> {
                /// Fix the next dimension
                pub fn at(self, index: usize) -> DimensionAccessor<M, N, $next> {
                    self.narrow(index)
                }
            }
        )*
    };
}

narrow_dimension!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6);

impl<M, const N: usize> DimensionAccessor<M, N, 1> {
    /// Fix the last dimension and address the cell
    pub fn at(self, index: usize) -> ValueAccessor<M, N> {
        self.complete(index)
    }
}

macro_rules! matrix_entry_points {
    ($($arity:literal => $remaining:literal),* $(,)?) => {
        $(
            impl<T: MatrixElement> Matrix<T, $arity> {
                /// Start a read/write subscript chain at the first dimension
                pub fn at(&mut self, index: usize) -> DimensionAccessor<&mut Self, $arity, $remaining> {
                    DimensionAccessor::start(self, index)
                }

                /// Start a read-only subscript chain at the first dimension
                pub fn at_ref(&self, index: usize) -> DimensionAccessor<&Self, $arity, $remaining> {
                    DimensionAccessor::start(self, index)
                }
            }
        )*
    };
}

matrix_entry_points!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

impl<T: MatrixElement> Matrix<T, 1> {
    /// Address the cell at `index`
    pub fn at(&mut self, index: usize) -> ValueAccessor<&mut Self, 1> {
        ValueAccessor::new(self, Coordinate::new([index]))
    }

    /// Address the cell at `index` read-only
    pub fn at_ref(&self, index: usize) -> ValueAccessor<&Self, 1> {
        ValueAccessor::new(self, Coordinate::new([index]))
    }
}

/// Handle bound to one complete coordinate
///
/// Reads borrow the matrix default for unset cells. Writes go through the
/// matrix, so the default itself can never be changed through a handle.
#[derive(Debug)]
pub struct ValueAccessor<M, const N: usize> {
    matrix: M,
    coordinate: Coordinate<N>,
}

impl<M, const N: usize> ValueAccessor<M, N> {
    pub(crate) fn new(matrix: M, coordinate: Coordinate<N>) -> Self {
        Self { matrix, coordinate }
    }

    /// The addressed coordinate
    pub fn coordinate(&self) -> &Coordinate<N> {
        &self.coordinate
    }
}

impl<M, const N: usize> ValueAccessor<M, N>
where
    M: Deref,
    M::Target: SparseMatrix<N>,
{
    /// Read the cell, or the default when unset
    pub fn get(&self) -> <M::Target as SparseMatrix<N>>::Element {
        self.get_ref().clone()
    }

    /// Borrow the cell value, or the default when unset
    pub fn get_ref(&self) -> &<M::Target as SparseMatrix<N>>::Element {
        let matrix: &M::Target = &self.matrix;
        matrix.get_element(&self.coordinate)
    }

    /// Whether a value is stored for this cell
    pub fn is_materialized(&self) -> bool {
        let matrix: &M::Target = &self.matrix;
        matrix.contains(&self.coordinate)
    }
}

impl<M, const N: usize> ValueAccessor<M, N>
where
    M: DerefMut,
    M::Target: SparseMatrix<N>,
{
    /// Write `value` to the cell
    ///
    /// Writing the default erases the cell. Returns the previously stored
    /// value.
    pub fn set(
        &mut self,
        value: <M::Target as SparseMatrix<N>>::Element,
    ) -> Option<<M::Target as SparseMatrix<N>>::Element> {
        let matrix: &mut M::Target = &mut self.matrix;
        matrix.set_element(self.coordinate, value)
    }

    /// Reset the cell to the default, erasing any stored value
    pub fn reset(&mut self) -> Option<<M::Target as SparseMatrix<N>>::Element> {
        let matrix: &M::Target = &self.matrix;
        let default = matrix.default_value().clone();
        self.set(default)
    }
}
