//! sparsend - sparse N-dimensional matrix with chained indexing
//!
//! A [`Matrix`] behaves like a dense, unbounded N-dimensional array while
//! storing only the cells whose value differs from its default.
//!
//! ## Architecture
//!
//! - **sparsend-core**: coordinates, the coordinate accumulator, storage and
//!   matrix traits, errors (`no_std`)
//! - **sparsend**: the matrix, its subscript accessors and iterators
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsend::Matrix;
//!
//! let mut matrix: Matrix<i32> = Matrix::with_default(-1);
//! assert_eq!(matrix.at(0).at(0).get(), -1);
//!
//! matrix.at(100).at(100).set(314);
//! assert_eq!(matrix.at(100).at(100).get(), 314);
//! assert_eq!(matrix.size(), 1);
//!
//! // Writing the default erases the cell
//! matrix.at(100).at(100).set(-1);
//! assert!(matrix.is_empty());
//!
//! matrix.set([1, 2], 12);
//! for (coordinate, value) in &matrix {
//!     println!("{coordinate} = {value}");
//! }
//! ```
//!
//! ## Features
//!
//! - **Chained subscripts**: `matrix.at(i).at(j)`, checked against the
//!   dimension count at compile time
//! - **Default elision**: default values are never stored
//! - **Ordered iteration**: cells come out in coordinate order
//! - **serde** (default feature): snapshot a matrix to any serde format

// Re-export core definitions
pub use sparsend_core::{
    // Coordinates
    Coordinate, CoordinateBuilder,
    // Core traits
    MatrixElement, SparseMatrix, SparseStore,
    // Storage
    OrderedStore,
    // Error handling
    Result, SparseError,
};

pub mod accessor;
pub mod iter;
pub mod matrix;
#[cfg(feature = "serde")]
mod serde_support;

pub use accessor::{DimensionAccessor, ValueAccessor};
pub use iter::{IntoIter, Iter, IterMut};
pub use matrix::Matrix;
