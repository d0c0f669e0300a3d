//! Abstract interfaces for sparse N-dimensional matrices
//!
//! This module defines the trait seams between coordinate storage and the
//! matrix front end. Concrete implementations live in [`crate::store`] and in
//! the `sparsend` crate.

pub mod element;
pub mod matrix;
pub mod store;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
pub use store::SparseStore;
