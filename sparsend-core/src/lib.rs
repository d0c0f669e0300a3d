#![no_std]

//! sparsend core - coordinate, storage and error definitions
//!
//! This crate provides the pure building blocks shared by sparse
//! N-dimensional matrix implementations: the fixed-arity [`Coordinate`] key,
//! the per-expression [`CoordinateBuilder`] accumulator, the storage and
//! matrix traits, and the error type. With the `alloc` feature it also
//! provides [`OrderedStore`], a key-ordered store backed by a `BTreeMap`.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod coordinate;
pub mod error;
#[cfg(feature = "alloc")]
pub mod store;
pub mod traits;

pub use coordinate::*;
pub use error::*;
#[cfg(feature = "alloc")]
pub use store::OrderedStore;
pub use traits::*;
