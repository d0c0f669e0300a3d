//! Error types for sparse matrix operations

/// Errors that can occur when addressing or building a sparse matrix
///
/// Reading and writing through a complete coordinate never fails; these
/// errors only come from runtime-sized addressing and bulk construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// A runtime index slice does not have one component per dimension
    DimensionMismatch { expected: usize, actual: usize },
    /// A coordinate was finished before every dimension was fixed
    IncompleteCoordinate { expected: usize, filled: usize },
    /// A component was pushed onto an already complete coordinate
    TooManyComponents { arity: usize },
    /// A bulk entry carries the matrix default value
    DefaultValuedEntry,
    /// A bulk entry repeats a coordinate seen earlier
    DuplicateCoordinate,
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparseError::DimensionMismatch { expected, actual } => {
                write!(f, "Expected {expected} index components, got {actual}")
            }
            SparseError::IncompleteCoordinate { expected, filled } => {
                write!(f, "Coordinate incomplete: {filled} of {expected} components fixed")
            }
            SparseError::TooManyComponents { arity } => {
                write!(f, "Coordinate already has all {arity} components")
            }
            SparseError::DefaultValuedEntry => write!(f, "Entry value equals the matrix default"),
            SparseError::DuplicateCoordinate => write!(f, "Duplicate coordinate in entries"),
        }
    }
}

impl core::error::Error for SparseError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SparseError>;
