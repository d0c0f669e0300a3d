//! Serde support for [`Matrix`]
//!
//! A matrix serializes as its default plus its stored entries in coordinate
//! order. Cells left holding the default by in-place iterator writes are
//! skipped, so every snapshot loads back. Deserialization goes through
//! [`Matrix::try_from_entries`], so input that stores a default value or
//! repeats a coordinate is rejected.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};
use sparsend_core::{Coordinate, MatrixElement};

use crate::matrix::Matrix;

struct Entries<'a, T, const N: usize>(&'a Matrix<T, N>);

impl<T: MatrixElement + Serialize, const N: usize> Serialize for Entries<'_, T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // No length hint: the stored count may include default-valued cells
        let default = self.0.default_value();
        let mut seq = serializer.serialize_seq(None)?;
        for entry in self.0.iter().filter(|(_, value)| !(*value).is_default(default)) {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<T: MatrixElement + Serialize, const N: usize> Serialize for Matrix<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Matrix", 2)?;
        state.serialize_field("default", self.default_value())?;
        state.serialize_field("entries", &Entries(self))?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Matrix", deny_unknown_fields)]
struct MatrixSnapshot<T, const N: usize> {
    default: T,
    entries: Vec<(Coordinate<N>, T)>,
}

impl<'de, T, const N: usize> Deserialize<'de> for Matrix<T, N>
where
    T: MatrixElement + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = MatrixSnapshot::<T, N>::deserialize(deserializer)?;
        Matrix::try_from_entries(snapshot.default, snapshot.entries).map_err(de::Error::custom)
    }
}
