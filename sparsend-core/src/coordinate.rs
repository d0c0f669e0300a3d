//! Fixed-arity coordinates and the per-expression coordinate accumulator
//!
//! A [`Coordinate`] is the composite key of a sparse matrix cell. It orders
//! lexicographically over its components, which is the iteration order of
//! every key-ordered store.
//!
//! A [`CoordinateBuilder`] assembles a coordinate one component at a time.
//! Each indexing expression creates its own builder and moves it through the
//! accessor chain, so no two expressions ever share in-progress state.

use crate::{Result, SparseError};

/// Ordered N-tuple of non-negative indices identifying one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate<const N: usize>([usize; N]);

impl<const N: usize> Coordinate<N> {
    /// Number of components in this coordinate type
    pub const ARITY: usize = N;

    /// Create a coordinate from its components
    pub const fn new(components: [usize; N]) -> Self {
        Self(components)
    }

    /// Get all components in dimension order
    pub const fn components(&self) -> &[usize; N] {
        &self.0
    }

    /// Get the component along `axis`, if the axis exists
    pub fn get(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }

    /// Consume the coordinate and return its components
    pub const fn into_array(self) -> [usize; N] {
        self.0
    }
}

impl<const N: usize> From<[usize; N]> for Coordinate<N> {
    fn from(components: [usize; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<Coordinate<N>> for [usize; N] {
    fn from(coordinate: Coordinate<N>) -> Self {
        coordinate.0
    }
}

impl<const N: usize> TryFrom<&[usize]> for Coordinate<N> {
    type Error = SparseError;

    fn try_from(indices: &[usize]) -> Result<Self> {
        let components: [usize; N] =
            indices.try_into().map_err(|_| SparseError::DimensionMismatch {
                expected: N,
                actual: indices.len(),
            })?;
        Ok(Self(components))
    }
}

impl<const N: usize> AsRef<[usize]> for Coordinate<N> {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl<const N: usize> core::fmt::Display for Coordinate<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (axis, component) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}

/// In-progress coordinate, filled one dimension per subscript
///
/// Components are fixed in subscript order: the first pushed index becomes
/// component 0. The builder is a plain value; whoever holds it owns the
/// partial coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateBuilder<const N: usize> {
    components: [usize; N],
    filled: usize,
}

impl<const N: usize> CoordinateBuilder<N> {
    /// Create an empty builder
    pub const fn new() -> Self {
        Self {
            components: [0; N],
            filled: 0,
        }
    }

    /// Fix the component at the current depth and advance
    ///
    /// # Panics
    ///
    /// Panics if all `N` components are already fixed. Use
    /// [`try_push`](Self::try_push) when the number of pushes is not known
    /// statically.
    pub fn push(&mut self, index: usize) {
        assert!(
            self.filled < N,
            "coordinate already has all {} components",
            N
        );
        self.components[self.filled] = index;
        self.filled += 1;
    }

    /// Fix the component at the current depth, failing when already complete
    pub fn try_push(&mut self, index: usize) -> Result<()> {
        if self.filled >= N {
            return Err(SparseError::TooManyComponents { arity: N });
        }
        self.components[self.filled] = index;
        self.filled += 1;
        Ok(())
    }

    /// Number of components fixed so far
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Number of components still pending
    pub const fn remaining(&self) -> usize {
        N - self.filled
    }

    /// Whether every component has been fixed
    pub const fn is_complete(&self) -> bool {
        self.filled == N
    }

    /// Components fixed so far, in subscript order
    pub fn fixed(&self) -> &[usize] {
        &self.components[..self.filled]
    }

    /// Turn a complete builder into a coordinate
    ///
    /// # Panics
    ///
    /// Panics if fewer than `N` components are fixed. Use
    /// [`try_finish`](Self::try_finish) when completeness is not known
    /// statically.
    pub fn finish(self) -> Coordinate<N> {
        assert!(
            self.is_complete(),
            "coordinate has {} of {} components",
            self.filled,
            N
        );
        Coordinate(self.components)
    }

    /// Turn the builder into a coordinate, failing when components are missing
    pub fn try_finish(self) -> Result<Coordinate<N>> {
        if !self.is_complete() {
            return Err(SparseError::IncompleteCoordinate {
                expected: N,
                filled: self.filled,
            });
        }
        Ok(Coordinate(self.components))
    }
}

impl<const N: usize> Default for CoordinateBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Coordinate;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Serialized as a fixed-length tuple so the arity is checked on the way in.
    impl<const N: usize> Serialize for Coordinate<N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for component in &self.0 {
                tuple.serialize_element(component)?;
            }
            tuple.end()
        }
    }

    struct ComponentsVisitor<const N: usize>;

    impl<'de, const N: usize> Visitor<'de> for ComponentsVisitor<N> {
        type Value = Coordinate<N>;

        fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "a sequence of {} indices", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut components = [0usize; N];
            for (axis, slot) in components.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(axis, &self))?;
            }
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(Coordinate(components))
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for Coordinate<N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, ComponentsVisitor::<N>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_ordering_is_lexicographic() {
        let a = Coordinate::new([0, 9]);
        let b = Coordinate::new([1, 0]);
        let c = Coordinate::new([1, 3]);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(Coordinate::new([4, 2, 7]), Coordinate::from([4, 2, 7]));
        assert_ne!(Coordinate::new([4, 2, 7]), Coordinate::new([4, 7, 2]));
    }

    #[test]
    fn test_coordinate_from_slice() {
        let coordinate = Coordinate::<3>::try_from(&[1usize, 2, 3][..]);
        assert_eq!(coordinate, Ok(Coordinate::new([1, 2, 3])));

        assert_eq!(
            Coordinate::<3>::try_from(&[1usize, 2][..]),
            Err(SparseError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_coordinate_accessors() {
        let coordinate = Coordinate::new([0, usize::MAX]);
        assert_eq!(coordinate.get(0), Some(0));
        assert_eq!(coordinate.get(1), Some(usize::MAX));
        assert_eq!(coordinate.get(2), None);
        assert_eq!(Coordinate::<2>::ARITY, 2);
        assert_eq!(coordinate.into_array(), [0, usize::MAX]);
    }

    #[test]
    fn test_builder_fills_in_subscript_order() {
        let mut builder = CoordinateBuilder::<3>::new();
        assert_eq!(builder.remaining(), 3);

        builder.push(7);
        builder.push(8);
        assert_eq!(builder.fixed(), &[7, 8]);
        assert_eq!(builder.remaining(), 1);
        assert!(!builder.is_complete());

        builder.push(9);
        assert!(builder.is_complete());
        assert_eq!(builder.finish(), Coordinate::new([7, 8, 9]));
    }

    #[test]
    fn test_builder_errors() {
        let mut builder = CoordinateBuilder::<2>::new();
        builder.push(1);
        assert_eq!(
            builder.try_finish(),
            Err(SparseError::IncompleteCoordinate {
                expected: 2,
                filled: 1
            })
        );

        assert_eq!(builder.try_push(2), Ok(()));
        assert_eq!(
            builder.try_push(3),
            Err(SparseError::TooManyComponents { arity: 2 })
        );
        assert_eq!(builder.try_finish(), Ok(Coordinate::new([1, 2])));
    }

    #[test]
    #[should_panic]
    fn test_builder_push_past_arity_panics() {
        let mut builder = CoordinateBuilder::<1>::new();
        builder.push(0);
        builder.push(1);
    }

    #[test]
    #[should_panic(expected = "coordinate has 0 of 3 components")]
    fn test_builder_finish_incomplete_panics() {
        CoordinateBuilder::<3>::new().finish();
    }

    #[test]
    fn test_independent_builders_do_not_interfere() {
        let mut outer = CoordinateBuilder::<2>::new();
        outer.push(5);

        let mut inner = CoordinateBuilder::<2>::new();
        inner.push(1);
        inner.push(2);

        outer.push(6);
        assert_eq!(inner.finish(), Coordinate::new([1, 2]));
        assert_eq!(outer.finish(), Coordinate::new([5, 6]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_coordinate_serde() {
        let coordinate = Coordinate::new([3, 0, 12]);
        let json = serde_json::to_string(&coordinate).unwrap();
        assert_eq!(json, "[3,0,12]");

        let back: Coordinate<3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coordinate);

        assert!(serde_json::from_str::<Coordinate<3>>("[3,0]").is_err());
        assert!(serde_json::from_str::<Coordinate<2>>("[3,0,12]").is_err());
    }
}
