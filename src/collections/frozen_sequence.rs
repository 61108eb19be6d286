//! `FrozenSequence` — the immutable result of freezing a builder.
//!
//! A frozen sequence carries no brand, so it can leave the region that built
//! it, cross threads, and be cloned cheaply (clones share one allocation).
//! There are no mutating methods.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;
use std::sync::Arc;

use crate::error::RegionError;

/// An ordered, indexable, immutable sequence.
pub struct FrozenSequence<T> {
    items: Arc<[T]>,
}

impl<T> FrozenSequence<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, RegionError> {
        self.items.get(index).ok_or(RegionError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Views the sequence as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copies the elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Returns `true` if both sequences share one allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

#[cfg(feature = "parallel")]
impl<T: Sync> FrozenSequence<T> {
    /// Parallel iterator over the elements.
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, T> {
        use rayon::iter::IntoParallelRefIterator;
        self.items.par_iter()
    }
}

impl<T> From<Vec<T>> for FrozenSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<T> FromIterator<T> for FrozenSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for FrozenSequence<T> {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl<T> Clone for FrozenSequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> AsRef<[T]> for FrozenSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for FrozenSequence<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds; use [`FrozenSequence::get`] for a
    /// checked lookup.
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a FrozenSequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<FrozenSequence<U>> for FrozenSequence<T> {
    fn eq(&self, other: &FrozenSequence<U>) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for FrozenSequence<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for FrozenSequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.items[..] == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for FrozenSequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for FrozenSequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.items[..] == other[..]
    }
}

impl<T: Hash> Hash for FrozenSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items[..].hash(state);
    }
}

#[cfg(feature = "proptest")]
impl<T: proptest::arbitrary::Arbitrary> proptest::arbitrary::Arbitrary for FrozenSequence<T> {
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = proptest::strategy::Map<
        proptest::collection::VecStrategy<T::Strategy>,
        fn(Vec<T>) -> Self,
    >;

    fn arbitrary_with((size, element): Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;
        proptest::collection::vec(T::arbitrary_with(element), size).prop_map(Self::from as fn(Vec<T>) -> Self)
    }
}
