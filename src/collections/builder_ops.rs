use crate::error::RegionError;
use crate::token::Region;

use super::branded_builder::BrandedBuilder;
use super::frozen_sequence::FrozenSequence;

impl<'brand> Region<'brand> {
    /// Creates an empty builder, pre-allocating `capacity_hint` slots if given.
    #[inline]
    pub fn create_builder<T>(&self, capacity_hint: Option<usize>) -> BrandedBuilder<'brand, T> {
        let items = match capacity_hint {
            Some(capacity) => Vec::with_capacity(capacity),
            None => Vec::new(),
        };
        BrandedBuilder::from_vec(items)
    }

    /// Creates a builder of `len` copies of `value`.
    pub fn create_builder_filled<T: Clone>(&self, len: usize, value: T) -> BrandedBuilder<'brand, T> {
        BrandedBuilder::from_vec(vec![value; len])
    }

    /// Creates a builder holding a copy of `seq`.
    pub fn thaw<T: Clone>(&self, seq: &FrozenSequence<T>) -> BrandedBuilder<'brand, T> {
        BrandedBuilder::from_vec(seq.to_vec())
    }

    /// Appends `value` (amortized O(1)).
    #[inline]
    pub fn append<T>(&mut self, builder: &BrandedBuilder<'brand, T>, value: T) {
        builder.inner.get_mut(self).push(value);
    }

    /// Appends every item of `iter`, in order.
    pub fn extend<T, I>(&mut self, builder: &BrandedBuilder<'brand, T>, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        builder.inner.get_mut(self).extend(iter);
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `index < len`.
    pub fn set<T>(
        &mut self,
        builder: &BrandedBuilder<'brand, T>,
        index: usize,
        value: T,
    ) -> Result<(), RegionError> {
        let items = builder.inner.get_mut(self);
        RegionError::check_index(index, items.len())?;
        items[index] = value;
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` unless `index < len`.
    pub fn get<'a, T>(
        &'a self,
        builder: &'a BrandedBuilder<'brand, T>,
        index: usize,
    ) -> Result<&'a T, RegionError> {
        let items = builder.inner.get(self);
        items
            .get(index)
            .ok_or(RegionError::IndexOutOfBounds { index, len: items.len() })
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if either index is out of range.
    pub fn swap_elements<T>(
        &mut self,
        builder: &BrandedBuilder<'brand, T>,
        a: usize,
        b: usize,
    ) -> Result<(), RegionError> {
        let items = builder.inner.get_mut(self);
        RegionError::check_index(a, items.len())?;
        RegionError::check_index(b, items.len())?;
        items.swap(a, b);
        Ok(())
    }

    /// Removes and returns the last element.
    pub fn pop<T>(&mut self, builder: &BrandedBuilder<'brand, T>) -> Option<T> {
        builder.inner.get_mut(self).pop()
    }

    /// Number of elements appended so far.
    #[inline]
    pub fn builder_len<T>(&self, builder: &BrandedBuilder<'brand, T>) -> usize {
        builder.inner.get(self).len()
    }

    /// The builder's current contents.
    #[inline]
    pub fn contents<'a, T>(&'a self, builder: &'a BrandedBuilder<'brand, T>) -> &'a [T] {
        builder.inner.get(self)
    }

    /// Applies `f` to every element in order.
    pub fn for_each_mut<T>(&mut self, builder: &BrandedBuilder<'brand, T>, f: impl FnMut(&mut T)) {
        builder.inner.get_mut(self).iter_mut().for_each(f);
    }

    /// Finalizes `builder` into an immutable, brand-free sequence.
    pub fn freeze<T>(&self, builder: BrandedBuilder<'brand, T>) -> FrozenSequence<T> {
        let items = builder.into_vec();
        crate::trace!("freezing builder of {} elements", items.len());
        FrozenSequence::from(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::{run, RegionError};

    #[test]
    fn test_append_then_freeze_keeps_order() {
        let seq = run(|mut r| {
            let b = r.create_builder(Some(3));
            r.append(&b, 10);
            r.append(&b, 20);
            r.append(&b, 30);
            r.freeze(b)
        });
        assert_eq!(seq, [10, 20, 30]);
    }

    #[test]
    fn test_set_on_empty_builder_is_out_of_bounds() {
        let res = run(|mut r| {
            let b = r.create_builder(None);
            r.set(&b, 5, 1)
        });
        assert_eq!(res, Err(RegionError::IndexOutOfBounds { index: 5, len: 0 }));
    }

    #[test]
    fn test_set_and_get_within_bounds() {
        run(|mut r| {
            let b = r.create_builder_filled(3, 0u8);
            r.set(&b, 2, 9).unwrap();
            assert_eq!(r.get(&b, 2), Ok(&9));
            assert_eq!(r.get(&b, 3), Err(RegionError::IndexOutOfBounds { index: 3, len: 3 }));
            assert_eq!(r.contents(&b), &[0, 0, 9]);
        });
    }

    #[test]
    fn test_capacity_hint_does_not_change_length() {
        run(|r| {
            let b = r.create_builder::<u64>(Some(64));
            assert_eq!(r.builder_len(&b), 0);
        });
    }

    #[test]
    fn test_swap_pop_and_for_each_mut() {
        let seq = run(|mut r| {
            let b = r.create_builder(None);
            r.extend(&b, 1..=4);
            r.swap_elements(&b, 0, 3).unwrap();
            assert_eq!(
                r.swap_elements(&b, 0, 4),
                Err(RegionError::IndexOutOfBounds { index: 4, len: 4 })
            );
            assert_eq!(r.pop(&b), Some(1));
            r.for_each_mut(&b, |x| *x *= 10);
            r.freeze(b)
        });
        assert_eq!(seq, [40, 20, 30]);
    }

    #[test]
    fn test_thaw_copies_and_leaves_source_untouched() {
        let original = run(|mut r| {
            let b = r.create_builder(None);
            r.extend(&b, [1, 2, 3]);
            r.freeze(b)
        });
        let edited = run(|mut r| {
            let b = r.thaw(&original);
            r.set(&b, 0, 100).unwrap();
            r.append(&b, 4);
            r.freeze(b)
        });
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(edited, [100, 2, 3, 4]);
    }
}
