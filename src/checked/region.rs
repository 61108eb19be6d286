use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use super::BrandId;
use crate::collections::FrozenSequence;
use crate::error::RegionError;

/// A runtime-branded region: an arena of type-erased slots plus a brand id.
///
/// Only [`checked::run`](super::run) creates one, and its slots are dropped
/// (and its brand retired) when that call's body returns.
///
/// Operations that take a handle report `BrandMismatch` for a handle of
/// another running region and `BrandEscape` for a handle whose region has
/// already ended.
///
/// Bodies only ever see `&mut CheckedRegion`, which is unsized through its
/// `Tail` parameter. `mem::swap`, `mem::replace` and `mem::take` all need
/// `Sized`, so a body cannot trade its region for another one:
///
/// ```compile_fail
/// use branded_region::checked;
///
/// checked::run(|outer| {
///     checked::run(|inner| std::mem::swap(outer, inner)).unwrap();
/// });
/// ```
pub struct CheckedRegion<Tail: ?Sized = [()]> {
    brand: BrandId,
    slots: Vec<Box<dyn Any>>,
    _unsized: Tail,
}

/// Handle to a single value in a [`CheckedRegion`].
pub struct CheckedCell<T> {
    brand: BrandId,
    slot: usize,
    _marker: PhantomData<fn() -> T>,
}

/// Handle to a growable sequence in a [`CheckedRegion`].
pub struct CheckedBuilder<T> {
    brand: BrandId,
    slot: usize,
    _marker: PhantomData<fn() -> T>,
}

macro_rules! handle_impls {
    ($handle:ident) => {
        impl<T> $handle<T> {
            fn new(brand: BrandId, slot: usize) -> Self {
                Self {
                    brand,
                    slot,
                    _marker: PhantomData,
                }
            }

            /// Brand of the region that created this handle.
            pub fn brand(&self) -> BrandId {
                self.brand
            }
        }

        impl<T> Clone for $handle<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $handle<T> {}

        impl<T> PartialEq for $handle<T> {
            fn eq(&self, other: &Self) -> bool {
                self.brand == other.brand && self.slot == other.slot
            }
        }

        impl<T> Eq for $handle<T> {}

        impl<T> fmt::Debug for $handle<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($handle))
                    .field("brand", &self.brand)
                    .field("slot", &self.slot)
                    .finish()
            }
        }
    };
}

handle_impls!(CheckedCell);
handle_impls!(CheckedBuilder);

impl CheckedRegion<[(); 0]> {
    /// The sized region the runner owns; it coerces to `&mut CheckedRegion`.
    pub(super) fn new() -> Self {
        Self {
            brand: BrandId::fresh(),
            slots: Vec::new(),
            _unsized: [],
        }
    }
}

impl<Tail: ?Sized> CheckedRegion<Tail> {
    /// This region's brand.
    pub fn brand(&self) -> BrandId {
        self.brand
    }
}

impl<Tail: ?Sized> Drop for CheckedRegion<Tail> {
    fn drop(&mut self) {
        self.brand.retire();
    }
}

impl CheckedRegion {
    fn check(&self, found: BrandId) -> Result<(), RegionError> {
        if found == self.brand {
            return Ok(());
        }
        if !found.is_live() {
            crate::debug!("handle of retired brand {} used in region {}", found, self.brand);
            return Err(RegionError::BrandEscape { brand: found });
        }
        crate::debug!("handle of brand {} used in region {}", found, self.brand);
        Err(RegionError::BrandMismatch {
            expected: self.brand,
            found,
        })
    }

    fn insert<S: 'static>(&mut self, value: S) -> usize {
        self.slots.push(Box::new(value));
        self.slots.len() - 1
    }

    // A handle of this brand always names a slot of its own type, so a failed
    // lookup means the handle did not come from here.
    fn slot<S: 'static>(&self, brand: BrandId, slot: usize) -> Result<&S, RegionError> {
        self.check(brand)?;
        self.slots
            .get(slot)
            .and_then(|s| s.downcast_ref::<S>())
            .ok_or(RegionError::BrandMismatch {
                expected: self.brand,
                found: brand,
            })
    }

    fn slot_mut<S: 'static>(&mut self, brand: BrandId, slot: usize) -> Result<&mut S, RegionError> {
        self.check(brand)?;
        let expected = self.brand;
        self.slots
            .get_mut(slot)
            .and_then(|s| s.downcast_mut::<S>())
            .ok_or(RegionError::BrandMismatch { expected, found: brand })
    }

    fn items<T: 'static>(&self, builder: CheckedBuilder<T>) -> Result<&Vec<T>, RegionError> {
        self.slot::<Option<Vec<T>>>(builder.brand, builder.slot)?
            .as_ref()
            .ok_or(RegionError::UseAfterFreeze)
    }

    fn items_mut<T: 'static>(&mut self, builder: CheckedBuilder<T>) -> Result<&mut Vec<T>, RegionError> {
        self.slot_mut::<Option<Vec<T>>>(builder.brand, builder.slot)?
            .as_mut()
            .ok_or(RegionError::UseAfterFreeze)
    }

    /// Allocates a new cell holding `value`.
    pub fn create<T: 'static>(&mut self, value: T) -> CheckedCell<T> {
        let slot = self.insert(value);
        CheckedCell::new(self.brand, slot)
    }

    /// Returns a copy of the cell's value.
    ///
    /// # Errors
    /// `BrandMismatch` if `cell` belongs to another region.
    pub fn read<T: Clone + 'static>(&self, cell: CheckedCell<T>) -> Result<T, RegionError> {
        self.slot::<T>(cell.brand, cell.slot).cloned()
    }

    /// Overwrites the cell's value.
    ///
    /// # Errors
    /// `BrandMismatch` if `cell` belongs to another region.
    pub fn write<T: 'static>(&mut self, cell: CheckedCell<T>, value: T) -> Result<(), RegionError> {
        *self.slot_mut::<T>(cell.brand, cell.slot)? = value;
        Ok(())
    }

    /// Applies `f` to the cell's value in place.
    ///
    /// # Errors
    /// `BrandMismatch` if `cell` belongs to another region.
    pub fn modify<T: 'static, U>(
        &mut self,
        cell: CheckedCell<T>,
        f: impl FnOnce(&mut T) -> U,
    ) -> Result<U, RegionError> {
        self.slot_mut::<T>(cell.brand, cell.slot).map(f)
    }

    /// Creates an empty builder, pre-allocating `capacity_hint` slots if given.
    pub fn create_builder<T: 'static>(&mut self, capacity_hint: Option<usize>) -> CheckedBuilder<T> {
        let items: Vec<T> = match capacity_hint {
            Some(capacity) => Vec::with_capacity(capacity),
            None => Vec::new(),
        };
        let slot = self.insert(Some(items));
        CheckedBuilder::new(self.brand, slot)
    }

    /// Appends `value`.
    ///
    /// # Errors
    /// `BrandMismatch` for a foreign builder, `UseAfterFreeze` for a frozen one.
    pub fn append<T: 'static>(&mut self, builder: CheckedBuilder<T>, value: T) -> Result<(), RegionError> {
        self.items_mut(builder)?.push(value);
        Ok(())
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    /// `BrandMismatch`, `UseAfterFreeze`, or `IndexOutOfBounds` unless
    /// `index < len`.
    pub fn set<T: 'static>(
        &mut self,
        builder: CheckedBuilder<T>,
        index: usize,
        value: T,
    ) -> Result<(), RegionError> {
        let items = self.items_mut(builder)?;
        RegionError::check_index(index, items.len())?;
        items[index] = value;
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `BrandMismatch`, `UseAfterFreeze`, or `IndexOutOfBounds`.
    pub fn get<T: 'static>(&self, builder: CheckedBuilder<T>, index: usize) -> Result<&T, RegionError> {
        let items = self.items(builder)?;
        items
            .get(index)
            .ok_or(RegionError::IndexOutOfBounds { index, len: items.len() })
    }

    /// Number of elements in the builder.
    ///
    /// # Errors
    /// `BrandMismatch` or `UseAfterFreeze`.
    pub fn len<T: 'static>(&self, builder: CheckedBuilder<T>) -> Result<usize, RegionError> {
        self.items(builder).map(Vec::len)
    }

    /// Finalizes `builder`. The handle is dead afterwards.
    ///
    /// # Errors
    /// `BrandMismatch`, or `UseAfterFreeze` if it was already frozen.
    pub fn freeze<T: 'static>(&mut self, builder: CheckedBuilder<T>) -> Result<FrozenSequence<T>, RegionError> {
        let items = self
            .slot_mut::<Option<Vec<T>>>(builder.brand, builder.slot)?
            .take()
            .ok_or(RegionError::UseAfterFreeze)?;
        crate::trace!("freezing checked builder of {} elements", items.len());
        Ok(FrozenSequence::from(items))
    }
}

impl fmt::Debug for CheckedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckedRegion")
            .field("brand", &self.brand)
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::checked::run;
    use crate::RegionError;

    #[test]
    fn test_cell_read_after_write() {
        let out = run(|r| -> Result<(i32, i32), RegionError> {
            let c = r.create(100);
            let before = r.read(c)?;
            r.write(c, 7)?;
            r.modify(c, |v| *v += 1)?;
            Ok((before, r.read(c)?))
        });
        assert_eq!(out, Ok(Ok((100, 8))));
    }

    #[test]
    fn test_foreign_cell_is_rejected() {
        run(|outer| {
            let c = outer.create(1u32);
            let outer_brand = outer.brand();
            run(|inner| {
                assert_eq!(
                    inner.read(c),
                    Err(RegionError::BrandMismatch {
                        expected: inner.brand(),
                        found: outer_brand,
                    })
                );
                assert!(inner.write(c, 2).is_err());
            })
            .unwrap();
            assert_eq!(outer.read(c), Ok(1));
        })
        .unwrap();
    }

    #[test]
    fn test_freeze_twice_is_use_after_freeze() {
        run(|r| {
            let b = r.create_builder(Some(2));
            r.append(b, 'a').unwrap();
            let seq = r.freeze(b).unwrap();
            assert_eq!(seq, ['a']);
            assert_eq!(r.freeze(b), Err(RegionError::UseAfterFreeze));
            assert_eq!(r.append(b, 'b'), Err(RegionError::UseAfterFreeze));
            assert_eq!(r.len(b), Err(RegionError::UseAfterFreeze));
        })
        .unwrap();
    }

    #[test]
    fn test_set_checks_bounds() {
        run(|r| {
            let b = r.create_builder::<i32>(None);
            assert_eq!(
                r.set(b, 5, 1),
                Err(RegionError::IndexOutOfBounds { index: 5, len: 0 })
            );
            r.append(b, 0).unwrap();
            r.set(b, 0, 9).unwrap();
            assert_eq!(r.get(b, 0), Ok(&9));
        })
        .unwrap();
    }

    #[test]
    fn test_returning_a_handle_is_an_escape() {
        let mut brand = None;
        let res = run(|r| {
            brand = Some(r.brand());
            r.create(100)
        });
        let brand = brand.unwrap();
        assert_eq!(res, Err(RegionError::BrandEscape { brand }));
    }

    #[test]
    fn test_returning_a_foreign_handle_is_not_an_escape() {
        run(|outer| {
            let c = outer.create(5);
            let back = run(|_inner| c).unwrap();
            assert_eq!(outer.read(back), Ok(5));
        })
        .unwrap();
    }
}
