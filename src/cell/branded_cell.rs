//! `BrandedCell` — one mutable location tagged with a region's brand.

use core::fmt;

use crate::cell::storage::BrandedUnsafeCell;
use crate::token::Brand;

/// A mutable location that only the region of brand `'brand` can read or
/// write.
///
/// There is no public constructor: cells come from
/// [`Region::create`](crate::Region::create).
#[repr(transparent)]
pub struct BrandedCell<'brand, T> {
    pub(super) inner: BrandedUnsafeCell<'brand, T>,
}

impl<'brand, T> BrandedCell<'brand, T> {
    #[inline(always)]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            inner: BrandedUnsafeCell::new(value),
        }
    }

    /// The brand this cell was created under.
    #[inline(always)]
    pub const fn brand(&self) -> Brand<'brand> {
        self.inner.brand()
    }

    /// Consumes the cell and returns its value.
    ///
    /// Owning the cell already proves nobody else can reach it.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<'brand, T> fmt::Debug for BrandedCell<'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contents are region-gated, so they are not printed.
        f.debug_struct("BrandedCell").finish_non_exhaustive()
    }
}
