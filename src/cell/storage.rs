//! `BrandedUnsafeCell` — the one raw interior-mutation primitive.
//!
//! Both `BrandedCell` and `BrandedBuilder` store their contents here, so all
//! the `unsafe` in the crate's static half lives in this file.
//!
//! ## Safety invariant
//!
//! For a fixed brand `'brand`, every safe path to `&mut T` goes through
//! `&mut Region<'brand>`. A region is linear (not `Copy`/`Clone`, only
//! minted by the runner), so safe code cannot hold two overlapping mutable
//! borrows of the same cell, nor a shared and a mutable one.

use core::cell::UnsafeCell;

use crate::token::{Brand, Region};

/// A brand-tagged wrapper around `core::cell::UnsafeCell<T>`.
#[repr(transparent)]
pub(crate) struct BrandedUnsafeCell<'brand, T: ?Sized> {
    brand: Brand<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> BrandedUnsafeCell<'brand, T> {
    #[inline(always)]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            brand: Brand::new(),
            value: UnsafeCell::new(value),
        }
    }

    #[inline(always)]
    pub(crate) fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<'brand, T: ?Sized> BrandedUnsafeCell<'brand, T> {
    #[inline(always)]
    pub(crate) const fn brand(&self) -> Brand<'brand> {
        self.brand
    }

    #[inline(always)]
    pub(crate) fn get<'a>(&'a self, _region: &'a Region<'brand>) -> &'a T {
        // SAFETY: safe code cannot obtain `&mut T` without `&mut Region<'brand>`,
        // which cannot coexist with the `&Region<'brand>` borrowed here.
        unsafe { &*self.value.get() }
    }

    #[inline(always)]
    pub(crate) fn get_mut<'a>(&'a self, _region: &'a mut Region<'brand>) -> &'a mut T {
        // SAFETY: `&mut Region<'brand>` proves exclusivity over every cell of
        // this brand for `'a`.
        unsafe { &mut *self.value.get() }
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&self, _region: &mut Region<'brand>) -> *mut T {
        self.value.get()
    }
}

// SAFETY: moving the cell moves the `T`; access still requires the region.
unsafe impl<'brand, T: ?Sized + Send> Send for BrandedUnsafeCell<'brand, T> {}

// SAFETY: a shared `&BrandedUnsafeCell` lets any thread holding `&mut Region`
// write the value and any thread holding `&Region` read it, so the value must
// be both sendable and shareable.
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for BrandedUnsafeCell<'brand, T> {}
