use core::mem;

use crate::token::Region;

use super::branded_cell::BrandedCell;

impl<'brand> Region<'brand> {
    /// Allocates a new cell holding `value`.
    #[inline(always)]
    pub fn create<T>(&self, value: T) -> BrandedCell<'brand, T> {
        BrandedCell::new(value)
    }

    /// Returns a copy of the cell's value.
    #[inline(always)]
    pub fn read<T: Clone>(&self, cell: &BrandedCell<'brand, T>) -> T {
        self.borrow(cell).clone()
    }

    /// Overwrites the cell's value.
    #[inline(always)]
    pub fn write<T>(&mut self, cell: &BrandedCell<'brand, T>, value: T) {
        *self.borrow_mut(cell) = value;
    }

    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a, T>(&'a self, cell: &'a BrandedCell<'brand, T>) -> &'a T {
        cell.inner.get(self)
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a, T>(&'a mut self, cell: &'a BrandedCell<'brand, T>) -> &'a mut T {
        cell.inner.get_mut(self)
    }

    /// Replaces the cell's value, returning the old one.
    #[inline]
    pub fn replace<T>(&mut self, cell: &BrandedCell<'brand, T>, value: T) -> T {
        mem::replace(self.borrow_mut(cell), value)
    }

    /// Takes the cell's value, leaving `T::default()`.
    #[inline]
    pub fn take<T: Default>(&mut self, cell: &BrandedCell<'brand, T>) -> T {
        mem::take(self.borrow_mut(cell))
    }

    /// Applies `f` to the cell's value in place and returns what `f` returns.
    #[inline]
    pub fn modify<T, U>(&mut self, cell: &BrandedCell<'brand, T>, f: impl FnOnce(&mut T) -> U) -> U {
        f(self.borrow_mut(cell))
    }

    /// Swaps the values of two cells of this brand.
    ///
    /// Swapping a cell with itself is a no-op.
    #[inline]
    pub fn swap<T>(&mut self, a: &BrandedCell<'brand, T>, b: &BrandedCell<'brand, T>) {
        let pa = a.inner.as_mut_ptr(self);
        let pb = b.inner.as_mut_ptr(self);
        // SAFETY: `&mut self` excludes every other access to cells of this
        // brand, and `ptr::swap` allows the two pointers to be equal.
        unsafe { core::ptr::swap(pa, pb) };
    }
}
