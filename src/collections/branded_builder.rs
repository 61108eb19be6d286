//! `BrandedBuilder` — a growable sequence under construction.
//!
//! The builder owns a `Vec<T>` behind the brand-tagged raw cell. All access
//! goes through the owning [`Region`](crate::Region):
//! - reads (`get`, `builder_len`, `contents`) need `&Region<'brand>`,
//! - growth and writes (`append`, `set`, `extend`, ...) need `&mut Region<'brand>`,
//! - [`Region::freeze`](crate::Region::freeze) takes the builder by value, so
//!   a frozen builder cannot be named again.
//!
//! ```compile_fail
//! branded_region::run(|mut r| {
//!     let b = r.create_builder(None);
//!     r.append(&b, 1);
//!     let seq = r.freeze(b);
//!     r.append(&b, 2); // `b` was moved into `freeze`
//! });
//! ```

use core::fmt;

use crate::cell::storage::BrandedUnsafeCell;
use crate::token::Brand;

/// A growable sequence tagged with brand `'brand`.
///
/// Created by [`Region::create_builder`](crate::Region::create_builder);
/// consumed by [`Region::freeze`](crate::Region::freeze).
#[repr(transparent)]
pub struct BrandedBuilder<'brand, T> {
    pub(super) inner: BrandedUnsafeCell<'brand, Vec<T>>,
}

impl<'brand, T> BrandedBuilder<'brand, T> {
    #[inline]
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: BrandedUnsafeCell::new(items),
        }
    }

    /// The brand this builder was created under.
    #[inline(always)]
    pub const fn brand(&self) -> Brand<'brand> {
        self.inner.brand()
    }

    #[inline]
    pub(super) fn into_vec(self) -> Vec<T> {
        self.inner.into_inner()
    }
}

impl<'brand, T> fmt::Debug for BrandedBuilder<'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandedBuilder").finish_non_exhaustive()
    }
}
