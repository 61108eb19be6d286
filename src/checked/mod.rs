//! Runtime-branded regions.
//!
//! The static API brands handles with a lifetime, which rules out every
//! misuse at compile time but also keeps handles from being `'static`. This
//! module trades that for a runtime check: a [`CheckedRegion`] carries a
//! [`BrandId`], its handles are plain `Copy` ids, and every operation compares
//! the handle's brand with the region's.
//!
//! - handle of another running region → [`RegionError::BrandMismatch`]
//! - builder touched after `freeze` → [`RegionError::UseAfterFreeze`]
//! - handle returned from [`run`] → [`RegionError::BrandEscape`]
//! - handle that outlived its region (kept in a captured variable, sent to
//!   another thread, ...) and is used anywhere → [`RegionError::BrandEscape`]
//!
//! A handle can be *stored* past its region, since it is a plain id, but it
//! can never be *used* again: every operation on it reports the escape.
//!
//! [`CarriesBrand`] is how the runner looks inside a result. Types that wrap
//! handles should forward to their fields with
//! [`carries_brand_fields!`](crate::carries_brand_fields).
//!
//! ```rust
//! use branded_region::checked;
//!
//! let seq = checked::run(|r| -> Result<_, branded_region::RegionError> {
//!     let b = r.create_builder(None);
//!     r.append(b, 1)?;
//!     r.append(b, 2)?;
//!     r.freeze(b)
//! });
//! assert_eq!(seq.unwrap().unwrap(), [1, 2]);
//! ```

mod brand_id;
mod escape;
mod region;

pub use brand_id::BrandId;
pub use escape::CarriesBrand;
pub use region::{CheckedBuilder, CheckedCell, CheckedRegion};

use crate::error::RegionError;

/// Runs `body` in a fresh checked region.
///
/// The region's storage is released and its brand retired when `body`
/// returns. The result is then scanned for handles of the retired brand.
///
/// # Errors
/// [`RegionError::BrandEscape`] if the result still carries the brand.
pub fn run<F, R>(body: F) -> Result<R, RegionError>
where
    F: FnOnce(&mut CheckedRegion) -> R,
    R: CarriesBrand,
{
    let mut region = CheckedRegion::new();
    let brand = region.brand();
    crate::trace!("entering checked region {}", brand);
    let unsized_region: &mut CheckedRegion = &mut region;
    let result = body(unsized_region);
    // Frees the slots and retires the brand.
    drop(region);
    crate::trace!("leaving checked region {}", brand);

    if result.carries_brand(brand) {
        crate::debug!("result of checked region {} carries its brand", brand);
        return Err(RegionError::BrandEscape { brand });
    }
    Ok(result)
}
