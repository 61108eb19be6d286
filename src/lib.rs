//! # `branded-region` - Scoped, Brand-Isolated Mutation
//!
//! Build immutable sequences through a bounded window of local mutation.
//! A [`run`] call opens a *region*; inside it, mutable cells and growable
//! builders can be created, read and written freely. When the region ends
//! only brand-free values come out, typically a [`FrozenSequence`].
//!
//! ## Safety Guarantees
//!
//! - **Fresh brand per run**: the body passed to [`run`] is generic over a
//!   lifetime `'brand` that the caller never names. Two runs, nested,
//!   recursive or on different threads, never share a brand.
//! - **Invariant branding**: [`Brand`] is invariant in `'brand`, so handles of
//!   one region can never be coerced into handles of another.
//! - **No escape**: the result type of [`run`] is fixed outside the brand's
//!   quantifier, so it cannot mention `'brand`. Branded handles cannot be
//!   returned, stored in outer variables, or leaked through closures.
//! - **Linear capability**: a [`Region`] is not `Copy`/`Clone`; every write
//!   needs `&mut Region`, every read `&Region`, so borrows of branded storage
//!   follow ordinary Rust aliasing rules with no runtime bookkeeping.
//! - **Freeze by move**: [`Region::freeze`] takes the builder by value.
//!
//! ## Architecture
//!
//! 1. **Region** (`Region<'brand>`): zero-sized capability minted by [`run`].
//! 2. **Cells** (`BrandedCell<'brand, T>`): one mutable location each.
//! 3. **Builders** (`BrandedBuilder<'brand, T>`): growable sequences.
//! 4. **Frozen sequences** (`FrozenSequence<T>`): immutable, shareable output.
//! 5. **Checked regions** ([`checked`]): the same model with runtime brand ids,
//!    for handles that must be `'static`.
//!
//! ## Example
//!
//! ```rust
//! use branded_region::run;
//!
//! let fib = run(|mut r| {
//!     let b = r.create_builder(Some(10));
//!     let (prev, cur) = (r.create(0u64), r.create(1u64));
//!     for _ in 0..10 {
//!         r.append(&b, r.read(&prev));
//!         let next = r.read(&prev) + r.read(&cur);
//!         r.swap(&prev, &cur);
//!         r.write(&cur, next);
//!     }
//!     r.freeze(b)
//! });
//! assert_eq!(fib, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//! ```
//!
//! Handles stay in their own region:
//!
//! ```compile_fail
//! use branded_region::run;
//!
//! run(|a| {
//!     let cell = a.create(1);
//!     run(|b| b.read(&cell));
//! });
//! ```
//!
//! ```compile_fail
//! use branded_region::run;
//!
//! let mut smuggled = Vec::new();
//! run(|r| smuggled.push(r.create(1)));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod logging;

pub mod cell;
pub mod checked;
pub mod collections;
pub mod error;
pub mod token;

pub(crate) use logging::{debug, trace};

pub use cell::BrandedCell;
pub use collections::{BrandedBuilder, FrozenSequence};
pub use error::RegionError;
pub use token::{build, run, Brand, Region};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Regions and brands are ZSTs.
    assert!(mem::size_of::<Region<'static>>() == 0);
    assert!(mem::size_of::<Brand<'static>>() == 0);

    // Branded handles are thin wrappers over their contents.
    assert!(mem::size_of::<BrandedCell<'static, u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<BrandedCell<'static, u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<BrandedBuilder<'static, u8>>() == mem::size_of::<Vec<u8>>());

    // A frozen sequence is one fat pointer.
    assert!(mem::size_of::<FrozenSequence<u8>>() == 2 * mem::size_of::<usize>());
};
