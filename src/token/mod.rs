//! `Region` - the capability that owns a brand.
//!
//! A `Region<'brand>` is a zero-sized value that only [`run`] can produce. The
//! runner's body is generic over `'brand` (`for<'brand> FnOnce(Region<'brand>)`),
//! so every invocation gets a brand the caller can neither name nor choose,
//! and the result type `R` is fixed outside that quantifier, so it can never
//! mention the brand.
//!
//! ## Core invariant (linearity)
//!
//! `Region<'brand>` is intentionally **not** `Copy`/`Clone`. Every operation
//! that hands out `&mut T` into branded storage, or that grows a builder,
//! requires `&mut Region<'brand>`, and Rust guarantees there cannot be two
//! live mutable borrows of the one region.

/// Invariant brand marker.
pub mod invariant;
/// `region!` convenience macro.
pub mod macros;

pub use invariant::Brand;

use crate::collections::{BrandedBuilder, FrozenSequence};

/// The capability through which branded cells and builders are created and
/// accessed.
#[derive(Debug)]
pub struct Region<'brand> {
    brand: Brand<'brand>,
}

/// Runs `body` inside a fresh region and returns its result.
///
/// The body receives a `Region` for a brand chosen here, not by the caller.
/// Anything the body returns outlives the brand, so branded handles cannot
/// be part of it.
///
/// # Example
///
/// ```rust
/// let seq = branded_region::run(|mut r| {
///     let b = r.create_builder(Some(3));
///     r.append(&b, 10);
///     r.append(&b, 20);
///     r.append(&b, 30);
///     r.freeze(b)
/// });
/// assert_eq!(seq, [10, 20, 30]);
/// ```
///
/// Returning a handle does not compile:
///
/// ```compile_fail
/// let leaked = branded_region::run(|r| r.create(100));
/// ```
///
/// Nor does smuggling one out through a captured variable:
///
/// ```compile_fail
/// let mut slot = None;
/// branded_region::run(|r| {
///     slot = Some(r.create(100));
/// });
/// ```
pub fn run<F, R>(body: F) -> R
where
    F: for<'brand> FnOnce(Region<'brand>) -> R,
{
    crate::trace!("entering region");
    let result = body(Region { brand: Brand::new() });
    crate::trace!("leaving region");
    result
}

/// Builds a [`FrozenSequence`] from a fresh region and an empty builder.
///
/// The body fills the builder; it is frozen once the body returns.
///
/// ```rust
/// let squares = branded_region::build(|r, b| {
///     for i in 0..4u32 {
///         r.append(b, i * i);
///     }
/// });
/// assert_eq!(squares, [0, 1, 4, 9]);
/// ```
pub fn build<T, F>(body: F) -> FrozenSequence<T>
where
    F: for<'brand> FnOnce(&mut Region<'brand>, &BrandedBuilder<'brand, T>),
{
    run(|mut region| {
        let builder = region.create_builder(None);
        body(&mut region, &builder);
        region.freeze(builder)
    })
}

impl<'brand> Region<'brand> {
    /// Same as the free function [`run`].
    pub fn run<F, R>(body: F) -> R
    where
        F: for<'new_brand> FnOnce(Region<'new_brand>) -> R,
    {
        run(body)
    }

    /// Opens a region nested inside this one.
    ///
    /// The body gets this region back (reborrowed) alongside the fresh inner
    /// one, so it can keep working on outer handles. Inner handles carry the
    /// inner brand and are confined to the inner body.
    ///
    /// ```rust
    /// branded_region::run(|mut outer| {
    ///     let counter = outer.create(0);
    ///     let inner_sum = outer.nested(|outer, mut inner| {
    ///         let scratch = inner.create(5);
    ///         inner.modify(&scratch, |v| *v *= 2);
    ///         outer.modify(&counter, |c| *c += 1);
    ///         inner.read(&scratch)
    ///     });
    ///     assert_eq!(inner_sum, 10);
    ///     assert_eq!(outer.read(&counter), 1);
    /// });
    /// ```
    ///
    /// Outer handles cannot be accessed through the inner region:
    ///
    /// ```compile_fail
    /// branded_region::run(|mut outer| {
    ///     let c = outer.create(1);
    ///     outer.nested(|_, inner| inner.read(&c));
    /// });
    /// ```
    ///
    /// and inner handles cannot be handed back to the outer body:
    ///
    /// ```compile_fail
    /// branded_region::run(|mut outer| {
    ///     let c = outer.nested(|_, inner| inner.create(1));
    /// });
    /// ```
    pub fn nested<F, R>(&mut self, body: F) -> R
    where
        F: for<'inner> FnOnce(&mut Region<'brand>, Region<'inner>) -> R,
    {
        crate::trace!("opening nested region");
        let result = body(self, Region { brand: Brand::new() });
        crate::trace!("closing nested region");
        result
    }

    /// The brand this region owns.
    #[inline(always)]
    pub const fn brand(&self) -> Brand<'brand> {
        self.brand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_body_result() {
        assert_eq!(run(|_r| 7), 7);
        assert_eq!(Region::run(|_r| "done"), "done");
    }

    #[test]
    fn test_region_is_zero_sized() {
        run(|r| {
            assert_eq!(core::mem::size_of_val(&r), 0);
        });
    }

    #[test]
    fn test_build_freezes_what_the_body_appended() {
        let seq = build(|r, b| {
            r.extend(b, "abc".chars());
        });
        assert_eq!(seq, ['a', 'b', 'c']);
    }

    #[test]
    fn test_recursive_runs_are_independent() {
        fn depth(n: u32) -> u32 {
            run(|mut r| {
                let c = r.create(n);
                if n > 0 {
                    let below = depth(n - 1);
                    r.modify(&c, |v| *v += below);
                }
                r.read(&c)
            })
        }
        assert_eq!(depth(4), 4 + 3 + 2 + 1);
    }
}
