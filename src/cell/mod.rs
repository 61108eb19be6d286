//! Branded single-value cells.
//!
//! - `storage` is the raw, brand-tagged `UnsafeCell` wrapper shared with the
//!   builder.
//! - `branded_cell` is the handle type; its operations are methods on
//!   [`Region`](crate::Region) (see `ops`).

pub mod branded_cell;
pub(crate) mod storage;

mod ops;

pub use branded_cell::BrandedCell;
