//! Sequence construction: a branded builder and the frozen sequence it
//! turns into.

pub mod branded_builder;
pub mod frozen_sequence;

mod builder_ops;

pub use branded_builder::BrandedBuilder;
pub use frozen_sequence::FrozenSequence;
