//! Boundary scan for values leaving a checked region.

use super::{BrandId, CheckedBuilder, CheckedCell};
use crate::collections::FrozenSequence;
use crate::error::RegionError;

/// Reports whether a value still holds a handle of a given brand.
///
/// [`checked::run`](super::run) requires its result type to implement this,
/// and rejects the result with [`RegionError::BrandEscape`] if it carries the
/// brand of the region that just ended. Containers forward to their elements.
///
/// An impl that answers `false` for a type holding handles lets those handles
/// through the boundary scan. They are still unusable afterwards (any
/// operation on them reports `BrandEscape`), but the escape is no longer
/// caught at `run`. Implement it for your own types with
/// [`carries_brand_fields!`](crate::carries_brand_fields), which forwards to
/// every listed field.
pub trait CarriesBrand {
    /// `true` if `self` (or anything it owns) is tagged with `brand`.
    fn carries_brand(&self, brand: BrandId) -> bool;
}

macro_rules! brand_free {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CarriesBrand for $ty {
                #[inline(always)]
                fn carries_brand(&self, _brand: BrandId) -> bool {
                    false
                }
            }
        )*
    };
}

brand_free!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, BrandId, RegionError,
);

impl CarriesBrand for &str {
    fn carries_brand(&self, _brand: BrandId) -> bool {
        false
    }
}

impl<T> CarriesBrand for CheckedCell<T> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        self.brand() == brand
    }
}

impl<T> CarriesBrand for CheckedBuilder<T> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        self.brand() == brand
    }
}

impl<T: CarriesBrand> CarriesBrand for FrozenSequence<T> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        self.iter().any(|item| item.carries_brand(brand))
    }
}

impl<T: CarriesBrand> CarriesBrand for Option<T> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        self.as_ref().is_some_and(|v| v.carries_brand(brand))
    }
}

impl<T: CarriesBrand, E: CarriesBrand> CarriesBrand for Result<T, E> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        match self {
            Ok(v) => v.carries_brand(brand),
            Err(e) => e.carries_brand(brand),
        }
    }
}

impl<T: CarriesBrand> CarriesBrand for Vec<T> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        self.iter().any(|item| item.carries_brand(brand))
    }
}

impl<T: CarriesBrand + ?Sized> CarriesBrand for Box<T> {
    fn carries_brand(&self, brand: BrandId) -> bool {
        (**self).carries_brand(brand)
    }
}

impl<T: CarriesBrand> CarriesBrand for [T] {
    fn carries_brand(&self, brand: BrandId) -> bool {
        self.iter().any(|item| item.carries_brand(brand))
    }
}

macro_rules! tuple_carries_brand {
    ($($name:ident),+) => {
        impl<$($name: CarriesBrand),+> CarriesBrand for ($($name,)+) {
            #[allow(non_snake_case)]
            fn carries_brand(&self, brand: BrandId) -> bool {
                let ($($name,)+) = self;
                false $(|| $name.carries_brand(brand))+
            }
        }
    };
}

tuple_carries_brand!(A);
tuple_carries_brand!(A, B);
tuple_carries_brand!(A, B, C);
tuple_carries_brand!(A, B, C, D);

/// Implements [`CarriesBrand`] for a struct by forwarding to its fields.
///
/// List every field that can hold a handle; named and tuple fields both
/// work. Type parameters are required to implement `CarriesBrand` too.
///
/// ```rust
/// use branded_region::carries_brand_fields;
/// use branded_region::checked::{self, CheckedCell};
/// use branded_region::RegionError;
///
/// struct Pair<T> {
///     left: CheckedCell<T>,
///     label: String,
/// }
/// carries_brand_fields!(Pair<T> { left, label });
///
/// let res = checked::run(|r| Pair { left: r.create(1u8), label: "l".into() });
/// assert!(matches!(res, Err(RegionError::BrandEscape { .. })));
/// ```
#[macro_export]
macro_rules! carries_brand_fields {
    ($ty:ident $(<$($param:ident),+>)? { $($field:tt),+ $(,)? }) => {
        impl$(<$($param),+>)? $crate::checked::CarriesBrand for $ty$(<$($param),+>)?
        where
            $($($param: $crate::checked::CarriesBrand,)+)?
        {
            fn carries_brand(&self, brand: $crate::checked::BrandId) -> bool {
                false $(|| $crate::checked::CarriesBrand::carries_brand(&self.$field, brand))+
            }
        }
    };
}
