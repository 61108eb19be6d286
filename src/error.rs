//! The crate's error type.

use core::fmt;

use crate::checked::BrandId;

/// Ways a region operation can be misused.
///
/// All of these are programmer errors. The static API rules out all but
/// `IndexOutOfBounds` at compile time; the runtime-branded API in
/// [`checked`](crate::checked) reports every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegionError {
    /// A handle was used with a region of a different brand.
    BrandMismatch {
        /// Brand of the region performing the operation.
        expected: BrandId,
        /// Brand the handle was created under.
        found: BrandId,
    },
    /// A handle outlived its region: it was returned from the region body,
    /// or kept elsewhere and used after the region ended.
    BrandEscape {
        /// The retired brand.
        brand: BrandId,
    },
    /// A builder was used after it was frozen.
    UseAfterFreeze,
    /// An index was outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length at the time of the access.
        len: usize,
    },
}

impl RegionError {
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrandMismatch { expected, found } => {
                write!(f, "brand mismatch: region {expected}, handle {found}")
            }
            Self::BrandEscape { brand } => {
                write!(f, "handle of brand {brand} escaped its region")
            }
            Self::UseAfterFreeze => f.write_str("builder used after freeze"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for RegionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert_eq!(RegionError::check_index(0, 1), Ok(()));
        assert_eq!(
            RegionError::check_index(1, 1),
            Err(RegionError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(
            RegionError::check_index(0, 0),
            Err(RegionError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RegionError::IndexOutOfBounds { index: 5, len: 0 }.to_string(),
            "index 5 out of bounds for length 0"
        );
        assert_eq!(RegionError::UseAfterFreeze.to_string(), "builder used after freeze");
    }
}
