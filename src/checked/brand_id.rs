use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossbeam_utils::CachePadded;

static NEXT_BRAND: CachePadded<AtomicU64> = CachePadded::new(AtomicU64::new(1));

/// Brands whose region is still running, on any thread.
static LIVE_BRANDS: Mutex<BTreeSet<u64>> = Mutex::new(BTreeSet::new());

fn live_brands() -> MutexGuard<'static, BTreeSet<u64>> {
    // The set stays consistent even if a holder panicked: every critical
    // section is a single insert, remove or lookup.
    LIVE_BRANDS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runtime identity of one checked region.
///
/// Every call to [`checked::run`](crate::checked::run) takes a new id from a
/// process-wide counter; ids are never reused, so two regions compare equal
/// only if they are the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrandId(u64);

impl BrandId {
    /// Takes a new id and marks it live.
    pub(crate) fn fresh() -> Self {
        // Only uniqueness matters, not ordering against other memory.
        let id = NEXT_BRAND.fetch_add(1, Ordering::Relaxed);
        live_brands().insert(id);
        Self(id)
    }

    /// Marks the id's region as ended. Ids are never revived.
    pub(crate) fn retire(self) {
        live_brands().remove(&self.0);
    }

    /// Returns `true` while the region that owns this brand is running.
    pub fn is_live(self) -> bool {
        live_brands().contains(&self.0)
    }

    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retired_ids_stay_dead() {
        let id = BrandId::fresh();
        assert!(id.is_live());
        id.retire();
        assert!(!id.is_live());
        assert!(BrandId::fresh().is_live());
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = BrandId::fresh();
        let b = BrandId::fresh();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
        assert_eq!(format!("{}", BrandId(7)), "#7");
    }
}
