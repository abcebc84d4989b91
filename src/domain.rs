use std::ops::RangeInclusive;

use log::debug;

/// Default half-width of the scan window.
pub const DEFAULT_BOUND: i64 = 1000;

/// The finite window `[-bound, +bound]` in which sets are searched.
///
/// Membership queries work on all of `i64`, but anything that has to
/// look at every element (quantifiers, [`map`][Domain::map], enumeration)
/// only sees this window, which keeps all of them terminating.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Domain {
    bound: i64,
}

impl Domain {
    /// Creates a domain scanning `[-bound, +bound]`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is negative or equal to `i64::MAX`.
    pub fn new(bound: i64) -> Self {
        assert!(
            (0..i64::MAX).contains(&bound),
            "Bound should be in the range 0..i64::MAX"
        );
        debug!("Domain::new(bound = {})", bound);
        Self { bound }
    }

    pub const fn bound(&self) -> i64 {
        self.bound
    }

    /// All integers of the window, in ascending order.
    pub fn range(&self) -> RangeInclusive<i64> {
        -self.bound..=self.bound
    }

    /// Number of integers in the window.
    pub const fn size(&self) -> u64 {
        2 * (self.bound as u64) + 1
    }

    /// Returns `true` if `x` lies inside the window.
    pub fn in_window(&self, x: i64) -> bool {
        self.range().contains(&x)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::new(DEFAULT_BOUND)
    }
}
