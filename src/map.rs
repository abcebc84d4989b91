//! Image of a set under a function.
//!
//! The image is not computed up front. Asking whether `y` is in the image
//! searches the window for a preimage, so every query costs a full scan
//! and nesting `k` maps costs `O(size^k)` per query.

use log::trace;

use crate::domain::Domain;
use crate::set::IntSet;

/// The set `{ f(x) | x in s, x in window }`, see [`Domain::map`].
#[derive(Debug, Copy, Clone)]
pub struct Mapped<S, F> {
    domain: Domain,
    set: S,
    f: F,
}

impl<S, F> Mapped<S, F> {
    /// The window searched for preimages.
    pub fn domain(&self) -> Domain {
        self.domain
    }
}

impl<S, F> IntSet for Mapped<S, F>
where
    S: IntSet,
    F: Fn(i64) -> i64,
{
    fn contains(&self, y: i64) -> bool {
        self.domain.exists(&self.set, |x: i64| (self.f)(x) == y)
    }
}

impl Domain {
    /// Returns the set obtained by applying `f` to each member of `s` in the window.
    ///
    /// Members of `s` outside the window never contribute to the image,
    /// but their images may themselves lie outside it.
    pub fn map<S, F>(&self, s: S, f: F) -> Mapped<S, F>
    where
        S: IntSet,
        F: Fn(i64) -> i64,
    {
        trace!("map(bound = {})", self.bound());
        Mapped {
            domain: *self,
            set: s,
            f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{empty, from_elements, singleton};

    use test_log::test;

    #[test]
    fn test_map_double() {
        let domain = Domain::default();
        let s = domain.map(from_elements([1, 2, 3]), |x| x * 2);
        assert!(s.contains(2));
        assert!(s.contains(4));
        assert!(s.contains(6));
        assert!(!s.contains(1));
        assert!(!s.contains(3));
        assert!(!s.contains(8));
    }

    #[test]
    fn test_map_collapses() {
        let domain = Domain::new(10);
        let s = domain.map(from_elements([-2, 2, 3]), |x| x * x);
        assert!(s.contains(4));
        assert!(s.contains(9));
        assert_eq!(domain.count(&s), 2);
    }

    #[test]
    fn test_map_image_outside_window() {
        let domain = Domain::new(10);
        let s = domain.map(singleton(10), |x| x + 100);
        assert!(s.contains(110));
        assert!(!s.contains(10));
    }

    #[test]
    fn test_map_preimage_outside_window() {
        let domain = Domain::new(10);
        let s = domain.map(singleton(11), |x| x - 11);
        assert!(!s.contains(0));
        assert!(domain.is_empty(&s));
    }

    #[test]
    fn test_map_empty() {
        let domain = Domain::new(10);
        let s = domain.map(empty(), |x| x);
        assert!(domain.is_empty(&s));
    }

    #[test]
    fn test_map_nested() {
        let domain = Domain::new(20);
        let once = domain.map(from_elements([1, 2]), |x| x + 1);
        let twice = domain.map(once, |x| x * 10);
        assert!(twice.contains(20));
        assert!(twice.contains(30));
        assert!(!twice.contains(10));
        assert_eq!(twice.domain(), domain);
    }

    #[test]
    fn test_map_by_ref() {
        let domain = Domain::new(5);
        let s = from_elements([1, 2]);
        let m = domain.map(s.by_ref(), |x| -x);
        assert!(m.contains(-1));
        assert!(m.contains(-2));
        assert!(s.contains(1));
    }
}
