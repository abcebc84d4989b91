//! Bounded quantifiers.
//!
//! Quantifying over all of `i64` is not something a predicate can answer,
//! so `for_all` and `exists` only look inside the [`Domain`] window.
//! Both are a single ascending scan that stops at the first witness.

use log::debug;

use crate::domain::Domain;
use crate::ops::{complement, diff};
use crate::set::{universe, ByRef, IntSet};

impl Domain {
    /// Returns whether every member of `s` inside the window satisfies `predicate`.
    ///
    /// Vacuously `true` when `s` has no members in the window.
    pub fn for_all<S, P>(&self, s: &S, predicate: P) -> bool
    where
        S: IntSet + ?Sized,
        P: IntSet,
    {
        let counterexamples = diff(ByRef::new(s), predicate);
        for i in self.range() {
            if counterexamples.contains(i) {
                debug!("for_all: counterexample {} within bound {}", i, self.bound());
                return false;
            }
        }
        true
    }

    /// Returns whether some member of `s` inside the window satisfies `predicate`.
    ///
    /// This is the dual of [`for_all`][Domain::for_all]: `exists(s, p) == !for_all(s, !p)`.
    pub fn exists<S, P>(&self, s: &S, predicate: P) -> bool
    where
        S: IntSet + ?Sized,
        P: IntSet,
    {
        !self.for_all(s, complement(predicate))
    }

    /// Returns whether every member of `a` in the window is also in `b`.
    pub fn is_subset<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: IntSet + ?Sized,
        B: IntSet + ?Sized,
    {
        self.for_all(a, ByRef::new(b))
    }

    /// Returns whether `a` and `b` agree on every integer in the window.
    pub fn is_equal<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: IntSet + ?Sized,
        B: IntSet + ?Sized,
    {
        self.is_subset(a, b) && self.is_subset(b, a)
    }

    /// Returns whether `s` has no members in the window.
    pub fn is_empty<S: IntSet + ?Sized>(&self, s: &S) -> bool {
        !self.exists(s, universe())
    }

    /// Number of members of `s` in the window.
    pub fn count<S: IntSet + ?Sized>(&self, s: &S) -> u64 {
        self.range().filter(|&i| s.contains(i)).count() as u64
    }
}
