//! Boolean combinators over predicate sets.
//!
//! Each combinator wraps its operands and evaluates them lazily, pointwise,
//! whenever the resulting set is queried. Nothing is ever enumerated.

use std::ops::{BitAnd, BitOr, Not, Sub};

use crate::set::{IntSet, Set};

#[derive(Debug, Copy, Clone)]
pub struct Union<A, B> {
    a: A,
    b: B,
}

impl<A: IntSet, B: IntSet> IntSet for Union<A, B> {
    fn contains(&self, x: i64) -> bool {
        self.a.contains(x) || self.b.contains(x)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Intersect<A, B> {
    a: A,
    b: B,
}

impl<A: IntSet, B: IntSet> IntSet for Intersect<A, B> {
    fn contains(&self, x: i64) -> bool {
        self.a.contains(x) && self.b.contains(x)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Diff<A, B> {
    a: A,
    b: B,
}

impl<A: IntSet, B: IntSet> IntSet for Diff<A, B> {
    fn contains(&self, x: i64) -> bool {
        self.a.contains(x) && !self.b.contains(x)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Complement<A> {
    a: A,
}

impl<A: IntSet> IntSet for Complement<A> {
    fn contains(&self, x: i64) -> bool {
        !self.a.contains(x)
    }
}

/// A filtered set is an intersection with the predicate.
pub type Filter<S, P> = Intersect<S, P>;

/// Returns the set of all elements that are in either `a` or `b`.
pub fn union<A: IntSet, B: IntSet>(a: A, b: B) -> Union<A, B> {
    Union { a, b }
}

/// Returns the set of all elements that are in both `a` and `b`.
pub fn intersect<A: IntSet, B: IntSet>(a: A, b: B) -> Intersect<A, B> {
    Intersect { a, b }
}

/// Returns the set of all elements of `a` that are not in `b`.
pub fn diff<A: IntSet, B: IntSet>(a: A, b: B) -> Diff<A, B> {
    Diff { a, b }
}

/// Returns the set of all integers not in `a`.
pub fn complement<A: IntSet>(a: A) -> Complement<A> {
    Complement { a }
}

/// Returns the subset of `s` for which `predicate` holds.
///
/// A predicate is just another set, so this is exactly [`intersect`].
pub fn filter<S: IntSet, P: IntSet>(s: S, predicate: P) -> Filter<S, P> {
    intersect(s, predicate)
}

impl BitOr for Set {
    type Output = Set;

    fn bitor(self, rhs: Self) -> Self::Output {
        Set::new(union(self, rhs))
    }
}

impl BitAnd for Set {
    type Output = Set;

    fn bitand(self, rhs: Self) -> Self::Output {
        Set::new(intersect(self, rhs))
    }
}

impl Sub for Set {
    type Output = Set;

    fn sub(self, rhs: Self) -> Self::Output {
        Set::new(diff(self, rhs))
    }
}

impl Not for Set {
    type Output = Set;

    fn not(self) -> Self::Output {
        Set::new(complement(self))
    }
}

impl BitOr for &Set {
    type Output = Set;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.clone() | rhs.clone()
    }
}

impl BitAnd for &Set {
    type Output = Set;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.clone() & rhs.clone()
    }
}

impl Sub for &Set {
    type Output = Set;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl Not for &Set {
    type Output = Set;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}
