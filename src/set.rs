//! Sets of integers as characteristic predicates.
//!
//! A set here is not a collection: it is anything that can answer "is `x` a member?".
//! The [`IntSet`] trait is that single capability. Every closure `Fn(i64) -> bool`
//! is an [`IntSet`], so a predicate passed to [`filter`][crate::ops::filter] or
//! [`Domain::for_all`][crate::domain::Domain::for_all] is a set in its own right.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A set of integers, defined by its membership test.
///
/// # Invariants
///
/// - `contains` is pure: the same `x` always yields the same answer,
///   and asking has no observable side effect.
/// - `contains` is total: it returns for every `i64`.
pub trait IntSet {
    /// Returns `true` iff `x` is a member of the set.
    fn contains(&self, x: i64) -> bool;

    /// Borrows the set, so it can be passed to a combinator without giving it up.
    fn by_ref(&self) -> ByRef<'_, Self>
    where
        Self: Sized,
    {
        ByRef(self)
    }
}

impl<F> IntSet for F
where
    F: Fn(i64) -> bool,
{
    fn contains(&self, x: i64) -> bool {
        self(x)
    }
}

/// A borrowed set, see [`IntSet::by_ref`].
#[derive(Debug)]
pub struct ByRef<'a, S: ?Sized>(&'a S);

impl<'a, S: ?Sized> ByRef<'a, S> {
    pub fn new(set: &'a S) -> Self {
        ByRef(set)
    }
}

impl<S: ?Sized> Clone for ByRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ByRef<'_, S> {}

impl<S: IntSet + ?Sized> IntSet for ByRef<'_, S> {
    fn contains(&self, x: i64) -> bool {
        self.0.contains(x)
    }
}

/// The set containing exactly one element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Singleton(i64);

impl Singleton {
    pub const fn element(&self) -> i64 {
        self.0
    }
}

impl IntSet for Singleton {
    fn contains(&self, x: i64) -> bool {
        x == self.0
    }
}

/// Returns the set of the one given element.
pub fn singleton(element: i64) -> Singleton {
    Singleton(element)
}

/// A set backed by a finite list of elements.
///
/// The elements are copied, sorted and deduplicated on construction,
/// so the set never observes later changes to the caller's sequence.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Elements {
    elements: Box<[i64]>,
}

impl Elements {
    /// The distinct elements, in ascending order.
    pub fn as_slice(&self) -> &[i64] {
        &self.elements
    }
}

impl IntSet for Elements {
    fn contains(&self, x: i64) -> bool {
        self.elements.binary_search(&x).is_ok()
    }
}

impl FromIterator<i64> for Elements {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut elements: Vec<i64> = iter.into_iter().collect();
        elements.sort_unstable();
        elements.dedup();
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

/// Returns the set of all given elements.
///
/// Order and duplicates have no effect on membership.
pub fn from_elements(elements: impl IntoIterator<Item = i64>) -> Elements {
    elements.into_iter().collect()
}

/// The set with no members.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Empty;

impl IntSet for Empty {
    fn contains(&self, _x: i64) -> bool {
        false
    }
}

/// The set of all integers.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Universe;

impl IntSet for Universe {
    fn contains(&self, _x: i64) -> bool {
        true
    }
}

pub fn empty() -> Empty {
    Empty
}

pub fn universe() -> Universe {
    Universe
}

/// Shared, type-erased handle to a set.
///
/// Cloning is cheap and shares the underlying predicate.
/// Useful when combinator types grow too deep to spell out,
/// or when sets are chosen at runtime.
#[derive(Clone)]
pub struct Set(Arc<dyn IntSet + Send + Sync>);

impl Set {
    pub fn new(set: impl IntSet + Send + Sync + 'static) -> Self {
        Self(Arc::new(set))
    }

    pub fn from_fn(f: impl Fn(i64) -> bool + Send + Sync + 'static) -> Self {
        Self::new(f)
    }

    /// Returns `true` if both handles share the same underlying predicate.
    pub fn ptr_eq(&self, other: &Set) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl IntSet for Set {
    fn contains(&self, x: i64) -> bool {
        self.0.contains(x)
    }
}

impl Debug for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Set").finish_non_exhaustive()
    }
}

impl Default for Set {
    fn default() -> Self {
        Set::new(Empty)
    }
}

impl From<Singleton> for Set {
    fn from(set: Singleton) -> Self {
        Set::new(set)
    }
}

impl From<Elements> for Set {
    fn from(set: Elements) -> Self {
        Set::new(set)
    }
}
