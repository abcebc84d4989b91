//! # predset: integer sets as predicates
//!
//! **`predset`** represents a set of integers not as a collection but as its
//! *characteristic predicate*: a set is anything that can tell whether a given
//! `i64` is a member. Such sets can be infinite (all even numbers), are built
//! by composing other sets, and are never enumerated unless asked to.
//!
//! ## Key Features
//!
//! - **Predicates are sets**: every closure `Fn(i64) -> bool` implements [`IntSet`][crate::set::IntSet],
//!   so filtering a set by a predicate is just intersecting it with another set.
//! - **Lazy combinators**: [`union`][crate::ops::union], [`intersect`][crate::ops::intersect],
//!   [`diff`][crate::ops::diff] and [`filter`][crate::ops::filter] build new sets pointwise, without materializing anything.
//! - **Bounded quantifiers**: a [`Domain`][crate::domain::Domain] fixes the window `[-bound, +bound]`
//!   in which [`for_all`][crate::domain::Domain::for_all], [`exists`][crate::domain::Domain::exists],
//!   [`map`][crate::domain::Domain::map] and enumeration operate, so all of them terminate.
//!
//! ## Basic Usage
//!
//! ```rust
//! use predset::domain::Domain;
//! use predset::ops::{filter, union};
//! use predset::set::{from_elements, singleton, IntSet};
//!
//! // 1. Build sets
//! let small = from_elements([3, 1, 2]);
//! let s = union(small, singleton(10));
//! assert!(s.contains(10));
//!
//! // 2. Keep only the odd ones
//! let odd = filter(s.by_ref(), |x: i64| x % 2 != 0);
//! assert!(!odd.contains(2));
//!
//! // 3. Quantify and transform inside the default window [-1000, 1000]
//! let domain = Domain::default();
//! assert!(domain.for_all(&odd, |x: i64| x < 5));
//! assert!(domain.exists(&s, |x: i64| x > 5));
//!
//! let doubled = domain.map(from_elements([1, 2, 3]), |x| x * 2);
//! assert_eq!(domain.format(&doubled), "{ 2, 4, 6 }");
//! ```
//!
//! ## Core Components
//!
//! - **[`set`]**: the [`IntSet`][crate::set::IntSet] trait, basic sets and the shared [`Set`][crate::set::Set] handle.
//! - **[`ops`]**: boolean combinators.
//! - **[`domain`]**: the scan window, with quantifiers ([`quant`]) and [`map`] defined on it.
//! - **[`display`]**: enumeration and `{ a, b, c }` rendering.

pub mod display;
pub mod domain;
pub mod map;
pub mod ops;
pub mod quant;
pub mod set;
