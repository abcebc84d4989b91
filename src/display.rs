//! Enumerating and printing the visible part of a set.
//!
//! A predicate set has no list of elements, so to show one we scan the
//! [`Domain`] window and keep every integer the set contains.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::domain::Domain;
use crate::set::IntSet;

/// Ascending iterator over the members of a set inside the window.
///
/// Call [`Domain::enumerate`] again to rescan from the start.
pub struct Members<'a, S: ?Sized> {
    set: &'a S,
    range: RangeInclusive<i64>,
}

impl<S: ?Sized> Clone for Members<'_, S> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            range: self.range.clone(),
        }
    }
}

impl<S: IntSet + ?Sized> Iterator for Members<'_, S> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let set = self.set;
        self.range.find(|&i| set.contains(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.range.size_hint().1)
    }
}

impl<S: IntSet + ?Sized> DoubleEndedIterator for Members<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let set = self.set;
        self.range.rfind(|&i| set.contains(i))
    }
}

/// Formats a set as `{ a, b, c }`, see [`Domain::display`].
pub struct Bounded<'a, S: ?Sized> {
    domain: Domain,
    set: &'a S,
}

impl<S: IntSet + ?Sized> Display for Bounded<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for (i, x) in self.domain.enumerate(self.set).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, " }}")
    }
}

impl Domain {
    /// Returns the members of `s` inside the window, in ascending order.
    pub fn enumerate<'a, S: IntSet + ?Sized>(&self, s: &'a S) -> Members<'a, S> {
        Members {
            set: s,
            range: self.range(),
        }
    }

    /// Collects the members of `s` inside the window.
    pub fn members<S: IntSet + ?Sized>(&self, s: &S) -> Vec<i64> {
        self.enumerate(s).collect()
    }

    /// Wraps `s` for display as `{ a, b, c }`.
    pub fn display<'a, S: IntSet + ?Sized>(&self, s: &'a S) -> Bounded<'a, S> {
        Bounded {
            domain: *self,
            set: s,
        }
    }

    /// Renders the members of `s` inside the window as `{ a, b, c }`.
    ///
    /// A set without members in the window renders as `{  }`.
    pub fn format<S: IntSet + ?Sized>(&self, s: &S) -> String {
        self.display(s).to_string()
    }

    /// Writes the rendering of `s`, followed by a newline.
    pub fn write_set<W, S>(&self, mut w: W, s: &S) -> io::Result<()>
    where
        W: Write,
        S: IntSet + ?Sized,
    {
        writeln!(w, "{}", self.display(s))
    }

    /// Prints the rendering of `s` to stdout.
    ///
    /// # Panics
    ///
    /// Panics if writing to stdout fails.
    pub fn print_set<S: IntSet + ?Sized>(&self, s: &S) {
        println!("{}", self.display(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::union;
    use crate::set::{empty, from_elements, singleton, universe};

    use test_log::test;

    #[test]
    fn test_enumerate() {
        let domain = Domain::default();
        let s = from_elements([5, -2, 0, 2000]);
        assert_eq!(domain.members(&s), vec![-2, 0, 5]);
    }

    #[test]
    fn test_enumerate_restartable() {
        let domain = Domain::new(20);
        let s = |x: i64| x % 7 == 0;
        let first: Vec<_> = domain.enumerate(&s).collect();
        let second: Vec<_> = domain.enumerate(&s).collect();
        assert_eq!(first, vec![-14, -7, 0, 7, 14]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumerate_reversed() {
        let domain = Domain::new(3);
        let rev: Vec<_> = domain.enumerate(&universe()).rev().collect();
        assert_eq!(rev, vec![3, 2, 1, 0, -1, -2, -3]);
    }

    #[test]
    fn test_enumerate_window_edges() {
        let domain = Domain::new(3);
        let s = from_elements([-4, -3, 3, 4]);
        assert_eq!(domain.members(&s), vec![-3, 3]);
    }

    #[test]
    fn test_format() {
        let domain = Domain::default();
        assert_eq!(domain.format(&from_elements([3, 1, 2])), "{ 1, 2, 3 }");
        assert_eq!(domain.format(&singleton(-7)), "{ -7 }");
    }

    #[test]
    fn test_format_empty() {
        let domain = Domain::default();
        assert_eq!(domain.format(&empty()), "{  }");
        assert_eq!(domain.format(&singleton(1001)), "{  }");
    }

    #[test]
    fn test_display_matches_format() {
        let domain = Domain::new(2);
        let s = union(singleton(-2), singleton(2));
        assert_eq!(format!("{}", domain.display(&s)), domain.format(&s));
        assert_eq!(domain.format(&universe()), "{ -2, -1, 0, 1, 2 }");
    }

    #[test]
    fn test_write_set() {
        let domain = Domain::default();
        let mut buf = Vec::new();
        domain.write_set(&mut buf, &from_elements([1, 2])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{ 1, 2 }\n");
    }

    #[test]
    fn test_print_set() {
        Domain::new(5).print_set(&from_elements([1, 2, 3]));
    }
}
