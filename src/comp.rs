//! Tools for comparing rows
//!
//! A [Comparator] orders two rows by one field, plain byte comparison,
//! optionally reversed.
//!
//! ```
//! use rowsort::comp::Comparator;
//! use rowsort::row::Row;
//! use std::cmp::Ordering;
//! let left = Row::from(["b", "1"]);
//! let right = Row::from(["a", "2"]);
//! let comp = Comparator::new(1);
//! assert_eq!(comp.comp(&left, &right), Ordering::Less);
//! assert_eq!(comp.reversed().comp(&left, &right), Ordering::Greater);
//! assert!(comp.try_comp(&left, &right).is_ok());
//! assert!(Comparator::new(2).try_comp(&left, &right).is_err());
//! ```

use crate::row::Row;
use crate::util::{Error, Result};
use std::cmp::Ordering;

/// Compare two rows by a single field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    /// zero-based index of the field to compare
    pub field: usize,
    /// reverse comparison?
    pub reverse: bool,
}

impl Comparator {
    /// new ascending Comparator on the given field
    pub const fn new(field: usize) -> Self {
        Self {
            field,
            reverse: false,
        }
    }
    /// new Comparator with the given direction
    pub const fn with_reverse(field: usize, reverse: bool) -> Self {
        Self { field, reverse }
    }
    /// same field, opposite direction
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            field: self.field,
            reverse: !self.reverse,
        }
    }
    /// fail unless rows with this many fields have the sort field
    pub fn check(&self, arity: usize) -> Result<()> {
        if self.field >= arity {
            Err(Error::FieldOutOfRange {
                field: self.field,
                arity,
            })
        } else {
            Ok(())
        }
    }
    /// Compare two rows byte by byte. Rows must have been validated with
    /// [`Comparator::check`]; a missing field compares as empty.
    pub fn comp(&self, left: &Row, right: &Row) -> Ordering {
        let ord = left
            .get(self.field)
            .unwrap_or(&[])
            .cmp(right.get(self.field).unwrap_or(&[]));
        if self.reverse {
            ord.reverse()
        } else {
            ord
        }
    }
    /// Compare two rows, failing if either lacks the sort field
    pub fn try_comp(&self, left: &Row, right: &Row) -> Result<Ordering> {
        self.check(left.len())?;
        self.check(right.len())?;
        Ok(self.comp(left, right))
    }
}
