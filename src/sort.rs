//! Tools for sorting rows
//!
//! ```
//! use rowsort::row::{Row, RowSet};
//! use rowsort::sort::{Algorithm, SortConfig};
//! let rows = RowSet::from_rows(vec![
//!     Row::from(["b", "1"]),
//!     Row::from(["a", "2"]),
//!     Row::from(["c", "0"]),
//! ])?;
//! let mut config = SortConfig::new(1);
//! assert_eq!(config.sort(rows.clone())?.to_string(), "[[c 0] [b 1] [a 2]]");
//! config.reverse = true;
//! assert_eq!(config.sort(rows.clone())?.to_string(), "[[a 2] [b 1] [c 0]]");
//! config.algorithm = Algorithm::Tree;
//! assert_eq!(config.sort(rows)?.to_string(), "[[c 0] [b 1] [a 2]]");
//! # Ok::<(), rowsort::util::Error>(())
//! ```

use crate::comp::Comparator;
use crate::row::{Row, RowSet};
use crate::tree::Tree;
use crate::util::{err, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A way of putting rows in order
pub trait SortStrategy {
    /// return `rows` ordered by `comp`
    fn sort(&self, rows: Vec<Row>, comp: &Comparator) -> Vec<Row>;
    /// name for diagnostics
    fn name(&self) -> &'static str;
}

/// The standard library's comparison sort
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSort;

impl SortStrategy for BuiltinSort {
    fn sort(&self, mut rows: Vec<Row>, comp: &Comparator) -> Vec<Row> {
        rows.sort_by(|a, b| comp.comp(a, b));
        rows
    }
    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// Insert into an unbalanced binary search tree, then walk it in order
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSort;

impl SortStrategy for TreeSort {
    fn sort(&self, rows: Vec<Row>, comp: &Comparator) -> Vec<Row> {
        let mut t = Tree::new();
        for x in rows {
            t.insert(x, comp);
        }
        debug!("tree of {} rows has height {}", t.len(), t.height());
        t.into_sorted()
    }
    fn name(&self) -> &'static str {
        "tree"
    }
}

/// Which sort strategy to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// `1` or `builtin`
    #[default]
    Builtin,
    /// `2` or `tree`
    Tree,
}

impl Algorithm {
    /// the strategy that implements this algorithm
    pub fn strategy(&self) -> &'static dyn SortStrategy {
        match self {
            Self::Builtin => &BuiltinSort,
            Self::Tree => &TreeSort,
        }
    }
}

impl FromStr for Algorithm {
    type Err = crate::util::Error;
    fn from_str(spec: &str) -> Result<Self> {
        if spec == "1" || spec.eq_ignore_ascii_case("builtin") {
            Ok(Self::Builtin)
        } else if spec == "2" || spec.eq_ignore_ascii_case("tree") {
            Ok(Self::Tree)
        } else {
            err!("Sort algorithm must be 1 (builtin) or 2 (tree), not '{}'", spec)
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

/// Does the tree sort honor the reverse flag?
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeReverse {
    /// Tree sort is always ascending, whatever the reverse flag says.
    /// This is how rowsort has always behaved.
    #[default]
    Ignore,
    /// Tree sort is descending when the reverse flag is set
    Honor,
}

/// Everything needed to sort a RowSet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// zero-based sort field
    pub field: usize,
    /// descending order
    pub reverse: bool,
    /// this many leading rows are headers, left in place
    pub header_lines: usize,
    /// which strategy
    pub algorithm: Algorithm,
    /// compatibility setting for reverse with the tree strategy
    pub tree_reverse: TreeReverse,
}

impl SortConfig {
    /// ascending, no header, builtin sort, on the given field
    pub fn new(field: usize) -> Self {
        Self {
            field,
            ..Self::default()
        }
    }
    /// The Comparator actually used for the configured strategy
    pub fn comparator(&self) -> Comparator {
        let reverse = match (self.algorithm, self.tree_reverse) {
            (Algorithm::Tree, TreeReverse::Ignore) => false,
            _ => self.reverse,
        };
        Comparator::with_reverse(self.field, reverse)
    }
    /// Sort the rows, leaving the header rows first and unchanged.
    /// Fails if the rows don't all have the same number of fields,
    /// or if there are rows to sort and the sort field doesn't exist.
    pub fn sort(&self, rows: RowSet) -> Result<RowSet> {
        rows.check_arity()?;
        let arity = rows.arity().unwrap_or(0);
        let mut rows = rows.into_rows();
        let body = rows.split_off(self.header_lines.min(rows.len()));
        let comp = self.comparator();
        if !body.is_empty() {
            comp.check(arity)?;
        }
        if self.reverse && !comp.reverse {
            warn!("reverse is ignored by the tree sort, use --tree-reverse to honor it");
        }
        let strategy = self.algorithm.strategy();
        debug!(
            "sorting {} rows on field {} with {} sort, {} header rows",
            body.len(),
            self.field,
            strategy.name(),
            rows.len()
        );
        rows.extend(strategy.sort(body, &comp));
        RowSet::from_rows(rows)
    }
}
