//! The prelude

#[doc(inline)]
pub use crate::comp::Comparator;
#[doc(inline)]
pub use crate::format::{OutputFormat, Writer};
#[doc(inline)]
pub use crate::row::{Row, RowSet};
#[doc(inline)]
pub use crate::sort::{Algorithm, SortConfig, SortStrategy, TreeReverse};
#[doc(inline)]
pub use crate::tree::Tree;
#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, is_std, Error, Result};

#[doc(inline)]
pub use std::cmp::Ordering;
#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
#[doc(inline)]
pub use std::str::FromStr;
