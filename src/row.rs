//! Rows of delimited text, and reading them from a file
//!
//! ```
//! use rowsort::row::RowSet;
//! let mut input = &b"name,qty\npear,3\napple,7\n"[..];
//! let rows = RowSet::read(&mut input, b',')?;
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows.arity(), Some(2));
//! assert_eq!(rows.to_string(), "[[name qty] [pear 3] [apple 7]]");
//! # Ok::<(), rowsort::util::Error>(())
//! ```

use crate::util::{Error, Result};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::debug;

/// One input record, an ordered sequence of fields.
/// Fields are bytes; they need not be UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row {
    fields: Vec<Vec<u8>>,
}

impl Row {
    /// make a new Row from its fields
    pub fn new<T: Into<Vec<u8>>>(fields: impl IntoIterator<Item = T>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
    /// split a line into fields. Every delimiter starts a new field,
    /// so `a,,b` has three fields and `a,` has two.
    pub fn split(line: &[u8], delim: u8) -> Self {
        let mut fields = Vec::new();
        let mut begin = 0;
        for end in memchr::memchr_iter(delim, line) {
            fields.push(line[begin..end].to_vec());
            begin = end + 1;
        }
        fields.push(line[begin..].to_vec());
        Self { fields }
    }
    /// How many fields in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    /// should always be false, but required by clippy
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    /// Get one field, or None if index is too big
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.fields.get(index).map(Vec::as_slice)
    }
    /// Iterator over fields
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<u8>> {
        self.fields.iter()
    }
    /// the fields
    pub fn fields(&self) -> &[Vec<u8>] {
        &self.fields
    }
    /// write the fields joined by `delim`, then a newline
    pub fn write_delim(&self, w: &mut impl Write, delim: u8) -> Result<()> {
        for (i, x) in self.fields.iter().enumerate() {
            if i > 0 {
                w.write_all(&[delim])?;
            }
            w.write_all(x)?;
        }
        w.write_all(b"\n")?;
        Ok(())
    }
    /// write `[f0 f1 f2]`, bytes as they are
    pub fn write_nested(&self, w: &mut impl Write) -> Result<()> {
        w.write_all(b"[")?;
        for (i, x) in self.fields.iter().enumerate() {
            if i > 0 {
                w.write_all(b" ")?;
            }
            w.write_all(x)?;
        }
        w.write_all(b"]")?;
        Ok(())
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(x: [&str; N]) -> Self {
        Self::new(x)
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Vec<u8>;
    type IntoIter = std::slice::Iter<'a, Vec<u8>>;
    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// `[f0 f1 f2]`, invalid UTF-8 shown as replacement characters
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&String::from_utf8_lossy(x))?;
        }
        f.write_str("]")
    }
}

/// An ordered sequence of rows, all with the same number of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    /// make an empty RowSet
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }
    /// make a RowSet from rows, checking that all rows have the same number of fields
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let ret = Self { rows };
        ret.check_arity()?;
        Ok(ret)
    }
    /// Read rows until end of file or an empty line.
    /// Trailing newline and carriage return are removed from each line.
    pub fn read(r: &mut impl BufRead, delim: u8) -> Result<Self> {
        let mut rows = Vec::new();
        let mut arity = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let sz = r.read_until(b'\n', &mut buf).map_err(Error::Scan)?;
            if sz == 0 {
                break;
            }
            let line = chomp(&buf);
            if line.is_empty() {
                debug!("empty line {} ends input", rows.len() + 1);
                break;
            }
            let row = Row::split(line, delim);
            if rows.is_empty() {
                arity = row.len();
            } else if row.len() != arity {
                return Err(Error::ColumnMismatch {
                    line: rows.len() + 1,
                    expected: arity,
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        debug!("read {} rows of {} fields", rows.len(), arity);
        Ok(Self { rows })
    }
    /// fail if any row has a different number of fields than the first
    pub fn check_arity(&self) -> Result<()> {
        if let Some(first) = self.rows.first() {
            let expected = first.len();
            for (i, x) in self.rows.iter().enumerate() {
                if x.len() != expected {
                    return Err(Error::ColumnMismatch {
                        line: i + 1,
                        expected,
                        found: x.len(),
                    });
                }
            }
        }
        Ok(())
    }
    /// number of fields in each row, None if there are no rows
    pub fn arity(&self) -> Option<usize> {
        self.rows.first().map(Row::len)
    }
    /// How many rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// no rows?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Iterator over rows
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
    /// the rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    /// consume the RowSet, returning the rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
    /// write `[[a b] [c d]]`, bytes as they are
    pub fn write_nested(&self, w: &mut impl Write) -> Result<()> {
        w.write_all(b"[")?;
        for (i, x) in self.rows.iter().enumerate() {
            if i > 0 {
                w.write_all(b" ")?;
            }
            x.write_nested(w)?;
        }
        w.write_all(b"]")?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// `[[a b] [c d]]`
impl fmt::Display for RowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}

/// remove trailing newline and carriage return
fn chomp(mut x: &[u8]) -> &[u8] {
    if let Some(rest) = x.strip_suffix(b"\n") {
        x = rest;
    }
    if let Some(rest) = x.strip_suffix(b"\r") {
        x = rest;
    }
    x
}
