//! Write sorted rows

use crate::row::RowSet;
use crate::util::{err, Error, Result};
use std::io::Write;
use std::str::FromStr;

/// How sorted rows are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The whole RowSet on one line, `[[a b] [c d]]`.
    /// On standard output it is preceded by `Result: `
    #[default]
    Nested,
    /// One line per row, fields joined by the delimiter
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;
    fn from_str(spec: &str) -> Result<Self> {
        if spec.eq_ignore_ascii_case("nested") {
            Ok(Self::Nested)
        } else if spec.eq_ignore_ascii_case("csv") {
            Ok(Self::Csv)
        } else {
            err!("Output format must be 'nested' or 'csv', not '{}'", spec)
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Writer {
    /// rendering
    pub format: OutputFormat,
    /// field delimiter for [`OutputFormat::Csv`]
    pub delim: u8,
}

impl Default for Writer {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            delim: b',',
        }
    }
}

impl Writer {
    /// new Writer
    pub const fn new(format: OutputFormat, delim: u8) -> Self {
        Self { format, delim }
    }
    /// write all the rows. `to_std` is true if `w` is standard output.
    pub fn write(&self, w: &mut impl Write, rows: &RowSet, to_std: bool) -> Result<()> {
        match self.format {
            OutputFormat::Nested => {
                if to_std {
                    w.write_all(b"Result: ")?;
                }
                rows.write_nested(w)?;
                w.write_all(b"\n")?;
            }
            OutputFormat::Csv => {
                for x in rows {
                    x.write_delim(w, self.delim)?;
                }
            }
        }
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;

    fn data() -> RowSet {
        RowSet::from_rows(vec![Row::from(["c", "0"]), Row::from(["b", "1"])]).unwrap()
    }

    fn render(w: &Writer, rows: &RowSet, to_std: bool) -> String {
        let mut v = Vec::new();
        w.write(&mut v, rows, to_std).unwrap();
        String::from_utf8(v).unwrap()
    }

    #[test]
    fn nested() {
        let w = Writer::default();
        assert_eq!(render(&w, &data(), true), "Result: [[c 0] [b 1]]\n");
        assert_eq!(render(&w, &data(), false), "[[c 0] [b 1]]\n");
        assert_eq!(render(&w, &RowSet::new(), true), "Result: []\n");
    }

    #[test]
    fn csv() {
        let w = Writer::new(OutputFormat::Csv, b'\t');
        assert_eq!(render(&w, &data(), true), "c\t0\nb\t1\n");
        assert_eq!(render(&w, &RowSet::new(), false), "");
    }

    #[test]
    fn bytes_pass_through() {
        let rows = RowSet::from_rows(vec![Row::new([&b"caf\xe9"[..], &b"1"[..]])]).unwrap();
        for format in [OutputFormat::Nested, OutputFormat::Csv] {
            let mut v = Vec::new();
            Writer::new(format, b',').write(&mut v, &rows, false).unwrap();
            let want: &[u8] = match format {
                OutputFormat::Nested => b"[[caf\xe9 1]]\n",
                OutputFormat::Csv => b"caf\xe9,1\n",
            };
            assert_eq!(v, want);
        }
    }

    #[test]
    fn parse() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("Nested".parse::<OutputFormat>().unwrap(), OutputFormat::Nested);
        assert!("json".parse::<OutputFormat>().is_err());
    }
}
