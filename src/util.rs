//! Misc utility stuff : errors, input and output files

use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::ops::{Deref, DerefMut};

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;

// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom rowsort error
    Error(String),
    /// named input file could not be opened
    InputOpen(io::Error),
    /// named output file could not be created
    OutputCreate(io::Error),
    /// failure while reading the input
    Scan(io::Error),
    /// a row has a different number of fields than the first row
    ColumnMismatch {
        /// one-based line number of the offending row
        line: usize,
        /// field count of the first row
        expected: usize,
        /// field count of the offending row
        found: usize,
    },
    /// the sort field does not exist in the rows
    FieldOutOfRange {
        /// zero-based field index requested
        field: usize,
        /// number of fields in each row
        arity: usize,
    },
    /// pass through ParseIntError
    ParseIntError(std::num::ParseIntError),
    /// pass through io::Error
    IoError(io::Error),
}
/// Result type for rowsort
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Self::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

err_type!(io::Error, Error::IoError);
err_type!(std::num::ParseIntError, Error::ParseIntError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(s) => write!(f, "{}", s)?,
            Self::InputOpen(s) => write!(f, "Can't open input : {}", s)?,
            Self::OutputCreate(s) => write!(f, "Can't create output : {}", s)?,
            Self::Scan(s) => write!(f, "Read failed : {}", s)?,
            Self::ColumnMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {} has {} columns, but the first line has {}",
                line, found, expected
            )?,
            Self::FieldOutOfRange { field, arity } => write!(
                f,
                "Sort field {} is out of range, rows have {} fields (fields are numbered from zero)",
                field, arity
            )?,
            Self::ParseIntError(s) => write!(f, "ParseIntError : {}", s)?,
            Self::IoError(s) => write!(f, "IoError : {}", s)?,
        }
        Ok(())
    }
}

/// Input file. Wrapped in a type so I can 'impl Debug'
pub struct Infile(
    /// The file being read
    pub io::BufReader<Box<dyn Read>>,
);

impl Infile {
    /// create a new input file
    pub fn new(f: io::BufReader<Box<dyn Read>>) -> Self {
        Self(f)
    }
}

impl fmt::Debug for Infile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infile")
    }
}

impl Deref for Infile {
    type Target = io::BufReader<Box<dyn Read>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Infile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name. `-` is stdout.
/// A named file is created, or truncated if it already exists.
pub fn get_writer(name: &str) -> Result<Outfile> {
    let inner: Box<dyn Write> = {
        if name == "-" {
            Box::new(io::stdout())
        } else {
            Box::new(fs::File::create(name).map_err(Error::OutputCreate)?)
        }
    };
    Ok(io::BufWriter::new(inner))
}

/// Make an Infile from a file name. `-` is stdin.
/// Gzipped input is recognized and decompressed.
pub fn get_reader(name: &str) -> Result<Infile> {
    let inner: Box<dyn Read> = {
        if name == "-" {
            Box::new(io::stdin())
        } else {
            Box::new(fs::File::open(name).map_err(Error::InputOpen)?)
        }
    };
    let mut outer = io::BufReader::new(inner);
    let start = outer.fill_buf().map_err(Error::Scan)?;
    if start.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        outer = io::BufReader::new(Box::new(MultiGzDecoder::new(outer)));
    }
    Ok(Infile::new(outer))
}

/// Is this name standard input or standard output?
pub fn is_std(name: &str) -> bool {
    name == "-"
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("nope.csv");
        let e = get_reader(name.to_str().unwrap()).unwrap_err();
        assert!(matches!(e, Error::InputOpen(_)));
        assert!(e.to_string().starts_with("Can't open input"));
    }

    #[test]
    fn bad_output() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("no_such_dir").join("out.csv");
        match get_writer(name.to_str().unwrap()) {
            Err(e) => {
                assert!(matches!(e, Error::OutputCreate(_)));
                assert!(e.to_string().starts_with("Can't create output"));
            }
            Ok(_) => panic!("created a file in a missing directory"),
        }
    }

    #[test]
    fn plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.csv");
        fs::write(&plain, b"a,b\n").unwrap();
        let mut s = String::new();
        get_reader(plain.to_str().unwrap())
            .unwrap()
            .read_to_string(&mut s)
            .unwrap();
        assert_eq!(s, "a,b\n");

        let gz = dir.path().join("data.csv.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"c,d\n").unwrap();
        fs::write(&gz, enc.finish().unwrap()).unwrap();
        s.clear();
        get_reader(gz.to_str().unwrap())
            .unwrap()
            .read_to_string(&mut s)
            .unwrap();
        assert_eq!(s, "c,d\n");
    }

    #[test]
    fn writer_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("out.txt");
        fs::write(&name, b"a much longer previous content\n").unwrap();
        {
            let mut w = get_writer(name.to_str().unwrap()).unwrap();
            w.write_all(b"new\n").unwrap();
        }
        assert_eq!(fs::read_to_string(&name).unwrap(), "new\n");
    }

    #[test]
    fn io_error_converts() {
        let e: Error = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(e, Error::IoError(_)));
        assert!(e.suppress());
    }

    #[test]
    fn infile_derefs_to_reader() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("two.csv");
        fs::write(&name, b"a,b\nc,d\n").unwrap();
        let mut f = get_reader(name.to_str().unwrap()).unwrap();
        assert_eq!(f.buffer(), b"a,b\nc,d\n");
        let mut line = String::new();
        f.read_line(&mut line).unwrap();
        assert_eq!(line, "a,b\n");
    }

    #[test]
    fn suppress() {
        assert!(Error::IoError(io::Error::from(io::ErrorKind::BrokenPipe)).suppress());
        assert!(!Error::Scan(io::Error::from(io::ErrorKind::BrokenPipe)).suppress());
        let e: Result<()> = err!("bad {}", 42);
        assert_eq!(e.unwrap_err().to_string(), "bad 42");
    }
}
