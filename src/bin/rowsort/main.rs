use rowsort::prelude::*;
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

mod args;
use args::ArgSpec;

/// Where to read, where to write, and how
#[derive(Clone, Debug)]
pub struct Settings {
    pub input: String,
    pub output: String,
    pub delim: u8,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: "-".to_string(),
            output: "-".to_string(),
            delim: b',',
            format: OutputFormat::default(),
        }
    }
}

const A: [ArgSpec; 9] = [
    arg! {"input", "i", "File", "Read from this file, rather than standard input"},
    arg! {"output", "o", "File", "Write to this file, rather than standard output"},
    arg! {"header", "h", "", "First line is a header, not sorted"},
    arg! {"field", "f", "Number", "Sort by this field, counting from zero"},
    arg! {"reverse", "r", "", "Sort in descending order"},
    arg_enum! {"algorithm", "a", "Algorithm", "1 for the builtin sort, 2 for tree sort", &["1", "2", "builtin", "tree"]},
    arg! {"delimiter", "d", "Char", "Field delimiter, default comma. '\\t' or 'tab' for tab"},
    arg_enum! {"format", "", "Format", "Output format, default nested", &["nested", "csv"]},
    arg! {"tree-reverse", "", "", "Let the tree sort honor --reverse"},
];

fn main() {
    init_tracing();
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// single ASCII character, or `\t` or `tab`
fn parse_delim(spec: &str) -> Result<u8> {
    if spec == "\\t" || spec.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    match spec.as_bytes() {
        [ch] if ch.is_ascii() && *ch != b'\n' && *ch != b'\r' => Ok(*ch),
        _ => err!("Delimiter must be a single ASCII character, not '{}'", spec),
    }
}

fn inner_main(argv: Vec<String>) -> Result<()> {
    let prog = args::ProgSpec::new("Sort lines of delimited text by one field.");
    let args = args::parse(&prog, &A, &argv);

    let mut settings = Settings::default();
    let mut config = SortConfig::default();
    for x in args {
        if x.name == "input" {
            settings.input = x.value;
        } else if x.name == "output" {
            settings.output = x.value;
        } else if x.name == "header" {
            config.header_lines = 1;
        } else if x.name == "field" {
            config.field = x.value.parse::<usize>()?;
        } else if x.name == "reverse" {
            config.reverse = true;
        } else if x.name == "algorithm" {
            config.algorithm = x.value.parse::<Algorithm>()?;
        } else if x.name == "delimiter" {
            settings.delim = parse_delim(&x.value)?;
        } else if x.name == "format" {
            settings.format = x.value.parse::<OutputFormat>()?;
        } else if x.name == "tree-reverse" {
            config.tree_reverse = TreeReverse::Honor;
        } else {
            unreachable!();
        }
    }

    let mut f = get_reader(&settings.input)?;
    let rows = RowSet::read(&mut *f, settings.delim)?;
    let sorted = config.sort(rows)?;

    let to_std = is_std(&settings.output);
    let mut w = get_writer(&settings.output)?;
    Writer::new(settings.format, settings.delim).write(&mut w, &sorted, to_std)?;
    if !to_std {
        writeln!(io::stdout(), "Output is written to file {}", settings.output)?;
    }
    Ok(())
}
