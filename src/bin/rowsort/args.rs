use clap::ArgAction;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: &[] }
    };
}

#[macro_export]
macro_rules! arg_enum {
    ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d, values: $e }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl ProgSpec {
    pub fn new(help: &'static str) -> Self {
        Self { help, author: "avjewe@gmail.com", version: env!("CARGO_PKG_VERSION") }
    }
}

/// One command line option. An empty `value` means a flag.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
    pub values: &'static [&'static str],
}

/// One option as found on the command line. Flags have an empty value.
#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name).long(x.name).help(x.help);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    if x.value.is_empty() {
        b = b.action(ArgAction::SetTrue);
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    if !x.values.is_empty() {
        b = b.value_parser(clap::builder::PossibleValuesParser::new(x.values.iter().copied()));
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    if x.value.is_empty() {
        if m.get_flag(x.name) {
            v.push(ArgValue::new(x.name, "", m.index_of(x.name).unwrap_or(0)));
        }
    } else if let (Some(arg), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) {
        for (val, i) in arg.zip(ind) {
            v.push(ArgValue::new(x.name, val, i));
        }
    }
}

/// Parse the command line, return the options in command line order.
/// `-h` is left free for the caller, help is `--help` only.
pub fn parse(prog: &ProgSpec, spec: &[ArgSpec], argv: &[String]) -> Vec<ArgValue> {
    let mut a = clap::Command::new("rowsort")
        .version(prog.version)
        .author(prog.author)
        .about(prog.help)
        .disable_help_flag(true)
        .arg(clap::Arg::new("help").long("help").help("Print help").action(ArgAction::Help));

    for x in spec {
        a = add_arg(a, x);
    }
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    v
}
