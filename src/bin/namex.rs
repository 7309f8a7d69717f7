//! Command-line interface for namex
//! Reads log text from a file or stdin and prints the `name` values found in it.
//!
//! Usage:
//!   namex [path] [--unique] [--sort] [--policy `<policy>`] [--format `<format>`]
//!   cat app.log | namex -us
//!
//! Input and output only ever go through stdin/stdout/stderr; nothing is
//! written to disk.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use namex::config::{Loader, NamexConfig, OutputFormat, Overrides};
use namex::{extract, MatchPolicy, NamexError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "namex.toml";

fn main() {
    env_logger::init();

    let matches = Command::new("namex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract name='...' values from log text")
        .arg(
            Arg::new("path")
                .help("Log file to read ('-' or omitted reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("unique")
                .long("unique")
                .short('u')
                .help("Drop exact duplicates, keeping first occurrences")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .short('s')
                .help("Sort ignoring case and accents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .short('p')
                .help("Where a quoted value ends: 'lookahead' or 'symmetric'"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print the summary line")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let source = read_source(matches.get_one::<String>("path").map(String::as_str))?;

    let options = config.extraction_options();
    debug!("extracting with {:?}", options);
    let result = extract(&source, &options);
    drop(source);

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if !result.is_empty() {
                println!("{}", result.render_values());
            }
            if config.output.summary {
                eprintln!("{}", result.summary());
            }
        }
    }
    Ok(())
}

/// Defaults, then `./namex.toml` if present, then `--config`, then flags.
fn load_config(matches: &ArgMatches) -> Result<NamexConfig> {
    let policy = matches
        .get_one::<String>("policy")
        .map(|name| name.parse::<MatchPolicy>())
        .transpose()?;
    let format = matches
        .get_one::<String>("format")
        .map(|name| match name.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        });
    let overrides = Overrides {
        unique: matches.get_flag("unique"),
        sort: matches.get_flag("sort"),
        policy,
        format,
        quiet: matches.get_flag("quiet"),
    };

    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.with_overrides(&overrides)?.build()?)
}

/// Read the whole input, replacing invalid UTF-8 with U+FFFD so one bad byte
/// does not hide the names on every other line.
fn read_source(path: Option<&str>) -> Result<String> {
    let bytes = match path {
        None | Some("-") => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(NamexError::Stdin)?;
            bytes
        }
        Some(path) => std::fs::read(path).map_err(|source| NamexError::Io {
            path: Path::new(path).to_path_buf(),
            source,
        })?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
