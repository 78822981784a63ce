//! # gridprint
//!
//! Print JSON or delimited data as a bordered text table.
//!
//! ## Usage
//!
//! ```bash
//! # Comma separated, first line holds the column names
//! gridprint people.csv
//!
//! # Tab separated from stdin, with a banner and a row count
//! cut -f1,3 data.tsv | gridprint -d '\t' --header "Employees" --count
//!
//! # Truncate the "Notes" column to 20 characters
//! gridprint people.csv -w Notes=20
//!
//! # A JSON table document
//! gridprint table.json
//! ```
//!
//! A JSON document looks like:
//!
//! ```json
//! {
//!   "header": "Employees",
//!   "show_row_count": true,
//!   "columns": ["Name", {"name": "Notes", "max_width": 20}],
//!   "rows": [["Noel", "Human"], ["David", "Cyborg"]]
//! }
//! ```
//!
//! Set `GRIDPRINT_LOG=debug` to trace input handling on stderr.

mod input;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use gridprintlib::TableRenderer;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::input::{parse_width_limit, read_input, InputFormat, TableDocument};

/// Environment variable holding the log filter
const LOG_ENV: &str = "GRIDPRINT_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("gridprint")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print JSON or delimited data as a bordered text table")
        .arg(
            Arg::new("input")
                .help("Input file ('-' reads stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["json", "delimited"])
                .help("Input format (default: json for *.json files, otherwise delimited)"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .help("Cell delimiter for delimited input ('\\t' for tabs)"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .help("Banner shown above the table"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .action(ArgAction::SetTrue)
                .help("Show the number of rows below the table"),
        )
        .arg(
            Arg::new("max-width")
                .short('w')
                .long("max-width")
                .action(ArgAction::Append)
                .value_parser(parse_width_limit)
                .help("Limit a column's width, truncating longer cells (NAME=WIDTH)"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("When to color the output"),
        )
}

/// Send tracing events to stderr, filtered by `GRIDPRINT_LOG`.
fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Parse the delimiter argument, accepting `\t` as an escape for tab
fn parse_delimiter(arg: &str) -> anyhow::Result<char> {
    if arg == "\\t" {
        return Ok('\t');
    }
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(anyhow::anyhow!(
            "delimiter must be a single character, got '{}'",
            arg
        )),
    }
}

fn apply_color_choice(choice: &str) {
    match choice {
        "always" => console::set_colors_enabled(true),
        "never" => console::set_colors_enabled(false),
        _ => {}
    }
}

/// Load the document, build the table and print it
fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let format = match matches.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => InputFormat::Json,
        Some(_) => InputFormat::Delimited,
        None => InputFormat::from_path(path),
    };
    let delimiter = parse_delimiter(
        matches
            .get_one::<String>("delimiter")
            .map(|s| s.as_str())
            .unwrap_or(","),
    )?;
    let limits: Vec<(String, usize)> = matches
        .get_many::<(String, usize)>("max-width")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    if let Some(choice) = matches.get_one::<String>("color") {
        apply_color_choice(choice);
    }

    debug!(path, ?format, ?delimiter, "reading input");
    let text = read_input(path)?;

    let mut document = TableDocument::parse(&text, format, delimiter)?;
    document.limit_widths(&limits)?;
    if let Some(header) = matches.get_one::<String>("header") {
        document.header = Some(header.clone());
    }
    if matches.get_flag("count") {
        document.show_row_count = true;
    }

    let table = document.into_table().context("cannot build table")?;
    info!(
        columns = table.columns().len(),
        rows = table.row_count(),
        "rendering table"
    );

    TableRenderer::new().print(&table)?;
    Ok(())
}

fn main() -> ExitCode {
    setup_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
