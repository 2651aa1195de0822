//! Command-line interface for focus
//! This binary runs the tokenizer and the indentation assists over Focus source files, which
//! is handy for inspecting highlighting and for checking indentation without an editor.
//!
//! Usage:
//!   focus tokenize `<path>` [--format `<format>`] [--config `<file>`]  - Print each line's tokens
//!   focus indent `<path>` --row `<n>` [--config `<file>`]              - Predict the indent after row n
//!   focus outdent `<path>`                                            - Outdent closing-brace lines
//!
//! Configuration is read from the built-in defaults, then `focus.toml` in the working
//! directory if present, then `FOCUS__*` environment variables, then `--config`.

use clap::{Arg, ArgMatches, Command};
use focus::focus::config::{FocusConfig, Loader, OutputFormat};
use focus::focus::error::{read_source, FocusError};
use focus::focus::indentation::indent_after;
use focus::focus::{tokenize, Document, LineTokens};

fn main() {
    init_tracing();

    let config_arg = || {
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Configuration file layered over the defaults")
    };
    let path_arg = || {
        Arg::new("path")
            .help("Path to the focus source file")
            .required(true)
            .index(1)
    };

    let matches = Command::new("focus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizer and indentation assists for Focus source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Print the tokens and end state of every line")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (defaults to output.format from the configuration)")
                        .value_parser(["text", "json"]),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("indent")
                .about("Print the indentation predicted for a new line after a row")
                .arg(path_arg())
                .arg(
                    Arg::new("row")
                        .long("row")
                        .short('r')
                        .help("Zero-based row the new line is started after")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("outdent")
                .about("Line up every closing-brace line with its opening brace and print the result")
                .arg(path_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tokenize", sub)) => handle_tokenize_command(sub),
        Some(("indent", sub)) => handle_indent_command(sub),
        Some(("outdent", sub)) => handle_outdent_command(sub),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install a stderr subscriber when RUST_LOG is set, e.g. `RUST_LOG=focus=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load_config(matches: &ArgMatches) -> Result<FocusConfig, FocusError> {
    let mut loader = Loader::new()
        .with_optional_file("focus.toml")
        .with_environment();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn load_source(matches: &ArgMatches) -> Result<String, FocusError> {
    // `path` is a required argument.
    let path = matches.get_one::<String>("path").unwrap();
    read_source(path)
}

/// Handle the tokenize command
fn handle_tokenize_command(matches: &ArgMatches) -> Result<(), FocusError> {
    let config = load_config(matches)?;
    let source = load_source(matches)?;
    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        Some(_) => OutputFormat::Text,
        None => config.output.format,
    };

    let lines = tokenize(&source);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
        OutputFormat::Text => print!("{}", render_text(&lines)),
    }
    Ok(())
}

fn render_text(lines: &[LineTokens]) -> String {
    let mut out = String::new();
    for (row, line) in lines.iter().enumerate() {
        out.push_str(&format!("{row}: -> {}\n", line.end_state));
        for token in &line.tokens {
            out.push_str(&format!(
                "    {}..{} {} {:?}\n",
                token.start_column, token.end_column, token.category, token.lexeme
            ));
        }
    }
    out
}

/// Handle the indent command
fn handle_indent_command(matches: &ArgMatches) -> Result<(), FocusError> {
    let config = load_config(matches)?;
    let document = Document::new(&load_source(matches)?);
    let row = *matches.get_one::<usize>("row").unwrap();

    let indent = indent_after(&document, row, &config.indentation.unit())?;
    let visible: String = indent
        .chars()
        .map(|c| if c == '\t' { '→' } else { '·' })
        .collect();
    println!("{visible}");
    Ok(())
}

/// Handle the outdent command
fn handle_outdent_command(matches: &ArgMatches) -> Result<(), FocusError> {
    let mut document = Document::new(&load_source(matches)?);
    let mut changed = 0;
    for row in 0..document.line_count() {
        if document.auto_outdent(row).is_some() {
            changed += 1;
        }
    }
    tracing::debug!(changed, "outdent pass finished");
    print!("{}", document.text());
    Ok(())
}
