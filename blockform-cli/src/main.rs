//! Command-line interface for blockform
//!
//! Converts documents between the registered formats: HTML in and out, the persisted JSON
//! block tree in and out, and comment-annotated block markup out.
//!
//! Usage:
//!   blockform convert `<paths>...` --to `<format>` [--from `<format>`] [--compact]
//!                     [--output-dir `<dir>`] [--config `<file>`] [--verbose]
//!   blockform formats                         - List the available formats

mod convert;
mod error;

use blockform_babel::FormatRegistry;
use blockform_config::{BlockformConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command};
use convert::{convert_all, ConvertRequest, Converted};
use error::CliError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("blockform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML to block trees and back")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug events to stderr (overrides RUST_LOG)"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert files from one format to another")
                .arg(
                    Arg::new("paths")
                        .help("Input files")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format (inferred from each file's extension when omitted)"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .help("Output format"),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Write HTML on a single line"),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .short('o')
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Write one file per input here instead of printing to stdout"),
                ),
        )
        .subcommand(Command::new("formats").about("List available formats"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<BlockformConfig, CliError> {
    let loader = match matches.get_one::<PathBuf>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    Ok(loader.build()?)
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("convert", sub)) => handle_convert_command(&matches, sub),
        Some(("formats", _)) => handle_formats_command(&matches),
        _ => Err(CliError::Validation("unknown command".to_string())),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, sub: &ArgMatches) -> Result<ExitCode, CliError> {
    let config = load_config(matches)?;
    let registry = config.registry();

    let request = ConvertRequest {
        inputs: sub
            .get_many::<PathBuf>("paths")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        from: sub.get_one::<String>("from").map(String::as_str),
        to: sub
            .get_one::<String>("to")
            .map(String::as_str)
            .ok_or_else(|| CliError::Validation("--to is required".to_string()))?,
        compact: sub.get_flag("compact"),
        output_dir: sub.get_one::<PathBuf>("output-dir").cloned(),
    };

    let results = convert_all(&registry, &request)?;
    let mut failures = 0;
    let mut printed = Vec::new();
    for (path, result) in results {
        match result {
            Ok(Converted::Text(text)) => printed.push(text),
            Ok(Converted::Written(target)) => {
                eprintln!("{} -> {}", path.display(), target.display())
            }
            Err(err) => {
                failures += 1;
                eprintln!("Error: {err}");
            }
        }
    }
    if !printed.is_empty() {
        println!("{}", printed.join("\n"));
    }

    if failures > 0 {
        eprintln!("{failures} of {} file(s) failed", request.inputs.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the formats command
fn handle_formats_command(matches: &ArgMatches) -> Result<ExitCode, CliError> {
    let registry: FormatRegistry = load_config(matches)?.registry();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        let format = registry
            .get(&name)
            .map_err(|err| CliError::Validation(err.to_string()))?;
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "read/write",
            (true, false) => "read",
            (false, true) => "write",
            (false, false) => "-",
        };
        println!("  {} ({})", format.name(), direction);
        println!("    {}", format.description());
        println!("    extensions: {}", format.file_extensions().join(", "));
        println!();
    }
    Ok(ExitCode::SUCCESS)
}
