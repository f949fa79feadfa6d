/*
 * ==========================================================================
 * BLPARSE - BL Language Parser
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line front end: parse a BL file, print it back in
 *           canonical form or as JSON, or report the first syntax error.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the BLPARSE project.
 *
 * BLPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context as _, Result};
use blparse::diagnostics::DiagnosticPrinter;
use blparse::{parse_block_source, parse_source, pretty_print_program, ParseError};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for parsed programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Canonical BL source
    Text,
    /// The parsed tree as JSON
    Json,
}

/// Parse BL programs and print them in canonical form.
#[derive(Parser)]
#[command(name = "blparse", version, about = "BL language parser")]
struct Cli {
    /// Path to the .bl source file
    file: PathBuf,

    /// Parse the file as a block of statements instead of a full program
    #[arg(long)]
    statement: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Log parser progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug, default is warn.
fn init_logging(verbose: bool) {
    let default = if verbose { "blparse=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when the source had a syntax error (already
/// reported), `Err` for I/O and serialization failures.
fn run(cli: &Cli) -> Result<bool> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    info!(file = %cli.file.display(), bytes = source.len(), "parsing");

    let printer = DiagnosticPrinter::new(cli.file.display().to_string(), source.as_str());

    let output = if cli.statement {
        match parse_block_source(&source) {
            Ok(block) => match cli.format {
                OutputFormat::Text => format!("{}\n", block),
                OutputFormat::Json => serde_json::to_string_pretty(&block)? + "\n",
            },
            Err(e) => return report(&printer, &e, cli.format),
        }
    } else {
        match parse_source(&source) {
            Ok(program) => match cli.format {
                OutputFormat::Text => pretty_print_program(&program),
                OutputFormat::Json => serde_json::to_string_pretty(&program)? + "\n",
            },
            Err(e) => return report(&printer, &e, cli.format),
        }
    };

    print!("{}", output);
    Ok(true)
}

fn report(printer: &DiagnosticPrinter, error: &ParseError, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Text => printer.print(error),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "code": error.code(),
                "error": error,
            });
            eprintln!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(false)
}
