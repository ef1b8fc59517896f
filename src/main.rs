//! include-code CLI - update example code blocks in a document

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use include_code::interface::{update_document_file, Context};
use include_code::IncludeError;

#[derive(Parser)]
#[command(name = "include-code")]
#[command(author, version, about = "Update example code blocks in a document", long_about = None)]
struct Cli {
    /// Document to update
    #[arg(value_name = "FILE")]
    document: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the document
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !cli.document.is_file() {
        println!("{}", IncludeError::NotAFile(cli.document));
        return ExitCode::from(1);
    }

    let ctx = match Context::for_document(&cli.document, cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match update_document_file(&cli.document, &ctx) {
        Ok(updated) => {
            print!("{}", updated);
            ExitCode::SUCCESS
        }
        Err(e @ IncludeError::NotAFile(_)) => {
            println!("{}", e);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
