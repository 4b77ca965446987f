//! intgenerator CLI
//!
//! Prints a Go interface declaration for the exported methods of a type.

use anyhow::{Context, Result};
use clap::Parser;
use intgen_core::{format_interface, InterfaceScanner, ScanConfig};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "intgenerator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a Go interface from the methods of a struct")]
#[command(long_about = "Scans the package directory $GOPATH/src/<package> (or \
    $HOME/go/src/<package> when GOPATH is unset) for methods whose receiver is \
    <struct> or *<struct>, and prints a <struct>Interface declaration listing the \
    exported ones.\n\n\
    Example:\n  intgenerator github.com/spf13/cobra Command\n\n\
    Set RUST_LOG=debug to see which files were scanned.")]
pub struct Args {
    /// Package to scan, relative to $GOPATH/src (ie. github.com/spf13/cobra)
    #[arg(allow_hyphen_values = true)]
    pub package: String,

    /// Receiver type whose methods become the interface (ie. Command)
    #[arg(value_name = "STRUCT")]
    pub struct_name: String,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(args: &Args) -> Result<String> {
    let config = ScanConfig::from_env();
    debug!(root = %config.search_root.display(), "search root");

    let scanner = InterfaceScanner::new(config)?;
    let methods = scanner
        .scan(&args.package, &args.struct_name)
        .with_context(|| {
            format!(
                "scanning package {} for methods of {}",
                args.package, args.struct_name
            )
        })?;

    if methods.is_empty() {
        debug!(
            dir = %methods.package_dir.display(),
            type_name = %args.struct_name,
            "no methods found"
        );
    }

    Ok(format_interface(&methods))
}
