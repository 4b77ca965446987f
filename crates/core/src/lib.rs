//! intgen Core Library
//!
//! This library scans a Go package directory for the methods attached to a
//! named receiver type and renders a Go interface declaration listing the
//! exported ones. Useful when extracting a contract from a concrete type for
//! mocking or dependency inversion.
//!
//! # Pipeline
//!
//! - List the `.go` files directly inside the package directory, skipping
//!   hidden and vendored directories
//! - Extract `func (r *Type) Method(...)` signatures with line-anchored
//!   regex matching
//! - Keep the exported methods and render `type <Type>Interface interface { ... }`
//!
//! Matching is textual: there is no syntax tree and no type resolution.
//!
//! # Example
//!
//! ```no_run
//! use intgen_core::{format_interface, InterfaceScanner, ScanConfig};
//!
//! let scanner = InterfaceScanner::new(ScanConfig::from_env()).unwrap();
//! let methods = scanner.scan("github.com/spf13/cobra", "Command").unwrap();
//!
//! println!("{}", format_interface(&methods));
//! ```

pub mod config;
pub mod models;
pub mod output;
pub mod parsers;
pub mod scanner;

// Re-exports for convenience
pub use config::{ConfigError, ScanConfig, SourceFilter};
pub use models::*;
pub use output::{format_interface, render_interface, INTERFACE_SUFFIX};
pub use parsers::{create_parser, GoMethodParser, ParserError, SignatureParser};
pub use scanner::{parse_file, InterfaceScanner, ScanError};
