//! Scan configuration and directory filtering
//!
//! The search root is explicit configuration: nothing below the binary reads
//! the environment unless it goes through [`ScanConfig::from_env`].

use regex::Regex;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use thiserror::Error;
use tracing::trace;

/// Environment variable holding the Go workspace root
pub const GOPATH_ENV: &str = "GOPATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to build filter pattern")]
    InvalidPattern(#[from] regex::Error),
}

/// Configuration for scanning a package
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root that package identifiers are resolved against (a GOPATH)
    pub search_root: PathBuf,
    /// Extension of source files to list, without the dot
    pub extension: String,
    /// Name of the vendored dependency folder
    pub vendor_dir: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            search_root: PathBuf::new(),
            extension: "go".to_string(),
            vendor_dir: "vendor".to_string(),
        }
    }
}

impl ScanConfig {
    pub fn new(search_root: PathBuf) -> Self {
        Self {
            search_root,
            ..Default::default()
        }
    }

    /// Build a config whose search root comes from `GOPATH`, falling back to
    /// the toolchain default of `$HOME/go`.
    pub fn from_env() -> Self {
        Self::new(search_root_from(std::env::var_os(GOPATH_ENV)))
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_vendor_dir(mut self, name: impl Into<String>) -> Self {
        self.vendor_dir = name.into();
        self
    }

    /// Resolve a package identifier to `{search_root}/src/{package}`.
    ///
    /// Duplicate slashes are collapsed. The resulting directory is not checked
    /// for existence.
    pub fn resolve_package(&self, package: &str) -> String {
        collapse_slashes(&format!(
            "{}/src/{}",
            self.search_root.to_string_lossy(),
            package
        ))
    }
}

fn search_root_from(gopath: Option<OsString>) -> PathBuf {
    match gopath {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => dirs::home_dir()
            .map(|home| home.join("go"))
            .unwrap_or_default(),
    }
}

/// Replace every `//` with `/`, scanning left to right without overlap.
pub(crate) fn collapse_slashes(path: &str) -> String {
    path.replace("//", "/")
}

/// Decides which entries of a directory are candidate source files.
///
/// The hidden and vendor checks look at the directory path string only, so a
/// file's own name never triggers them.
pub struct SourceFilter {
    hidden_dir: Regex,
    vendor_segment: String,
    suffix: String,
}

impl SourceFilter {
    pub fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        let hidden_dir = Regex::new(r"/\.[0-9A-Za-z_]+|^\.[0-9A-Za-z_]+")?;

        Ok(Self {
            hidden_dir,
            vendor_segment: format!("/{}/", config.vendor_dir),
            suffix: format!(".{}", config.extension),
        })
    }

    /// Check if every entry of `dir` should be skipped
    pub fn excludes_dir(&self, dir: &str) -> bool {
        if self.hidden_dir.is_match(dir) {
            trace!(dir, "hidden directory excluded");
            return true;
        }
        if dir.contains(&self.vendor_segment) {
            trace!(dir, "vendored directory excluded");
            return true;
        }
        false
    }

    /// Check if a file name carries the source extension
    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }
}

/// Join a directory and a file name the way listed paths are reported
///
/// A file name never holds a `/`, so collapsing the directory part is enough
/// and the name is appended untouched.
pub(crate) fn join_listed(dir: &str, file_name: &OsStr) -> PathBuf {
    let mut listed = OsString::from(collapse_slashes(&format!("{}/", dir)));
    listed.push(file_name);
    PathBuf::from(listed)
}
