use crate::config::{join_listed, ScanConfig, SourceFilter};
use crate::models::{MethodSet, Signature, SourceFile};
use crate::parsers::{create_parser, SignatureParser};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Parser(#[from] crate::parsers::ParserError),
}

impl ScanError {
    fn directory_read(dir: &str, err: walkdir::Error) -> Self {
        // walkdir's message repeats the io error it wraps; keep only the io error
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
        ScanError::DirectoryRead {
            path: dir.to_string(),
            source,
        }
    }
}

/// Scanner that collects the methods of one receiver type across a package
pub struct InterfaceScanner {
    config: ScanConfig,
    filter: SourceFilter,
}

impl InterfaceScanner {
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let filter = SourceFilter::new(&config)?;
        Ok(Self { config, filter })
    }

    /// Resolve `package` against the search root and scan it for methods of
    /// `type_name`
    pub fn scan(&self, package: &str, type_name: &str) -> Result<MethodSet, ScanError> {
        let package_dir = self.config.resolve_package(package);
        debug!(package, dir = %package_dir, "resolved package");
        self.scan_dir(&package_dir, type_name)
    }

    /// Scan an already resolved directory for methods of `type_name`
    pub fn scan_dir(&self, dir: &str, type_name: &str) -> Result<MethodSet, ScanError> {
        let parser = create_parser(type_name)?;
        let source_files = self.find_source_files(dir)?;
        debug!(dir, count = source_files.len(), "listed source files");

        let files = source_files
            .into_iter()
            .map(|path| -> Result<SourceFile, ScanError> {
                let signatures = parse_file(&path, parser.as_ref())?;
                Ok(SourceFile { path, signatures })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let method_set = MethodSet {
            type_name: type_name.to_string(),
            package_dir: PathBuf::from(dir),
            files,
        };
        debug!(type_name, count = method_set.len(), "scan complete");
        Ok(method_set)
    }

    /// List the source files directly inside `dir`, sorted by file name
    ///
    /// Subdirectories are never entered.
    pub fn find_source_files(&self, dir: &str) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();
        let excluded = self.filter.excludes_dir(dir);

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| ScanError::directory_read(dir, err))?;

            // Skip directories
            if entry.file_type().is_dir() {
                continue;
            }

            let file_name = entry.file_name();
            if !excluded && self.filter.matches_extension(&file_name.to_string_lossy()) {
                files.push(join_listed(dir, file_name));
            }
        }

        Ok(files)
    }
}

/// Read a whole file and extract the signatures `parser` matches
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn parse_file(path: &Path, parser: &dyn SignatureParser) -> Result<Vec<Signature>, ScanError> {
    let data = fs::read(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&data);

    let signatures = parser.parse(&content);
    for signature in &signatures {
        trace!(path = %path.display(), method = signature.name(), "matched method");
    }
    debug!(
        path = %path.display(),
        type_name = parser.type_name(),
        count = signatures.len(),
        "extracted signatures"
    );
    Ok(signatures)
}
