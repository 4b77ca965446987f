use std::fmt;
use std::path::PathBuf;

/// One extracted method signature: name, parameters and results
///
/// The receiver clause and any trailing block opener are not part of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub text: String,
}

impl Signature {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Method name, the text before the parameter list
    pub fn name(&self) -> &str {
        match self.text.find('(') {
            Some(idx) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Exported names start with an uppercase ASCII letter
    pub fn is_exported(&self) -> bool {
        self.text
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A listed source file with the signatures found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as reported by the lister
    pub path: PathBuf,
    /// Signatures in match order
    pub signatures: Vec<Signature>,
}

/// Result of scanning one package for one receiver type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet {
    /// Receiver type name the scan looked for
    pub type_name: String,
    /// Directory the package resolved to
    pub package_dir: PathBuf,
    /// Files in listing order
    pub files: Vec<SourceFile>,
}

impl MethodSet {
    /// All signatures, in file order then match order
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.files.iter().flat_map(|f| f.signatures.iter())
    }

    pub fn exported(&self) -> impl Iterator<Item = &Signature> {
        self.signatures().filter(|s| s.is_exported())
    }

    pub fn len(&self) -> usize {
        self.files.iter().map(|f| f.signatures.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
