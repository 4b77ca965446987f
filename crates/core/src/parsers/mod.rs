mod go;

pub use go::GoMethodParser;

use crate::models::Signature;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Invalid method pattern for type {type_name:?}")]
    InvalidPattern {
        type_name: String,
        #[source]
        source: regex::Error,
    },
}

/// Trait for extracting the method signatures of one receiver type
pub trait SignatureParser {
    /// Extract signatures from the full text of a source file
    fn parse(&self, source: &str) -> Vec<Signature>;

    /// Receiver type this parser matches
    fn type_name(&self) -> &str;
}

/// Create the parser used for Go sources
pub fn create_parser(type_name: &str) -> Result<Box<dyn SignatureParser>, ParserError> {
    Ok(Box::new(GoMethodParser::new(type_name)?))
}
