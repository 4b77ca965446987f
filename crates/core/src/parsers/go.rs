use crate::models::Signature;
use regex::Regex;

use super::{ParserError, SignatureParser};

/// ASCII whitespace as understood by the Go toolchain's `\s`
const SPACE: &str = r"[\t\n\f\r ]";
/// ASCII word character
const WORD: &str = "[0-9A-Za-z_]";

/// Line-anchored matcher for `func (r *Type) Name(...) ...` declarations
///
/// The type name is inserted into the pattern as-is.
pub struct GoMethodParser {
    type_name: String,
    method: Regex,
    block_opener: Regex,
}

impl GoMethodParser {
    pub fn new(type_name: &str) -> Result<Self, ParserError> {
        let pattern = format!(
            r"(?m)^func{sp}\({w}*{sp}\*?{ty}\){sp}*({w}*\(.*)",
            sp = SPACE,
            w = WORD,
            ty = type_name
        );
        let invalid = |source| ParserError::InvalidPattern {
            type_name: type_name.to_string(),
            source,
        };

        Ok(Self {
            type_name: type_name.to_string(),
            method: Regex::new(&pattern).map_err(invalid)?,
            block_opener: Regex::new(r"[\t\n\f\r ]*\{[\t\n\f\r ]*$").map_err(invalid)?,
        })
    }

    fn strip_block_opener(&self, captured: &str) -> String {
        self.block_opener.replace_all(captured, "").into_owned()
    }
}

impl SignatureParser for GoMethodParser {
    fn parse(&self, source: &str) -> Vec<Signature> {
        self.method
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| Signature::new(self.strip_block_opener(m.as_str())))
            .collect()
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }
}
