// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which turns the text of a
//! resource into a generic [`ConfigValue`] tree.

use crate::domain::{ConfigValue, Result};

/// A trait for parsing configuration documents.
///
/// The root of a parsed document may have any shape. A file holding a single
/// scalar or a bare list is valid input; deciding whether the root is usable is
/// left to the caller.
///
/// # Examples
///
/// ```rust
/// use pagecfg::domain::{ConfigValue, Result};
/// use pagecfg::ports::DocumentParser;
///
/// struct LinesParser;
///
/// impl DocumentParser for LinesParser {
///     fn parse(&self, content: &str) -> Result<ConfigValue> {
///         Ok(ConfigValue::Sequence(content.lines().map(ConfigValue::from).collect()))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
/// }
///
/// let root = LinesParser.parse("a\nb").unwrap();
/// assert_eq!(root.as_sequence().map(|s| s.len()), Some(2));
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parses document content into a value tree.
    ///
    /// Empty content should yield [`ConfigValue::Null`]. Malformed content
    /// yields a `ConfigError::ParseError`.
    fn parse(&self, content: &str) -> Result<ConfigValue>;

    /// Returns the file extensions (without the leading dot) this parser reads.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    struct SingleValueParser;

    impl DocumentParser for SingleValueParser {
        fn parse(&self, content: &str) -> Result<ConfigValue> {
            if content.is_empty() {
                return Ok(ConfigValue::Null);
            }
            if content.starts_with('{') {
                return Err(ConfigError::ParseError {
                    resource: String::new(),
                    message: "braces not supported".to_string(),
                    source: None,
                });
            }
            Ok(ConfigValue::from(content))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["one"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let root = SingleValueParser.parse("hello").unwrap();
        assert_eq!(root.as_str(), Some("hello"));
    }

    #[test]
    fn test_parser_parse_empty_content() {
        assert!(SingleValueParser.parse("").unwrap().is_null());
    }

    #[test]
    fn test_parser_parse_error() {
        let result = SingleValueParser.parse("{");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parser_supported_extensions() {
        assert_eq!(SingleValueParser.supported_extensions(), &["one"]);
    }

    #[test]
    fn test_parser_is_object_safe() {
        let parser: Box<dyn DocumentParser> = Box::new(SingleValueParser);
        assert!(parser.parse("x").is_ok());
    }
}
