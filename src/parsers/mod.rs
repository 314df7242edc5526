pub mod html;
pub mod json;


use std::path::Path;

use url::Url;

use crate::bookmark::NewBookmark;

/// Formats a bookmark import file can come in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// A JSON array of bookmarks, e.g. an earlier export
    Json,
    /// An HTML page or Netscape bookmark file
    Html,
}

impl ParserType {
    /// Determines the parser type from a file extension, defaulting to HTML
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => {
                ::log::debug!("Classifying as JSON: {}", path.display());
                ParserType::Json
            }
            _ => {
                ::log::debug!("Classifying as HTML: {}", path.display());
                ParserType::Html
            }
        }
    }
}

/// Main parser that delegates to specific format parsers
pub struct Parser;

impl Parser {
    /// Parse an import file into add candidates
    pub fn parse_import(
        content: &str,
        parser_type: ParserType,
        base: Option<&Url>,
    ) -> Result<Vec<NewBookmark>, serde_json::Error> {
        match parser_type {
            ParserType::Json => Ok(json::parse_bookmark_list(content)?
                .into_iter()
                .map(NewBookmark::from)
                .collect()),
            ParserType::Html => Ok(html::parse(content, base)),
        }
    }

    /// Determine parser type from the file path and then parse content
    pub fn parse_import_from_path(
        content: &str,
        path: &Path,
        base: Option<&Url>,
    ) -> Result<Vec<NewBookmark>, serde_json::Error> {
        Self::parse_import(content, ParserType::from_path(path), base)
    }
}
