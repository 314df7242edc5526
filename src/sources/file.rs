use std::path::Path;

use crate::bookmark::Bookmark;
use crate::error::FetchError;
use crate::parsers::json::parse_bookmark_list;

/// Read a master list from a local JSON file
pub async fn fetch(path: &Path) -> Result<Vec<Bookmark>, FetchError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_bookmark_list(&contents)?)
}
