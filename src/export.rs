use std::fs;
use std::path::Path;

use crate::bookmark::Bookmark;
use crate::error::ExportError;

/// Default file name for exports
pub const DEFAULT_EXPORT_FILE: &str = "my-bookmarks.json";

/// Serialise the user-added list as pretty-printed JSON
pub fn to_json(bookmarks: &[Bookmark]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(bookmarks)?)
}

/// Write the user-added list to `path`, returning how many entries were written
pub fn export_to_file(bookmarks: &[Bookmark], path: &Path) -> Result<usize, ExportError> {
    let json = to_json(bookmarks)?;
    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    ::log::info!("Exported {} bookmarks to {}", bookmarks.len(), path.display());
    Ok(bookmarks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::NewBookmark;
    use crate::parsers::json::parse_bookmark_list;

    #[test]
    fn test_export_can_be_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let bookmarks = vec![
            NewBookmark::new("New", "n.com")
                .with_tags(["mine"])
                .into_bookmark()
                .unwrap(),
        ];

        assert_eq!(export_to_file(&bookmarks, &path).unwrap(), 1);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"isUserAdded\": true"));
        assert_eq!(parse_bookmark_list(&written).unwrap(), bookmarks);
    }

    #[test]
    fn test_empty_export_is_an_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.json");
        let err = export_to_file(&[], &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
