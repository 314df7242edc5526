use serde_json::Value;

use crate::bookmark::Bookmark;

/// Parses a JSON bookmark list.
///
/// Anything that is valid JSON but not an array yields an empty list, and
/// array entries that are not bookmarks are skipped.
pub fn parse_bookmark_list(json: &str) -> Result<Vec<Bookmark>, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Array(entries) = value else {
        ::log::warn!("Bookmark list is not a JSON array, treating it as empty");
        return Ok(Vec::new());
    };

    let total = entries.len();
    let bookmarks: Vec<Bookmark> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(bookmark) => Some(bookmark),
            Err(e) => {
                ::log::warn!("Skipping bookmark #{}: {}", index, e);
                None
            }
        })
        .collect();

    ::log::debug!("Parsed {} of {} bookmark entries", bookmarks.len(), total);
    Ok(bookmarks)
}
