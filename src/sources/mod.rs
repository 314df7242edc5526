pub mod file;
pub mod http;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::bookmark::Bookmark;
use crate::error::FetchError;

/// Where the read-only master bookmark list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterSource {
    /// A local JSON file
    File(PathBuf),
    /// A JSON document served over HTTP(S)
    Http(Url),
}

impl MasterSource {
    /// Classify a location: `http`/`https` URLs are fetched, anything else is a path
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => MasterSource::Http(url),
            _ => MasterSource::File(PathBuf::from(location)),
        }
    }

    /// Fetch and parse the master list
    pub async fn fetch(&self, timeout: Duration) -> Result<Vec<Bookmark>, FetchError> {
        ::log::info!("Fetching master bookmarks from {}", self);
        let bookmarks = match self {
            MasterSource::File(path) => file::fetch(path).await?,
            MasterSource::Http(url) => http::fetch(url, timeout).await?,
        };
        ::log::info!("Loaded {} master bookmarks", bookmarks.len());
        Ok(bookmarks)
    }
}

impl fmt::Display for MasterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterSource::File(path) => write!(f, "{}", path.display()),
            MasterSource::Http(url) => write!(f, "{}", url),
        }
    }
}
