use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pins::PinSet;

/// A single link, either from the master list or added by the user.
///
/// The `url` is used as the identity of a bookmark, though nothing enforces
/// that two bookmarks never share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Display title
    pub title: String,

    /// Target URL, also the identity key
    pub url: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Ordered tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Pinned by the master list; cannot be unpinned locally
    #[serde(default, skip_serializing_if = "is_false")]
    pub pinned: bool,

    /// Set for entries created through the add command
    #[serde(default, rename = "isUserAdded", skip_serializing_if = "is_false")]
    pub is_user_added: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Bookmark {
    /// Create a master-list style bookmark with only a title and url
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: String::new(),
            tags: Vec::new(),
            pinned: false,
            is_user_added: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// A bookmark is pinned if the master list says so or the user pinned its url
    pub fn is_pinned(&self, pins: &PinSet) -> bool {
        self.pinned || pins.contains(&self.url)
    }
}

/// A candidate record submitted through the add command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl NewBookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Trim all fields and make sure the required ones are present.
    ///
    /// Duplicate urls are accepted.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let title = self.title.trim().to_string();
        let url = self.url.trim().to_string();

        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let tags = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            title,
            url,
            description,
            tags,
        })
    }

    /// Validate the candidate and turn it into a user-added bookmark
    pub fn into_bookmark(self) -> Result<Bookmark, ValidationError> {
        let candidate = self.validate()?;
        Ok(Bookmark {
            title: candidate.title,
            url: candidate.url,
            description: candidate.description.unwrap_or_default(),
            tags: candidate.tags,
            pinned: false,
            is_user_added: true,
        })
    }
}

impl From<Bookmark> for NewBookmark {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            title: bookmark.title,
            url: bookmark.url,
            description: Some(bookmark.description).filter(|d| !d.is_empty()),
            tags: bookmark.tags,
        }
    }
}
