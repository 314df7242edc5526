use crate::bookmark::Bookmark;
use crate::pins::PinSet;

/// Case-insensitive substring filter over title, description and tags
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    needle: String,
}

impl QueryFilter {
    /// Create a filter for a raw query string
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether this filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Determine if a bookmark matches the query
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        if self.is_empty() {
            return true;
        }

        if bookmark.title.to_lowercase().contains(&self.needle) {
            return true;
        }

        if bookmark.description.to_lowercase().contains(&self.needle) {
            return true;
        }

        bookmark
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}

/// What the presentation surface displays: pinned matches first, then the rest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub pinned: Vec<Bookmark>,
    pub unpinned: Vec<Bookmark>,
}

impl ViewState {
    /// No bookmark matched; callers show a "no results" message
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.unpinned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pinned.len() + self.unpinned.len()
    }
}

/// Filter the working set by `query` and split the matches by pin state.
///
/// Both output lists keep the working-set order.
pub fn reconcile<'a, I>(working_set: I, pins: &PinSet, query: &str) -> ViewState
where
    I: IntoIterator<Item = &'a Bookmark>,
{
    let filter = QueryFilter::new(query);
    let mut view = ViewState::default();

    for bookmark in working_set {
        if !filter.matches(bookmark) {
            continue;
        }
        if bookmark.is_pinned(pins) {
            view.pinned.push(bookmark.clone());
        } else {
            view.unpinned.push(bookmark.clone());
        }
    }

    ::log::debug!(
        "Query {:?} matched {} pinned and {} unpinned bookmarks",
        query,
        view.pinned.len(),
        view.unpinned.len()
    );

    view
}
