use std::path::PathBuf;

use crate::bookmark::{Bookmark, NewBookmark};
use crate::error::ValidationError;
use crate::filter::{ViewState, reconcile};
use crate::pins::PinSet;

/// Request to flip the local pin state of a url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub url: String,
}

/// Request to add a user bookmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest(pub NewBookmark);

/// Request to write the user-added list to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub path: PathBuf,
}

/// Everything the presentation surface can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    QueryChanged(String),
    TogglePin(ToggleRequest),
    Add(AddRequest),
    Export(ExportRequest),
    Clear,
}

/// All in-memory application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Read-only list from the master source
    pub master: Vec<Bookmark>,
    /// Entries the user added, persisted locally
    pub user_added: Vec<Bookmark>,
    /// Locally pinned urls
    pub pins: PinSet,
    /// Current search query
    pub query: String,
    /// Set when the master list could not be loaded
    pub degraded: bool,
}

impl AppState {
    pub fn new(master: Vec<Bookmark>, user_added: Vec<Bookmark>, pins: PinSet) -> Self {
        Self {
            master,
            user_added,
            pins,
            query: String::new(),
            degraded: false,
        }
    }

    /// State built from local data only, after the master list failed to load
    pub fn degraded(user_added: Vec<Bookmark>, pins: PinSet) -> Self {
        Self {
            degraded: true,
            ..Self::new(Vec::new(), user_added, pins)
        }
    }

    /// Master entries followed by user entries
    pub fn working_set(&self) -> impl Iterator<Item = &Bookmark> {
        self.master.iter().chain(self.user_added.iter())
    }

    pub fn working_set_len(&self) -> usize {
        self.master.len() + self.user_added.len()
    }

    /// Derive what should be displayed for the current query
    pub fn view(&self) -> ViewState {
        reconcile(self.working_set(), &self.pins, &self.query)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Flip the pin for `url`, returning whether it is now pinned
    pub fn toggle_pin(&mut self, url: &str) -> bool {
        self.pins.toggle(url)
    }

    /// Append a validated user bookmark and return it
    pub fn add_bookmark(&mut self, candidate: NewBookmark) -> Result<&Bookmark, ValidationError> {
        let bookmark = candidate.into_bookmark()?;
        self.user_added.push(bookmark);
        Ok(&self.user_added[self.user_added.len() - 1])
    }

    /// Forget all local data; the master list stays
    pub fn reset_local(&mut self) {
        self.user_added.clear();
        self.pins = PinSet::default();
        self.query.clear();
    }
}
