use crate::bookmark::Bookmark;
use crate::error::{CommandError, FetchError, PersistenceError};
use crate::export;
use crate::filter::ViewState;
use crate::pins::PinSet;
use crate::state::{AddRequest, AppState, Command, ExportRequest, ToggleRequest};
use crate::storage::{KeyValueStore, LocalStorage, PINNED_KEY, USER_BOOKMARKS_KEY};

/// Notice shown when only locally saved bookmarks are available
pub const DEGRADED_NOTICE: &str = "Failed to load bookmarks. Showing your saved links only.";

/// Application state bound to its local storage.
///
/// Commands are handled one at a time and each runs to completion, persisting
/// any change before the next one is looked at.
#[derive(Debug)]
pub struct Session<S> {
    state: AppState,
    storage: LocalStorage<S>,
    notices: Vec<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Build a session from the outcome of the master fetch and the local slots
    pub fn load(master: Result<Vec<Bookmark>, FetchError>, storage: LocalStorage<S>) -> Self {
        let user_added: Vec<Bookmark> = storage.get_or_default(USER_BOOKMARKS_KEY, Vec::new());
        let pins: PinSet = storage.get_or_default(PINNED_KEY, PinSet::default());
        ::log::debug!(
            "Loaded {} user bookmarks and {} pins from local storage",
            user_added.len(),
            pins.len()
        );

        let mut notices = Vec::new();
        let state = match master {
            Ok(master) => AppState::new(master, user_added, pins),
            Err(e) => {
                ::log::warn!("Error fetching bookmarks: {}", e);
                notices.push(DEGRADED_NOTICE.to_string());
                AppState::degraded(user_added, pins)
            }
        };

        Self {
            state,
            storage,
            notices,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &LocalStorage<S> {
        &self.storage
    }

    /// Current view for the current query
    pub fn view(&self) -> ViewState {
        self.state.view()
    }

    /// Messages the presentation surface should show
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Return pending messages, keeping the degraded notice in place
    pub fn take_notices(&mut self) -> Vec<String> {
        let notices = std::mem::take(&mut self.notices);
        if self.state.degraded {
            self.notices.push(DEGRADED_NOTICE.to_string());
        }
        notices
    }

    /// Handle one command and return the view it leads to
    pub fn handle(&mut self, command: Command) -> Result<ViewState, CommandError> {
        match command {
            Command::QueryChanged(query) => {
                self.state.set_query(query);
            }
            Command::TogglePin(ToggleRequest { url }) => {
                let pinned = self.state.toggle_pin(&url);
                ::log::info!("{} {}", if pinned { "Pinned" } else { "Unpinned" }, url);
                self.persist_pins();
            }
            Command::Add(AddRequest(candidate)) => {
                let added = self.state.add_bookmark(candidate)?;
                ::log::info!("Added bookmark {} ({})", added.title, added.url);
                self.persist_user_added();
            }
            Command::Export(ExportRequest { path }) => {
                let count = export::export_to_file(&self.state.user_added, &path)?;
                self.notices
                    .push(format!("Exported {} bookmarks to {}", count, path.display()));
            }
            Command::Clear => {
                self.state.reset_local();
                if let Err(e) = self.storage.clear() {
                    self.persistence_failed("clear local data", e);
                } else {
                    ::log::info!("Cleared local bookmarks and pins");
                }
            }
        }

        Ok(self.state.view())
    }

    fn persist_pins(&mut self) {
        if let Err(e) = self.storage.set(PINNED_KEY, &self.state.pins) {
            self.persistence_failed("save pins", e);
        }
    }

    fn persist_user_added(&mut self) {
        if let Err(e) = self.storage.set(USER_BOOKMARKS_KEY, &self.state.user_added) {
            self.persistence_failed("save bookmarks", e);
        }
    }

    fn persistence_failed(&mut self, action: &str, error: PersistenceError) {
        ::log::error!("Could not {}: {}", action, error);
        self.notices
            .push(format!("Could not {}; changes last until exit only.", action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::NewBookmark;
    use crate::error::ValidationError;
    use crate::storage::MemoryStore;
    use std::path::PathBuf;

    /// Store whose writes always fail
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Ok(None)
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io {
                path: PathBuf::from(key),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
            self.write(key, "")
        }
    }

    fn master() -> Vec<Bookmark> {
        vec![
            Bookmark::new("Alpha", "a.com"),
            Bookmark::new("Beta", "b.com").with_pinned(true),
        ]
    }

    fn session() -> Session<MemoryStore> {
        Session::load(Ok(master()), LocalStorage::new(MemoryStore::new()))
    }

    fn titles(list: &[Bookmark]) -> Vec<&str> {
        list.iter().map(|b| b.title.as_str()).collect()
    }

    fn stored_user_bookmarks<S: KeyValueStore>(session: &Session<S>) -> Vec<Bookmark> {
        session.storage().get_or_default(USER_BOOKMARKS_KEY, Vec::new())
    }

    #[test]
    fn test_initial_view() {
        let session = session();
        let view = session.view();
        assert_eq!(titles(&view.pinned), vec!["Beta"]);
        assert_eq!(titles(&view.unpinned), vec!["Alpha"]);
        assert!(session.notices().is_empty());
    }

    #[test]
    fn test_toggle_persists_and_reconciles() {
        let mut session = session();
        let view = session
            .handle(Command::TogglePin(ToggleRequest { url: "a.com".into() }))
            .unwrap();
        assert_eq!(titles(&view.pinned), vec!["Alpha", "Beta"]);
        assert!(view.unpinned.is_empty());

        let stored: PinSet = session.storage().get_or_default(PINNED_KEY, PinSet::default());
        assert!(stored.contains("a.com"));

        let view = session
            .handle(Command::TogglePin(ToggleRequest { url: "a.com".into() }))
            .unwrap();
        assert_eq!(titles(&view.unpinned), vec!["Alpha"]);
    }

    #[test]
    fn test_add_grows_working_set_and_slot() {
        let mut session = session();
        let view = session
            .handle(Command::Add(AddRequest(NewBookmark::new("New", "n.com"))))
            .unwrap();

        assert_eq!(session.state().working_set_len(), 3);
        assert_eq!(stored_user_bookmarks(&session).len(), 1);
        assert_eq!(titles(&view.unpinned), vec!["Alpha", "New"]);
        assert_eq!(titles(&view.pinned), vec!["Beta"]);
    }

    #[test]
    fn test_invalid_add_is_rejected() {
        let mut session = session();
        let err = session
            .handle(Command::Add(AddRequest(NewBookmark::new("New", "  "))))
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::MissingUrl)
        ));
        assert!(stored_user_bookmarks(&session).is_empty());
    }

    #[test]
    fn test_query_and_no_results() {
        let mut session = session();
        let view = session.handle(Command::QueryChanged("zzz".into())).unwrap();
        assert!(view.is_empty());

        let view = session.handle(Command::QueryChanged("ALP".into())).unwrap();
        assert_eq!(titles(&view.unpinned), vec!["Alpha"]);
        assert!(view.pinned.is_empty());
    }

    #[test]
    fn test_saved_data_survives_reload() {
        let mut session = session();
        session
            .handle(Command::Add(AddRequest(NewBookmark::new("New", "n.com"))))
            .unwrap();
        session
            .handle(Command::TogglePin(ToggleRequest { url: "n.com".into() }))
            .unwrap();

        let storage = LocalStorage::new(session.storage().store().clone());
        let reloaded = Session::load(Ok(master()), storage);
        assert_eq!(titles(&reloaded.view().pinned), vec!["Beta", "New"]);
    }

    #[test]
    fn test_degraded_mode_uses_local_data() {
        let mut store = MemoryStore::new();
        store
            .write(
                USER_BOOKMARKS_KEY,
                r#"[{"title":"Mine","url":"m.com","isUserAdded":true}]"#,
            )
            .unwrap();

        let failure = FetchError::Status {
            url: "https://example.com/bookmarks.json".into(),
            status: 500,
        };
        let mut session = Session::load(Err(failure), LocalStorage::new(store));

        assert!(session.state().degraded);
        assert_eq!(session.notices(), &[DEGRADED_NOTICE.to_string()]);
        assert_eq!(titles(&session.view().unpinned), vec!["Mine"]);

        // The degraded notice stays visible after being taken
        assert_eq!(session.take_notices().len(), 1);
        assert_eq!(session.notices().len(), 1);
    }

    #[test]
    fn test_clear_erases_local_data() {
        let mut session = session();
        session
            .handle(Command::Add(AddRequest(NewBookmark::new("New", "n.com"))))
            .unwrap();
        session
            .handle(Command::TogglePin(ToggleRequest { url: "a.com".into() }))
            .unwrap();
        session.handle(Command::QueryChanged("new".into())).unwrap();

        let view = session.handle(Command::Clear).unwrap();
        assert_eq!(titles(&view.pinned), vec!["Beta"]);
        assert_eq!(titles(&view.unpinned), vec!["Alpha"]);
        assert!(stored_user_bookmarks(&session).is_empty());
        assert!(session.storage().store().read(PINNED_KEY).unwrap().is_none());
    }

    #[test]
    fn test_export_writes_user_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut session = session();
        session
            .handle(Command::Add(AddRequest(NewBookmark::new("New", "n.com"))))
            .unwrap();

        session
            .handle(Command::Export(ExportRequest { path: path.clone() }))
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let exported: Vec<Bookmark> = serde_json::from_str(&written).unwrap();
        assert_eq!(titles(&exported), vec!["New"]);
        assert_eq!(session.take_notices().len(), 1);
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session();
        let err = session
            .handle(Command::Export(ExportRequest {
                path: dir.path().join("nope").join("out.json"),
            }))
            .unwrap_err();
        assert!(matches!(err, CommandError::Export(_)));
    }

    #[test]
    fn test_persistence_failure_is_not_fatal() {
        let mut session = Session::load(Ok(master()), LocalStorage::new(ReadOnlyStore));
        let view = session
            .handle(Command::Add(AddRequest(NewBookmark::new("New", "n.com"))))
            .unwrap();
        assert_eq!(titles(&view.unpinned), vec!["Alpha", "New"]);
        assert_eq!(session.notices().len(), 1);

        session
            .handle(Command::TogglePin(ToggleRequest { url: "a.com".into() }))
            .unwrap();
        let view = session.handle(Command::Clear).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(session.notices().len(), 3);
    }
}
