pub mod bookmark;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod parsers;
pub mod pins;
pub mod render;
pub mod session;
pub mod shell;
pub mod sources;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use bookmark::{Bookmark, NewBookmark};
pub use config::AppConfig;
pub use filter::{ViewState, reconcile};
pub use pins::PinSet;
pub use session::Session;
pub use state::{AddRequest, AppState, Command, ExportRequest, ToggleRequest};
pub use storage::{FileStore, KeyValueStore, LocalStorage, MemoryStore};

use std::path::PathBuf;

/// Builder that loads the master list and local data into a [`Session`]
pub struct QuickLinks {
    config: AppConfig,
}

impl QuickLinks {
    /// Create a builder from a configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, error::ConfigError> {
        let config = AppConfig::from_file(path)?;
        Ok(Self { config })
    }

    /// Override the master list location
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.config.master_source = source.into();
        self
    }

    /// Override the local data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetch the master list once and open local storage.
    ///
    /// A failed fetch does not fail the session; it starts in degraded mode.
    pub async fn open(&self) -> Session<FileStore> {
        let master = self
            .config
            .master_source()
            .fetch(self.config.fetch_timeout())
            .await;
        let storage = LocalStorage::new(FileStore::new(&self.config.data_dir));
        Session::load(master, storage)
    }
}

impl Default for QuickLinks {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
