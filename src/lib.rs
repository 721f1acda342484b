//! Trekview Core - listing queries and draft persistence
//!
//! This crate provides the screen logic behind the Trekview trek-discovery
//! app. Every screen works on an in-memory collection; nothing here talks
//! to a server. The implementation prioritizes:
//!
//! 1. **Predictability** - Filters, sorts and pages are pure functions of their inputs
//! 2. **Logging** - Every screen event logged with its view context
//! 3. **Resilience** - A broken or missing draft never blocks the form
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `records` - Trek, story and user records with typed field access
//! - `query` - Filter, sort and page stages
//! - `pipeline` - Listing screens that run the query stages over a collection
//! - `draft` - Storage port, draft save/restore and debounced autosave
//! - `wizard` - Multi-step add-trek form with validation and publishing
//! - `actions` - Local user and story moderation actions
//! - `viewer` - Itinerary day viewer for the trek detail screen
//! - `config` - Runtime settings
//! - `logging` - Structured logging with view context

use std::sync::Arc;

pub mod actions;
pub mod config;
pub mod draft;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod query;
pub mod records;
pub mod viewer;
pub mod wizard;

use crate::config::Settings;
use crate::draft::persistence::DraftStore;
use crate::draft::storage::{FileStorage, MemoryStorage, StoragePort};
use crate::error::{DraftError, StorageError};
use crate::pipeline::context::ScreenContext;
use crate::wizard::wizard::TrekWizard;

/// Initialize the process-wide logger. Safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}

/// Storage backend selected by the settings.
///
/// A configured `draft_dir` gives file-backed drafts that survive a
/// restart; otherwise drafts live only as long as the process.
pub fn open_storage(settings: &Settings) -> Result<Arc<dyn StoragePort>, StorageError> {
    match &settings.draft_dir {
        Some(dir) => Ok(Arc::new(FileStorage::open(dir)?)),
        None => Ok(Arc::new(MemoryStorage::new())),
    }
}

/// Mount the add-trek screen over `storage`.
pub fn mount_add_trek(
    settings: &Settings,
    storage: Arc<dyn StoragePort>,
    screen: &ScreenContext,
) -> Result<TrekWizard, DraftError> {
    let store = Arc::new(DraftStore::new(
        storage,
        &settings.draft_key,
        &screen.log_context(),
    ));
    TrekWizard::mount(store, settings.draft_debounce, screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::ViewContext;

    #[test]
    fn test_init_logger_is_idempotent() {
        init_logger();
        init_logger();
    }

    #[test]
    fn test_file_backed_draft_survives_remount() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            draft_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        let screen = ViewContext::new().screen("add-trek");

        {
            let storage = open_storage(&settings).unwrap();
            let mut wizard = mount_add_trek(&settings, storage, &screen).unwrap();
            wizard.edit(|draft| draft.basics.region = "Dolpo".to_string());
            wizard.save_now();
        }

        let storage = open_storage(&settings).unwrap();
        let wizard = mount_add_trek(&settings, storage, &screen).unwrap();
        assert_eq!(wizard.draft().basics.region, "Dolpo");
    }
}
