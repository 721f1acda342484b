//! Runtime settings.
//!
//! Defaults match the app's observed behaviour; each value can be
//! overridden through a `TREKVIEW_*` environment variable.

use std::path::PathBuf;
use std::time::Duration;

use ::config::{Config, Environment};
use serde::Deserialize;

use crate::draft::storage::is_valid_key;

const ENV_PREFIX: &str = "TREKVIEW";

/// Listing page size used by every screen.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Quiet period before an edited draft is written.
pub const DEFAULT_DRAFT_DEBOUNCE_MS: u64 = 2_000;

/// Storage key of the add-trek draft.
pub const DEFAULT_DRAFT_KEY: &str = "trek-draft";

/// Reports after which a story is hidden from the feed.
pub const DEFAULT_REPORT_HIDE_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub page_size: usize,
    pub draft_debounce: Duration,
    pub draft_key: String,
    /// Directory for file-backed drafts; `None` keeps drafts in memory.
    pub draft_dir: Option<PathBuf>,
    pub report_hide_threshold: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            draft_debounce: Duration::from_millis(DEFAULT_DRAFT_DEBOUNCE_MS),
            draft_key: DEFAULT_DRAFT_KEY.to_string(),
            draft_dir: None,
            report_hide_threshold: DEFAULT_REPORT_HIDE_THRESHOLD,
        }
    }
}

/// Raw `TREKVIEW_*` values before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    page_size: Option<usize>,
    draft_debounce_ms: Option<u64>,
    draft_key: Option<String>,
    draft_dir: Option<PathBuf>,
    report_hide_threshold: Option<u32>,
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self::load(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Build settings from explicit `TREKVIEW_*` variables instead of the
    /// process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<::config::Map<String, String>>();
        Self::load(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(source)),
        )
    }

    fn load(environment: Environment) -> Self {
        let raw = Config::builder()
            .add_source(environment)
            .build()
            .and_then(|built| built.try_deserialize::<RawSettings>());

        let settings = match raw {
            Ok(raw) => Self::from_raw(raw),
            Err(e) => {
                log::warn!("CONFIG_IGNORED source=env reason=invalid error={}", e);
                Self::default()
            }
        };

        log::debug!(
            "CONFIG_LOADED page_size={} debounce_ms={} draft_key={} draft_dir={:?} hide_threshold={}",
            settings.page_size,
            settings.draft_debounce.as_millis(),
            settings.draft_key,
            settings.draft_dir,
            settings.report_hide_threshold
        );
        settings
    }

    /// Apply the values that pass validation over the defaults.
    fn from_raw(raw: RawSettings) -> Self {
        let mut settings = Self::default();

        match raw.page_size {
            Some(0) => log::warn!("CONFIG_IGNORED var=TREKVIEW_PAGE_SIZE reason=zero"),
            Some(size) => settings.page_size = size,
            None => {}
        }
        if let Some(ms) = raw.draft_debounce_ms {
            settings.draft_debounce = Duration::from_millis(ms);
        }
        if let Some(key) = raw.draft_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            if is_valid_key(key) {
                settings.draft_key = key.to_string();
            } else {
                log::warn!(
                    "CONFIG_IGNORED var=TREKVIEW_DRAFT_KEY value={:?} reason=invalid_key",
                    key
                );
            }
        }
        if let Some(dir) = raw.draft_dir.filter(|d| !d.as_os_str().is_empty()) {
            settings.draft_dir = Some(dir);
        }
        match raw.report_hide_threshold {
            Some(0) => {
                log::warn!("CONFIG_IGNORED var=TREKVIEW_REPORT_HIDE_THRESHOLD reason=zero")
            }
            Some(threshold) => settings.report_hide_threshold = threshold,
            None => {}
        }

        settings
    }
}
