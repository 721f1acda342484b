//! Draft save/restore.
//!
//! A draft is the whole form state serialized as JSON under one fixed key.
//! Reads fall back to the default state on any problem; writes are
//! fire-and-forget and never disturb the in-memory form.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::DraftError;
use crate::logging::structured::LogContext;

use super::storage::StoragePort;

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    /// Payload identical to the last one written; storage untouched.
    Unchanged,
    /// Write failed and was swallowed.
    Failed,
}

/// SHA256 hex digest of a serialized draft.
pub fn fingerprint(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct DraftStore {
    storage: Arc<dyn StoragePort>,
    key: String,
    last_written: Mutex<Option<String>>,
    ctx: LogContext,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("key", &self.key)
            .field("last_written", &*self.last_written.lock())
            .finish()
    }
}

impl DraftStore {
    pub fn new(storage: Arc<dyn StoragePort>, key: &str, ctx: &LogContext) -> Self {
        Self {
            storage,
            key: key.to_string(),
            last_written: Mutex::new(None),
            ctx: ctx.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored draft.
    ///
    /// Missing, unreadable or unparseable drafts yield `T::default()`.
    pub fn restore<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("{} DRAFT_RESTORE found=false key={}", self.ctx, self.key);
                return T::default();
            }
            Err(e) => {
                log::warn!("{} DRAFT_READ_FAILED key={} error={}", self.ctx, self.key, e);
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                *self.last_written.lock() = Some(fingerprint(&raw));
                log::info!(
                    "{} DRAFT_RESTORE found=true key={} bytes={}",
                    self.ctx,
                    self.key,
                    raw.len()
                );
                value
            }
            Err(e) => {
                log::warn!(
                    "{} DRAFT_CORRUPT key={} bytes={} error={}",
                    self.ctx,
                    self.key,
                    raw.len(),
                    e
                );
                T::default()
            }
        }
    }

    /// Serialize and write `state`, reporting failures to the caller.
    pub fn try_save<T: Serialize>(&self, state: &T) -> Result<SaveOutcome, DraftError> {
        let payload = serde_json::to_string(state)?;
        let digest = fingerprint(&payload);

        let mut last = self.last_written.lock();
        if last.as_deref() == Some(digest.as_str())
            && self.stored_digest().as_deref() == Some(digest.as_str())
        {
            log::debug!("{} DRAFT_SAVE_SKIPPED reason=unchanged", self.ctx);
            return Ok(SaveOutcome::Unchanged);
        }

        self.storage.set(&self.key, &payload)?;
        *last = Some(digest);
        log::debug!(
            "{} DRAFT_SAVED key={} bytes={}",
            self.ctx,
            self.key,
            payload.len()
        );
        Ok(SaveOutcome::Written)
    }

    /// Digest of what storage holds now. Another writer may have replaced
    /// our last payload under the same key.
    fn stored_digest(&self) -> Option<String> {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => Some(fingerprint(&raw)),
            _ => None,
        }
    }

    /// Fire-and-forget save. Failures are logged, never propagated.
    pub fn save<T: Serialize>(&self, state: &T) -> SaveOutcome {
        match self.try_save(state) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{} DRAFT_SAVE_FAILED key={} error={}", self.ctx, self.key, e);
                SaveOutcome::Failed
            }
        }
    }

    /// Delete the stored draft. Returns false if storage refused.
    pub fn discard(&self) -> bool {
        let mut last = self.last_written.lock();
        match self.storage.remove(&self.key) {
            Ok(()) => {
                *last = None;
                log::info!("{} DRAFT_DISCARDED key={}", self.ctx, self.key);
                true
            }
            Err(e) => {
                log::warn!("{} DRAFT_DISCARD_FAILED key={} error={}", self.ctx, self.key, e);
                false
            }
        }
    }
}
