//! Pipeline context management.
//!
//! Provides view and screen context for logging and state tracking.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for one page view.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub view_id: String,
    pub opened_at: DateTime<Utc>,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewContext {
    pub fn new() -> Self {
        Self {
            view_id: format!("view-{}", &Uuid::new_v4().simple().to_string()[..8]),
            opened_at: Utc::now(),
        }
    }

    /// Create a screen context for this view.
    pub fn screen(&self, screen: &str) -> ScreenContext {
        ScreenContext {
            view_id: self.view_id.clone(),
            screen: screen.to_string(),
        }
    }
}

/// Context for a single screen within a view.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub view_id: String,
    pub screen: String,
}

impl ScreenContext {
    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.view_id).with_screen(&self.screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_ids_are_short_and_distinct() {
        let a = ViewContext::new();
        let b = ViewContext::new();
        assert_eq!(a.view_id.len(), "view-".len() + 8);
        assert_ne!(a.view_id, b.view_id);
    }

    #[test]
    fn test_screen_log_context() {
        let view = ViewContext::new();
        let ctx = view.screen("users").log_context();
        assert_eq!(
            ctx.to_string(),
            format!("[view={}] [screen=users]", view.view_id)
        );
    }
}
