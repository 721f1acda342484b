//! Structured logging utilities.
//!
//! Provides context-aware logging with view_id and screen included
//! in every log message.

use std::fmt;

/// Logging context for one page view.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub view_id: String,
    pub screen: Option<String>,
}

impl LogContext {
    pub fn new(view_id: &str) -> Self {
        Self {
            view_id: view_id.to_string(),
            screen: None,
        }
    }

    pub fn with_screen(&self, screen: &str) -> Self {
        Self {
            view_id: self.view_id.clone(),
            screen: Some(screen.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.screen {
            Some(screen) => write!(f, "[view={}] [screen={}]", self.view_id, screen),
            None => write!(f, "[view={}]", self.view_id),
        }
    }
}

/// Log `event` at `level`, prefixed by the context and followed by
/// `key=value` pairs.
#[macro_export]
macro_rules! log_event {
    ($level:expr, $ctx:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        log::log!(
            $level,
            "{} {} {}",
            $ctx,
            $event,
            format_args!(concat!($(stringify!($key), "={:?} "),*) $(, $value)*)
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($($args:tt)+) => { $crate::log_event!(log::Level::Info, $($args)+) };
}

#[macro_export]
macro_rules! log_warn {
    ($($args:tt)+) => { $crate::log_event!(log::Level::Warn, $($args)+) };
}

#[macro_export]
macro_rules! log_error {
    ($($args:tt)+) => { $crate::log_event!(log::Level::Error, $($args)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($($args:tt)+) => { $crate::log_event!(log::Level::Debug, $($args)+) };
}
