//! User-management actions.
//!
//! Bulk actions take the ids selected in the console table. Unknown ids
//! are reported back rather than failing the whole batch.

use std::collections::HashSet;

use serde::Serialize;

use crate::logging::structured::LogContext;
use crate::pipeline::collection::Collection;
use crate::records::user::{User, UserStatus};

/// Action applied to a selection of users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UserAction {
    Activate,
    Suspend,
    Delete,
}

impl UserAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Activate => "activate",
            UserAction::Suspend => "suspend",
            UserAction::Delete => "delete",
        }
    }

    /// Status the action leaves a user in. `None` for deletion.
    pub fn target_status(&self) -> Option<UserStatus> {
        match self {
            UserAction::Activate => Some(UserStatus::Active),
            UserAction::Suspend => Some(UserStatus::Suspended),
            UserAction::Delete => None,
        }
    }
}

/// Outcome of a bulk action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkActionReport {
    pub action: UserAction,
    /// Ids the action was applied to, in selection order.
    pub affected: Vec<String>,
    /// Selected ids with no matching user.
    pub missing: Vec<String>,
}

impl BulkActionReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Apply `action` to every selected user. Duplicate ids count once.
pub fn apply_user_action<I, S>(
    users: &mut Collection<User>,
    selection: I,
    action: UserAction,
    ctx: &LogContext,
) -> BulkActionReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut report = BulkActionReport {
        action,
        affected: Vec::new(),
        missing: Vec::new(),
    };

    for id in selection {
        let id = id.as_ref();
        if !seen.insert(id.to_string()) {
            continue;
        }
        let applied = match action.target_status() {
            Some(status) => set_user_status(users, id, status),
            None => users.remove(id).is_some(),
        };
        if applied {
            report.affected.push(id.to_string());
        } else {
            report.missing.push(id.to_string());
        }
    }

    if report.is_complete() {
        crate::log_info!(
            ctx,
            "USER_BULK_ACTION",
            action = action.as_str(),
            affected = report.affected.len()
        );
    } else {
        crate::log_warn!(
            ctx,
            "USER_BULK_ACTION",
            action = action.as_str(),
            affected = report.affected.len(),
            missing = report.missing
        );
    }
    report
}

/// Overwrite one user's status. Returns false for an unknown id.
pub fn set_user_status(users: &mut Collection<User>, id: &str, status: UserStatus) -> bool {
    match users.get_mut(id) {
        Some(user) => {
            user.status = status;
            true
        }
        None => false,
    }
}
