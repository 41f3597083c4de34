//! Request lifecycle status, tracked globally and per entity.

use serde::{Deserialize, Serialize};

use crate::action::AppAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Global status slot: the phase of the most recently settled operation and the last
/// error message shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatus {
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl AppStatus {
    pub(crate) fn reduce(&mut self, action: AppAction) {
        match action {
            AppAction::SetStatus(status) => self.status = status,
            AppAction::SetError(error) => self.error = error,
        }
    }
}
