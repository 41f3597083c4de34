//! Turns failed calls into the store actions that surface them.
//!
//! Both functions are pure; the orchestrator dispatches the returned actions in order.

use todosync_client::{Envelope, ResultCode};
use todosync_core::{AppAction, RequestStatus};
use tracing::warn;

pub const FALLBACK_ERROR_MESSAGE: &str = "Some error occurred";
pub const CAPTCHA_ERROR_MESSAGE: &str = "Captcha verification required";

/// The call produced no envelope: mark failed, then show the error's description.
pub fn network_failure<E>(error: &E) -> [AppAction; 2]
where
    E: std::fmt::Display + ?Sized,
{
    [
        AppAction::SetStatus(RequestStatus::Failed),
        AppAction::SetError(Some(error.to_string())),
    ]
}

/// The server answered with a non-zero result code: show its first message (or a
/// fallback), then mark failed.
pub fn application_failure<T>(envelope: &Envelope<T>) -> [AppAction; 2] {
    if envelope.result_code == ResultCode::CaptchaRequired {
        warn!(
            code = envelope.result_code.code(),
            "server requires captcha verification"
        );
    }
    [
        AppAction::SetError(Some(rejection_message(envelope))),
        AppAction::SetStatus(RequestStatus::Failed),
    ]
}

/// Message shown for a rejected envelope.
pub fn rejection_message<T>(envelope: &Envelope<T>) -> String {
    match envelope.first_message() {
        Some(message) => message.to_string(),
        None if envelope.result_code == ResultCode::CaptchaRequired => {
            CAPTCHA_ERROR_MESSAGE.to_string()
        }
        None => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}
