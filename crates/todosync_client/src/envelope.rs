//! Response envelope of mutating calls.
//!
//! Every create/update/delete/reorder answers `{ resultCode, messages, data }`. A
//! non-zero result code is an application-level rejection: the HTTP call itself
//! succeeded, the server just refused the operation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ResultCode {
    Success,
    Error,
    /// Too many failed attempts; the server wants a captcha solved first.
    CaptchaRequired,
    Other(i32),
}

impl ResultCode {
    pub fn code(&self) -> i32 {
        i32::from(*self)
    }

    pub fn is_success(&self) -> bool {
        *self == ResultCode::Success
    }
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        match code {
            0 => ResultCode::Success,
            1 => ResultCode::Error,
            10 => ResultCode::CaptchaRequired,
            other => ResultCode::Other(other),
        }
    }
}

impl From<ResultCode> for i32 {
    fn from(code: ResultCode) -> Self {
        match code {
            ResultCode::Success => 0,
            ResultCode::Error => 1,
            ResultCode::CaptchaRequired => 10,
            ResultCode::Other(other) => other,
        }
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Placeholder payload for calls whose `data` is `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// `data` shape of create calls: `{ "item": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<T> {
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T = Empty> {
    pub result_code: ResultCode,
    #[serde(default)]
    pub messages: Vec<String>,
    /// `None` when the server sent `null`, `{}` or nothing at all. Rejections usually
    /// carry `{}` even where a successful call would hold a payload.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub data: Option<T>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            result_code: ResultCode::Success,
            messages: Vec::new(),
            data: Some(data),
        }
    }

    /// Rejection with the given code and messages.
    pub fn rejected(code: impl Into<ResultCode>, messages: Vec<String>) -> Self {
        Self {
            result_code: code.into(),
            messages,
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result_code.is_success()
    }

    /// First non-empty message, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .map(String::as_str)
            .find(|message| !message.trim().is_empty())
    }
}

impl Envelope<Empty> {
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

impl<T> Envelope<Payload<T>> {
    /// Created entity of a successful create call.
    pub fn into_item(self) -> Option<T> {
        self.data.map(|payload| payload.item)
    }
}
