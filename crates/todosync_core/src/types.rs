//! Lists and items as held by the store.
//!
//! Field names and encodings follow the remote API so the same types deserialize
//! straight from the wire. Local-only fields (`filter`, `entity_status`) are skipped by
//! serde: they are never sent and always come back at their defaults after a load.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::status::RequestStatus;

macro_rules! server_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

server_id!(
    /// Server-assigned list identifier. Never generated locally.
    ListId
);
server_id!(
    /// Server-assigned item identifier. Never generated locally.
    ItemId
);

/// Which items a list shows. Local view state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterValue::All => "all",
            FilterValue::Active => "active",
            FilterValue::Completed => "completed",
        }
    }

    /// Whether an item with the given status is visible under this filter.
    pub fn accepts(&self, status: ItemStatus) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Active => !status.is_complete(),
            FilterValue::Completed => status.is_complete(),
        }
    }
}

impl FromStr for FilterValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterValue::All),
            "active" => Ok(FilterValue::Active),
            "completed" => Ok(FilterValue::Completed),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Item workflow state, kept at the wire code so an update echoes it back unchanged.
/// On the wire: 0 = new, 1 = in progress, 2 = completed, 3 = draft. Only "completed"
/// counts as complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ItemStatus {
    #[default]
    Incomplete,
    InProgress,
    Complete,
    Draft,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Incomplete => "incomplete",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Complete => "complete",
            ItemStatus::Draft => "draft",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ItemStatus::Complete)
    }
}

impl TryFrom<u8> for ItemStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ItemStatus::Incomplete),
            1 => Ok(ItemStatus::InProgress),
            2 => Ok(ItemStatus::Complete),
            3 => Ok(ItemStatus::Draft),
            other => Err(format!("unknown item status code {}", other)),
        }
    }
}

impl From<ItemStatus> for u8 {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Incomplete => 0,
            ItemStatus::InProgress => 1,
            ItemStatus::Complete => 2,
            ItemStatus::Draft => 3,
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incomplete" | "new" | "open" => Ok(ItemStatus::Incomplete),
            "in_progress" | "in-progress" | "started" => Ok(ItemStatus::InProgress),
            "draft" => Ok(ItemStatus::Draft),
            "complete" | "completed" | "done" => Ok(ItemStatus::Complete),
            other => Err(format!("unknown item status '{}'", other)),
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Item priority, encoded 0..=4 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    Hi,
    Urgently,
    Later,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::Hi => "hi",
            Priority::Urgently => "urgently",
            Priority::Later => "later",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::Hi),
            3 => Ok(Priority::Urgently),
            4 => Ok(Priority::Later),
            other => Err(format!("unknown priority code {}", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::Hi => 2,
            Priority::Urgently => 3,
            Priority::Later => 4,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "middle" => Ok(Priority::Medium),
            "hi" | "high" => Ok(Priority::Hi),
            "urgently" | "urgent" => Ok(Priority::Urgently),
            "later" => Ok(Priority::Later),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub order: i64,
    #[serde(rename = "addedDate")]
    pub created_at: NaiveDateTime,
    #[serde(skip)]
    pub filter: FilterValue,
    #[serde(skip)]
    pub entity_status: RequestStatus,
}

impl TodoList {
    pub fn new(
        id: impl Into<ListId>,
        title: impl Into<String>,
        order: i64,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order,
            created_at,
            filter: FilterValue::All,
            entity_status: RequestStatus::Idle,
        }
    }

    /// Copy with local view state reset, as stored after a load or create.
    pub(crate) fn normalized(mut self) -> Self {
        self.filter = FilterValue::All;
        self.entity_status = RequestStatus::Idle;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "todoListId")]
    pub list_id: ListId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub order: i64,
    #[serde(rename = "addedDate")]
    pub created_at: NaiveDateTime,
    #[serde(skip)]
    pub entity_status: RequestStatus,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        list_id: impl Into<ListId>,
        title: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            title: title.into(),
            description: None,
            status: ItemStatus::Incomplete,
            priority: Priority::Low,
            start_date: None,
            deadline: None,
            order: 0,
            created_at,
            entity_status: RequestStatus::Idle,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDateTime) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}
