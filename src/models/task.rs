//! Task model
//!
//! A task is a single todo item owned by one user. The backend is the source
//! of truth; the client only keeps transient copies.

use serde::{Deserialize, Serialize};

use crate::api::{Error, Result};

/// Longest title the forms accept
pub const MAX_TITLE_LEN: usize = 200;

/// Longest description the backend stores
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// A task as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// What needs to be done
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the task is done
    #[serde(default)]
    pub is_completed: bool,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Free-form tag string (comma separated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// When the task is due (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Whether the task repeats
    #[serde(default)]
    pub is_recurring: bool,

    /// Repeat interval for recurring tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,

    /// Next due date computed by the backend for recurring tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<String>,

    /// When the task was created (RFC3339)
    pub created_at: String,

    /// When the task was last changed (RFC3339)
    pub updated_at: String,
}

impl Task {
    /// Create a fresh, incomplete task stamped with the current time
    #[must_use]
    pub fn new(id: String, user_id: String, title: String, description: Option<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            user_id,
            title,
            description,
            is_completed: false,
            priority: Priority::default(),
            tags: None,
            due_date: None,
            is_recurring: false,
            recurring_interval: None,
            next_due_date: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Tags split on commas, trimmed, empties dropped
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| tags.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal (default)
    #[default]
    Medium,
    /// Do first
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "high" | "h" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high")),
        }
    }
}

/// Repeat interval for recurring tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
}

impl std::fmt::Display for RecurringInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for RecurringInterval {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            _ => Err(format!("Invalid interval: {s}. Use: daily, weekly, monthly")),
        }
    }
}

/// Validate a task title and return it trimmed
///
/// Mirrors the form validation: required, at most 200 characters.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(Error::Validation(format!(
            "Title must be {MAX_TITLE_LEN} characters or less"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional description
///
/// Blank descriptions become `None`.
pub fn validate_description(description: Option<&str>) -> Result<Option<String>> {
    let Some(text) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if text.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(Error::Validation(format!(
            "Description must be {MAX_DESCRIPTION_LEN} characters or less"
        )));
    }
    Ok(Some(text.to_string()))
}
