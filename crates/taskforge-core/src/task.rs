use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique task identifier — a random v4 UUID, displayed in canonical
/// hyphenated form.
///
/// Assigned once at construction and immutable thereafter; uniqueness is
/// statistical.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Mint a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a textual id back into a TaskId.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| CoreError::InvalidTaskId(s.to_string()))
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskId({})", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority. Ordinal only for display; nothing in the library orders
/// tasks by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Every member in declaration order, for zero-initialized counting.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Symbolic name used in records and count maps.
    pub fn name(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        }
    }

    /// Look up a priority by its symbolic name.
    pub fn from_name(s: &str) -> Result<Self, CoreError> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "URGENT" => Ok(Priority::Urgent),
            other => Err(CoreError::UnknownPriority(other.to_string())),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Task lifecycle status. No transition graph is enforced; any assignment
/// is legal, `mark_completed` is the only guarded helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl Status {
    /// Every member in declaration order, for zero-initialized counting.
    pub const ALL: [Status; 4] = [
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Cancelled,
    ];

    /// Symbolic name used in records and count maps.
    pub fn name(self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
            Status::Cancelled => "CANCELLED",
        }
    }

    /// Look up a status by its symbolic name.
    pub fn from_name(s: &str) -> Result<Self, CoreError> {
        match s {
            "TODO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "DONE" => Ok(Status::Done),
            "CANCELLED" => Ok(Status::Cancelled),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A single trackable unit of work.
///
/// `id` and `created_at` are fixed at construction; `completed_at` is only
/// written through [`Task::mark_completed`]. Everything else is freely
/// mutable by callers holding a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub(crate) id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub(crate) created_at: DateTime<Utc>,
    pub status: Status,
    pub project_id: Option<String>,
    pub(crate) completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task with a fresh id, the current instant as creation time,
    /// status TODO, and no project or completion stamp.
    ///
    /// Fails with [`CoreError::Validation`] when the title is empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, CoreError> {
        Self::new_at(title, description, priority, Utc::now())
    }

    /// Like [`Task::new`] but with an injected creation instant, for
    /// deterministic construction in tests.
    pub fn new_at(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let title = title.into();
        if title.is_empty() {
            return Err(CoreError::Validation("task title cannot be empty".into()));
        }
        Ok(Self {
            id: TaskId::generate(),
            title,
            description: description.into(),
            priority,
            created_at,
            status: Status::Todo,
            project_id: None,
            completed_at: None,
        })
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `Some` iff `mark_completed` has run at least once. The stamp is never
    /// cleared, even when the status later moves away from DONE.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Set status to DONE and stamp the completion instant. Idempotent in
    /// effect; repeated calls refresh the stamp.
    pub fn mark_completed(&mut self) {
        self.mark_completed_at(Utc::now());
    }

    /// [`Task::mark_completed`] with an injected instant.
    pub fn mark_completed_at(&mut self, at: DateTime<Utc>) {
        self.status = Status::Done;
        self.completed_at = Some(at);
    }

    /// Replace the priority. The enum is closed, so unlike the textual
    /// record path this cannot fail.
    pub fn update_priority(&mut self, new_priority: Priority) {
        self.priority = new_priority;
    }

    /// Set or clear the project association. The project id is opaque; no
    /// registry is consulted.
    pub fn assign_to_project(&mut self, project_id: Option<String>) {
        self.project_id = project_id;
    }
}
