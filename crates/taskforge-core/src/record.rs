use crate::error::CoreError;
use crate::task::{Priority, Status, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain key-value representation of a [`Task`], used for file persistence
/// and export.
///
/// Enum fields carry their symbolic names, timestamps are RFC 3339 text,
/// and unset optionals serialize as null. `description`, `project_id`, and
/// `completed_at` may be absent in incoming data and default accordingly;
/// every other field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: String,
    pub created_at: String,
    pub status: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Task {
    /// Flatten this task into its record form.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority.name().to_string(),
            created_at: self.created_at.to_rfc3339(),
            status: self.status.name().to_string(),
            project_id: self.project_id.clone(),
            completed_at: self.completed_at.map(|t| t.to_rfc3339()),
        }
    }

    /// Rebuild a task from its record form, restoring identity exactly —
    /// the record's id is kept, never replaced by a fresh one.
    pub fn from_record(record: &TaskRecord) -> Result<Self, CoreError> {
        if record.title.is_empty() {
            return Err(CoreError::Validation("task title cannot be empty".into()));
        }
        let completed_at = match &record.completed_at {
            Some(text) => Some(parse_timestamp("completed_at", text)?),
            None => None,
        };
        Ok(Self {
            id: TaskId::parse(&record.id)?,
            title: record.title.clone(),
            description: record.description.clone(),
            priority: Priority::from_name(&record.priority)?,
            created_at: parse_timestamp("created_at", &record.created_at)?,
            status: Status::from_name(&record.status)?,
            project_id: record.project_id.clone(),
            completed_at,
        })
    }
}

fn parse_timestamp(field: &'static str, text: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidTimestamp {
            field,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        let mut task = Task::new("Ship release", "cut the tag", Priority::High).unwrap();
        task.assign_to_project(Some("launch".into()));
        task
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let mut task = sample_task();
        task.mark_completed();
        let restored = Task::from_record(&task.to_record()).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn round_trip_without_completion() {
        let task = sample_task();
        let restored = Task::from_record(&task.to_record()).unwrap();
        assert_eq!(restored.id(), task.id());
        assert_eq!(restored.completed_at(), None);
        assert_eq!(restored, task);
    }

    #[test]
    fn record_uses_symbolic_names_and_null() {
        let task = sample_task();
        let record = task.to_record();
        assert_eq!(record.priority, "HIGH");
        assert_eq!(record.status, "TODO");
        assert_eq!(record.completed_at, None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["priority"], "HIGH");
        // Unset completion serializes as null, not as a missing key.
        assert!(json["completed_at"].is_null());
        assert_eq!(
            json.as_object().unwrap().len(),
            8,
            "record must carry exactly the eight fields"
        );
    }

    #[test]
    fn missing_optionals_default() {
        let task = sample_task();
        let mut json = serde_json::to_value(task.to_record()).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("description");
        obj.remove("project_id");
        obj.remove("completed_at");

        let record: TaskRecord = serde_json::from_value(json).unwrap();
        let restored = Task::from_record(&record).unwrap();
        assert_eq!(restored.description, "");
        assert_eq!(restored.project_id, None);
        assert_eq!(restored.completed_at(), None);
    }

    #[test]
    fn unknown_priority_name_fails() {
        let mut record = sample_task().to_record();
        record.priority = "SEVERE".into();
        assert!(matches!(
            Task::from_record(&record),
            Err(CoreError::UnknownPriority(_))
        ));
    }

    #[test]
    fn unknown_status_name_fails() {
        let mut record = sample_task().to_record();
        record.status = "PAUSED".into();
        assert!(matches!(
            Task::from_record(&record),
            Err(CoreError::UnknownStatus(_))
        ));
    }

    #[test]
    fn malformed_timestamp_fails() {
        let mut record = sample_task().to_record();
        record.created_at = "yesterday".into();
        match Task::from_record(&record) {
            Err(CoreError::InvalidTimestamp { field, .. }) => assert_eq!(field, "created_at"),
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn malformed_completion_timestamp_fails() {
        let mut record = sample_task().to_record();
        record.completed_at = Some("soon".into());
        assert!(matches!(
            Task::from_record(&record),
            Err(CoreError::InvalidTimestamp {
                field: "completed_at",
                ..
            })
        ));
    }

    #[test]
    fn malformed_id_fails() {
        let mut record = sample_task().to_record();
        record.id = "1234".into();
        assert!(matches!(
            Task::from_record(&record),
            Err(CoreError::InvalidTaskId(_))
        ));
    }

    #[test]
    fn empty_title_in_record_fails() {
        let mut record = sample_task().to_record();
        record.title = String::new();
        assert!(matches!(
            Task::from_record(&record),
            Err(CoreError::Validation(_))
        ));
    }
}
