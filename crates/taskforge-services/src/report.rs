//! Report generation over a supplied task collection: daily summaries and
//! CSV export. Purely derived views; nothing here mutates tasks.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use taskforge_core::task::{Priority, Status, Task};
use taskforge_store::error::StoreError;

/// Daily snapshot of a task collection.
///
/// `by_priority` counts only priorities present in the input; use the
/// manager's statistics for zero-filled maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub date: DateTime<Utc>,
    pub total: usize,
    pub completed: usize,
    pub by_priority: BTreeMap<Priority, usize>,
}

/// Summarize `tasks` as of `date`, defaulting to now.
pub fn generate_daily_report(tasks: &[Task], date: Option<DateTime<Utc>>) -> DailyReport {
    let date = date.unwrap_or_else(Utc::now);
    let completed = tasks.iter().filter(|t| t.status == Status::Done).count();
    let mut by_priority: BTreeMap<Priority, usize> = BTreeMap::new();
    for task in tasks {
        *by_priority.entry(task.priority).or_insert(0) += 1;
    }
    DailyReport {
        date,
        total: tasks.len(),
        completed,
        by_priority,
    }
}

const CSV_HEADER: &str = "id,title,description,priority,created_at,status,project_id,completed_at";

/// Write `tasks` as a CSV table at `path`: a fixed header row, then one row
/// per task with values as produced by [`Task::to_record`]. Unset optionals
/// render as empty cells.
pub fn export_tasks_csv(tasks: &[Task], path: &Path) -> Result<(), StoreError> {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for task in tasks {
        let record = task.to_record();
        let row = [
            record.id,
            record.title,
            record.description,
            record.priority,
            record.created_at,
            record.status,
            record.project_id.unwrap_or_default(),
            record.completed_at.unwrap_or_default(),
        ];
        let escaped: Vec<String> = row.iter().map(|field| escape_csv(field)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline; inner quotes
/// are doubled.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
