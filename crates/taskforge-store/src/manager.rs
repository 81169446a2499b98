use crate::error::StoreError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use taskforge_core::error::CoreError;
use taskforge_core::record::TaskRecord;
use taskforge_core::task::{Priority, Status, Task, TaskId};

/// Construction-time configuration for a [`TaskManager`].
///
/// Passed explicitly; there is no process-wide default storage location.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// File used by save/load when the caller gives no explicit path.
    pub storage_path: PathBuf,
}

impl StoreConfig {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }
}

/// Aggregate counts over a manager's collection.
///
/// The per-priority and per-status maps carry every enum member, zeroed
/// when absent from the data, so consumers can rely on complete key sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_status: BTreeMap<Status, usize>,
}

/// In-memory ordered collection of tasks with explicit JSON file
/// persistence.
///
/// Insertion order is preserved. Membership changes only through
/// [`add_task`](TaskManager::add_task), [`delete_task`](TaskManager::delete_task),
/// and [`load_from_file`](TaskManager::load_from_file); individual tasks are
/// mutated in place through [`get_task_mut`](TaskManager::get_task_mut).
/// Nothing syncs to disk implicitly.
pub struct TaskManager {
    tasks: Vec<Task>,
    storage_path: PathBuf,
}

impl TaskManager {
    /// Create an empty manager with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tasks: Vec::new(),
            storage_path: config.storage_path,
        }
    }

    /// Construct a task and append it, returning its id.
    ///
    /// The collection is untouched when construction fails.
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<TaskId, CoreError> {
        let task = Task::new(title, description, priority)?;
        let id = task.id().clone();
        self.tasks.push(task);
        Ok(id)
    }

    /// First task with the given id, if any.
    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Mutable access to the first task with the given id.
    pub fn get_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    /// Tasks with the given status, in insertion order.
    pub fn tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Tasks with the given priority, in insertion order.
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.priority == priority)
            .collect()
    }

    /// Remove the first task with the given id. Returns false, with no
    /// side effect, when absent.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// The full collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Serialize every task to a pretty-printed JSON array at `path`, or at
    /// the configured path when `None`.
    ///
    /// The write is atomic (temp file in the target directory + rename).
    pub fn save_to_file(&self, path: Option<&Path>) -> Result<(), StoreError> {
        let path = path.unwrap_or(&self.storage_path);
        let records: Vec<TaskRecord> = self.tasks.iter().map(Task::to_record).collect();
        let data = serde_json::to_string_pretty(&records)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(data.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    /// Replace the in-memory collection with the contents of `path`, or of
    /// the configured path when `None`.
    ///
    /// A missing file is the one recoverable condition: the collection is
    /// reset to empty and the call succeeds. Any other failure is reported
    /// as [`StoreError`], and the load is all-or-nothing — the prior
    /// collection stays intact unless every record parses.
    pub fn load_from_file(&mut self, path: Option<&Path>) -> Result<(), StoreError> {
        let path = path.unwrap_or(&self.storage_path);
        if !path.exists() {
            self.tasks.clear();
            return Ok(());
        }
        let data = fs::read_to_string(path)?;
        let records: Vec<TaskRecord> = serde_json::from_str(&data)?;
        let mut tasks = Vec::with_capacity(records.len());
        for record in &records {
            tasks.push(Task::from_record(record)?);
        }
        self.tasks = tasks;
        Ok(())
    }

    /// Aggregate counts: total, completed (status DONE), and complete
    /// per-priority / per-status maps.
    pub fn statistics(&self) -> Statistics {
        let mut by_priority: BTreeMap<Priority, usize> =
            Priority::ALL.into_iter().map(|p| (p, 0)).collect();
        let mut by_status: BTreeMap<Status, usize> =
            Status::ALL.into_iter().map(|s| (s, 0)).collect();
        let mut completed = 0;
        for task in &self.tasks {
            *by_priority.entry(task.priority).or_insert(0) += 1;
            *by_status.entry(task.status).or_insert(0) += 1;
            if task.status == Status::Done {
                completed += 1;
            }
        }
        Statistics {
            total: self.tasks.len(),
            completed,
            by_priority,
            by_status,
        }
    }
}
