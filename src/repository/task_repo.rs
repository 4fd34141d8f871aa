//! Task Repository
//!
//! The ordered checklist, persisted to tasks.json. Every mutation rewrites
//! the whole file; the in-memory list stays authoritative when a write
//! fails.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::store::{read_json, write_json, JsonFileStore};
use crate::domain::{DomainError, DomainResult, Task};

pub struct TaskRepository {
    path: PathBuf,
    tasks: Mutex<Vec<Task>>,
}

impl TaskRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Replace the in-memory list with the file contents.
    ///
    /// A missing or corrupt file yields an empty list; nothing is surfaced
    /// to the caller.
    pub async fn load(&self) -> Vec<Task> {
        let loaded: Vec<Task> = read_json(&self.path).unwrap_or_default();
        let mut tasks = self.tasks.lock().await;
        *tasks = loaded;
        tasks.clone()
    }

    /// Snapshot of the current list
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().await.clone()
    }

    /// Append a new task and persist.
    ///
    /// Empty or whitespace-only text is a no-op: no task is added and the
    /// file is not touched. Returns whether a task was added.
    pub async fn append(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let mut tasks = self.tasks.lock().await;
        tasks.push(Task::new(text));
        self.write_through(&tasks);
        true
    }

    /// Flip the `completed` flag at `index` and persist
    pub async fn toggle_completed(&self, index: usize) -> DomainResult<Task> {
        let mut tasks = self.tasks.lock().await;
        let len = tasks.len();
        let task = tasks
            .get_mut(index)
            .ok_or(DomainError::IndexOutOfRange { index, len })?;
        task.completed = !task.completed;
        let task = task.clone();
        self.write_through(&tasks);
        Ok(task)
    }

    /// Remove the task at `index` and persist; later tasks shift down
    pub async fn delete(&self, index: usize) -> DomainResult<Task> {
        let mut tasks = self.tasks.lock().await;
        if index >= tasks.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: tasks.len(),
            });
        }
        let removed = tasks.remove(index);
        self.write_through(&tasks);
        Ok(removed)
    }

    // Write failures leave the in-memory list valid but unsynced; they are
    // logged and swallowed.
    fn write_through(&self, tasks: &[Task]) {
        if let Err(e) = write_json(&self.path, tasks) {
            log::warn!("failed to persist {}: {}", self.path.display(), e);
        }
    }
}

#[async_trait]
impl JsonFileStore for TaskRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> DomainResult<()> {
        let tasks = self.tasks.lock().await;
        write_json(&self.path, &*tasks)
    }
}
