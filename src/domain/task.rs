//! Task Entity
//!
//! A single checklist entry.

use serde::{Deserialize, Serialize};

/// One checklist entry.
///
/// Identity is positional: tasks are addressed by their index in the
/// ordered list, and the on-disk format carries no id. Order is insertion
/// order; there is no reorder operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// User-supplied text, never blank
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Test task");
        assert_eq!(task.text, "Test task");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_wire_shape() {
        let task = Task::new("buy milk");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "buy milk", "completed": false})
        );
    }

    #[test]
    fn test_task_deserialization() {
        let task: Task = serde_json::from_str(r#"{"text":"x","completed":true}"#).unwrap();
        assert_eq!(task.text, "x");
        assert!(task.completed);
    }
}
