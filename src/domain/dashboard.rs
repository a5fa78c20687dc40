// Dashboard document domain model
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Snapshot of the externally-produced dashboard file.
///
/// Every field is defaulted independently, so a partial document still answers
/// in full. Elements stay opaque `Value`s: populated fields pass through to the
/// caller unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDocument {
    #[serde(default)]
    pub projects: Vec<Value>,
    #[serde(default)]
    pub tasks: Vec<Value>,
    #[serde(default = "placeholder_notifications")]
    pub notifications: Vec<Value>,
    #[serde(default = "placeholder_history")]
    pub history: Vec<Value>,
}

impl Default for DashboardDocument {
    /// The document served before the external producer has written the file.
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
            notifications: placeholder_notifications(),
            history: placeholder_history(),
        }
    }
}

/// Fixed entries shown while the producer has not written any notifications.
pub fn placeholder_notifications() -> Vec<Value> {
    vec![
        json!({"id": 1, "message": "Welcome to Cells-Kanban", "type": "info"}),
        json!({"id": 2, "message": "No dashboard data generated yet", "type": "warning"}),
    ]
}

pub fn placeholder_history() -> Vec<Value> {
    vec![
        json!({"id": 1, "time": "09:00", "event": "Service started"}),
        json!({"id": 2, "time": "09:05", "event": "Waiting for first dashboard snapshot"}),
    ]
}
