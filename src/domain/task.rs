use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single checklist entry.
///
/// Serialized field names follow the stored JSON format (camelCase), so a
/// collection written by any earlier build round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id, generated at creation and never reused.
    pub id: String,
    /// Task text, trimmed and never empty.
    pub text: String,
    /// Whether the task has been checked off.
    pub completed: bool,
    /// Creation time. Immutable; determines bucket and stat placement.
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a new, uncompleted task. The caller supplies `now` from its
    /// clock and guarantees `text` is already trimmed and non-empty.
    pub fn new(text: String, now: DateTime<Local>) -> Self {
        Self {
            id: generate_id(now),
            text,
            completed: false,
            created_at: now,
        }
    }
}

/// Generate a collection-unique id: millisecond timestamp plus a random
/// suffix. Two ids colliding would make `toggle`/`edit`/`remove` treat the
/// tasks as one; that risk is accepted rather than guarded.
pub fn generate_id(now: DateTime<Local>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{:x}{}", now.timestamp_millis(), &suffix[..8])
}
