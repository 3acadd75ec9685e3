use super::store::KvStore;
use crate::domain::Task;
use anyhow::{Context, Result};

/// Serialize a task collection to its stored JSON form.
pub fn serialize_tasks(tasks: &[Task]) -> Result<String> {
    serde_json::to_string_pretty(tasks).context("Failed to serialize task collection")
}

/// Deserialize a stored task collection.
pub fn deserialize_tasks(json: &str) -> Result<Vec<Task>> {
    serde_json::from_str(json).context("Failed to parse task collection")
}

/// Load the collection stored under `key`. Absence is an empty collection,
/// not an error: a fresh profile starts with no tasks.
pub fn load_tasks(store: &dyn KvStore, key: &str) -> Result<Vec<Task>> {
    match store.load(key)? {
        Some(json) => deserialize_tasks(&json),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use chrono::Local;

    #[test]
    fn test_collection_round_trip_is_element_wise_equal() {
        let tasks = vec![
            Task::new("First".to_string(), Local::now()),
            Task {
                completed: true,
                ..Task::new("Second".to_string(), Local::now())
            },
        ];

        let json = serialize_tasks(&tasks).unwrap();
        let restored = deserialize_tasks(&json).unwrap();
        assert_eq!(restored, tasks);
    }

    #[test]
    fn test_load_missing_key_is_empty_collection() {
        let store = MemoryStore::new();
        let tasks = load_tasks(&store, "tasks.json").unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_load_rejects_corrupt_json() {
        let mut store = MemoryStore::new();
        store.save("tasks.json", "{not json").unwrap();
        assert!(load_tasks(&store, "tasks.json").is_err());
    }
}
