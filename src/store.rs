use crate::clock::Clock;
use crate::domain::Task;
use crate::persistence::{load_tasks, serialize_tasks, KvStore};
use anyhow::Result;

/// The in-memory task collection for the active session, newest-first.
///
/// Every real mutation writes the whole collection back through the injected
/// backend before returning (write-through, no batching). Validation no-ops
/// (empty text, unknown id) mutate nothing and skip the write; they report
/// `false` / a zero count rather than an error. A failed write leaves the
/// in-memory collection as the session's source of truth.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn KvStore>,
    key: String,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    /// Load the collection stored under `key`, or start empty.
    pub fn load(backend: Box<dyn KvStore>, key: String, clock: Box<dyn Clock>) -> Result<Self> {
        let tasks = load_tasks(backend.as_ref(), &key)?;
        Ok(Self {
            tasks,
            backend,
            key,
            clock,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Create a task and prepend it. No-op on blank text.
    pub fn add(&mut self, text: &str) -> Result<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        let task = Task::new(text.to_string(), self.clock.now());
        self.tasks.insert(0, task);
        self.persist()?;
        Ok(true)
    }

    /// Flip completion on the matching task. No-op on an unknown id.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace a task's text with the trimmed value, leaving `created_at`
    /// unchanged. No-op on blank text or an unknown id.
    pub fn edit(&mut self, id: &str, new_text: &str) -> Result<bool> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(false);
        }

        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = new_text.to_string();
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the matching task. No-op on an unknown id.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every task created today. Confirmation is the caller's job;
    /// this executes unconditionally. Returns how many were removed.
    pub fn reset_today(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        let today = self.clock.today();
        self.tasks
            .retain(|t| !crate::clock::falls_on(t.created_at, today));
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Remove every task older than yesterday, keeping Today + Yesterday.
    /// Returns how many were removed.
    pub fn clear_old(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        let today = self.clock.today();
        let yesterday = self.clock.yesterday();
        self.tasks.retain(|t| {
            crate::clock::falls_on(t.created_at, today)
                || crate::clock::falls_on(t.created_at, yesterday)
        });
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&mut self) -> Result<()> {
        let json = serialize_tasks(&self.tasks)?;
        self.backend.save(&self.key, &json)
    }
}
