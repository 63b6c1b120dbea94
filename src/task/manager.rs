//! In-memory task repository
//!
//! `TaskManager` owns the task collection and mediates every mutation. Each
//! mutating operation is followed synchronously by a full persist of the
//! collection; a failed persist leaves the in-memory state mutated and
//! propagates the error to the caller, who decides whether to retry.

use chrono::NaiveDate;

use super::error::Result;
use super::model::{Status, Task, TaskEdit};
use super::storage::Storage;

pub struct TaskManager {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Initialize from the store. An absent store means an empty collection;
    /// any other read or parse failure propagates.
    pub fn load(storage: Storage) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self { storage, tasks })
    }

    /// Append a task and persist. New tasks always land at the end.
    pub fn add(&mut self, task: Task) -> Result<()> {
        self.tasks.push(task);
        self.persist()
    }

    /// Remove the task with the given id. Persists only when a removal
    /// happened; `Ok(false)` when no task matched.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.tasks.remove(idx);
        self.persist()?;
        Ok(true)
    }

    /// Conclude the task with the given id and persist.
    pub fn conclude(&mut self, id: &str) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.conclude();
        self.persist()?;
        Ok(true)
    }

    /// Apply a partial update to the task with the given id and persist.
    pub fn edit(&mut self, id: &str, changes: &TaskEdit) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.edit(changes);
        self.persist()?;
        Ok(true)
    }

    /// All tasks, insertion order. Mutation goes through the manager only.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Order-preserving subset with the given status.
    pub fn filter_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Mark every overdue task as delayed, relative to `reference`. Persists
    /// only when at least one task changed; returns how many did.
    pub fn refresh_delays(&mut self, reference: NaiveDate) -> Result<usize> {
        let mut changed = 0;
        for task in &mut self.tasks {
            if task.refresh_delay_status(reference) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Serialize the full collection and overwrite the store.
    pub fn persist(&self) -> Result<()> {
        self.storage.save(&self.tasks)
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}
