//! CLI command implementations

pub mod add;
pub mod conclude;
pub mod definition;
pub mod edit;
pub mod list;
pub mod remove;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};

use crate::task::Task;

/// Resolve a user-supplied identifier against the task collection: exact id
/// first, then id prefix, then exact title. Duplicate titles resolve to the
/// first match; pass the id to disambiguate.
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    if let Some(task) = tasks.iter().find(|t| t.id == identifier) {
        return Ok(task);
    }

    if let Some(task) = tasks.iter().find(|t| t.id.starts_with(identifier)) {
        return Ok(task);
    }

    if let Some(task) = tasks.iter().find(|t| t.title == identifier) {
        return Ok(task);
    }

    bail!("Task not found: {}", identifier)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

pub fn truncate_id(id: &str, max_len: usize) -> &str {
    if id.len() > max_len {
        &id[..max_len]
    } else {
        id
    }
}
