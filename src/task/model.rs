//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::ValidationError;

/// Task priority. Display labels are the fixed Portuguese label set of the
/// store format; parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse a priority from its display label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "baixa" => Some(Self::Low),
            "média" => Some(Self::Medium),
            "alta" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "baixa",
            Self::Medium => "média",
            Self::High => "alta",
        }
    }
}

// Stored labels are looked up against the fixed table; an unrecognized
// label degrades to Low rather than failing the whole load.
impl From<String> for Priority {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or(Self::Low)
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.label().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Task lifecycle status. `Concluded` is terminal: no automatic transition
/// overrides it. `Delayed` is derived from the deadline, never set by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    Canceled,
    Delayed,
    Blocked,
    Concluded,
    Ongoing,
}

impl Status {
    /// Parse a status from its display label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pendente" => Some(Self::Pending),
            "cancelada" => Some(Self::Canceled),
            "atrasada" => Some(Self::Delayed),
            "bloqueada" => Some(Self::Blocked),
            "concluída" => Some(Self::Concluded),
            "em progresso" => Some(Self::Ongoing),
            _ => None,
        }
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pendente",
            Self::Canceled => "cancelada",
            Self::Delayed => "atrasada",
            Self::Blocked => "bloqueada",
            Self::Concluded => "concluída",
            Self::Ongoing => "em progresso",
        }
    }
}

// Unrecognized stored labels degrade to Pending.
impl From<String> for Status {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or(Self::Pending)
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.label().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Partial update for a task. Absent fields (and empty strings) leave the
/// corresponding attribute unchanged. Status is never edited this way.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<Priority>,
}

/// One unit of work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque synthetic key, assigned at creation. Records written by older
    /// versions of the tool have no id, so a missing one is generated on load.
    #[serde(default = "generate_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Calendar date, serialized as YYYY-MM-DD
    pub deadline: NaiveDate,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: Status,
}

impl Task {
    /// Create a new pending task. The deadline is taken as a raw string so
    /// that unparseable input surfaces as a `ValidationError` before any
    /// task exists.
    pub fn new(
        title: &str,
        description: &str,
        deadline: &str,
        priority: Priority,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let deadline = NaiveDate::parse_from_str(deadline, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDeadline(deadline.to_string()))?;

        Ok(Self {
            id: generate_id(),
            title: title.to_string(),
            description: description.to_string(),
            deadline,
            priority,
            status: Status::Pending,
        })
    }

    /// Mark the task as concluded. Unconditional and idempotent.
    pub fn conclude(&mut self) {
        self.status = Status::Concluded;
    }

    /// Apply a partial update. Does not alter status.
    pub fn edit(&mut self, changes: &TaskEdit) {
        if let Some(title) = &changes.title {
            if !title.trim().is_empty() {
                self.title = title.clone();
            }
        }
        if let Some(description) = &changes.description {
            if !description.is_empty() {
                self.description = description.clone();
            }
        }
        if let Some(deadline) = changes.deadline {
            self.deadline = deadline;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
    }

    /// Check if the task is overdue relative to `reference`. Pure; a
    /// concluded task is never overdue.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        self.deadline < reference && self.status != Status::Concluded
    }

    /// Set status to `Delayed` when the task is overdue relative to
    /// `reference`; otherwise leave it alone. Returns whether the status
    /// changed. Callers needing a pure check should use [`Task::is_overdue`].
    pub fn refresh_delay_status(&mut self, reference: NaiveDate) -> bool {
        if self.is_overdue(reference) && self.status != Status::Delayed {
            self.status = Status::Delayed;
            return true;
        }
        false
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string().replace("-", "")[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::parse("baixa"), Some(Priority::Low));
        assert_eq!(Priority::parse("MÉDIA"), Some(Priority::Medium));
        assert_eq!(Priority::parse(" alta "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::High.label(), "alta");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::parse("pendente"), Some(Status::Pending));
        assert_eq!(Status::parse("Cancelada"), Some(Status::Canceled));
        assert_eq!(Status::parse("em progresso"), Some(Status::Ongoing));
        assert_eq!(Status::parse("done"), None);
        assert_eq!(Status::Concluded.label(), "concluída");
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Pay bills", "Electric bill", "2024-01-01", Priority::Medium)
            .unwrap();
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.deadline, date("2024-01-01"));
        assert_eq!(task.id.len(), 16);
    }

    #[test]
    fn test_new_task_rejects_empty_title() {
        let result = Task::new("   ", "desc", "2024-01-01", Priority::Low);
        assert!(matches!(result, Err(ValidationError::EmptyTitle)));
    }

    #[test]
    fn test_new_task_rejects_bad_deadline() {
        let result = Task::new("Title", "desc", "01-01-2024", Priority::Low);
        assert!(matches!(result, Err(ValidationError::InvalidDeadline(_))));
    }

    #[test]
    fn test_conclude_is_idempotent() {
        let mut task = Task::new("Test", "", "2024-01-01", Priority::Low).unwrap();
        task.conclude();
        assert_eq!(task.status, Status::Concluded);
        task.conclude();
        assert_eq!(task.status, Status::Concluded);
    }

    #[test]
    fn test_edit_partial_update() {
        let mut task = Task::new("Old", "old desc", "2024-01-01", Priority::Low).unwrap();
        task.edit(&TaskEdit {
            title: Some("New".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        });
        assert_eq!(task.title, "New");
        assert_eq!(task.description, "old desc");
        assert_eq!(task.deadline, date("2024-01-01"));
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_edit_ignores_empty_strings() {
        let mut task = Task::new("Title", "desc", "2024-01-01", Priority::Low).unwrap();
        task.edit(&TaskEdit {
            title: Some("  ".to_string()),
            description: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(task.title, "Title");
        assert_eq!(task.description, "desc");
    }

    #[test]
    fn test_edit_does_not_touch_status() {
        let mut task = Task::new("Title", "", "2024-01-01", Priority::Low).unwrap();
        task.conclude();
        task.edit(&TaskEdit {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });
        assert_eq!(task.status, Status::Concluded);
    }

    #[test]
    fn test_is_overdue() {
        let mut task = Task::new("Test", "", "2024-01-01", Priority::Low).unwrap();
        assert!(task.is_overdue(date("2024-01-02")));
        assert!(!task.is_overdue(date("2024-01-01")));
        assert!(!task.is_overdue(date("2023-12-31")));

        task.conclude();
        assert!(!task.is_overdue(date("2024-01-02")));
    }

    #[test]
    fn test_refresh_delay_status() {
        let mut task = Task::new("Test", "", "2024-01-01", Priority::Low).unwrap();

        assert!(!task.refresh_delay_status(date("2023-12-01")));
        assert_eq!(task.status, Status::Pending);

        assert!(task.refresh_delay_status(date("2024-02-01")));
        assert_eq!(task.status, Status::Delayed);

        // Already delayed: no further change reported
        assert!(!task.refresh_delay_status(date("2024-02-01")));
    }

    #[test]
    fn test_refresh_delay_never_overrides_concluded() {
        let mut task = Task::new("Test", "", "2024-01-01", Priority::Low).unwrap();
        task.conclude();
        assert!(!task.refresh_delay_status(date("2024-02-01")));
        assert_eq!(task.status, Status::Concluded);
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let task = Task::new("Teste", "desc", "2024-06-30", Priority::High).unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "alta");
        assert_eq!(json["status"], "pendente");
        assert_eq!(json["deadline"], "2024-06-30");
    }

    #[test]
    fn test_serde_roundtrip_preserves_status() {
        let mut task = Task::new("Teste", "", "2024-06-30", Priority::Medium).unwrap();
        task.status = Status::Blocked;

        let json = serde_json::to_string(&task).unwrap();
        let loaded: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id, task.id);
        assert_eq!(loaded.status, Status::Blocked);
        assert_eq!(loaded.priority, Priority::Medium);
    }

    #[test]
    fn test_deserialize_unknown_labels_use_defaults() {
        let json = r#"{
            "id": "abc123",
            "title": "Teste",
            "description": "",
            "deadline": "2024-01-01",
            "priority": "urgentíssima",
            "status": "feita"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, Status::Pending);
    }

    #[test]
    fn test_deserialize_without_id_generates_one() {
        let json = r#"{
            "title": "Legado",
            "description": "gravado pela versão antiga",
            "deadline": "2024-01-01",
            "priority": "alta",
            "status": "cancelada"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.len(), 16);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Canceled);
    }
}
