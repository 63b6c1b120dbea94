//! `tarefa edit` command implementation

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::task::{Priority, Storage, TaskEdit, TaskManager, ValidationError};

#[derive(Args)]
pub struct EditArgs {
    /// Task id, id prefix, or exact title
    task: String,

    /// New title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    description: Option<String>,

    /// New deadline (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    deadline: Option<String>,

    /// New priority: baixa, média, or alta
    #[arg(short = 'p', long)]
    priority: Option<String>,
}

pub fn run(args: EditArgs) -> Result<()> {
    let deadline = match &args.deadline {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDeadline(raw.clone()))?,
        ),
        None => None,
    };

    let priority = match &args.priority {
        Some(raw) => Some(
            Priority::parse(raw).ok_or_else(|| ValidationError::UnknownPriority(raw.clone()))?,
        ),
        None => None,
    };

    let changes = TaskEdit {
        title: args.title.clone(),
        description: args.description.clone(),
        deadline,
        priority,
    };

    if changes.title.is_none()
        && changes.description.is_none()
        && changes.deadline.is_none()
        && changes.priority.is_none()
    {
        bail!("Nothing to change: pass at least one of --title, --description, --deadline, --priority");
    }

    let storage = Storage::new()?;
    let mut manager = TaskManager::load(storage)?;

    let resolved = super::resolve_task(&args.task, manager.list())?;
    let id = resolved.id.clone();

    manager.edit(&id, &changes)?;

    match manager.get(&id) {
        Some(task) => {
            println!("✓ Updated task: {}", task.title);
            println!("  Deadline: {}", task.deadline.format("%Y-%m-%d"));
            println!("  Priority: {}", task.priority);
            println!("  Status:   {}", task.status);
        }
        None => println!("✓ Updated task: {}", id),
    }

    Ok(())
}
