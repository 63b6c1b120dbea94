//! `tarefa add` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{Priority, Storage, Task, TaskManager, ValidationError};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Deadline (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    deadline: String,

    /// Free-text description
    #[arg(short = 'D', long, default_value = "")]
    description: String,

    /// Priority: baixa, média, or alta
    #[arg(short = 'p', long, default_value = "baixa")]
    priority: String,
}

pub fn run(args: AddArgs) -> Result<()> {
    let priority = Priority::parse(&args.priority)
        .ok_or_else(|| ValidationError::UnknownPriority(args.priority.clone()))?;

    let task = Task::new(&args.title, &args.description, &args.deadline, priority)?;

    let storage = Storage::new()?;
    let mut manager = TaskManager::load(storage)?;

    let id = task.id.clone();
    let title = task.title.clone();
    let deadline = task.deadline;
    manager.add(task)?;

    println!("✓ Added task: {}", title);
    println!("  Deadline: {}", deadline.format("%Y-%m-%d"));
    println!("  Priority: {}", priority);
    println!("  ID:       {}", id);

    Ok(())
}
