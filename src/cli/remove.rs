//! `tarefa remove` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{Storage, TaskManager};

#[derive(Args)]
pub struct RemoveArgs {
    /// Task id, id prefix, or exact title
    task: String,
}

pub fn run(args: RemoveArgs) -> Result<()> {
    let storage = Storage::new()?;
    let mut manager = TaskManager::load(storage)?;

    let resolved = super::resolve_task(&args.task, manager.list())?;
    let id = resolved.id.clone();
    let title = resolved.title.clone();

    manager.remove(&id)?;
    println!("✓ Removed task: {}", title);

    Ok(())
}
