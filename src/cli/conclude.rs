//! `tarefa conclude` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{Storage, TaskManager};

#[derive(Args)]
pub struct ConcludeArgs {
    /// Task id, id prefix, or exact title
    task: String,
}

pub fn run(args: ConcludeArgs) -> Result<()> {
    let storage = Storage::new()?;
    let mut manager = TaskManager::load(storage)?;

    let resolved = super::resolve_task(&args.task, manager.list())?;
    let id = resolved.id.clone();
    let title = resolved.title.clone();

    manager.conclude(&id)?;
    println!("✓ Concluded task: {}", title);

    Ok(())
}
