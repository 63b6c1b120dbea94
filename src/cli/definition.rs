//! Top-level CLI definition

use clap::{Parser, Subcommand};

use super::{add::AddArgs, conclude::ConcludeArgs, edit::EditArgs, list::ListArgs, remove::RemoveArgs};

#[derive(Parser)]
#[command(
    name = "tarefa",
    version,
    about = "Single-user local task tracker with deadlines and priorities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List tasks, optionally filtered by status
    List(ListArgs),
    /// Remove a task
    Remove(RemoveArgs),
    /// Mark a task as concluded
    Conclude(ConcludeArgs),
    /// Edit a task's fields
    Edit(EditArgs),
}
