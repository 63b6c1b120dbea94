//! `tarefa list` command implementation

use anyhow::Result;
use chrono::Local;
use clap::Args;
use serde::Serialize;

use crate::task::{Status, Storage, Task, TaskManager, ValidationError};

const TABLE_COL_TITLE: usize = 24;
const TABLE_COL_STATUS: usize = 14;
const TABLE_COL_DEADLINE: usize = 12;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_ID_DISPLAY: usize = 12;

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks with this status (e.g. pendente, concluída)
    #[arg(short = 's', long)]
    status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson {
    id: String,
    title: String,
    description: String,
    deadline: String,
    priority: String,
    status: String,
}

impl TaskJson {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline.format("%Y-%m-%d").to_string(),
            priority: task.priority.label().to_string(),
            status: task.status.label().to_string(),
        }
    }
}

fn print_table_header() {
    println!(
        "{:<width_title$} {:<width_status$} {:<width_deadline$} {:<width_priority$} ID",
        "TITLE",
        "STATUS",
        "DEADLINE",
        "PRIORITY",
        width_title = TABLE_COL_TITLE,
        width_status = TABLE_COL_STATUS,
        width_deadline = TABLE_COL_DEADLINE,
        width_priority = TABLE_COL_PRIORITY
    );
    println!(
        "{}",
        "-".repeat(
            TABLE_COL_TITLE
                + TABLE_COL_STATUS
                + TABLE_COL_DEADLINE
                + TABLE_COL_PRIORITY
                + TABLE_COL_ID_DISPLAY
                + 4
        )
    );
}

fn print_table_row(task: &Task) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let status = super::truncate(task.status.label(), TABLE_COL_STATUS);
    let deadline = task.deadline.format("%Y-%m-%d").to_string();
    let priority = super::truncate(task.priority.label(), TABLE_COL_PRIORITY);
    let id_display = super::truncate_id(&task.id, TABLE_COL_ID_DISPLAY);
    println!(
        "{:<width_title$} {:<width_status$} {:<width_deadline$} {:<width_priority$} {}",
        title,
        status,
        deadline,
        priority,
        id_display,
        width_title = TABLE_COL_TITLE,
        width_status = TABLE_COL_STATUS,
        width_deadline = TABLE_COL_DEADLINE,
        width_priority = TABLE_COL_PRIORITY
    );
}

pub fn run(args: ListArgs) -> Result<()> {
    let filter = match &args.status {
        Some(raw) => Some(
            Status::parse(raw).ok_or_else(|| ValidationError::UnknownStatus(raw.clone()))?,
        ),
        None => None,
    };

    let storage = Storage::new()?;
    let mut manager = TaskManager::load(storage)?;

    // Delayed is derived, not user-set: recompute against today before
    // rendering anything.
    manager.refresh_delays(Local::now().date_naive())?;

    let tasks: Vec<&Task> = match filter {
        Some(status) => manager.filter_by_status(status),
        None => manager.list().iter().collect(),
    };

    if args.json {
        let records: Vec<TaskJson> = tasks.iter().map(|t| TaskJson::from_task(t)).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if tasks.is_empty() {
        match filter {
            Some(status) => println!("No tasks with status '{}'.", status),
            None => println!("No tasks found."),
        }
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", tasks.len());

    Ok(())
}
