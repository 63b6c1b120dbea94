//! Tarefa library - core task model, persistence, and CLI

pub mod cli;
pub mod task;
