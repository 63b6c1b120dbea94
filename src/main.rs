//! Tarefa - single-user local task tracker

use anyhow::Result;
use clap::Parser;
use tarefa::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TAREFA_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tarefa=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Add(args) => cli::add::run(args),
        Commands::List(args) => cli::list::run(args),
        Commands::Remove(args) => cli::remove::run(args),
        Commands::Conclude(args) => cli::conclude::run(args),
        Commands::Edit(args) => cli::edit::run(args),
    }
}
