mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use hiit_core::AppConfig;
use hiit_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("HIIT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load()
        .with_data_file(cli.file.clone())
        .with_base_path(cli.base_path.clone());

    match cli.command {
        None => run_tui(&config, cli.ephemeral, None).await?,
        Some(Commands::Open { path }) => run_tui(&config, cli.ephemeral, Some(&path)).await?,
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "hiit", &mut std::io::stdout());
        }
        Some(cmd) => {
            let mut ctx = CliContext::open(&config, cli.ephemeral);
            let result = match cmd {
                Commands::Routine(routine_cmd) => {
                    handlers::routine::handle(&mut ctx, routine_cmd.action)
                }
                Commands::Item(item_cmd) => handlers::item::handle(&mut ctx, item_cmd.action),
                Commands::Open { .. } | Commands::Completions { .. } => Ok(()),
            };
            if let Err(e) = result {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}

async fn run_tui(config: &AppConfig, ephemeral: bool, path: Option<&str>) -> anyhow::Result<()> {
    let editor = context::open_editor(config, ephemeral);
    let mut app = App::new(editor, config.effective_base_path());
    if let Some(path) = path {
        app.open_path(path);
    }
    app.run().await?;
    Ok(())
}
