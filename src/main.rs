//! LectureScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use lecture_scribe::cli::{
    app::{load_merged_config, run_home, run_show, run_upload, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use lecture_scribe::domain::config::AppConfig;
use lecture_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Upload { file, mime }) => {
            // Build CLI config from args
            let cli_config = AppConfig {
                api_key: None, // API key comes from env/file only
                model: cli.model,
                language: cli.language,
            };

            let config = load_merged_config(cli_config).await;
            run_upload(&file, mime, config).await
        }
        Some(Commands::Show { id }) => run_show(&id).await,
        Some(Commands::List) | None => run_home().await,
    }
}
