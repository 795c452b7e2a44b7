//! Clipstash CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipstash::cli::{
    handle_client_command, handle_config_command, init_logging, load_default_config,
    run_daemon, Cli, Commands, DaemonOptions, Presenter, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use clipstash::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let config = load_default_config(&cli, |msg| presenter.warn(&msg)).await;
    init_logging(config.log_level_or_default());

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(command) => {
            if cli.daemon {
                presenter.error("--daemon cannot be combined with a subcommand");
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
            if let Err(e) = handle_client_command(command, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        None if cli.daemon => run_daemon(DaemonOptions::from(&cli), config).await,
        None => {
            presenter.error("Nothing to do. Run with --daemon or a subcommand (see --help)");
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}
