use clap::Parser;
use bulk_replace::config::constants::DEFAULT_LOG_FILTER;
use bulk_replace::errors::ErrorHandler;
use bulk_replace::structs::cli::Cli;
use bulk_replace::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.base_url);

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }

    Ok(())
}
