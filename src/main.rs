use clap::Parser;
use env_logger::Env;
use contract_review::config::config_manager::ConfigManager;
use contract_review::errors::ErrorHandler;
use contract_review::structs::cli::Cli;
use contract_review::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match ConfigManager::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            return Err(e.into());
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(config.logging.level.as_str()))
        .format_timestamp(None)
        .init();

    let mut runner = CommandRunner::new(config, cli.config);
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }
    Ok(())
}
