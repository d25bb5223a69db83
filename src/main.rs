use clap::Parser;
use label_commands::utils::logger;
use label_commands::{run_command, CliConfig, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    let storage = LocalStorage::new(".");

    if let Err(e) = run_command(&config.command, storage).await {
        tracing::error!(
            category = ?e.category(),
            severity = ?e.severity(),
            "{}",
            e.diagnostic()
        );
        std::process::exit(e.exit_code());
    }
}
