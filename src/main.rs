use clap::Parser;
use std::process::ExitCode;
use svn_checker::cli::args::Args;
use svn_checker::commands;
use svn_checker::config::Config;
use svn_checker::infrastructure::setup_logging;

fn init(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::new();
    config.update_from_args(args);
    config.validate()?;

    setup_logging(&config.logging_config()?)?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match init(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match commands::route_command(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                error = %e,
                path = ?e.path(),
                "svn-checker failed"
            );
            ExitCode::FAILURE
        }
    }
}
