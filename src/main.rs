use std::process::ExitCode;

use clap::Parser;
use recursive_ask::cli::Cli;
use recursive_ask::types::config::Config;
use recursive_ask::AskError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    init_logging(cli.log_level(&config), &config);

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match recursive_ask::cli::commands::solve(&cli.seed, cli.n, &config).await {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn init_logging(level: &str, config: &Config) {
    let filter = EnvFilter::from_default_env().add_directive(
        format!("recursive_ask={}", level)
            .parse()
            .unwrap_or_else(|_| "recursive_ask=warn".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn report(err: &AskError) -> ExitCode {
    let msg = format!("error! {}", err);
    println!("{}", msg);
    eprintln!("{}", msg);
    ExitCode::FAILURE
}
