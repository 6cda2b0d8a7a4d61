//! Kwatcher - configuration front-end for a Kubernetes event watcher.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use kwatcher::cli::{Cli, LogFormat};
use kwatcher::config::Config;

/// Initialize the tracing subscriber with the specified log format.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_env_filter(filter)
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    info!(config_path = %cli.config.display(), "Loading configuration");

    // Any load error is fatal for startup (fail-fast)
    let config = match Config::load_from(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, path = %cli.config.display(), "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Validate mode: display a summary and exit
    if cli.validate {
        println!("Configuration is valid: {}", cli.config.display());
        println!("  Cluster: {}", config.app.cluster_name);
        println!(
            "  Namespaces: {} allowed, {} forbidden",
            config.allowed_namespaces.len(),
            config.forbidden_namespaces.len()
        );
        println!(
            "  Reasons: {} allowed, {} forbidden",
            config.allowed_reasons.len(),
            config.forbidden_reasons.len()
        );
        println!(
            "  Ignore patterns: {} log, {} node message, {} node reason",
            config.ignore_log_patterns_compiled.len(),
            config.ignore_node_messages_compiled.len(),
            config.ignore_node_reasons.len()
        );
        return Ok(());
    }

    info!(
        cluster = %config.app.cluster_name,
        namespaces = config.namespaces.len(),
        reasons = config.reasons.len(),
        "kwatcher configuration loaded"
    );

    // The event watcher consuming this configuration lives downstream;
    // without it there is nothing further to run.
    Ok(())
}
