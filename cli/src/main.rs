//! CLI entrypoint for toolgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use toolgate_application::{CallAuditLogger, NoCallAuditLogger};
use toolgate_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, JsonlCallAuditLogger, dispatcher_from_config,
    server,
};
use toolgate_presentation::{CallArgs, Cli, Command, ConsoleFormatter, OutputFormat};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("failed to load configuration: {}", e))?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, &config.logging);

    info!("Starting toolgate");

    match cli.command {
        Command::Serve { bind } => run_server(config, bind).await,
        Command::Call(args) => run_call(config, args).await,
        Command::Tools { output } => list_tools(&config, output),
        Command::ShowConfig => show_config(&config, cli.config.as_ref(), cli.no_config),
    }
}

/// Initialize logging based on verbosity level, `RUST_LOG` wins when set
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Diagnostics go to stderr so results on stdout stay machine-readable
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "toolgate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn audit_logger(config: &FileConfig) -> Arc<dyn CallAuditLogger> {
    match config
        .logging
        .audit_log
        .as_ref()
        .and_then(JsonlCallAuditLogger::new)
    {
        Some(logger) => {
            info!(path = %logger.path().display(), "Call audit log enabled");
            Arc::new(logger)
        }
        None => Arc::new(NoCallAuditLogger),
    }
}

async fn run_server(mut config: FileConfig, bind: Option<String>) -> Result<ExitCode> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    config.validate().context("invalid configuration")?;
    let addr = config.bind_addr()?;

    // === Dependency Injection ===
    let dispatcher = Arc::new(dispatcher_from_config(&config, audit_logger(&config))?);
    let listener = server::bind(addr).await?;

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                signal.cancel();
            }
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
    });

    eprintln!(
        "toolgate listening on http://{} (backend: {})",
        addr, config.backend.base_url
    );
    server::serve(listener, dispatcher, shutdown).await?;

    Ok(ExitCode::SUCCESS)
}

async fn run_call(config: FileConfig, args: CallArgs) -> Result<ExitCode> {
    config.validate().context("invalid configuration")?;
    let dispatcher = dispatcher_from_config(&config, audit_logger(&config))?;

    let result = dispatcher.dispatch(&args.tool_call(), &args.metadata()).await;

    let output = match args.output {
        OutputFormat::Text => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", output.trim_end());

    Ok(if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn list_tools(config: &FileConfig, output: OutputFormat) -> Result<ExitCode> {
    let dispatcher = dispatcher_from_config(config, Arc::new(NoCallAuditLogger))?;
    let tools = dispatcher.tool_spec().sorted();

    let rendered = match output {
        OutputFormat::Text => ConsoleFormatter::format_tools(&tools),
        OutputFormat::Json => serde_json::to_string_pretty(&tools)?,
    };
    println!("{}", rendered.trim_end());

    Ok(ExitCode::SUCCESS)
}

fn show_config(
    config: &FileConfig,
    config_path: Option<&PathBuf>,
    no_config: bool,
) -> Result<ExitCode> {
    if no_config {
        println!("Configuration files disabled (--no-config)");
    } else {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::describe_sources(config_path) {
            println!("{}", line);
        }
    }
    println!();
    println!("{}", config.to_redacted_toml()?);

    if let Err(e) = config.validate() {
        println!("warning: {}", e);
    }

    Ok(ExitCode::SUCCESS)
}
