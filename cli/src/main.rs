//! CLI entrypoint for exam-extract
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use exam_extract_application::{
    ImportEventLogger, ImportParams, ImportProgressNotifier, ImportQuestionsUseCase,
    NoImportLogger, NoImportProgress,
};
use exam_extract_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, JsonFileQuestionSink, JsonlImportLogger,
    TextDirectorySource,
};
use exam_extract_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting exam-extract");

    let config = load_config(&cli)?;
    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Invalid configuration: {}", issue);
        }
        bail!(
            "Configuration has {} problem(s): {}",
            issues.len(),
            issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    let output_config = OutputConfig {
        format: cli
            .output
            .unwrap_or_else(|| output_format(config.output.format.unwrap_or_default())),
        color: config.output.color,
        show_progress: !cli.quiet,
    };
    output_config.apply_color();

    // === Dependency Injection ===
    let source = if cli.files.is_empty() {
        let dir = cli.dir.clone().unwrap_or_else(|| config.source.dir.clone());
        let extensions = if cli.extensions.is_empty() {
            config.source.extensions.clone()
        } else {
            cli.extensions.clone()
        };
        TextDirectorySource::directory(dir, &extensions)
    } else {
        TextDirectorySource::files(cli.files.clone())
    };

    let sink_path = cli.sink.clone().unwrap_or_else(|| config.sink.path.clone());
    let sink = JsonFileQuestionSink::new(sink_path);

    let event_logger: Arc<dyn ImportEventLogger> = match &cli.event_log {
        Some(path) => match JsonlImportLogger::new(path) {
            Some(logger) => {
                info!("Writing import events to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoImportLogger),
        },
        None => Arc::new(NoImportLogger),
    };

    let params = ImportParams::default()
        .with_dry_run(cli.dry_run || config.import.dry_run)
        .with_max_concurrent_reads(cli.jobs.unwrap_or(config.import.max_concurrent_reads));

    let cancellation = CancellationToken::new();
    let ctrl_c_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current document");
            ctrl_c_token.cancel();
        }
    });

    let use_case = ImportQuestionsUseCase::new(Arc::new(source), Arc::new(sink))
        .with_event_logger(event_logger)
        .with_cancellation(cancellation);

    let progress: Box<dyn ImportProgressNotifier> = if !output_config.show_progress {
        Box::new(NoImportProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = use_case
        .execute(&params, progress.as_ref())
        .await
        .context("Import failed")?;

    let output = match output_config.format {
        OutputFormat::Summary => ConsoleFormatter::format_summary(&report),
        OutputFormat::Questions => ConsoleFormatter::format_questions(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };

    println!("{}", output);

    Ok(())
}

/// Install the tracing subscriber: stderr always, plus a file when requested
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Could not open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")
}

fn output_format(format: FileOutputFormat) -> OutputFormat {
    match format {
        FileOutputFormat::Summary => OutputFormat::Summary,
        FileOutputFormat::Questions => OutputFormat::Questions,
        FileOutputFormat::Json => OutputFormat::Json,
    }
}
