//! rollover CLI binary.
//!
//! Wires the real filesystem, tracing sink and log notifier into the core
//! store cycle.

mod cli;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

use rollover_core::app::{BackupRotator, DailyLoop, StoreCycle};
use rollover_core::impls::{LocalArtifactStore, LogNotifier, TracingEventSink};
use rollover_core::ports::{FileSource, SystemClock, TokioSleeper, UlidGenerator};
use rollover_core::{ArtifactPaths, Config, ConfigError};

use cli::{Cli, Command};

type LocalCycle = StoreCycle<LocalArtifactStore, TracingEventSink>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_json) {
        eprintln!("error: failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Store(args) => store(&config, args.input).await,
        Command::Run(args) => run(&config, args.input, args.max_cycles).await,
        Command::Status => status(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn build_cycle(config: &Config, input: Option<PathBuf>) -> Result<LocalCycle, ConfigError> {
    let paths = config.artifact_paths()?;
    let source = input.unwrap_or_else(|| config.artifact.source.clone());
    tracing::debug!(source = %source.display(), "using content source");

    Ok(StoreCycle::new(
        paths,
        BackupRotator::new(LocalArtifactStore::new(), TracingEventSink),
        Box::new(FileSource::new(source)),
        Arc::new(LogNotifier),
        Box::new(UlidGenerator::new(SystemClock)),
    )
    .with_alerts(config.alert_template()))
}

async fn store(config: &Config, input: Option<PathBuf>) -> Result<(), ()> {
    let cycle = build_cycle(config, input).map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    // 失敗の詳細は StoreCycle がログに出している
    let report = cycle.run().await.map_err(|_| ())?;
    print_json(&report)
}

async fn run(config: &Config, input: Option<PathBuf>, max_cycles: Option<u32>) -> Result<(), ()> {
    let built = config
        .daily_schedule()
        .and_then(|schedule| Ok((build_cycle(config, input)?, schedule)));
    let (cycle, schedule) = built.map_err(|e: ConfigError| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    tracing::info!(at = %schedule.at(), "starting daily store loop");
    let daily = DailyLoop::new(cycle, schedule, SystemClock, TokioSleeper);

    tokio::select! {
        summary = daily.run(max_cycles) => {
            tracing::info!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "daily store loop finished"
            );
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received Ctrl-C, shutting down");
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ArtifactStatus {
    path: PathBuf,
    exists: bool,
    bytes: Option<u64>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    current: ArtifactStatus,
    previous: ArtifactStatus,
}

fn artifact_status(path: &Path) -> ArtifactStatus {
    let metadata = std::fs::metadata(path).ok();
    ArtifactStatus {
        path: path.to_path_buf(),
        exists: metadata.is_some(),
        bytes: metadata.map(|m| m.len()),
    }
}

fn status(config: &Config) -> Result<(), ()> {
    let paths: ArtifactPaths = config.artifact_paths().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;
    print_json(&StatusReport {
        current: artifact_status(paths.current()),
        previous: artifact_status(paths.previous()),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ()> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize output");
            Err(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_of_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let status = artifact_status(&dir.path().join("stats.csv"));
        assert!(!status.exists);
        assert_eq!(status.bytes, None);
    }

    #[test]
    fn status_of_existing_artifact_has_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        std::fs::write(&path, "a,b\n1,2").unwrap();

        let status = artifact_status(&path);
        assert!(status.exists);
        assert_eq!(status.bytes, Some(7));
    }

    #[test]
    fn missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[tokio::test]
    async fn store_writes_input_to_current() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        std::fs::write(&input, "a,b\n1,2").unwrap();

        let mut config = Config::default();
        config.artifact.current = dir.path().join("stats.csv");
        config.artifact.previous = dir.path().join("stats_old.csv");
        config.alert.enabled = false;

        store(&config, Some(input)).await.unwrap();

        // 既定の source が無ければサイクルは失敗し、current はそのまま
        config.artifact.source = dir.path().join("missing.csv");
        store(&config, None).await.unwrap_err();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("stats.csv")).unwrap(),
            "a,b\n1,2"
        );
    }
}
