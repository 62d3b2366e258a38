//! ets2-monitor - forward ETS2 telemetry to a serial device
//!
//! Polls the ETS2 telemetry server and writes engine RPM and speed as
//! `key=value` lines to a serial port, a file, or stdout.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod frame;
mod poller;
mod sink;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ets2_telemetry_client::{
    ClientConfig, DEFAULT_BASE_URL, ErrorKind, TelemetryClient, TelemetryError,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::poller::PollSettings;

#[derive(Parser, Debug)]
#[command(name = "ets2-monitor")]
#[command(about = "Forward ETS2 telemetry (engine RPM, speed) to a serial device")]
#[command(version)]
struct Cli {
    /// HTTP URL of the telemetry server
    #[arg(long = "base-url", env = "ETS2_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Delay between polls in milliseconds
    #[arg(long = "update-freq", default_value_t = 1000 / 30)]
    update_freq: u64,

    /// Device or file to write frames to; stdout when omitted
    #[arg(long = "output", alias = "serial-port", env = "ETS2_OUTPUT")]
    output: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = 1000)]
    timeout_ms: u64,

    /// Stop after this many frames
    #[arg(long)]
    count: Option<u64>,

    /// Stop on the first telemetry error, including transient ones
    #[arg(long = "fail-fast")]
    fail_fast: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let timeout = Duration::from_millis(self.timeout_ms.max(1));
        ClientConfig::new(self.base_url.as_str())
            .with_timeout(Some(timeout))
            .with_connect_timeout(Some(timeout))
    }

    fn poll_settings(&self) -> PollSettings {
        PollSettings {
            max_frames: self.count,
            fail_fast: self.fail_fast,
            ..PollSettings::every_millis(self.update_freq)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for frames.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ets2_monitor={log_level},ets2_telemetry_client={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&cli).await {
        Ok(frames) => {
            info!(frames, "Monitor finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(cli: &Cli) -> Result<u64> {
    let client = TelemetryClient::with_config(cli.client_config())?;
    let mut sink = sink::open_sink(cli.output.as_deref()).with_context(|| {
        format!(
            "Failed to open output {}",
            cli.output
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    info!(url = client.endpoint(), "Polling telemetry");
    poller::run(&client, &mut sink, &cli.poll_settings()).await
}

fn exit_code(error: &anyhow::Error) -> u8 {
    if let Some(e) = error.downcast_ref::<TelemetryError>() {
        return match e.kind() {
            ErrorKind::Transport | ErrorKind::UnexpectedStatus => 3,
            ErrorKind::Decode => 4,
            ErrorKind::Build => 5,
        };
    }
    if error.downcast_ref::<std::io::Error>().is_some() {
        return 6;
    }
    1
}
