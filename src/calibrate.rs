use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use magcal::config::{
    BAUD_RATE, READ_TIMEOUT_MS, SAMPLE_COUNT, SAMPLE_INTERVAL_MS, SENSOR_CHANNEL,
    SamplerConfig, SerialSettings,
};
use magcal::progress::{ConsoleProgress, Progress, TracingProgress};
use magcal::sampler::{Outcome, run_serial};
use tracing_subscriber::EnvFilter;

// cargo run --bin calibrate -- /dev/ttyACM0

#[derive(Parser, Debug)]
#[command(about = "Estimate the magnetometer hard-iron offset of a flight controller")]
struct Args {
    /// Serial device of the flight controller console, e.g. /dev/ttyACM0.
    device: Option<PathBuf>,

    /// Number of samples to collect.
    #[arg(long, default_value_t = SAMPLE_COUNT)]
    samples: usize,

    /// Pause between samples in milliseconds.
    #[arg(long, default_value_t = SAMPLE_INTERVAL_MS)]
    interval_ms: u64,

    /// Telemetry channel holding the magnetometer vector.
    #[arg(long, default_value = SENSOR_CHANNEL)]
    channel: String,

    /// Serial line speed.
    #[arg(long, default_value_t = BAUD_RATE)]
    baud: u32,

    /// Read timeout in milliseconds; a silent device past this ends sampling.
    #[arg(long, default_value_t = READ_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Log progress instead of redrawing a status line.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the status line on stdout stays intact.
    let default_level = if args.quiet { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = SamplerConfig::default()
        .with_samples(args.samples)
        .with_interval(Duration::from_millis(args.interval_ms))
        .with_channel(&args.channel)
        .with_serial(
            SerialSettings::default()
                .with_baud_rate(args.baud)
                .with_read_timeout(Duration::from_millis(args.timeout_ms)),
        );

    if args.device.as_deref().is_some_and(|p| p.exists()) {
        println!("Magnetometer Calibration Tool\n");
        println!("Slowly rotate the device through ALL orientations until sampling ends:");
        println!("  - spin it flat through a full 360°");
        println!("  - tilt it on each side and spin again");
        println!("  - flip it upside down and spin again");
        println!(
            "Collecting {} samples of {:?} (~{}s)\n",
            config.samples,
            config.channel,
            config.nominal_duration().as_secs()
        );
    }

    let mut progress: Box<dyn Progress> = if args.quiet {
        Box::new(TracingProgress::new(50))
    } else {
        Box::new(ConsoleProgress::new(io::stdout()))
    };
    let mut out = io::stdout();

    let outcome = run_serial(args.device.as_deref(), &config, progress.as_mut(), &mut out)
        .context("Calibration aborted")?;

    if let Outcome::Calibrated(report) = outcome {
        tracing::info!(
            samples = report.samples,
            completed = report.completed,
            "Calibration finished"
        );
    }
    Ok(())
}
