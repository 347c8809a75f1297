//! The bounded sampling loop behind the `calibrate` tool.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;

use crate::axes::Axes;
use crate::calibrator::{Accumulator, Bounds};
use crate::config::SamplerConfig;
use crate::device::{Reading, SensorSource, SerialDevice};
use crate::error::{CalibrationError, DeviceError};
use crate::progress::Progress;

/// Result of a sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationReport {
    /// Samples folded into the bounds.
    pub samples: usize,
    pub bounds: Option<Bounds>,
    /// Hard-iron offset, `None` if the stream ended before the first sample.
    pub offset: Option<Axes>,
    /// `false` when the device stream ended before the configured count.
    pub completed: bool,
}

/// How a call to [`run`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No device path was given.
    SerialNotSpecified,
    /// The device path does not exist.
    NotFound(PathBuf),
    Calibrated(CalibrationReport),
}

/// Read up to `config.samples` readings from `source`, tracking per-axis
/// extremes. Stops early without error when the source reports end of stream.
pub fn sample<S: SensorSource>(
    source: &mut S,
    config: &SamplerConfig,
    progress: &mut dyn Progress,
) -> Result<CalibrationReport, CalibrationError> {
    let mut acc = Accumulator::new();
    let mut completed = true;

    tracing::info!(
        "Sampling {:?} channel {} times every {:?}",
        config.channel,
        config.samples,
        config.interval
    );

    for iteration in 1..=config.samples {
        let sample = match source.read_sensor(&config.channel)? {
            Reading::Sample(sample) => sample,
            Reading::EndOfStream => {
                tracing::warn!(
                    "Device stream ended after {} of {} samples",
                    acc.samples(),
                    config.samples
                );
                completed = false;
                break;
            }
        };

        let bounds = acc.fold(sample);
        progress
            .update(iteration, &bounds)
            .map_err(CalibrationError::Output)?;
        thread::sleep(config.interval);
    }

    Ok(CalibrationReport {
        samples: acc.samples(),
        bounds: acc.bounds(),
        offset: acc.offset(),
        completed,
    })
}

/// Calibrate the device at `path`.
///
/// Usage problems (no path, missing path) are reported on `out` and return
/// normally without touching the device. Otherwise the device is opened with
/// `open`, sampled, the offset is written to `out` and the device is closed.
/// A read failure other than end of stream is returned as-is; the device is
/// then released only by drop.
pub fn run<S, O, W>(
    path: Option<&Path>,
    config: &SamplerConfig,
    open: O,
    progress: &mut dyn Progress,
    out: &mut W,
) -> Result<Outcome, CalibrationError>
where
    S: SensorSource,
    O: FnOnce(&Path) -> Result<S, DeviceError>,
    W: Write,
{
    let Some(path) = path else {
        writeln!(out, "Serial not specified").map_err(CalibrationError::Output)?;
        return Ok(Outcome::SerialNotSpecified);
    };
    if !path.exists() {
        writeln!(out, "Not found: {}", path.display()).map_err(CalibrationError::Output)?;
        return Ok(Outcome::NotFound(path.to_path_buf()));
    }

    let mut source = open(path)?;
    let report = sample(&mut source, config, progress)?;

    progress.finish().map_err(CalibrationError::Output)?;
    let written = match report.offset {
        Some(offset) => writeln!(out, "offset: {}", offset),
        None => writeln!(out, "offset: none (no samples collected)"),
    };
    written.map_err(CalibrationError::Output)?;

    source.close()?;
    Ok(Outcome::Calibrated(report))
}

/// [`run`] against the serial console at `path`.
pub fn run_serial<W: Write>(
    path: Option<&Path>,
    config: &SamplerConfig,
    progress: &mut dyn Progress,
    out: &mut W,
) -> Result<Outcome, CalibrationError> {
    run(
        path,
        config,
        |path| SerialDevice::open(path, &config.serial),
        progress,
        out,
    )
}
