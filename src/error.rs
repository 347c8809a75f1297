use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the device link.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },
    #[error("Serial I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serial port error: {0}")]
    Serial(String),
    #[error("Channel {0:?} not present in telemetry")]
    MissingChannel(String),
    #[error("Malformed telemetry: {0}")]
    Malformed(String),
    #[error("Console response exceeded {0} bytes without a prompt")]
    ResponseTooLong(usize),
}

#[cfg(not(test))]
impl From<rppal::uart::Error> for DeviceError {
    fn from(err: rppal::uart::Error) -> Self {
        match err {
            rppal::uart::Error::Io(e) => DeviceError::Io(e),
            other => DeviceError::Serial(other.to_string()),
        }
    }
}

/// Errors that abort a calibration run.
#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}
