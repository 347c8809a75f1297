use std::io;
use std::path::{Path, PathBuf};

// Use rppal in production
#[cfg(not(test))]
use rppal::uart::{Parity, Queue, Uart};

#[cfg(test)]
// This is only used in testing, not compiled in release.
use crate::mocks::mock_uart::{Parity, Queue, Uart};

use crate::axes::Axes;
use crate::config::{CONSOLE_PROMPT, MAX_RESPONSE_BYTES, SerialSettings, TELEMETRY_COMMAND};
use crate::error::DeviceError;
use crate::telemetry::parse_channel;

/// Outcome of a single sensor read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Sample(Axes),
    /// The device stream closed or ran dry. Not an error.
    EndOfStream,
}

/// A device that can be asked for the current value of a sensor channel.
pub trait SensorSource {
    fn read_sensor(&mut self, channel: &str) -> Result<Reading, DeviceError>;

    /// Release the device. Dropping without calling this also releases it,
    /// but skips waiting for pending output.
    fn close(self) -> Result<(), DeviceError>
    where
        Self: Sized;
}

/// Flight controller console reached over a serial tty.
pub struct SerialDevice {
    uart: Uart,
    path: PathBuf,
    response: Vec<u8>,
}

impl SerialDevice {
    /// Open the console at `path` and wait for its prompt.
    pub fn open(path: &Path, settings: &SerialSettings) -> Result<Self, DeviceError> {
        let open_error = |e: &dyn std::fmt::Display| DeviceError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut uart = Uart::with_path(path, settings.baud_rate, Parity::None, 8, 1)
            .map_err(|e| open_error(&e))?;
        uart.set_read_mode(0, settings.read_timeout)?;
        uart.set_write_mode(true)?;
        uart.flush(Queue::Both)?;

        let mut device = Self {
            uart,
            path: path.to_path_buf(),
            response: Vec::with_capacity(256),
        };

        // An empty command makes the console print a fresh prompt.
        device.send(b"\r")?;
        if device.read_response()?.is_none() {
            return Err(open_error(&"no console prompt"));
        }

        tracing::info!("Opened device console at {}", path.display());
        Ok(device)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn send(&mut self, mut bytes: &[u8]) -> Result<(), DeviceError> {
        while !bytes.is_empty() {
            let written = self.uart.write(bytes)?;
            if written == 0 {
                return Err(io::Error::from(io::ErrorKind::WriteZero).into());
            }
            bytes = &bytes[written..];
        }
        Ok(())
    }

    /// Collect output up to the next prompt. `None` when the stream ends first.
    fn read_response(&mut self) -> Result<Option<String>, DeviceError> {
        self.response.clear();
        let mut chunk = [0u8; 256];

        loop {
            let n = match self.uart.read(&mut chunk).map_err(DeviceError::from) {
                Ok(0) => return Ok(None),
                Ok(n) => n,
                Err(DeviceError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };
            self.response.extend_from_slice(&chunk[..n]);

            if self.response.ends_with(CONSOLE_PROMPT) {
                let body = &self.response[..self.response.len() - CONSOLE_PROMPT.len()];
                let text = String::from_utf8_lossy(body).into_owned();
                tracing::trace!("Console response: {:?}", text);
                return Ok(Some(text));
            }
            if self.response.len() > MAX_RESPONSE_BYTES {
                return Err(DeviceError::ResponseTooLong(MAX_RESPONSE_BYTES));
            }
        }
    }
}

impl SensorSource for SerialDevice {
    fn read_sensor(&mut self, channel: &str) -> Result<Reading, DeviceError> {
        self.send(TELEMETRY_COMMAND)?;
        match self.read_response()? {
            Some(text) => Ok(Reading::Sample(parse_channel(&text, channel)?)),
            None => {
                tracing::debug!("Device stream ended while reading {}", channel);
                Ok(Reading::EndOfStream)
            }
        }
    }

    fn close(self) -> Result<(), DeviceError> {
        self.uart.drain()?;
        tracing::info!("Closed device console at {}", self.path.display());
        Ok(())
    }
}
