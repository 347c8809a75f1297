use std::time::Duration;

// ** SAMPLING CONFIGURATION ** //

/// 30 seconds at a nominal 50 Hz sensor rate.
pub const SAMPLE_COUNT: usize = 30 * 50;
pub const SAMPLE_INTERVAL_MS: u64 = 20;
/// Telemetry channel carrying the raw magnetometer vector.
pub const SENSOR_CHANNEL: &str = "magnetism";

// ** SERIAL CONFIGURATION ** //

pub const BAUD_RATE: u32 = 115_200;
/// How long a single read may block before the stream is treated as ended.
pub const READ_TIMEOUT_MS: u64 = 1000;
/// Printed by the device console after each command's output.
pub const CONSOLE_PROMPT: &[u8] = b"# ";
pub const TELEMETRY_COMMAND: &[u8] = b"telemetry\r";
/// Upper bound on a single console response.
pub const MAX_RESPONSE_BYTES: usize = 4096;

/// Serial line settings for the device console.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialSettings {
    pub baud_rate: u32,
    pub read_timeout: Duration,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            baud_rate: BAUD_RATE,
            read_timeout: Duration::from_millis(READ_TIMEOUT_MS),
        }
    }
}

impl SerialSettings {
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}

/// Configuration for one calibration run.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Number of sampling iterations.
    pub samples: usize,
    /// Pause after each sample.
    pub interval: Duration,
    /// Telemetry channel to read.
    pub channel: String,
    pub serial: SerialSettings,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: SAMPLE_COUNT,
            interval: Duration::from_millis(SAMPLE_INTERVAL_MS),
            channel: SENSOR_CHANNEL.to_string(),
            serial: SerialSettings::default(),
        }
    }
}

impl SamplerConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_serial(mut self, serial: SerialSettings) -> Self {
        self.serial = serial;
        self
    }

    /// Nominal length of a full run, ignoring read latency.
    pub fn nominal_duration(&self) -> Duration {
        self.interval * self.samples as u32
    }
}
