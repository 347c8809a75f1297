pub mod axes;
pub mod calibrator;
pub mod config;
pub mod device;
pub mod error;
pub mod progress;
pub mod sampler;
pub mod telemetry;

// Re-export commonly used types
pub use axes::Axes;
pub use calibrator::{Accumulator, Bounds};
pub use device::{Reading, SensorSource, SerialDevice};
pub use error::{CalibrationError, DeviceError};
pub use sampler::{CalibrationReport, Outcome};
