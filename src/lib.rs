#![no_std]

mod calibration;
mod config;
mod scanner;
mod window;
pub mod detector;
pub mod hal;
pub mod strength;

pub use calibration::Calibration;
pub use config::{Config, ConfigError};
pub use detector::DetectorCurve;
pub use hal::{AnalogSource, Channel, Delay, Frame, OutputSink};
pub use scanner::{Scanner, StartError};
pub use window::{SampleWindow, MAX_WINDOW};
