//! Hardware seams: analog input, time source, and the display/buzzer sink.
//!
//! Everything the scanner touches outside its own state goes through these
//! traits, so the pipeline runs identically against real pins or test
//! doubles.

use core::fmt;
use core::time::Duration;

/// Logical analog input channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Log-detector output.
    RfDetector,
    /// Sensitivity pot wiper.
    SensitivityPot,
}

/// Analog front end. Readings are always valid by construction: a saturated
/// or stuck-at-rail value is data, not a fault, and higher layers clamp.
pub trait AnalogSource {
    fn sample(&mut self, channel: Channel) -> u16;
}

/// Injectable time source. The scanner never sleeps on its own, so tests can
/// run calibration and full cycles without real-time waits.
pub trait Delay {
    fn pause(&mut self, period: Duration);
}

/// Per-cycle output of the pipeline, everything the display, buzzer, and
/// diagnostic stream consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Smoothed raw reading.
    pub average: u16,
    /// Pot-selected sensitivity range.
    pub sensitivity_range: u16,
    /// Detector output voltage for the smoothed reading.
    pub voltage: f32,
    /// Estimated power in dBm.
    pub power_dbm: f32,
    /// Discrete strength level, 0..=10.
    pub strength: u8,
    /// Startup baseline the strength map is anchored to.
    pub baseline: u16,
    /// Smallest smoothed reading seen this session.
    pub min_observed: u16,
    /// Largest smoothed reading seen this session.
    pub max_observed: u16,
}

impl Frame {
    /// One plain-text diagnostic line in serial-monitor format. No contract
    /// on format stability.
    pub fn write_line<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "Raw: {} Range: {} V: {:.3}V dBm: {:.1} Strength: {} (baseline {}, seen {}..{})",
            self.average,
            self.sensitivity_range,
            self.voltage,
            self.power_dbm,
            self.strength,
            self.baseline,
            self.min_observed,
            self.max_observed,
        )
    }
}

/// Display plus buzzer.
///
/// `init` is the one fatal seam: a device with no readout is unusable, so
/// startup stops there. Rendering and tones are infallible; runtime
/// degradation is handled upstream by clamping, never by signaling failure.
pub trait OutputSink {
    type Error;

    fn init(&mut self) -> Result<(), Self::Error>;

    fn render(&mut self, frame: &Frame);

    fn tone(&mut self, freq_hz: u16, duration: Duration);
}
