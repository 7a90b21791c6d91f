use core::time::Duration;

use crate::detector::DetectorCurve;
use crate::window::MAX_WINDOW;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidAdcRange,
    InvalidWindowSize,
    InvalidDetectorWindow,
    InvalidToneBand,
    ZeroBaselineCount,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidAdcRange => write!(f, "adc_max must be greater than zero"),
            ConfigError::InvalidWindowSize => {
                write!(f, "window_size must be in 1..={}", MAX_WINDOW)
            }
            ConfigError::InvalidDetectorWindow => {
                write!(f, "detector v_min must be less than v_max")
            }
            ConfigError::InvalidToneBand => write!(f, "tone_min_hz must be less than tone_max_hz"),
            ConfigError::ZeroBaselineCount => {
                write!(f, "baseline_samples must be greater than zero")
            }
        }
    }
}

/// Every hardware-revision constant in one place, so swapping the detector
/// board or ADC width never touches pipeline code.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full-scale ADC reading (4095 for a 12-bit converter).
    pub adc_max: u16,
    /// ADC reference voltage in volts.
    pub vref: f32,
    /// Moving-average window length, 1..=MAX_WINDOW.
    pub window_size: usize,
    /// Log-detector transfer curve.
    pub detector: DetectorCurve,
    /// Upper end of the sensitivity pot mapping (raw counts below baseline
    /// considered full scale when the pot is wide open).
    pub sensitivity_span: u16,
    /// Number of raw samples averaged into the startup baseline.
    pub baseline_samples: u32,
    /// Settling pause between baseline samples.
    pub baseline_interval: Duration,
    /// Pause at the end of every polling cycle.
    pub cycle_period: Duration,
    /// Buzzer frequency at strength level 1.
    pub tone_min_hz: u16,
    /// Buzzer frequency at strength level 10.
    pub tone_max_hz: u16,
    /// Length of each beep.
    pub tone_duration: Duration,
}

impl Default for Config {
    /// Reference hardware: ESP32 12-bit ADC sampling an AD8317 log detector
    /// and a 10k sensitivity pot.
    fn default() -> Self {
        Self {
            adc_max: 4095,
            vref: 3.3,
            window_size: 20,
            detector: DetectorCurve::ad8317(),
            sensitivity_span: 200,
            baseline_samples: 100,
            baseline_interval: Duration::from_millis(10),
            cycle_period: Duration::from_millis(100),
            tone_min_hz: 500,
            tone_max_hz: 2000,
            tone_duration: Duration::from_millis(50),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adc_max == 0 {
            return Err(ConfigError::InvalidAdcRange);
        }

        if self.window_size == 0 || self.window_size > MAX_WINDOW {
            return Err(ConfigError::InvalidWindowSize);
        }

        // Written so that NaN endpoints also fail validation
        if !(self.detector.v_min < self.detector.v_max) {
            return Err(ConfigError::InvalidDetectorWindow);
        }

        if self.tone_min_hz >= self.tone_max_hz {
            return Err(ConfigError::InvalidToneBand);
        }

        if self.baseline_samples == 0 {
            return Err(ConfigError::ZeroBaselineCount);
        }

        Ok(())
    }
}
