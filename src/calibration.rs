use crate::config::Config;
use crate::hal::{AnalogSource, Channel, Delay};

/// Session baseline plus the extremes of the smoothed reading seen since
/// startup.
///
/// The min/max bounds are diagnostic history only; the strength map stays
/// anchored to the baseline. Created once at startup, never reset without a
/// full restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    baseline: u16,
    min_observed: u16,
    max_observed: u16,
}

impl Calibration {
    /// Establish the no-signal baseline: average `baseline_samples` raw
    /// readings taken `baseline_interval` apart.
    ///
    /// The pauses are settling time for the analog front end. They are a
    /// hardware property of the detector board, so this loop must not be
    /// shortened or run back-to-back.
    pub fn acquire<A, D>(source: &mut A, delay: &mut D, config: &Config) -> Self
    where
        A: AnalogSource,
        D: Delay,
    {
        let count = config.baseline_samples.max(1);

        let mut sum: u64 = 0;
        for _ in 0..count {
            sum += u64::from(source.sample(Channel::RfDetector));
            delay.pause(config.baseline_interval);
        }

        Self::at((sum / u64::from(count)) as u16)
    }

    /// Calibration anchored at a known baseline, bounds collapsed onto it.
    pub fn at(baseline: u16) -> Self {
        Self {
            baseline,
            min_observed: baseline,
            max_observed: baseline,
        }
    }

    /// Widen the session bounds with this cycle's smoothed average. Bounds
    /// only ever move outward.
    pub fn observe(&mut self, average: u16) {
        if average < self.min_observed {
            self.min_observed = average;
        }
        if average > self.max_observed {
            self.max_observed = average;
        }
    }

    pub fn baseline(&self) -> u16 {
        self.baseline
    }

    pub fn min_observed(&self) -> u16 {
        self.min_observed
    }

    pub fn max_observed(&self) -> u16 {
        self.max_observed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_start_at_baseline() {
        let cal = Calibration::at(2000);
        assert_eq!(cal.baseline(), 2000);
        assert_eq!(cal.min_observed(), 2000);
        assert_eq!(cal.max_observed(), 2000);
    }

    #[test]
    fn observe_widens_monotonically() {
        let mut cal = Calibration::at(2000);

        cal.observe(1950);
        cal.observe(2040);
        assert_eq!(cal.min_observed(), 1950);
        assert_eq!(cal.max_observed(), 2040);

        // Values inside the bounds change nothing
        cal.observe(2000);
        assert_eq!(cal.min_observed(), 1950);
        assert_eq!(cal.max_observed(), 2040);
    }
}
