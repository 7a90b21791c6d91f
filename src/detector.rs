//! Log-detector voltage-to-power conversion.
//!
//! The transfer function is clamped linear: a floor below the detector's
//! usable window, the intercept above it (saturated), and the documented
//! mV/dB slope in between. Stateless; same voltage in, same estimate out.

use num_traits::AsPrimitive;

/// Transfer curve of a logarithmic RF power detector.
///
/// Note the inversion typical of these parts: output voltage falls as input
/// power rises, so `slope` is negative for real hardware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorCurve {
    /// Lowest usable output voltage; below this the reading means
    /// "no detectable signal".
    pub v_min: f32,
    /// Highest usable output voltage; above this the detector is saturated.
    pub v_max: f32,
    /// dB per volt of output swing (negative for inverting detectors).
    pub slope: f32,
    /// Power estimate at `v_max`, also the saturated ceiling.
    pub intercept: f32,
    /// Estimate returned below `v_min`.
    pub floor_dbm: f32,
}

impl DetectorCurve {
    /// Analog Devices AD8317, 1 MHz - 10 GHz log detector.
    pub const fn ad8317() -> Self {
        Self {
            v_min: 0.33,
            v_max: 1.65,
            slope: -22.0,
            intercept: 0.0,
            floor_dbm: -70.0,
        }
    }

    /// Estimated power in dBm for a detector output voltage.
    #[inline]
    pub fn power_dbm(&self, voltage: f32) -> f32 {
        if voltage < self.v_min {
            return self.floor_dbm;
        }
        if voltage > self.v_max {
            return self.intercept;
        }
        self.slope * (voltage - self.v_max) + self.intercept
    }
}

impl Default for DetectorCurve {
    fn default() -> Self {
        Self::ad8317()
    }
}

/// Voltage at the converter pin for a raw ADC reading.
#[inline]
pub fn voltage<T>(raw: T, adc_max: u16, vref: f32) -> f32
where
    T: AsPrimitive<f32>,
{
    raw.as_() * (vref / f32::from(adc_max.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_reading_is_vref() {
        let v = voltage(4095_u16, 4095, 3.3);
        assert!((v - 3.3).abs() < 1e-6);
    }

    #[test]
    fn ad8317_endpoints() {
        let curve = DetectorCurve::ad8317();

        // At v_max the linear region lands exactly on the intercept
        assert_eq!(curve.power_dbm(1.65), 0.0);
        // Below the window: fixed floor
        assert_eq!(curve.power_dbm(0.2), -70.0);
        // Above the window: saturated at the intercept
        assert_eq!(curve.power_dbm(2.0), 0.0);
    }

    #[test]
    fn linear_region_follows_slope() {
        let curve = DetectorCurve::ad8317();
        let dbm = curve.power_dbm(1.0);
        // -22 * (1.0 - 1.65) = 14.3
        assert!((dbm - 14.3).abs() < 1e-4);
    }

    #[test]
    fn estimate_is_idempotent() {
        let curve = DetectorCurve::ad8317();
        let v = voltage(1800_u16, 4095, 3.3);
        assert_eq!(curve.power_dbm(v), curve.power_dbm(v));
    }
}
