//! Baseline-relative strength scaling.
//!
//! Maps the smoothed reading into a 0-10 display level using the startup
//! baseline and the pot-selected sensitivity range. All maps are truncating
//! integer linear interpolation, and every output is clamped rather than
//! allowed to escape its range.

/// Top of the discrete strength scale.
pub const MAX_LEVEL: u8 = 10;

/// Truncating integer linear map of `x` from [in_min, in_max] to
/// [out_min, out_max]. Inverted input intervals (in_max < in_min) are valid.
fn map_range(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Sensitivity range selected by the pot: [0, adc_max] mapped onto [0, span].
pub fn sensitivity_range(pot_raw: u16, adc_max: u16, span: u16) -> u16 {
    let adc_max = adc_max.max(1);
    let pot_raw = pot_raw.min(adc_max);
    map_range(i64::from(pot_raw), 0, i64::from(adc_max), 0, i64::from(span)) as u16
}

/// Strength level for a smoothed reading.
///
/// The source interval runs from `baseline` down to `baseline - range`: the
/// detector's output voltage drops as received power rises, so a stronger
/// signal means a smaller raw value. A range of 0 (pot at minimum) disables
/// detection entirely.
pub fn strength_level(average: u16, baseline: u16, range: u16) -> u8 {
    if range == 0 {
        return 0;
    }

    let level = map_range(
        i64::from(average),
        i64::from(baseline),
        i64::from(baseline) - i64::from(range),
        0,
        i64::from(MAX_LEVEL),
    );

    level.clamp(0, i64::from(MAX_LEVEL)) as u8
}

/// Buzzer frequency for a strength level; levels 1..=10 map linearly onto
/// [tone_min_hz, tone_max_hz], level 0 is silence.
pub fn tone_hz(level: u8, tone_min_hz: u16, tone_max_hz: u16) -> Option<u16> {
    if level == 0 {
        return None;
    }

    let level = level.min(MAX_LEVEL);
    let hz = map_range(
        i64::from(level),
        1,
        i64::from(MAX_LEVEL),
        i64::from(tone_min_hz),
        i64::from(tone_max_hz),
    );
    Some(hz as u16)
}
