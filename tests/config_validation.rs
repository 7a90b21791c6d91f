use rf_hound::{Config, ConfigError, MAX_WINDOW};

#[test]
fn default_config_is_valid() {
    assert_eq!(Config::default().validate(), Ok(()));
}

#[test]
fn rejects_zero_adc_range() {
    let config = Config {
        adc_max: 0,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidAdcRange));
}

#[test]
fn rejects_zero_window() {
    let config = Config {
        window_size: 0,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidWindowSize));
}

#[test]
fn rejects_oversized_window() {
    let config = Config {
        window_size: MAX_WINDOW + 1,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidWindowSize));
}

#[test]
fn accepts_largest_window() {
    let config = Config {
        window_size: MAX_WINDOW,
        ..Config::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn rejects_inverted_detector_window() {
    let mut config = Config::default();
    config.detector.v_min = 1.65;
    config.detector.v_max = 0.33;
    assert_eq!(config.validate(), Err(ConfigError::InvalidDetectorWindow));
}

#[test]
fn rejects_nan_detector_window() {
    let mut config = Config::default();
    config.detector.v_min = f32::NAN;
    assert_eq!(config.validate(), Err(ConfigError::InvalidDetectorWindow));
}

#[test]
fn rejects_inverted_tone_band() {
    let config = Config {
        tone_min_hz: 2000,
        tone_max_hz: 500,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidToneBand));
}

#[test]
fn rejects_zero_baseline_count() {
    let config = Config {
        baseline_samples: 0,
        ..Config::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroBaselineCount));
}
