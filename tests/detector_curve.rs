use rf_hound::DetectorCurve;
use rf_hound::detector::voltage;

#[test]
fn ad8317_scenario_values() {
    let curve = DetectorCurve::ad8317();

    // Top of the linear window lands on the intercept
    assert_eq!(curve.power_dbm(1.65), 0.0);
    // Below the window returns the floor
    assert_eq!(curve.power_dbm(0.2), -70.0);
}

#[test]
fn monotone_non_increasing_inside_window() {
    let curve = DetectorCurve::ad8317();

    let mut last = f32::INFINITY;
    let mut v = curve.v_min;
    while v <= curve.v_max {
        let dbm = curve.power_dbm(v);
        assert!(
            dbm <= last,
            "estimate rose from {} to {} at {} V",
            last,
            dbm,
            v
        );
        last = dbm;
        v += 0.01;
    }
}

#[test]
fn constant_outside_window() {
    let curve = DetectorCurve::ad8317();

    for v in [0.0, 0.1, 0.32] {
        assert_eq!(curve.power_dbm(v), curve.floor_dbm);
    }
    for v in [1.66, 2.5, 3.3] {
        assert_eq!(curve.power_dbm(v), curve.intercept);
    }
}

#[test]
fn raw_to_estimate_is_pure() {
    let curve = DetectorCurve::ad8317();

    for raw in [0_u16, 410, 1800, 2048, 4095] {
        let v1 = voltage(raw, 4095, 3.3);
        let v2 = voltage(raw, 4095, 3.3);
        assert_eq!(v1, v2);
        assert_eq!(curve.power_dbm(v1), curve.power_dbm(v2));
    }
}

#[test]
fn custom_detector_constants_are_honored() {
    // A hypothetical detector with a different window and floor
    let curve = DetectorCurve {
        v_min: 0.5,
        v_max: 2.0,
        slope: -40.0,
        intercept: -10.0,
        floor_dbm: -90.0,
    };

    assert_eq!(curve.power_dbm(0.4), -90.0);
    assert_eq!(curve.power_dbm(2.1), -10.0);
    // -40 * (1.0 - 2.0) + -10 = 30
    assert!((curve.power_dbm(1.0) - 30.0).abs() < 1e-4);
}
