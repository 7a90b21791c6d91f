use std::collections::VecDeque;

use rf_hound::SampleWindow;

#[test]
fn all_baseline_window_averages_to_baseline_exactly() {
    // Spec scenario: baseline 2000, window of 20, all samples 2000
    let mut window = SampleWindow::seeded(20, 2000);
    assert_eq!(window.average(), 2000);

    for _ in 0..20 {
        assert_eq!(window.push(2000), 2000);
    }
}

#[test]
fn seeded_window_has_no_startup_sag() {
    let mut window = SampleWindow::seeded(20, 2000);

    // A single quieter sample barely moves a baseline-seeded window
    let avg = window.push(1990);
    assert_eq!(avg, (2000 * 19 + 1990) / 20);
    assert!(avg >= 1999);
}

#[test]
fn running_sum_never_drifts() {
    // Push far more samples than the window holds and check the running sum
    // against an independently tracked copy of the window contents.
    let window_size = 20;
    let mut window = SampleWindow::seeded(window_size, 1234);
    let mut shadow: VecDeque<u16> = std::iter::repeat(1234).take(window_size).collect();

    let mut x: u32 = 7;
    for _ in 0..10_000 {
        x = x.wrapping_mul(1103515245).wrapping_add(12345);
        let sample = (x % 4096) as u16;

        let avg = window.push(sample);
        shadow.pop_front();
        shadow.push_back(sample);

        let exact: u32 = shadow.iter().map(|&s| u32::from(s)).sum();
        assert_eq!(window.sum(), exact);
        assert_eq!(avg, (exact / window_size as u32) as u16);
    }
}

#[test]
fn window_of_one_tracks_input() {
    let mut window = SampleWindow::seeded(1, 0);
    assert_eq!(window.push(4095), 4095);
    assert_eq!(window.push(0), 0);
    assert_eq!(window.push(123), 123);
}

#[test]
fn full_scale_samples_do_not_overflow() {
    let mut window = SampleWindow::seeded(rf_hound::MAX_WINDOW, 4095);
    for _ in 0..100 {
        assert_eq!(window.push(4095), 4095);
    }
}
