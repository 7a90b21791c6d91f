//! Walks the pipeline through a scripted approach toward a transmitter and
//! prints every stage: raw reading, smoothed average, voltage, power
//! estimate, and strength level.

use std::collections::VecDeque;
use std::time::Duration;

use rf_hound::{AnalogSource, Channel, Config, Delay, Frame, OutputSink, Scanner};

/// Plays back a scripted RF trace; the pot is parked at a fixed position.
struct ScriptedSource {
    rf: VecDeque<u16>,
    last_rf: u16,
    pot: u16,
}

impl AnalogSource for ScriptedSource {
    fn sample(&mut self, channel: Channel) -> u16 {
        match channel {
            Channel::RfDetector => {
                if let Some(next) = self.rf.pop_front() {
                    self.last_rf = next;
                }
                self.last_rf
            }
            Channel::SensitivityPot => self.pot,
        }
    }
}

/// No waiting in a print-only walkthrough.
struct NoDelay;

impl Delay for NoDelay {
    fn pause(&mut self, _period: Duration) {}
}

/// Serial-monitor style sink: one diagnostic line per cycle, beeps as text.
struct PrintSink;

impl OutputSink for PrintSink {
    type Error = std::convert::Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        println!("RF Signal Scanner - pipeline walkthrough\n");
        Ok(())
    }

    fn render(&mut self, frame: &Frame) {
        let mut line = String::new();
        let _ = frame.write_line(&mut line);
        println!("{line}");
    }

    fn tone(&mut self, freq_hz: u16, duration: Duration) {
        println!("  beep: {freq_hz} Hz for {} ms", duration.as_millis());
    }
}

fn main() {
    // Ambient hovers around 2000 counts, then a transmitter closes in and
    // leaves again. The detector is inverting: closer means lower counts.
    let ambient = [2000_u16, 2003, 1998, 2001, 1999, 2002, 2000, 1997];
    let approach = [1980_u16, 1950, 1920, 1890, 1860, 1830, 1810, 1800];
    let retreat = [1820_u16, 1860, 1900, 1940, 1970, 1990, 2000, 2000];

    let source = ScriptedSource {
        rf: ambient
            .iter()
            .chain(&approach)
            .chain(&retreat)
            .copied()
            .collect(),
        last_rf: 2000,
        pot: 4095, // sensitivity wide open: full 200-count range
    };

    let config = Config {
        window_size: 8,
        baseline_samples: 8,
        ..Config::default()
    };

    let mut scanner =
        Scanner::start(config, source, PrintSink, NoDelay).expect("valid demo configuration");
    println!("baseline: {} counts\n", scanner.calibration().baseline());

    for _ in 0..16 {
        scanner.cycle();
    }

    let cal = scanner.calibration();
    println!(
        "\nsession bounds: {}..{} around baseline {}",
        cal.min_observed(),
        cal.max_observed(),
        cal.baseline()
    );
}
