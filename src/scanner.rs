use crate::calibration::Calibration;
use crate::config::{Config, ConfigError};
use crate::detector;
use crate::hal::{AnalogSource, Channel, Delay, Frame, OutputSink};
use crate::strength;
use crate::window::SampleWindow;

/// Startup failure: bad configuration, or the output sink (display) did not
/// come up. Either one leaves the device unusable.
#[derive(Debug, PartialEq)]
pub enum StartError<E> {
    Config(ConfigError),
    Sink(E),
}

impl<E> From<ConfigError> for StartError<E> {
    fn from(err: ConfigError) -> Self {
        StartError::Config(err)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for StartError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StartError::Config(err) => write!(f, "invalid configuration: {}", err),
            StartError::Sink(err) => write!(f, "output sink failed to initialize: {}", err),
        }
    }
}

/// Polling-loop driver for the field-strength pipeline.
///
/// Owns the window and calibration state outright, with the hardware behind
/// the seam traits, so the whole pipeline runs under test without a board.
/// Single task, no concurrency: every cycle executes synchronously and the
/// only suspensions are the deliberate fixed pauses on the injected `Delay`.
pub struct Scanner<A, O, D> {
    config: Config,
    source: A,
    sink: O,
    delay: D,
    window: SampleWindow,
    calibration: Calibration,
}

impl<A, O, D> Scanner<A, O, D>
where
    A: AnalogSource,
    O: OutputSink,
    D: Delay,
{
    /// Validate the configuration, bring up the sink, acquire the startup
    /// baseline, and seed the window with it.
    ///
    /// A sink that fails to initialize is fatal; there is nothing useful a
    /// scanner without a readout can do.
    pub fn start(
        config: Config,
        mut source: A,
        mut sink: O,
        mut delay: D,
    ) -> Result<Self, StartError<O::Error>> {
        config.validate()?;
        sink.init().map_err(StartError::Sink)?;

        let calibration = Calibration::acquire(&mut source, &mut delay, &config);
        let window = SampleWindow::seeded(config.window_size, calibration.baseline());

        Ok(Self {
            config,
            source,
            sink,
            delay,
            window,
            calibration,
        })
    }

    /// One full synchronous pass: sample, filter, convert, scale, render,
    /// beep, pause.
    pub fn cycle(&mut self) -> Frame {
        let pot_raw = self.source.sample(Channel::SensitivityPot);
        let range = strength::sensitivity_range(
            pot_raw,
            self.config.adc_max,
            self.config.sensitivity_span,
        );

        let raw = self.source.sample(Channel::RfDetector);
        let average = self.window.push(raw);
        self.calibration.observe(average);

        let voltage = detector::voltage(average, self.config.adc_max, self.config.vref);
        let power_dbm = self.config.detector.power_dbm(voltage);
        let level = strength::strength_level(average, self.calibration.baseline(), range);

        let frame = Frame {
            average,
            sensitivity_range: range,
            voltage,
            power_dbm,
            strength: level,
            baseline: self.calibration.baseline(),
            min_observed: self.calibration.min_observed(),
            max_observed: self.calibration.max_observed(),
        };

        self.sink.render(&frame);
        if let Some(freq) =
            strength::tone_hz(level, self.config.tone_min_hz, self.config.tone_max_hz)
        {
            self.sink.tone(freq, self.config.tone_duration);
        }

        self.delay.pause(self.config.cycle_period);
        frame
    }

    /// Run the polling loop until power-off.
    pub fn run(&mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }
}
