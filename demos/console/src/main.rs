//! Interactive simulated field scanner.
//!
//! Stands in for the real hardware: a noisy simulated log detector feeds the
//! pipeline, the terminal is the display sink, and the buzzer shows up as a
//! tone indicator. Arrow keys move the simulated transmitter and the
//! sensitivity pot.

use std::cell::RefCell;
use std::io::{Result, Write, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{Event, KeyCode, KeyEvent, poll, read},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand_distr::Normal;
use rf_hound::{AnalogSource, Channel, Config, Delay, Frame, OutputSink, Scanner};

const ADC_MAX: u16 = 4095;
const VREF: f32 = 3.3;

// Simulated detector voltage bounds and step per keypress
const V_QUIET: f32 = 1.62;
const V_LOUD: f32 = 0.30;
const V_STEP: f32 = 0.02;
const POT_STEP: u16 = 128;

/// Knobs shared between the key handler and the simulated front end.
struct SimState {
    detector_v: f32,
    pot_raw: u16,
    running: bool,
}

/// Simulated AD8317 front end: the shared detector voltage plus Gaussian ADC
/// noise.
struct SimulatedFrontEnd {
    state: Rc<RefCell<SimState>>,
    rng: ThreadRng,
    noise: Normal<f32>,
}

impl SimulatedFrontEnd {
    fn new(state: Rc<RefCell<SimState>>) -> Self {
        Self {
            state,
            rng: rand::rng(),
            noise: Normal::new(0.0, 4.0).expect("valid noise distribution"),
        }
    }
}

impl AnalogSource for SimulatedFrontEnd {
    fn sample(&mut self, channel: Channel) -> u16 {
        let state = self.state.borrow();
        match channel {
            Channel::RfDetector => {
                let ideal = state.detector_v / VREF * f32::from(ADC_MAX);
                let noisy = ideal + self.rng.sample(self.noise);
                noisy.clamp(0.0, f32::from(ADC_MAX)) as u16
            }
            Channel::SensitivityPot => state.pot_raw,
        }
    }
}

struct WallClock;

impl Delay for WallClock {
    fn pause(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Terminal as display + buzzer indicator.
struct TerminalSink;

impl OutputSink for TerminalSink {
    type Error = std::io::Error;

    fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        execute!(stdout(), Print("RF Signal Scanner - acquiring baseline..."))?;
        Ok(())
    }

    fn render(&mut self, frame: &Frame) {
        // Render failures are not actionable mid-cycle; drop them
        let _ = draw(frame);
    }

    fn tone(&mut self, freq_hz: u16, _duration: Duration) {
        let _ = execute!(
            stdout(),
            MoveTo(0, 9),
            SetForegroundColor(Color::Yellow),
            Print(format!("  ♪ {freq_hz} Hz")),
            ResetColor,
        );
    }
}

fn strength_bar(level: u8) -> String {
    let mut bar = String::from("[");
    for i in 0..10 {
        bar.push(if i < level { '█' } else { '·' });
    }
    bar.push(']');
    bar
}

fn draw(frame: &Frame) -> Result<()> {
    let mut diag = String::new();
    let _ = frame.write_line(&mut diag);

    let mut out = stdout();
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetForegroundColor(Color::Blue),
        Print("=== RF Signal Scanner (simulated) ==="),
        ResetColor,
        MoveTo(0, 2),
        Print(format!(
            "  Raw: {:4}    V: {:.3} V    dBm: {:5.1}",
            frame.average, frame.voltage, frame.power_dbm
        )),
        MoveTo(0, 3),
        Print(format!(
            "  Sensitivity range: {:3}    Baseline: {}  (seen {}..{})",
            frame.sensitivity_range, frame.baseline, frame.min_observed, frame.max_observed
        )),
        MoveTo(0, 5),
        SetForegroundColor(Color::Green),
        Print(format!(
            "  Strength: {:2}/10  {}",
            frame.strength,
            strength_bar(frame.strength)
        )),
        ResetColor,
        MoveTo(0, 7),
        Print(format!("  serial> {diag}")),
        MoveTo(0, 11),
        SetForegroundColor(Color::DarkGrey),
        Print("  ←/→ transmitter distance   ↑/↓ sensitivity pot   q quit"),
        ResetColor,
    )?;
    out.flush()
}

fn handle_key(state: &Rc<RefCell<SimState>>, code: KeyCode) {
    let mut state = state.borrow_mut();
    match code {
        // Closer transmitter = more power = lower detector voltage
        KeyCode::Right => state.detector_v = (state.detector_v - V_STEP).max(V_LOUD),
        KeyCode::Left => state.detector_v = (state.detector_v + V_STEP).min(V_QUIET),
        KeyCode::Up => state.pot_raw = state.pot_raw.saturating_add(POT_STEP).min(ADC_MAX),
        KeyCode::Down => state.pot_raw = state.pot_raw.saturating_sub(POT_STEP),
        KeyCode::Char('q') | KeyCode::Esc => state.running = false,
        _ => {}
    }
}

fn cleanup_terminal() -> Result<()> {
    execute!(stdout(), Show, Clear(ClearType::All), MoveTo(0, 0))?;
    disable_raw_mode()
}

fn main() -> Result<()> {
    let state = Rc::new(RefCell::new(SimState {
        detector_v: V_QUIET,
        pot_raw: 2048,
        running: true,
    }));

    // Shorter settling than the reference hardware so the demo boots fast
    let config = Config {
        baseline_samples: 30,
        ..Config::default()
    };

    let front_end = SimulatedFrontEnd::new(Rc::clone(&state));
    let mut scanner = match Scanner::start(config, front_end, TerminalSink, WallClock) {
        Ok(scanner) => scanner,
        Err(e) => {
            let _ = cleanup_terminal();
            return Err(std::io::Error::other(format!("scanner startup failed: {e}")));
        }
    };

    while state.borrow().running {
        scanner.cycle();

        while poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent { code, .. }) = read()? {
                handle_key(&state, code);
            }
        }
    }

    cleanup_terminal()
}
