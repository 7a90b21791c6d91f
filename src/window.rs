use heapless::Vec;

/// Largest supported moving-average window. RAM cost: MAX_WINDOW * 2 bytes
/// per SampleWindow regardless of the configured length.
pub const MAX_WINDOW: usize = 32;

/// Moving-average window over the most recent raw ADC samples.
///
/// Pure integer arithmetic: the running sum is adjusted incrementally on every
/// push (evicted sample out, new sample in), so `sum == Σ(slots)` holds
/// exactly at all times and no periodic reconciliation is needed.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    slots: Vec<u16, MAX_WINDOW>,
    sum: u32,
    cursor: usize,
}

impl SampleWindow {
    /// Create a window with every slot pre-filled with `seed`.
    ///
    /// Seeding with the calibration baseline means the first `window_size`
    /// cycles average around the baseline instead of sagging toward zero.
    ///
    /// `window_size` must be 1..=MAX_WINDOW (enforced by `Config::validate`).
    pub fn seeded(window_size: usize, seed: u16) -> Self {
        debug_assert!(window_size > 0 && window_size <= MAX_WINDOW);

        let window_size = window_size.clamp(1, MAX_WINDOW);
        let mut slots = Vec::new();
        for _ in 0..window_size {
            let _ = slots.push(seed);
        }

        Self {
            slots,
            sum: u32::from(seed) * window_size as u32,
            cursor: 0,
        }
    }

    /// Replace the oldest sample with `sample` and return the new smoothed
    /// average (truncating integer division by the window length).
    pub fn push(&mut self, sample: u16) -> u16 {
        self.sum -= u32::from(self.slots[self.cursor]);
        self.slots[self.cursor] = sample;
        self.sum += u32::from(sample);
        self.cursor = (self.cursor + 1) % self.slots.len();

        self.average()
    }

    /// Current smoothed average without pushing a new sample.
    pub fn average(&self) -> u16 {
        (self.sum / self.slots.len() as u32) as u16
    }

    /// Exact sum of the buffered samples.
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Configured window length.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
