/// Fixed-interval accumulator: feed it elapsed time, it reports how many
/// periods completed.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl IntervalTimer {
    /// Creates a timer firing every `interval_ms`.
    ///
    /// `interval_ms` must be positive; [`SpawnConfig::validate`](super::SpawnConfig::validate)
    /// guarantees this for the simulation's own timers.
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0.0,
        }
    }

    /// Returns the period in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Advances the timer and returns how many periods completed.
    ///
    /// Runs in constant time however long the gap; counts beyond `u64::MAX`
    /// saturate. Negative or non-finite `elapsed_ms` is ignored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self, elapsed_ms: f64) -> u64 {
        if !(elapsed_ms.is_finite() && elapsed_ms > 0.0 && self.interval_ms > 0.0) {
            return 0;
        }
        self.accumulated_ms += elapsed_ms;
        let periods = (self.accumulated_ms / self.interval_ms).floor();
        self.accumulated_ms %= self.interval_ms;
        periods as u64
    }

    /// Drops any partially accumulated period.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}
