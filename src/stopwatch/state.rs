use tracing::debug;

/// Milliseconds added to the elapsed time by one tick.
pub const TICK_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

/// The stopwatch state. Every transition is total; calling one that does not
/// apply to the current phase leaves the state untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub started: bool,
    pub paused: bool,
    /// Accumulated running time. Only grows while running.
    pub elapsed_ms: u64,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.started, self.paused) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::Running,
            (true, true) => Phase::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        debug!(elapsed_ms = self.elapsed_ms, "stopwatch started");
    }

    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.paused = true;
        debug!(elapsed_ms = self.elapsed_ms, "stopwatch paused");
    }

    pub fn unpause(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        debug!(elapsed_ms = self.elapsed_ms, "stopwatch unpaused");
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("stopwatch reset");
    }

    /// Start from idle, otherwise reset. There is no plain stop.
    pub fn toggle_start(&mut self) {
        if self.started {
            self.reset();
        } else {
            self.start();
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase() {
            Phase::Idle => self.start(),
            Phase::Paused => self.unpause(),
            Phase::Running => self.pause(),
        }
    }

    pub fn tick(&mut self) {
        if self.is_running() {
            self.elapsed_ms += TICK_MS;
        }
    }
}
