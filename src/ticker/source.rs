use tracing::{debug, trace};

use crate::{
    error::StopwatchError,
    ticker::{clock::Clock, period::Period},
};

pub type TickCallback<C> = Box<dyn FnMut(&mut C)>;

/// Invokes the current callback once per period while enabled.
///
/// The callback lives in a replaceable slot that is read at every firing, so
/// swapping it never disturbs the schedule. Changing the period tears the
/// schedule down and builds a new one.
///
/// `wait` and `fire` are split so the source composes with `tokio::select!`:
/// a `wait` that loses the race is dropped and its tick is never delivered.
pub struct TickSource<C> {
    callback: Option<TickCallback<C>>,
    period: Period,
    /// Fire once synchronously whenever the source becomes enabled.
    immediate: bool,
    clock: Option<Clock>,
    fired: u64,
}

impl<C> TickSource<C> {
    /// A disabled source with no callback installed.
    pub fn new(immediate: bool) -> Self {
        Self {
            callback: None,
            period: Period::Disabled,
            immediate,
            clock: None,
            fired: 0,
        }
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut C) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn is_enabled(&self) -> bool {
        self.clock.is_some()
    }

    pub fn immediate(&self) -> bool {
        self.immediate
    }

    /// Number of firings so far, including immediate ones.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Reschedules only when the period actually changes.
    pub fn set_period(&mut self, period: Period, ctx: &mut C) {
        if period == self.period {
            return;
        }
        debug!(from = ?self.period, to = ?period, "tick period changed");
        self.period = period;
        self.reschedule(ctx);
    }

    pub fn set_immediate(&mut self, immediate: bool, ctx: &mut C) {
        if immediate == self.immediate {
            return;
        }
        self.immediate = immediate;
        self.reschedule(ctx);
    }

    /// Resolves when the next tick is due. Never resolves while disabled.
    pub async fn wait(&mut self) {
        match self.clock.as_mut() {
            Some(clock) => clock.tick().await,
            None => std::future::pending::<()>().await,
        }
    }

    /// Runs the current callback after a completed `wait`. Does nothing while
    /// disabled, or when no callback is installed.
    pub fn fire(&mut self, ctx: &mut C) {
        if self.clock.is_none() {
            trace!("tick dropped, source is disabled");
            return;
        }
        self.invoke(ctx);
    }

    fn invoke(&mut self, ctx: &mut C) {
        self.fired += 1;
        match self.callback.as_mut() {
            Some(callback) => callback(ctx),
            None => trace!("tick with no callback installed"),
        }
    }

    fn reschedule(&mut self, ctx: &mut C) {
        self.clock = None;

        if let Some(interval) = self.period.duration() {
            if self.immediate {
                self.invoke(ctx);
            }
            self.clock = Some(Clock::new(interval));
        }
    }
}

#[derive(Default, Clone, Copy)]
pub struct TickSourceBuilder {
    period: Period,
    immediate: bool,
}

impl TickSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(&mut self, period: Period) -> &mut Self {
        self.period = period;
        self
    }

    pub fn with_interval_millis(&mut self, millis: u64) -> Result<&mut Self, StopwatchError> {
        self.period = Period::every_millis(millis)?;
        Ok(self)
    }

    pub fn with_immediate(&mut self, immediate: bool) -> &mut Self {
        self.immediate = immediate;
        self
    }

    /// Installs the callback and activates the configured period, firing
    /// into `ctx` right away when immediate-fire is set.
    pub fn build<C, F>(self, callback: F, ctx: &mut C) -> TickSource<C>
    where
        F: FnMut(&mut C) + 'static,
    {
        let mut source = TickSource::new(self.immediate);
        source.set_callback(callback);
        source.set_period(self.period, ctx);
        source
    }
}
