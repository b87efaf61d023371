use std::time::Duration;
use tokio::time::Instant;
use tokio::time::{Interval, MissedTickBehavior, interval_at};

/// A running schedule. Dropping it cancels every pending tick.
pub(crate) struct Clock {
    inner: Interval,
}

impl Clock {
    /// First tick lands one full period from now. Late ticks push the
    /// schedule back instead of bursting, so ticks stay at least `period`
    /// apart. Must be called inside a tokio runtime.
    pub(crate) fn new(period: Duration) -> Self {
        let mut inner = interval_at(Instant::now() + period, period);
        inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { inner }
    }

    pub(crate) async fn tick(&mut self) {
        self.inner.tick().await;
    }
}
