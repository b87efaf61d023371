use std::io::Write;

use async_channel::Receiver;
use tracing::{debug, info, trace};

use crate::{
    config::Config,
    error::StopwatchError,
    stopwatch::{Phase, TimerState},
    ticker::{Period, TickSource},
    widget::{Action, Theme, View},
};

/// The widget: stopwatch state, theme, and the tick source that drives the
/// state while it is running.
pub struct App {
    state: TimerState,
    theme: Theme,
    ticks: TickSource<TimerState>,
    running_period: Period,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, StopwatchError> {
        let running_period = Period::every(config.tick)?;
        let mut ticks = TickSource::new(config.immediate);
        ticks.set_callback(TimerState::tick);

        Ok(Self {
            state: TimerState::new(),
            theme: config.theme,
            ticks,
            running_period,
        })
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_ticking(&self) -> bool {
        self.ticks.is_enabled()
    }

    pub fn view(&self) -> View {
        View::of(&self.state, self.theme)
    }

    /// Applies one user action. Must be called inside a tokio runtime.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, phase = ?self.state.phase(), "dispatch");
        match action {
            Action::TogglePause => self.state.toggle_pause(),
            Action::StartReset => self.state.toggle_start(),
            Action::PauseButton => {
                if self.state.phase() == Phase::Idle {
                    debug!("pause button is disabled while idle");
                } else {
                    self.state.toggle_pause();
                }
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(theme = %self.theme, "theme changed");
            }
            Action::Quit => {}
        }
        self.sync_schedule();
    }

    /// Ticks run only while the stopwatch is running.
    fn sync_schedule(&mut self) {
        let period = if self.state.is_running() {
            self.running_period
        } else {
            Period::Disabled
        };
        self.ticks.set_period(period, &mut self.state);
    }

    /// Renders, then serves ticks and actions until `Quit` arrives or the
    /// action channel closes.
    pub async fn run<W: Write>(
        &mut self,
        actions: Receiver<Action>,
        out: &mut W,
    ) -> Result<(), StopwatchError> {
        self.view().render(out)?;

        loop {
            tokio::select! {
                _ = self.ticks.wait() => {
                    self.ticks.fire(&mut self.state);
                    trace!(elapsed_ms = self.state.elapsed_ms, "tick");
                }
                action = actions.recv() => match action {
                    Ok(Action::Quit) => {
                        info!(elapsed_ms = self.state.elapsed_ms, "quit");
                        break;
                    }
                    Ok(action) => self.dispatch(action),
                    Err(_) => {
                        debug!("action channel closed");
                        break;
                    }
                },
            }
            self.view().render(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;

    use super::*;
    use crate::stopwatch::TICK_MS;

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_ticks_immediately() {
        let mut app = app();
        assert!(!app.is_ticking());

        app.dispatch(Action::TogglePause);
        assert_eq!(app.state().phase(), Phase::Running);
        assert_eq!(app.state().elapsed_ms, TICK_MS);
        assert!(app.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_without_immediate_tick() {
        let config = Config {
            immediate: false,
            ..Config::default()
        };
        let mut app = App::new(&config).unwrap();

        app.dispatch(Action::StartReset);
        assert_eq!(app.state().phase(), Phase::Running);
        assert_eq!(app.state().elapsed_ms, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticking() {
        let mut app = app();
        app.dispatch(Action::StartReset);
        app.dispatch(Action::PauseButton);

        assert_eq!(app.state().phase(), Phase::Paused);
        assert!(!app.is_ticking());
        assert_eq!(app.state().elapsed_ms, TICK_MS);

        app.dispatch(Action::PauseButton);
        assert_eq!(app.state().phase(), Phase::Running);
        assert_eq!(app.state().elapsed_ms, 2 * TICK_MS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_button_disabled_while_idle() {
        let mut app = app();
        app.dispatch(Action::PauseButton);
        assert_eq!(app.state(), &TimerState::new());
        assert!(!app.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_reset_while_running_resets() {
        let mut app = app();
        app.dispatch(Action::StartReset);
        app.dispatch(Action::StartReset);

        assert_eq!(app.state(), &TimerState::new());
        assert!(!app.is_ticking());
        assert_eq!(app.view().start_reset.label, "Start");
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_toggle_leaves_timer_alone() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Dark);

        app.dispatch(Action::ToggleTheme);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.view().theme_class, "light");
        assert_eq!(app.state(), &TimerState::new());
        assert!(!app.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_advances_once_per_interval() {
        let (tx, rx) = async_channel::unbounded();
        let mut app = app();

        tx.send(Action::TogglePause).await.unwrap();
        tokio::spawn(async move {
            sleep(Duration::from_millis(3500)).await;
            tx.send(Action::Quit).await.unwrap();
        });

        let mut out = Vec::new();
        app.run(rx, &mut out).await.unwrap();

        assert_eq!(app.state().elapsed_ms, 4 * TICK_MS);
        let frames = String::from_utf8(out).unwrap();
        assert!(frames.contains("00:00"));
        assert!(frames.contains("00:04"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_holds_time_while_paused() {
        let (tx, rx) = async_channel::unbounded();
        let mut app = app();

        tx.send(Action::TogglePause).await.unwrap();
        tokio::spawn(async move {
            sleep(Duration::from_millis(2500)).await;
            tx.send(Action::TogglePause).await.unwrap();
            sleep(Duration::from_millis(5000)).await;
            tx.send(Action::TogglePause).await.unwrap();
            sleep(Duration::from_millis(1500)).await;
            tx.send(Action::Quit).await.unwrap();
        });

        let mut out = Vec::new();
        app.run(rx, &mut out).await.unwrap();

        // 3 ticks before the pause, 1 on unpause, 1 a second later.
        assert_eq!(app.state().elapsed_ms, 5 * TICK_MS);
        assert_eq!(app.state().phase(), Phase::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_channel_closes() {
        let (tx, rx) = async_channel::unbounded();
        let mut app = app();

        tx.send(Action::ToggleTheme).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        app.run(rx, &mut out).await.unwrap();
        assert_eq!(app.theme(), Theme::Light);
    }
}
