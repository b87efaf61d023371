use std::io::{self, Write};

use crate::{
    stopwatch::{Phase, TimerState, format_elapsed},
    widget::Theme,
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET_STYLE: &str = "\x1b[0m";
const HINT: &str = "enter: pause/start  s: start/reset  p: pause  t: theme  q: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub disabled: bool,
}

impl Button {
    fn enabled(label: &'static str) -> Self {
        Self {
            label,
            disabled: false,
        }
    }
}

/// One frame of the widget, derived from the state and the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub time: String,
    pub start_reset: Button,
    pub pause: Button,
    pub theme: Button,
    pub theme_class: &'static str,
    palette: &'static str,
}

impl View {
    pub fn of(state: &TimerState, theme: Theme) -> Self {
        let phase = state.phase();

        let start_reset = match phase {
            Phase::Idle => Button::enabled("Start"),
            Phase::Running | Phase::Paused => Button::enabled("Reset"),
        };
        let pause = Button {
            label: match phase {
                Phase::Paused => "Unpause",
                Phase::Idle | Phase::Running => "Pause",
            },
            disabled: phase == Phase::Idle,
        };

        Self {
            time: format_elapsed(state.elapsed_ms),
            start_reset,
            pause,
            theme: Button::enabled(theme.label()),
            theme_class: theme.class(),
            palette: theme.palette(),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{CLEAR_SCREEN}")?;
        writeln!(out, "{}  {}  {RESET_STYLE}", self.palette, self.time)?;
        writeln!(
            out,
            "{} {} {}",
            render_button(&self.start_reset),
            render_button(&self.pause),
            render_button(&self.theme)
        )?;
        writeln!(out, "{HINT}")?;
        out.flush()
    }
}

fn render_button(button: &Button) -> String {
    if button.disabled {
        format!("({})", button.label)
    } else {
        format!("[{}]", button.label)
    }
}
