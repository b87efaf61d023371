/// Everything the user can do to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Spacebar release or a click on the time display.
    TogglePause,
    /// The start/reset button.
    StartReset,
    /// The pause/unpause button. Disabled while idle.
    PauseButton,
    ToggleTheme,
    Quit,
}

impl Action {
    /// Decodes one line of terminal input. A blank line stands in for the
    /// spacebar.
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return Some(Action::TogglePause);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "space" | "c" | "click" => Some(Action::TogglePause),
            "s" | "start" | "reset" => Some(Action::StartReset),
            "p" | "pause" | "unpause" => Some(Action::PauseButton),
            "t" | "theme" => Some(Action::ToggleTheme),
            "q" | "quit" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}
