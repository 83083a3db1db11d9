use std::fmt;
use std::str::FromStr;

/// User-level commands the interactive pager understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    First,
    Prev,
    Next,
    Last,
    FocusLeft,
    FocusRight,
    Activate,
    Clear,
    Quit,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::First,
        Action::Prev,
        Action::Next,
        Action::Last,
        Action::FocusLeft,
        Action::FocusRight,
        Action::Activate,
        Action::Clear,
        Action::Quit,
    ];

    /// Name used in settings files.
    pub fn name(self) -> &'static str {
        match self {
            Action::First => "first",
            Action::Prev => "prev",
            Action::Next => "next",
            Action::Last => "last",
            Action::FocusLeft => "focus_left",
            Action::FocusRight => "focus_right",
            Action::Activate => "activate",
            Action::Clear => "clear",
            Action::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| s.to_string())
    }
}
