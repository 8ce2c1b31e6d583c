//! Logical editing commands (^a, ^e, ^k, ^y ...)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertChar(char),
    MoveStartOfLine,
    MoveLeft,
    DeleteLeft,
    DeleteChar,
    MoveEndOfLine,
    MoveRight,
    Terminate,
    SplitLine,
    KillToEndOfLine,
    OpenLine,
    MoveDown,
    MoveUp,
    KillToStartOfLine,
    Yank,
    Refresh,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertChar(_) => "insert-char",
            Command::MoveStartOfLine => "move-start-of-line",
            Command::MoveLeft => "move-left",
            Command::DeleteLeft => "delete-left",
            Command::DeleteChar => "delete-char",
            Command::MoveEndOfLine => "move-end-of-line",
            Command::MoveRight => "move-right",
            Command::Terminate => "terminate",
            Command::SplitLine => "split-line",
            Command::KillToEndOfLine => "kill-to-end-of-line",
            Command::OpenLine => "open-line",
            Command::MoveDown => "move-down",
            Command::MoveUp => "move-up",
            Command::KillToStartOfLine => "kill-to-start-of-line",
            Command::Yank => "yank",
            Command::Refresh => "refresh",
        }
    }
}

/// Session lifecycle. `Terminated` is final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Editing,
    Terminated,
}

impl SessionState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }
}
