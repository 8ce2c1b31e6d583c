//! Host-side lookup tables from raw input to logical commands.
//!
//! Two sources are understood: crossterm key events, and curses-style integer
//! key codes (ASCII control characters plus the `KEY_*` arrow/backspace codes).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    Ignored,
}

impl From<Command> for InputAction {
    fn from(command: Command) -> Self {
        InputAction::Command(command)
    }
}

pub mod codes {
    pub const SOH: u32 = 0x01; // ^a
    pub const STX: u32 = 0x02; // ^b
    pub const EOT: u32 = 0x04; // ^d
    pub const ENQ: u32 = 0x05; // ^e
    pub const ACK: u32 = 0x06; // ^f
    pub const BEL: u32 = 0x07; // ^g
    pub const BS: u32 = 0x08; // ^h
    pub const NL: u32 = 0x0a; // ^j
    pub const VT: u32 = 0x0b; // ^k
    pub const FF: u32 = 0x0c; // ^l
    pub const SO: u32 = 0x0e; // ^n
    pub const SI: u32 = 0x0f; // ^o
    pub const DLE: u32 = 0x10; // ^p
    pub const NAK: u32 = 0x15; // ^u
    pub const EM: u32 = 0x19; // ^y
    pub const DEL: u32 = 0x7f;

    pub const KEY_DOWN: u32 = 0o402;
    pub const KEY_UP: u32 = 0o403;
    pub const KEY_LEFT: u32 = 0o404;
    pub const KEY_RIGHT: u32 = 0o405;
    pub const KEY_BACKSPACE: u32 = 0o407;
}

/// Decode a curses-style key code. Printable ASCII inserts itself.
pub fn decode_code(code: u32) -> InputAction {
    use codes::*;

    let command = match code {
        0x20..=0x7e => match char::from_u32(code) {
            Some(c) => Command::InsertChar(c),
            None => return InputAction::Ignored,
        },
        SOH => Command::MoveStartOfLine,
        STX | KEY_LEFT => Command::MoveLeft,
        BS | DEL | KEY_BACKSPACE => Command::DeleteLeft,
        EOT => Command::DeleteChar,
        ENQ => Command::MoveEndOfLine,
        ACK | KEY_RIGHT => Command::MoveRight,
        BEL => Command::Terminate,
        NL => Command::SplitLine,
        VT => Command::KillToEndOfLine,
        FF => Command::Refresh,
        SO | KEY_DOWN => Command::MoveDown,
        SI => Command::OpenLine,
        DLE | KEY_UP => Command::MoveUp,
        NAK => Command::KillToStartOfLine,
        EM => Command::Yank,
        _ => return InputAction::Ignored,
    };
    command.into()
}

/// Decode a crossterm key event. Key releases and repeats-as-release are ignored.
pub fn process_key(key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignored;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(c) => control_command(c.to_ascii_lowercase()),
            _ => InputAction::Ignored,
        };
    }

    let command = match key.code {
        KeyCode::Char(c) if !c.is_control() => Command::InsertChar(c),
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Home => Command::MoveStartOfLine,
        KeyCode::End => Command::MoveEndOfLine,
        KeyCode::Backspace => Command::DeleteLeft,
        KeyCode::Delete => Command::DeleteChar,
        KeyCode::Enter => Command::SplitLine,
        _ => return InputAction::Ignored,
    };
    command.into()
}

fn control_command(c: char) -> InputAction {
    let command = match c {
        'a' => Command::MoveStartOfLine,
        'b' => Command::MoveLeft,
        'd' => Command::DeleteChar,
        'e' => Command::MoveEndOfLine,
        'f' => Command::MoveRight,
        'g' => Command::Terminate,
        'h' => Command::DeleteLeft,
        'j' => Command::SplitLine,
        'k' => Command::KillToEndOfLine,
        'l' => Command::Refresh,
        'n' => Command::MoveDown,
        'o' => Command::OpenLine,
        'p' => Command::MoveUp,
        'u' => Command::KillToStartOfLine,
        'y' => Command::Yank,
        _ => return InputAction::Ignored,
    };
    command.into()
}
