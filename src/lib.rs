//! Emacs-style line editing inside a fixed-size viewport.
//!
//! [`Editor`] is the whole editing core: feed it one [`Command`] at a time and
//! read back the visible lines and cursor to paint. Decoding raw input lives in
//! [`editor::input`]; painting with ratatui lives in [`ui`].

pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod ui;

pub use config::Config;
pub use editor::{Command, CursorMove, Editor, InputAction, Position, SessionState};
pub use error::{Error, Result};
