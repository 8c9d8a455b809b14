//! Interactive TUI interface
//!
//! Maps terminal key events onto game actions and owns the timer that
//! delivers scheduled message clears.

mod app;
mod rendering;

pub use app::{App, Command, command_for, run_tui};
