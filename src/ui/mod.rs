//! UI module - crossterm-based cabinet for interactive play

pub mod state;
pub mod terminal;

pub use state::{LogCategory, LogEntry, StatusLog};
pub use terminal::{TerminalCabinet, TerminalSession, TerminalStrip};
