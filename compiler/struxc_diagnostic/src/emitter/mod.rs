//! Diagnostic rendering.

pub mod terminal;

pub use terminal::{format_line, TerminalEmitter};
