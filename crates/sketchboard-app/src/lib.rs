//! Sketchboard Application
//!
//! The application shell: ties the board to input normalization, keyboard
//! shortcuts, the theme preference, text entry and rendering.

mod app;
mod script;
mod shortcuts;
mod text_entry;

pub use app::{App, AppConfig, AppError, AppResult, CursorStyle, UiAction};
pub use script::{SessionScript, SessionStep};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use text_entry::{LoggingTextEntry, TextEntry};
