//! Sketchboard Core Library
//!
//! Platform-agnostic shapes, scene, undo history and the pointer-driven
//! interaction state machine for the Sketchboard whiteboard.

pub mod board;
pub mod config;
pub mod geometry;
pub mod history;
pub mod input;
pub mod scene;
pub mod shapes;
pub mod storage;
pub mod theme;
pub mod tools;

pub use board::{Board, BoardError, BoardEvent, BoardResult, Command};
pub use config::{BoardConfig, CommitPolicy};
pub use history::History;
pub use input::{InputState, KeyEvent, Modifiers, MouseButton, PointerEvent, TouchPoint};
pub use scene::{Scene, SceneError, SceneResult};
pub use shapes::{Renderable, Shape, ShapeId, ShapeKind, create_shape};
pub use storage::{MemoryStore, PreferenceStore, StorageError, StorageResult};
pub use theme::{ParseThemeError, THEME_KEY, Theme, load_theme, save_theme};
pub use tools::{Action, InteractionMode, Selection, ToolKind, ToolState};
