//! The interaction state machine.
//!
//! [`Board`] turns tool switches, pointer presses, moves and releases, and
//! undo/redo requests into scene edits and history commits. Every command is
//! handled synchronously and completely before the next one.

use crate::config::{BoardConfig, CommitPolicy};
use crate::history::History;
use crate::scene::{Scene, SceneError};
use crate::shapes::{Shape, ShapeId};
use crate::tools::{Action, InteractionMode, Selection, ToolKind, ToolState};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commands the UI layer issues into the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    ToolSwitch { tool: ToolKind },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Undo,
    Redo,
}

/// Notifications for the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// The displayed scene changed and should be rendered again.
    SceneChanged,
    /// The UI should open a text input at this canvas position.
    TextEntryRequested { x: f64, y: f64 },
    /// Whether the idle pointer is over a shape (selection tool only).
    Hover { hit: bool },
}

/// Board errors.
///
/// These indicate a sequencing defect inside the board, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("no shape with id {0} in the scene")]
    MissingShape(ShapeId),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Scene, history and interaction mode for one drawing session.
#[derive(Debug, Clone)]
pub struct Board {
    /// The live scene, always equal to the history entry under the cursor.
    scene: Scene,
    history: History,
    mode: InteractionMode,
    config: BoardConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with default configuration.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create an empty board with custom configuration.
    pub fn with_config(config: BoardConfig) -> Self {
        let scene = Scene::new();
        Self {
            history: History::with_limit(scene.clone(), config.history_limit),
            scene,
            mode: InteractionMode::new(),
            config,
        }
    }

    /// The displayed scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.mode.tool
    }

    pub fn action(&self) -> Action {
        self.mode.action()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.mode.selection()
    }

    /// Handle one command and report what the UI needs to react to.
    ///
    /// An error ends the gesture in progress, so the following frames of the
    /// same drag are ignored rather than failing again.
    pub fn handle(&mut self, command: Command) -> BoardResult<Vec<BoardEvent>> {
        let result = match command {
            Command::ToolSwitch { tool } => {
                self.switch_tool(tool);
                Ok(Vec::new())
            }
            Command::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            Command::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            Command::PointerUp => {
                self.pointer_up();
                Ok(Vec::new())
            }
            Command::Undo => Ok(self.undo()),
            Command::Redo => Ok(self.redo()),
        };
        if let Err(e) = &result {
            log::error!("Board invariant violated handling {:?}: {}", command, e);
            self.mode.finish();
        }
        result
    }

    fn switch_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool {:?} -> {:?}", self.mode.tool, tool);
        self.mode.set_tool(tool);
    }

    fn pointer_down(&mut self, point: Point) -> BoardResult<Vec<BoardEvent>> {
        match self.mode.tool {
            ToolKind::Selection => {
                let Some(shape) = self.scene.find_at(point.x, point.y) else {
                    log::debug!("Press at {:?} hit nothing", point);
                    return Ok(Vec::new());
                };
                let selection = Selection {
                    id: shape.id(),
                    offset: point - shape.start(),
                };
                log::debug!("Grabbed shape {} at offset {:?}", selection.id, selection.offset);
                self.mode.state = ToolState::Moving {
                    selection,
                    entry: None,
                };
                Ok(Vec::new())
            }
            ToolKind::Line | ToolKind::Rectangle => {
                let Some(kind) = self.mode.tool.shape_kind() else {
                    return Ok(Vec::new());
                };
                let id = self.scene.next_id();
                self.scene.append(Shape::new(id, point, point, kind))?;
                self.history.commit(self.scene.clone());
                self.mode.state = ToolState::Drawing {
                    id,
                    entry: self.history.current_index(),
                };
                log::debug!("Started {} {} at {:?}", kind, id, point);
                Ok(vec![BoardEvent::SceneChanged])
            }
            ToolKind::Text => {
                if self.mode.take_text_input() {
                    Ok(vec![BoardEvent::TextEntryRequested {
                        x: point.x,
                        y: point.y,
                    }])
                } else {
                    Ok(Vec::new())
                }
            }
        }
    }

    fn pointer_move(&mut self, point: Point) -> BoardResult<Vec<BoardEvent>> {
        match self.mode.state {
            ToolState::Drawing { id, entry } => {
                let shape = self.shape(id)?.with_end(point);
                self.scene.replace(id, shape)?;
                let entry = self.record(Some(entry));
                self.mode.state = ToolState::Drawing { id, entry };
                Ok(vec![BoardEvent::SceneChanged])
            }
            ToolState::Moving { selection, entry } => {
                let shape = self.shape(selection.id)?.translated_to(point - selection.offset);
                self.scene.replace(selection.id, shape)?;
                let entry = self.record(entry);
                self.mode.state = ToolState::Moving {
                    selection,
                    entry: Some(entry),
                };
                Ok(vec![BoardEvent::SceneChanged])
            }
            ToolState::Idle if self.mode.tool == ToolKind::Selection => {
                let hit = self.scene.find_at(point.x, point.y).is_some();
                Ok(vec![BoardEvent::Hover { hit }])
            }
            ToolState::Idle => Ok(Vec::new()),
        }
    }

    fn pointer_up(&mut self) {
        if self.mode.finish() {
            log::debug!("Gesture finished, {} history entries", self.history.len());
        }
    }

    fn undo(&mut self) -> Vec<BoardEvent> {
        match self.history.undo() {
            Some(scene) => {
                self.scene = scene.clone();
                vec![BoardEvent::SceneChanged]
            }
            None => {
                log::debug!("Nothing to undo");
                Vec::new()
            }
        }
    }

    fn redo(&mut self) -> Vec<BoardEvent> {
        match self.history.redo() {
            Some(scene) => {
                self.scene = scene.clone();
                vec![BoardEvent::SceneChanged]
            }
            None => {
                log::debug!("Nothing to redo");
                Vec::new()
            }
        }
    }

    fn shape(&self, id: ShapeId) -> BoardResult<&Shape> {
        self.scene.get(id).ok_or(BoardError::MissingShape(id))
    }

    /// Record the live scene in the history and return the index it landed on.
    ///
    /// `entry` is the index the current gesture already committed to, if any.
    /// Under [`CommitPolicy::PerGesture`] that entry is overwritten, but only
    /// while the cursor still sits on it. An undo mid-gesture moves the
    /// cursor onto an earlier snapshot, and the next edit commits after it.
    fn record(&mut self, entry: Option<usize>) -> usize {
        let snapshot = self.scene.clone();
        match self.config.commit_policy {
            CommitPolicy::PerGesture if entry == Some(self.history.current_index()) => {
                self.history.overwrite(snapshot)
            }
            CommitPolicy::EveryMove | CommitPolicy::PerGesture => self.history.commit(snapshot),
        }
        self.history.current_index()
    }
}
