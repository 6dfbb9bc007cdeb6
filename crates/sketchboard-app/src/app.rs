//! Application state and event dispatch.

use crate::script::{SessionScript, SessionStep};
use crate::shortcuts::ShortcutRegistry;
use crate::text_entry::{LoggingTextEntry, TextEntry};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use sketchboard_core::{
    Board, BoardConfig, BoardEvent, Command, InputState, KeyEvent, MemoryStore,
    PointerEvent, PreferenceStore, ShapeId, StorageError, THEME_KEY, Theme, ToolKind, load_theme,
    save_theme,
};
use sketchboard_render::{RenderContext, Renderer, RendererError, SvgRenderer};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Read a whole file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Theme used when no preference has been stored yet.
    pub theme: Theme,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sketchboard".to_string(),
            width: 1280,
            height: 800,
            theme: Theme::Light,
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let config: Self = serde_json::from_str(&read_file(path)?)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Actions from the button bar or keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    SetTool { tool: ToolKind },
    Undo,
    Redo,
    ToggleTheme,
}

/// Pointer cursor the shell should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Crosshair,
    /// Over a shape that the selection tool can grab, or while moving one.
    Move,
    Text,
}

/// The application: one board plus everything around it.
pub struct App<T: TextEntry = LoggingTextEntry> {
    config: AppConfig,
    board: Board,
    input: InputState,
    theme: Theme,
    store: Arc<dyn PreferenceStore>,
    text_entry: T,
    /// Shape under the idle selection-tool pointer.
    hovered: Option<ShapeId>,
    last_pointer: Point,
}

impl App {
    /// Create an app with an in-memory preference store and logging text entry.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_parts(config, Arc::new(MemoryStore::new()), LoggingTextEntry::new())
    }
}

impl<T: TextEntry> App<T> {
    /// Create an app from its collaborators.
    ///
    /// A theme already in the store wins over the configured one.
    pub fn with_parts(
        config: AppConfig,
        store: Arc<dyn PreferenceStore>,
        text_entry: T,
    ) -> AppResult<Self> {
        let theme = if store.get(THEME_KEY)?.is_some() {
            load_theme(store.as_ref())?
        } else {
            config.theme
        };
        log::info!("Starting {} ({} theme)", config.title, theme);
        Ok(Self {
            board: Board::with_config(config.board.clone()),
            config,
            input: InputState::new(),
            theme,
            store,
            text_entry,
            hovered: None,
            last_pointer: Point::ZERO,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn text_entry(&self) -> &T {
        &self.text_entry
    }

    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered
    }

    /// Send a command to the board and react to its events.
    ///
    /// Board errors never reach the user: the board logs them and drops the
    /// gesture, and the command yields no events.
    pub fn command(&mut self, command: Command) -> AppResult<Vec<BoardEvent>> {
        if let Command::PointerDown { x, y } | Command::PointerMove { x, y } = command {
            self.last_pointer = Point::new(x, y);
        }
        let events = self.board.handle(command).unwrap_or_default();
        // Hover is only reported for idle pointer moves; anything else ends it.
        self.hovered = None;
        for event in &events {
            match *event {
                BoardEvent::TextEntryRequested { x, y } => {
                    self.text_entry.request(Point::new(x, y));
                }
                BoardEvent::Hover { hit: true } => {
                    let p = self.last_pointer;
                    self.hovered = self.board.scene().find_at(p.x, p.y).map(|s| s.id());
                }
                BoardEvent::Hover { hit: false } | BoardEvent::SceneChanged => {}
            }
        }
        Ok(events)
    }

    /// Handle a raw mouse or touch event.
    pub fn input(&mut self, event: &PointerEvent) -> AppResult<Vec<BoardEvent>> {
        match self.input.translate(event) {
            Some(command) => self.command(command),
            None => Ok(Vec::new()),
        }
    }

    /// Handle a key press through the shortcut registry.
    pub fn key(&mut self, event: &KeyEvent) -> AppResult<Vec<BoardEvent>> {
        match ShortcutRegistry::lookup(event) {
            Some(action) => self.action(action),
            None => {
                log::warn!("No shortcut bound to {:?}", event);
                Ok(Vec::new())
            }
        }
    }

    /// Perform a UI action.
    pub fn action(&mut self, action: UiAction) -> AppResult<Vec<BoardEvent>> {
        match action {
            UiAction::SetTool { tool } => self.command(Command::ToolSwitch { tool }),
            UiAction::Undo => self.command(Command::Undo),
            UiAction::Redo => self.command(Command::Redo),
            UiAction::ToggleTheme => {
                self.toggle_theme()?;
                Ok(Vec::new())
            }
        }
    }

    /// Switch between light and dark, persisting the choice.
    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        self.theme = self.theme.toggle();
        save_theme(self.store.as_ref(), self.theme)?;
        log::info!("Theme changed to {}", self.theme);
        Ok(self.theme)
    }

    /// Apply one step of a session script.
    pub fn apply(&mut self, step: &SessionStep) -> AppResult<Vec<BoardEvent>> {
        match step {
            SessionStep::Command(command) => self.command(*command),
            SessionStep::Input(event) => self.input(event),
            SessionStep::Key(event) => self.key(event),
            SessionStep::Action(action) => self.action(*action),
        }
    }

    /// Apply every step of a script in order, stopping at the first error.
    pub fn run_script(&mut self, script: &SessionScript) -> AppResult<()> {
        for (index, step) in script.steps.iter().enumerate() {
            self.apply(step).inspect_err(|e| {
                log::error!("Script step {} failed: {}", index, e);
            })?;
        }
        log::info!(
            "Replayed {} steps, scene has {} shapes",
            script.steps.len(),
            self.board.scene().len()
        );
        Ok(())
    }

    /// The cursor for the current tool and pointer state.
    pub fn cursor(&self) -> CursorStyle {
        match self.board.tool() {
            ToolKind::Line | ToolKind::Rectangle => CursorStyle::Crosshair,
            ToolKind::Text => CursorStyle::Text,
            ToolKind::Selection if self.board.selection().is_some() || self.hovered.is_some() => {
                CursorStyle::Move
            }
            ToolKind::Selection => CursorStyle::Default,
        }
    }

    /// Draw the current frame with any renderer.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) {
        let size = Size::new(f64::from(self.config.width), f64::from(self.config.height));
        let ctx = RenderContext::new(self.board.scene(), size)
            .with_theme(self.theme)
            .with_selected(self.board.selection().map(|s| s.id))
            .with_hovered(self.hovered);
        renderer.build_scene(&ctx);
    }

    /// Render the current frame as an SVG document.
    pub fn render_svg(&self) -> AppResult<String> {
        let mut renderer = SvgRenderer::new();
        self.render_with(&mut renderer);
        Ok(renderer.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchboard_core::{CommitPolicy, Modifiers, MouseButton, ShapeKind};
    use std::io::Write;

    fn mouse_drag(app: &mut App, from: (f64, f64), to: (f64, f64)) {
        app.input(&PointerEvent::Down {
            position: Point::new(from.0, from.1),
            button: MouseButton::Left,
        })
        .unwrap();
        app.input(&PointerEvent::Move {
            position: Point::new(to.0, to.1),
        })
        .unwrap();
        app.input(&PointerEvent::Up {
            button: MouseButton::Left,
        })
        .unwrap();
    }

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Sketchboard");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.board.commit_policy, CommitPolicy::EveryMove);
    }

    #[test]
    fn test_config_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"width": 640, "theme": "dark", "board": {{"commit_policy": "per_gesture"}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 800);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.board.commit_policy, CommitPolicy::PerGesture);
    }

    #[test]
    fn test_config_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(AppConfig::load(&missing), Err(AppError::Io { .. })));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(AppConfig::load(&bad), Err(AppError::Json(_))));
    }

    #[test]
    fn test_mouse_draw_and_render() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.action(UiAction::SetTool {
            tool: ToolKind::Rectangle,
        })
        .unwrap();
        mouse_drag(&mut app, (10.0, 10.0), (50.0, 40.0));

        let shape = app.board().scene().get(0).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.coords(), (10.0, 10.0, 50.0, 40.0));

        let svg = app.render_svg().unwrap();
        assert!(svg.contains(r#"data-kind="rectangle""#));
        assert!(svg.contains(r#"width="1280""#));
    }

    #[test]
    fn test_keyboard_undo_redo() {
        let mut app = App::new(AppConfig::default()).unwrap();
        mouse_drag(&mut app, (0.0, 0.0), (10.0, 10.0));

        app.key(&KeyEvent::new("z", Modifiers::CTRL)).unwrap();
        app.key(&KeyEvent::new("z", Modifiers::CTRL)).unwrap();
        assert!(app.board().scene().is_empty());

        app.key(&KeyEvent::new("y", Modifiers::CTRL)).unwrap();
        app.key(&KeyEvent::new("z", Modifiers::CTRL_SHIFT)).unwrap();
        assert_eq!(
            app.board().scene().get(0).map(|s| s.coords()),
            Some((0.0, 0.0, 10.0, 10.0))
        );

        let events = app.key(&KeyEvent::new("q", Modifiers::NONE)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
        let mut app =
            App::with_parts(AppConfig::default(), Arc::clone(&store), LoggingTextEntry::new())
                .unwrap();
        assert_eq!(app.theme(), Theme::Light);

        app.key(&KeyEvent::new("d", Modifiers::CTRL_SHIFT)).unwrap();
        assert_eq!(app.theme(), Theme::Dark);
        assert!(app.render_svg().unwrap().contains(r#"data-theme="dark""#));

        // A later session on the same store starts dark.
        let app = App::with_parts(AppConfig::default(), store, LoggingTextEntry::new()).unwrap();
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_configured_theme_without_preference() {
        let config = AppConfig {
            theme: Theme::Dark,
            ..AppConfig::default()
        };
        let app = App::new(config).unwrap();
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_text_tool_requests_entry() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.key(&KeyEvent::new("t", Modifiers::NONE)).unwrap();
        assert_eq!(app.cursor(), CursorStyle::Text);

        mouse_drag(&mut app, (12.0, 34.0), (40.0, 40.0));
        mouse_drag(&mut app, (50.0, 50.0), (60.0, 60.0));

        assert_eq!(app.text_entry().requests(), &[Point::new(12.0, 34.0)]);
        assert!(app.board().scene().is_empty());
    }

    #[test]
    fn test_hover_tracks_shape() {
        let mut app = App::new(AppConfig::default()).unwrap();
        mouse_drag(&mut app, (0.0, 0.0), (100.0, 0.0));
        app.action(UiAction::SetTool {
            tool: ToolKind::Selection,
        })
        .unwrap();
        assert_eq!(app.cursor(), CursorStyle::Default);

        app.input(&PointerEvent::Move {
            position: Point::new(50.0, 0.0),
        })
        .unwrap();
        assert_eq!(app.hovered(), Some(0));
        assert_eq!(app.cursor(), CursorStyle::Move);
        assert_eq!(app.render_svg().unwrap().matches("stroke-dasharray").count(), 1);

        app.input(&PointerEvent::Move {
            position: Point::new(50.0, 30.0),
        })
        .unwrap();
        assert_eq!(app.hovered(), None);
        assert_eq!(app.cursor(), CursorStyle::Default);
    }

    #[test]
    fn test_selection_drag_moves_shape() {
        let mut app = App::new(AppConfig::default()).unwrap();
        mouse_drag(&mut app, (10.0, 10.0), (50.0, 50.0));
        app.key(&KeyEvent::new("v", Modifiers::NONE)).unwrap();

        app.input(&PointerEvent::Down {
            position: Point::new(30.0, 30.0),
            button: MouseButton::Left,
        })
        .unwrap();
        assert_eq!(app.cursor(), CursorStyle::Move);
        app.input(&PointerEvent::Move {
            position: Point::new(80.0, 80.0),
        })
        .unwrap();
        app.input(&PointerEvent::Up {
            button: MouseButton::Left,
        })
        .unwrap();

        assert_eq!(
            app.board().scene().get(0).map(|s| s.coords()),
            Some((60.0, 60.0, 100.0, 100.0))
        );
    }

    #[test]
    fn test_ui_action_serde() {
        let action: UiAction = serde_json::from_str(r#"{"action":"toggle_theme"}"#).unwrap();
        assert_eq!(action, UiAction::ToggleTheme);
        let action: UiAction =
            serde_json::from_str(r#"{"action":"set_tool","tool":"rectangle"}"#).unwrap();
        assert_eq!(
            action,
            UiAction::SetTool {
                tool: ToolKind::Rectangle
            }
        );
    }
}
