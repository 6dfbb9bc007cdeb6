//! Recorded sessions that can be replayed against an [`crate::App`].

use crate::app::{AppResult, UiAction, read_file};
use serde::{Deserialize, Serialize};
use sketchboard_core::{Command, KeyEvent, PointerEvent};
use std::path::Path;

/// One step of a session.
///
/// Each variant is recognized by its tag field: `command`, `pointer`, `key`
/// or `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionStep {
    Command(Command),
    Input(PointerEvent),
    Key(KeyEvent),
    Action(UiAction),
}

/// A JSON array of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionScript {
    pub steps: Vec<SessionStep>,
}

impl SessionScript {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a script file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let script = Self::from_json(&read_file(path)?)?;
        log::debug!("Loaded {} steps from {}", script.steps.len(), path.display());
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppConfig, AppError};
    use kurbo::Point;
    use sketchboard_core::{Modifiers, MouseButton, ShapeKind, Theme, ToolKind};

    const SESSION: &str = r#"[
        {"command": "tool_switch", "tool": "line"},
        {"command": "pointer_down", "x": 10, "y": 10},
        {"command": "pointer_move", "x": 50, "y": 50},
        {"command": "pointer_up"},
        {"action": "set_tool", "tool": "rectangle"},
        {"pointer": "down", "position": {"x": 100, "y": 100}},
        {"pointer": "move", "position": {"x": 140, "y": 120}},
        {"pointer": "up"},
        {"key": "d", "modifiers": {"ctrl": true, "shift": true}}
    ]"#;

    #[test]
    fn test_parse_mixed_steps() {
        let script = SessionScript::from_json(SESSION).unwrap();
        assert_eq!(script.steps.len(), 9);
        assert_eq!(
            script.steps[1],
            SessionStep::Command(Command::PointerDown { x: 10.0, y: 10.0 })
        );
        assert_eq!(
            script.steps[4],
            SessionStep::Action(UiAction::SetTool {
                tool: ToolKind::Rectangle
            })
        );
        assert_eq!(
            script.steps[5],
            SessionStep::Input(PointerEvent::Down {
                position: Point::new(100.0, 100.0),
                button: MouseButton::Left,
            })
        );
        assert_eq!(
            script.steps[8],
            SessionStep::Key(KeyEvent::new("d", Modifiers::CTRL_SHIFT))
        );
    }

    #[test]
    fn test_replay() {
        let script = SessionScript::from_json(SESSION).unwrap();
        let mut app = App::new(AppConfig::default()).unwrap();
        app.run_script(&script).unwrap();

        let scene = app.board().scene();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(0).map(|s| s.kind()), Some(ShapeKind::Line));
        assert_eq!(scene.get(0).map(|s| s.coords()), Some((10.0, 10.0, 50.0, 50.0)));
        assert_eq!(scene.get(1).map(|s| s.kind()), Some(ShapeKind::Rectangle));
        assert_eq!(scene.get(1).map(|s| s.coords()), Some((100.0, 100.0, 140.0, 120.0)));
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_replay_survives_undo_mid_draw() {
        let script = SessionScript::from_json(
            r#"[
                {"command": "pointer_down", "x": 10, "y": 10},
                {"key": "z", "modifiers": {"ctrl": true}},
                {"command": "pointer_move", "x": 20, "y": 20},
                {"command": "pointer_up"},
                {"command": "pointer_down", "x": 0, "y": 0},
                {"command": "pointer_move", "x": 5, "y": 5},
                {"command": "pointer_up"}
            ]"#,
        )
        .unwrap();
        let mut app = App::new(AppConfig::default()).unwrap();
        app.run_script(&script).unwrap();

        let scene = app.board().scene();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(0).map(|s| s.coords()), Some((0.0, 0.0, 5.0, 5.0)));
        assert!(app.render_svg().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"[{"command": "undo"}]"#).unwrap();

        let script = SessionScript::load(&path).unwrap();
        assert_eq!(script.steps, vec![SessionStep::Command(Command::Undo)]);
    }

    #[test]
    fn test_unknown_step_rejected() {
        let result = SessionScript::from_json(r#"[{"command": "erase"}]"#);
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
