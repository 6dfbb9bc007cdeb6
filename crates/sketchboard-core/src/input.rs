//! Input normalization for mouse, touch and keyboard events.
//!
//! Mouse and touch gestures both reduce to the board's pointer commands in
//! canvas coordinates, so the board never sees where an event came from.

use crate::board::Command;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        ..Self::NONE
    };
}

/// One finger on a touch surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pointer", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Up {
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Fingers that touched down in this event.
    TouchStart { touches: Vec<TouchPoint> },
    /// Fingers that moved in this event.
    TouchMove { touches: Vec<TouchPoint> },
    /// Fingers that lifted in this event.
    TouchEnd { touches: Vec<TouchPoint> },
}

/// Keyboard event: the key's name plus held modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// Tracks the press state across events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Whether the primary mouse button is held.
    primary_pressed: bool,
    /// The finger being tracked, if a touch gesture is active.
    active_touch: Option<u64>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a mouse press or a tracked touch is in progress.
    pub fn is_pressed(&self) -> bool {
        self.primary_pressed || self.active_touch.is_some()
    }

    /// Translate a raw event into a board command.
    ///
    /// Only the left button drives the board. For touch, the first finger of
    /// a gesture is tracked and other fingers are ignored until it lifts.
    pub fn translate(&mut self, event: &PointerEvent) -> Option<Command> {
        match event {
            PointerEvent::Down { position, button } => {
                if *button != MouseButton::Left || self.active_touch.is_some() {
                    return None;
                }
                self.primary_pressed = true;
                Some(press(*position))
            }
            PointerEvent::Up { button } => {
                if *button != MouseButton::Left || !self.primary_pressed {
                    return None;
                }
                self.primary_pressed = false;
                Some(Command::PointerUp)
            }
            PointerEvent::Move { position } => {
                if self.active_touch.is_some() {
                    return None;
                }
                Some(moved(*position))
            }
            PointerEvent::TouchStart { touches } => {
                if self.is_pressed() {
                    return None;
                }
                let first = touches.first()?;
                self.active_touch = Some(first.id);
                log::trace!("Tracking touch {}", first.id);
                Some(press(first.position))
            }
            PointerEvent::TouchMove { touches } => {
                let tracked = self.tracked(touches)?;
                Some(moved(tracked.position))
            }
            PointerEvent::TouchEnd { touches } => {
                self.tracked(touches)?;
                self.active_touch = None;
                Some(Command::PointerUp)
            }
        }
    }

    fn tracked(&self, touches: &[TouchPoint]) -> Option<TouchPoint> {
        let id = self.active_touch?;
        touches.iter().copied().find(|t| t.id == id)
    }
}

fn press(position: Point) -> Command {
    Command::PointerDown {
        x: position.x,
        y: position.y,
    }
}

fn moved(position: Point) -> Command {
    Command::PointerMove {
        x: position.x,
        y: position.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, x: f64, y: f64) -> TouchPoint {
        TouchPoint {
            id,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_mouse_press_and_release() {
        let mut input = InputState::new();

        let cmd = input.translate(&PointerEvent::Down {
            position: Point::new(100.0, 50.0),
            button: MouseButton::Left,
        });
        assert_eq!(cmd, Some(Command::PointerDown { x: 100.0, y: 50.0 }));
        assert!(input.is_pressed());

        let cmd = input.translate(&PointerEvent::Up {
            button: MouseButton::Left,
        });
        assert_eq!(cmd, Some(Command::PointerUp));
        assert!(!input.is_pressed());
    }

    #[test]
    fn test_secondary_buttons_ignored() {
        let mut input = InputState::new();
        let down = PointerEvent::Down {
            position: Point::new(1.0, 1.0),
            button: MouseButton::Right,
        };
        assert_eq!(input.translate(&down), None);
        assert!(!input.is_pressed());
    }

    #[test]
    fn test_release_without_press() {
        let mut input = InputState::new();
        let up = PointerEvent::Up {
            button: MouseButton::Left,
        };
        assert_eq!(input.translate(&up), None);
    }

    #[test]
    fn test_hover_move() {
        let mut input = InputState::new();
        let cmd = input.translate(&PointerEvent::Move {
            position: Point::new(3.0, 4.0),
        });
        assert_eq!(cmd, Some(Command::PointerMove { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn test_touch_matches_mouse() {
        let mut mouse = InputState::new();
        let mut finger = InputState::new();

        let mouse_cmds = [
            PointerEvent::Down {
                position: Point::new(10.0, 10.0),
                button: MouseButton::Left,
            },
            PointerEvent::Move {
                position: Point::new(50.0, 50.0),
            },
            PointerEvent::Up {
                button: MouseButton::Left,
            },
        ]
        .iter()
        .filter_map(|e| mouse.translate(e))
        .collect::<Vec<_>>();

        let touch_cmds = [
            PointerEvent::TouchStart {
                touches: vec![touch(7, 10.0, 10.0)],
            },
            PointerEvent::TouchMove {
                touches: vec![touch(7, 50.0, 50.0)],
            },
            PointerEvent::TouchEnd {
                touches: vec![touch(7, 50.0, 50.0)],
            },
        ]
        .iter()
        .filter_map(|e| finger.translate(e))
        .collect::<Vec<_>>();

        assert_eq!(mouse_cmds, touch_cmds);
    }

    #[test]
    fn test_second_finger_ignored() {
        let mut input = InputState::new();
        input.translate(&PointerEvent::TouchStart {
            touches: vec![touch(1, 0.0, 0.0), touch(2, 9.0, 9.0)],
        });

        let cmd = input.translate(&PointerEvent::TouchStart {
            touches: vec![touch(3, 5.0, 5.0)],
        });
        assert_eq!(cmd, None);

        let cmd = input.translate(&PointerEvent::TouchMove {
            touches: vec![touch(2, 20.0, 20.0)],
        });
        assert_eq!(cmd, None);

        let cmd = input.translate(&PointerEvent::TouchEnd {
            touches: vec![touch(2, 20.0, 20.0)],
        });
        assert_eq!(cmd, None);
        assert!(input.is_pressed());

        let cmd = input.translate(&PointerEvent::TouchEnd {
            touches: vec![touch(1, 1.0, 1.0)],
        });
        assert_eq!(cmd, Some(Command::PointerUp));
        assert!(!input.is_pressed());
    }

    #[test]
    fn test_empty_touch_start() {
        let mut input = InputState::new();
        assert_eq!(input.translate(&PointerEvent::TouchStart { touches: vec![] }), None);
        assert!(!input.is_pressed());
    }

    #[test]
    fn test_event_serde() {
        let json = r#"{"pointer":"down","position":{"x":1.0,"y":2.0}}"#;
        let event: PointerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            PointerEvent::Down {
                position: Point::new(1.0, 2.0),
                button: MouseButton::Left,
            }
        );

        let key: KeyEvent = serde_json::from_str(r#"{"key":"z","modifiers":{"ctrl":true}}"#).unwrap();
        assert_eq!(key, KeyEvent::new("z", Modifiers::CTRL));
    }
}
