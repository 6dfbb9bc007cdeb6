//! Tool system for the whiteboard.

use crate::shapes::{ShapeId, ShapeKind};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Selection,
    Text,
}

impl ToolKind {
    /// The shape kind this tool draws, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Selection | ToolKind::Text => None,
        }
    }
}

/// Gesture phase, without the data each phase carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Idle,
    Drawing,
    Moving,
}

/// A grabbed shape and where it was grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// The grabbed shape.
    pub id: ShapeId,
    /// Pointer-down position minus the shape's anchor corner.
    pub offset: Vec2,
}

/// State of a tool interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// Waiting for a pointer press.
    #[default]
    Idle,
    /// Dragging out the far corner of a freshly appended shape.
    Drawing {
        id: ShapeId,
        /// History index of the entry the press committed.
        entry: usize,
    },
    /// Dragging a grabbed shape.
    Moving {
        selection: Selection,
        /// History index of this drag's entry, once the first move made one.
        entry: Option<usize>,
    },
}

impl ToolState {
    pub fn action(&self) -> Action {
        match self {
            ToolState::Idle => Action::Idle,
            ToolState::Drawing { .. } => Action::Drawing,
            ToolState::Moving { .. } => Action::Moving,
        }
    }
}

/// Session-scoped interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionMode {
    /// Currently selected tool.
    pub tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Whether the next text-tool press should request a text input.
    pub text_input_armed: bool,
}

impl InteractionMode {
    /// Create the initial mode: line tool, idle, text input not armed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> Action {
        self.state.action()
    }

    /// The grabbed shape while moving.
    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            ToolState::Moving { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// Set the current tool.
    ///
    /// The gesture in progress is kept, except that entering the selection
    /// tool from another tool resets to idle. Choosing the text tool arms
    /// the next text-input request.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == ToolKind::Selection && self.tool != ToolKind::Selection {
            self.state = ToolState::Idle;
        }
        if tool == ToolKind::Text {
            self.text_input_armed = true;
        }
        self.tool = tool;
    }

    /// End the current gesture. Returns false if already idle.
    pub fn finish(&mut self) -> bool {
        let was_active = self.state != ToolState::Idle;
        self.state = ToolState::Idle;
        was_active
    }

    /// Consume the text-input arming. Returns whether it was armed.
    pub fn take_text_input(&mut self) -> bool {
        std::mem::take(&mut self.text_input_armed)
    }
}
