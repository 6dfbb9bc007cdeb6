//! Keyboard shortcut registry and documentation.

use crate::app::UiAction;
use sketchboard_core::{KeyEvent, ToolKind};

/// A keyboard shortcut definition.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: UiAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        action: UiAction,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Whether the key event triggers this shortcut.
    ///
    /// Meta counts as Ctrl. Keys compare case-insensitively and any Alt
    /// chord is rejected.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let m = event.modifiers;
        event.key.eq_ignore_ascii_case(self.key)
            && (m.ctrl || m.meta) == self.ctrl
            && m.shift == self.shift
            && !m.alt
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, UiAction::Undo, "Undo"),
            Shortcut::new("Z", true, true, UiAction::Redo, "Redo"),
            Shortcut::new("Y", true, false, UiAction::Redo, "Redo"),
            Shortcut::new("L", false, false, UiAction::SetTool { tool: ToolKind::Line }, "Line tool"),
            Shortcut::new(
                "R",
                false,
                false,
                UiAction::SetTool {
                    tool: ToolKind::Rectangle,
                },
                "Rectangle tool",
            ),
            Shortcut::new(
                "V",
                false,
                false,
                UiAction::SetTool {
                    tool: ToolKind::Selection,
                },
                "Selection tool",
            ),
            Shortcut::new("T", false, false, UiAction::SetTool { tool: ToolKind::Text }, "Text tool"),
            Shortcut::new("D", true, true, UiAction::ToggleTheme, "Toggle light/dark theme"),
        ]
    }

    /// Find the action bound to a key event.
    pub fn lookup(event: &KeyEvent) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(event))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
