//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use sketchboard_core::{Scene, ShapeId, Theme};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub stroke: Color,
    /// Outline of the grabbed shape.
    pub selection: Color,
    /// Outline of the shape under an idle selection-tool pointer.
    pub hover: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        background: Color::from_rgba8(250, 250, 250, 255),
        stroke: Color::from_rgba8(30, 30, 30, 255),
        selection: Color::from_rgba8(59, 130, 246, 255),
        hover: Color::from_rgba8(59, 130, 246, 128),
    };

    pub const DARK: Self = Self {
        background: Color::from_rgba8(30, 30, 30, 255),
        stroke: Color::from_rgba8(230, 230, 230, 255),
        selection: Color::from_rgba8(96, 165, 250, 255),
        hover: Color::from_rgba8(96, 165, 250, 128),
    };

    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The scene to render.
    pub scene: &'a Scene,
    pub theme: Theme,
    /// Colors for this frame, derived from the theme.
    pub palette: Palette,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Stroke width for shapes.
    pub stroke_width: f64,
    /// Shape being moved, drawn highlighted.
    pub selected: Option<ShapeId>,
    /// Shape under the pointer, drawn with the hover outline.
    pub hovered: Option<ShapeId>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the light theme.
    pub fn new(scene: &'a Scene, viewport_size: Size) -> Self {
        Self {
            scene,
            theme: Theme::Light,
            palette: Palette::LIGHT,
            viewport_size,
            stroke_width: 2.0,
            selected: None,
            hovered: None,
        }
    }

    /// Set the theme, replacing the palette with the theme's colors.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the highlighted (grabbed) shape.
    pub fn with_selected(mut self, id: Option<ShapeId>) -> Self {
        self.selected = id;
        self
    }

    /// Set the hovered shape.
    pub fn with_hovered(mut self, id: Option<ShapeId>) -> Self {
        self.hovered = id;
        self
    }
}

/// Trait for rendering backends.
///
/// `build_scene` is called once per frame with everything needed to draw it.
pub trait Renderer: Send + Sync {
    /// Build the drawing commands for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.palette.background
    }
}
