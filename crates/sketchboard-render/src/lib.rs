//! Sketchboard Render Library
//!
//! Renderer abstraction for drawing a Sketchboard scene, plus an SVG
//! implementation used for headless output.

mod renderer;
mod svg;

pub use renderer::{Palette, RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
