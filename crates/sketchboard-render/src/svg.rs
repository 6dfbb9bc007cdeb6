//! SVG renderer for headless output.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use peniko::Color;
use sketchboard_core::Shape;
use std::fmt::Write;

/// Renders a frame into an SVG document.
#[derive(Debug)]
pub struct SvgRenderer {
    document: RenderResult<String>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    /// Create a renderer with no frame built yet.
    pub fn new() -> Self {
        Self {
            document: Ok(String::new()),
        }
    }

    /// The last built document, or the error that stopped it.
    pub fn document(&self) -> Result<&str, &RendererError> {
        self.document.as_deref()
    }

    /// Take the last built document.
    pub fn finish(self) -> RenderResult<String> {
        self.document
    }

    fn render_document(ctx: &RenderContext) -> RenderResult<String> {
        let size = ctx.viewport_size;
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(RendererError::RenderFailed(format!(
                "invalid viewport size {}x{}",
                size.width, size.height
            )));
        }

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-theme="{theme}">"#,
            w = size.width,
            h = size.height,
            theme = ctx.theme,
        )?;
        writeln!(
            out,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            hex(ctx.palette.background)
        )?;

        for shape in ctx.scene.iter() {
            Self::render_shape(&mut out, shape, ctx)?;
        }

        writeln!(out, "</svg>")?;
        Ok(out)
    }

    fn render_shape(out: &mut String, shape: &Shape, ctx: &RenderContext) -> RenderResult<()> {
        let path = shape.renderable().to_svg();
        // A zero-length line has nothing to draw.
        if path.is_empty() {
            return Ok(());
        }

        let selected = ctx.selected == Some(shape.id());
        let color = if selected {
            ctx.palette.selection
        } else {
            ctx.palette.stroke
        };
        writeln!(
            out,
            r#"  <path data-id="{}" data-kind="{}" d="{}" fill="none" stroke="{}"{} stroke-width="{}"/>"#,
            shape.id(),
            shape.kind(),
            path,
            hex(color),
            opacity(color),
            ctx.stroke_width,
        )?;

        let outline = if selected {
            Some(ctx.palette.selection)
        } else if ctx.hovered == Some(shape.id()) {
            Some(ctx.palette.hover)
        } else {
            None
        };
        if let Some(color) = outline {
            let bounds = shape.bounds().inflate(4.0, 4.0);
            writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}"{} stroke-dasharray="4 2"/>"#,
                bounds.x0,
                bounds.y0,
                bounds.width(),
                bounds.height(),
                hex(color),
                opacity(color),
            )?;
        }
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.document = Self::render_document(ctx);
        match &self.document {
            Ok(_) => log::trace!("Built SVG frame with {} shapes", ctx.scene.len()),
            Err(e) => log::error!("SVG render failed: {}", e),
        }
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn opacity(color: Color) -> String {
    let alpha = color.to_rgba8().a;
    if alpha == 255 {
        String::new()
    } else {
        format!(r#" stroke-opacity="{:.2}""#, f64::from(alpha) / 255.0)
    }
}
