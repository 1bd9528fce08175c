//! The drawing surface interface and an in-memory recording implementation.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Background color applied by `cs` and at the start of every run.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// The drawing surface the turtle renders onto.
///
/// The interpreter never touches rendering resources beyond these calls, so any
/// canvas (a window, an image buffer, a plotter) can sit behind it.
pub trait Renderer {
    /// Starts a new stroke. Called once per forward step, whether or not the pen is down.
    fn begin_stroke(&mut self);

    /// Strokes a straight line from `from` to `to`.
    fn draw_segment(&mut self, from: DVec2, to: DVec2, color: &str, width: u32);

    /// Changes the canvas background color. The color string is passed through unvalidated.
    fn set_background(&mut self, color: &str);

    /// Erases everything drawn so far on a `width` x `height` surface.
    fn clear(&mut self, width: u32, height: u32);

    /// Current `(width, height)` of the surface, in canvas units.
    fn surface_size(&self) -> (u32, u32);
}

/// A single recorded renderer call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    BeginStroke,
    Segment {
        from: DVec2,
        to: DVec2,
        color: String,
        width: u32,
    },
    Background(String),
    Clear { width: u32, height: u32 },
}

/// An in-memory [`Renderer`] that records every call in the order it was made.
///
/// Line segments must reach the surface in exactly the order command execution
/// produced them, so the log doubles as a faithful description of the drawing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordingRenderer {
    /// Surface width reported to the turtle.
    pub width: u32,

    /// Surface height reported to the turtle.
    pub height: u32,

    /// Every call received, oldest first.
    pub ops: Vec<DrawOp>,

    background: String,
}

impl RecordingRenderer {
    /// Creates an empty recording of a `width` x `height` surface with the default background.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            background: DEFAULT_BACKGROUND.to_owned(),
        }
    }

    /// The background color currently in effect.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Segments still visible on the surface, i.e. those drawn after the last clear.
    pub fn segments(&self) -> Vec<(DVec2, DVec2, &str, u32)> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear { .. }))
            .map_or(0, |i| i + 1);

        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Segment {
                    from,
                    to,
                    color,
                    width,
                } => Some((*from, *to, color.as_str(), *width)),
                _ => None,
            })
            .collect()
    }

    /// Renders the visible drawing as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            escape_attr(&self.background)
        );
        for (from, to, color, width) in self.segments() {
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                escape_attr(color),
                width
            );
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for RecordingRenderer {
    fn begin_stroke(&mut self) {
        self.ops.push(DrawOp::BeginStroke);
    }

    fn draw_segment(&mut self, from: DVec2, to: DVec2, color: &str, width: u32) {
        self.ops.push(DrawOp::Segment {
            from,
            to,
            color: color.to_owned(),
            width,
        });
    }

    fn set_background(&mut self, color: &str) {
        self.background = color.to_owned();
        self.ops.push(DrawOp::Background(color.to_owned()));
    }

    fn clear(&mut self, width: u32, height: u32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

// Colors come straight from user programs.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
