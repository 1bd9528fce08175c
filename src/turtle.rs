//! Turtle state and movement geometry.

use crate::renderer::{DEFAULT_BACKGROUND, Renderer};
use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// Pen color after a reset.
pub const DEFAULT_PEN_COLOR: &str = "#000000";

/// Largest pen size used when drawing the turtle marker.
pub const MARKER_MAX_PEN_SIZE: u32 = 3;

/// Heading bias so that a user heading of 0 points up the canvas.
const HEADING_BIAS: i64 = -90;

/// The state of the drawing turtle.
///
/// Positions are in canvas coordinates, where y grows downward. User-facing
/// coordinates (`setxy`, `home`) are relative to [`origin`](Self::origin), the
/// center of the surface at the last reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current canvas-space position.
    pub position: DVec2,

    /// Half the surface size, truncated. Recomputed on every reset.
    pub origin: IVec2,

    /// Heading in degrees, always in `[0, 360)`. 0 points right on the canvas.
    pub angle: i32,

    /// Whether forward movement draws.
    pub pen_down: bool,

    /// Stroke color, passed to the renderer unvalidated.
    pub pen_color: String,

    /// Stroke width, never below 1.
    pub pen_size: u32,

    /// Whether the turtle marker is drawn after a run.
    pub visible: bool,
}

impl TurtleState {
    /// Creates a turtle centered on a surface of the given `(width, height)`.
    pub fn new(surface: (u32, u32)) -> Self {
        let mut turtle = Self {
            position: DVec2::ZERO,
            origin: IVec2::ZERO,
            angle: 0,
            pen_down: true,
            pen_color: DEFAULT_PEN_COLOR.to_owned(),
            pen_size: 1,
            visible: true,
        };
        turtle.reset(surface);
        turtle
    }

    /// Reinitializes every field, recomputing the origin from the surface size.
    pub fn reset(&mut self, (width, height): (u32, u32)) {
        self.origin = IVec2::new((width / 2) as i32, (height / 2) as i32);
        self.position = self.origin.as_dvec2();
        self.angle = normalize_heading(HEADING_BIAS);
        self.pen_down = true;
        self.pen_color = DEFAULT_PEN_COLOR.to_owned();
        self.pen_size = 1;
        self.visible = true;
    }

    /// Clears the surface and resets the turtle: what `cs` does, and what happens
    /// before every run.
    pub fn clear_screen(&mut self, renderer: &mut dyn Renderer) {
        let (width, height) = renderer.surface_size();
        renderer.set_background(DEFAULT_BACKGROUND);
        renderer.clear(width, height);
        self.reset((width, height));
    }

    /// Moves the turtle `steps` units along its heading, drawing if the pen is down.
    ///
    /// The segment runs from the position before the move to the position after it.
    pub fn forward(&mut self, steps: i64, renderer: &mut dyn Renderer) {
        let (sin, cos) = f64::from(self.angle).to_radians().sin_cos();
        let delta = DVec2::new(cos, sin) * steps as f64;

        renderer.begin_stroke();
        let from = self.position;
        self.position += delta;
        if self.pen_down {
            renderer.draw_segment(from, self.position, &self.pen_color, self.pen_size);
        }
    }

    /// Turns the turtle clockwise (on screen) by `degrees`.
    pub fn right(&mut self, degrees: i64) {
        self.angle = normalize_heading(i64::from(self.angle) + degrees.rem_euclid(360));
    }

    /// Sets an absolute user heading, where 0 points up.
    pub fn set_heading(&mut self, degrees: i64) {
        self.angle = normalize_heading(degrees.rem_euclid(360) + HEADING_BIAS);
    }

    /// Teleports to the origin without drawing.
    pub fn home(&mut self) {
        self.position = self.origin.as_dvec2();
    }

    /// Sets an absolute user position. The user y axis points up.
    pub fn set_xy(&mut self, x: i64, y: i64) {
        self.set_x(x);
        self.set_y(y);
    }

    /// Sets the absolute user x coordinate.
    pub fn set_x(&mut self, x: i64) {
        self.position.x = i64::from(self.origin.x).saturating_add(x) as f64;
    }

    /// Sets the absolute user y coordinate. The user y axis points up.
    pub fn set_y(&mut self, y: i64) {
        self.position.y = i64::from(self.origin.y).saturating_sub(y) as f64;
    }

    /// Sets the pen size, clamping to a minimum of 1.
    pub fn set_pen_size(&mut self, size: i64) {
        self.pen_size = size.clamp(1, i64::from(u32::MAX)) as u32;
    }

    /// Draws the triangular turtle marker at the current position and heading.
    ///
    /// The pen is forced down and its size capped at [`MARKER_MAX_PEN_SIZE`]
    /// for the duration; both are restored afterwards. The turns sum to 360, so
    /// the heading is unchanged.
    pub fn draw_turtle(&mut self, renderer: &mut dyn Renderer) {
        let pen_down = self.pen_down;
        let pen_size = self.pen_size;
        self.pen_down = true;
        self.pen_size = pen_size.min(MARKER_MAX_PEN_SIZE);

        self.right(-90);
        self.forward(17, renderer);
        self.right(135);
        self.forward(24, renderer);
        self.right(90);
        self.forward(24, renderer);
        self.right(135);
        self.forward(17, renderer);
        self.right(90);

        self.pen_down = pen_down;
        self.pen_size = pen_size;
    }
}

fn normalize_heading(degrees: i64) -> i32 {
    degrees.rem_euclid(360) as i32
}
