//! # logo-turtle
//!
//! An interpreter for a small Logo-like turtle graphics language.
//!
//! Program text is normalized and split into tokens (bracketed blocks stay whole),
//! tokens are bound into [`Command`]s against a [`CommandRegistry`], and each
//! command mutates a [`TurtleState`], emitting line segments to a [`Renderer`].
//! `repeat` blocks re-enter the same pipeline recursively.
//!
//! ```
//! use logo_turtle::{Interpreter, RecordingRenderer, TurtleState};
//!
//! let mut renderer = RecordingRenderer::new(400, 400);
//! let mut turtle = TurtleState::new((400, 400));
//! Interpreter::default().run("ht repeat 4 [ fd 50 rt 90 ]", &mut turtle, &mut renderer);
//! assert_eq!(renderer.segments().len(), 4);
//! ```

pub mod command;
pub mod interpreter;
pub mod manual;
pub mod renderer;
pub mod tokenizer;
pub mod turtle;

pub use command::*;
pub use interpreter::*;
pub use manual::*;
pub use renderer::*;
pub use turtle::*;
