//! Interpreter that turns program text into commands and runs them against a turtle.
//!
//! The entry point is [`Interpreter`]. Configure it with an [`InterpreterConfig`],
//! then either call [`Interpreter::run`] for the full reset-execute-draw cycle, or
//! drive the stages yourself with [`Interpreter::interpret`] and
//! [`Interpreter::execute`].

use crate::command::{self, Command, CommandRegistry, LogoOp};
use crate::renderer::Renderer;
use crate::tokenizer::{self, parse_int};
use crate::turtle::TurtleState;

/// Configuration for interpretation.
#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Strip `/* ... */` comments before tokenizing. Default: true.
    pub ignore_comments: bool,
    /// Maximum nesting of `repeat` blocks. Deeper blocks are skipped.
    pub max_nesting_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            ignore_comments: true,
            max_nesting_depth: 1000,
        }
    }
}

/// Parses and executes turtle programs.
///
/// Interpretation never fails: unknown tokens, missing or non-numeric arguments,
/// and unbalanced brackets are all silently ignored, one command at a time.
pub struct Interpreter {
    registry: CommandRegistry,
    config: InterpreterConfig,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl Interpreter {
    /// Creates an interpreter with the standard command set.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            registry: CommandRegistry::standard(),
            config,
        }
    }

    /// Replaces the command registry (builder pattern).
    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The command registry used for binding and dispatch.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The configuration this interpreter was built with.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Normalizes and tokenizes `text`.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let normalized = tokenizer::normalize(text, self.config.ignore_comments);
        tokenizer::tokenize(&normalized)
    }

    /// Parses `text` into the ordered sequence of commands it contains.
    pub fn interpret(&self, text: &str) -> Vec<Command> {
        let tokens = self.tokens(text);
        let commands = command::bind(&tokens, &self.registry);
        log::debug!(
            "interpreted {} token(s) into {} command(s)",
            tokens.len(),
            commands.len()
        );
        commands
    }

    /// Executes `commands` in order.
    pub fn execute(
        &self,
        commands: &[Command],
        turtle: &mut TurtleState,
        renderer: &mut dyn Renderer,
    ) {
        self.execute_at_depth(commands, turtle, renderer, 0);
    }

    /// Runs a whole program the way the editor does on every change: clear the
    /// screen, execute every command, then draw the turtle marker if visible.
    pub fn run(&self, text: &str, turtle: &mut TurtleState, renderer: &mut dyn Renderer) {
        turtle.clear_screen(renderer);
        let commands = self.interpret(text);
        self.execute(&commands, turtle, renderer);
        if turtle.visible {
            turtle.draw_turtle(renderer);
        }
    }

    fn execute_at_depth(
        &self,
        commands: &[Command],
        turtle: &mut TurtleState,
        renderer: &mut dyn Renderer,
        depth: usize,
    ) {
        for cmd in commands {
            match self.registry.get(&cmd.name) {
                Some(op) => self.apply(op, cmd, turtle, renderer, depth),
                None => log::trace!("no operation registered for {:?}", cmd.name),
            }
        }
    }

    /// Performs one command. Arguments that are missing or fail to parse cancel
    /// the command's effect.
    fn apply(
        &self,
        op: LogoOp,
        cmd: &Command,
        turtle: &mut TurtleState,
        renderer: &mut dyn Renderer,
        depth: usize,
    ) {
        log::trace!("{op:?} {:?}", cmd.args);

        // Param helper
        let n = |idx: usize| cmd.arg(idx).and_then(parse_int);

        match op {
            // --- MOVEMENT ---
            LogoOp::Forward => {
                if let Some(distance) = n(0) {
                    turtle.forward(distance, renderer);
                }
            }
            LogoOp::Back => {
                if let Some(distance) = n(0) {
                    turtle.forward(distance.saturating_neg(), renderer);
                }
            }
            LogoOp::Right => {
                if let Some(degrees) = n(0) {
                    turtle.right(degrees);
                }
            }
            LogoOp::Left => {
                if let Some(degrees) = n(0) {
                    turtle.right(degrees.saturating_neg());
                }
            }
            LogoOp::Home => turtle.home(),
            LogoOp::SetXY => {
                if let (Some(x), Some(y)) = (n(0), n(1)) {
                    turtle.set_xy(x, y);
                }
            }
            LogoOp::SetX => {
                if let Some(x) = n(0) {
                    turtle.set_x(x);
                }
            }
            LogoOp::SetY => {
                if let Some(y) = n(0) {
                    turtle.set_y(y);
                }
            }
            LogoOp::SetHeading => {
                if let Some(angle) = n(0) {
                    turtle.set_heading(angle);
                }
            }

            // --- PEN ---
            LogoOp::PenUp => turtle.pen_down = false,
            LogoOp::PenDown => turtle.pen_down = true,
            LogoOp::PenSize => {
                if let Some(size) = n(0) {
                    turtle.set_pen_size(size);
                }
            }
            LogoOp::Color => {
                if let Some(color) = cmd.arg(0) {
                    turtle.pen_color = color.to_owned();
                }
            }

            // --- SCREEN ---
            LogoOp::ShowTurtle => turtle.visible = true,
            LogoOp::HideTurtle => turtle.visible = false,
            LogoOp::BgColor => {
                if let Some(color) = cmd.arg(0) {
                    renderer.set_background(color);
                }
            }
            LogoOp::ClearScreen => turtle.clear_screen(renderer),

            // --- FLOW ---
            LogoOp::Repeat => {
                let (Some(count), Some(block)) = (n(0), cmd.arg(1)) else {
                    return;
                };
                if depth >= self.config.max_nesting_depth {
                    log::warn!(
                        "skipping repeat block nested deeper than {}",
                        self.config.max_nesting_depth
                    );
                    return;
                }
                // Parse once, run `count` times. Non-positive counts run nothing.
                let body = self.interpret(block);
                for _ in 0..count.max(0) {
                    self.execute_at_depth(&body, turtle, renderer, depth + 1);
                }
            }
        }
    }
}
