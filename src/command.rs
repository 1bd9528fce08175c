//! Command names, the registry mapping them to operations, and the binder that
//! groups tokens into commands.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operations the turtle language can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogoOp {
    // --- Movement ---
    /// Move forward by a distance (`fd`).
    Forward,
    /// Move backward by a distance (`bd`).
    Back,
    /// Turn clockwise by degrees (`rt`).
    Right,
    /// Turn counter-clockwise by degrees (`lt`).
    Left,
    /// Teleport to the origin without drawing (`home`).
    Home,
    /// Set absolute position. Args: `(x, y)` (`setxy`).
    SetXY,
    /// Set absolute x (`setx`).
    SetX,
    /// Set absolute y (`sety`).
    SetY,
    /// Set absolute heading, 0 pointing up (`seth`).
    SetHeading,

    // --- Pen ---
    /// Lift the pen (`pu`).
    PenUp,
    /// Lower the pen (`pd`).
    PenDown,
    /// Set pen size, clamped to at least 1 (`ps`).
    PenSize,
    /// Set pen color (`color`).
    Color,

    // --- Screen ---
    /// Show the turtle marker (`st`).
    ShowTurtle,
    /// Hide the turtle marker (`ht`).
    HideTurtle,
    /// Set the canvas background color (`bgcolor`).
    BgColor,
    /// Clear the surface and reset the turtle (`cs`).
    ClearScreen,

    // --- Flow ---
    /// Run a block a number of times. Args: `(count, block)` (`repeat`).
    Repeat,
}

/// Maps lowercase command names to operations.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    ops: HashMap<String, LogoOp>,
}

impl CommandRegistry {
    /// Creates a registry with no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard command set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.populate_standard_commands();
        registry
    }

    /// Registers the conventional short names for every [`LogoOp`].
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ("fd", LogoOp::Forward),
            ("bd", LogoOp::Back),
            ("rt", LogoOp::Right),
            ("lt", LogoOp::Left),
            ("repeat", LogoOp::Repeat),
            ("pu", LogoOp::PenUp),
            ("pd", LogoOp::PenDown),
            ("ps", LogoOp::PenSize),
            ("st", LogoOp::ShowTurtle),
            ("ht", LogoOp::HideTurtle),
            ("home", LogoOp::Home),
            ("setxy", LogoOp::SetXY),
            ("setx", LogoOp::SetX),
            ("sety", LogoOp::SetY),
            ("seth", LogoOp::SetHeading),
            ("color", LogoOp::Color),
            ("bgcolor", LogoOp::BgColor),
            ("cs", LogoOp::ClearScreen),
        ];

        for (name, op) in mappings {
            self.set_op(name, op);
        }
    }

    /// Assigns `op` to `name`, replacing any previous mapping.
    ///
    /// Program text is lowercased before binding, so `name` is stored lowercased.
    pub fn set_op(&mut self, name: &str, op: LogoOp) {
        self.ops.insert(name.to_lowercase(), op);
    }

    /// The operation registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<LogoOp> {
        self.ops.get(name).copied()
    }

    /// Whether `name` is a registered command.
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// A recognized command name and the tokens that followed it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Creates a command with no arguments yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// The `idx`th argument, if present.
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.args.get(idx).map(String::as_str)
    }
}

/// Groups tokens into commands.
///
/// Every token naming a registered command opens a new command; any other token
/// becomes an argument of the command currently open. Tokens before the first
/// recognized name belong to no command and are dropped.
pub fn bind(tokens: &[String], registry: &CommandRegistry) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut current = Command::default();
    let mut dropped = 0usize;

    for token in tokens {
        if registry.contains(token) {
            if !current.name.is_empty() {
                commands.push(current);
            }
            current = Command::new(token.as_str());
        } else if current.name.is_empty() {
            dropped += 1;
        } else {
            current.args.push(token.clone());
        }
    }

    if !current.name.is_empty() {
        commands.push(current);
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} token(s) preceding the first command");
    }

    commands
}
