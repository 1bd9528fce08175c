//! The command manual shown alongside the canvas.
//!
//! Purely documentation: the interpreter never reads it.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One documented command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    /// Human-readable name, e.g. `"Forward"`.
    pub name: String,
    /// Usage as typed in a program, e.g. `"fd distance"`.
    pub code: String,
    /// What the command does.
    pub desc: String,
}

/// A list of documented commands, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manual {
    pub commands: Vec<ManualEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ManualError {
    #[error("failed to read command manual {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed command manual: {0}")]
    Json(#[from] serde_json::Error),
}

impl Manual {
    /// Parses a manual from its JSON form: `{"commands": [{"name", "code", "desc"}, ...]}`.
    pub fn from_json(json: &str) -> Result<Self, ManualError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON manual file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManualError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ManualError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serializes the manual back to its pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String, ManualError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up an entry by the command keyword it documents (the first word of `code`).
    pub fn get(&self, keyword: &str) -> Option<&ManualEntry> {
        self.commands
            .iter()
            .find(|entry| entry.code.split_whitespace().next() == Some(keyword))
    }

    /// Documentation for the standard command set.
    pub fn standard() -> Self {
        let entries = [
            ("Forward", "fd distance", "Moves the turtle forward by the given distance."),
            ("Backward", "bd distance", "Moves the turtle backward by the given distance."),
            ("Right", "rt degrees", "Turns the turtle clockwise by the given angle."),
            ("Left", "lt degrees", "Turns the turtle counter-clockwise by the given angle."),
            (
                "Repeat",
                "repeat count [ commands ]",
                "Runs the commands between brackets the given number of times.",
            ),
            ("Pen up", "pu", "Lifts the pen: the turtle moves without drawing."),
            ("Pen down", "pd", "Lowers the pen: the turtle draws as it moves."),
            ("Pen size", "ps size", "Sets the width of drawn lines (at least 1)."),
            ("Show turtle", "st", "Shows the turtle."),
            ("Hide turtle", "ht", "Hides the turtle."),
            ("Home", "home", "Moves the turtle back to the center without drawing."),
            (
                "Set position",
                "setxy x y",
                "Moves the turtle to the given coordinates without drawing.",
            ),
            ("Set X", "setx x", "Sets the turtle's horizontal coordinate."),
            ("Set Y", "sety y", "Sets the turtle's vertical coordinate."),
            ("Set heading", "seth angle", "Points the turtle at the given angle. 0 is up."),
            ("Color", "color name", "Sets the pen color, e.g. red or #ff0000."),
            ("Background color", "bgcolor name", "Sets the canvas background color."),
            ("Clear screen", "cs", "Erases the drawing and resets the turtle."),
        ];

        Self {
            commands: entries
                .into_iter()
                .map(|(name, code, desc)| ManualEntry {
                    name: name.to_owned(),
                    code: code.to_owned(),
                    desc: desc.to_owned(),
                })
                .collect(),
        }
    }
}
