//! # Paths
//!
//! A path is the recorded, ordered list of cursor commands a profile is
//! swept along. Composition is not commutative: commands are replayed in
//! exactly the order they were recorded.
//!
//! ## Example
//!
//! ```rust
//! use sweep_mesh::path::{Command, Path};
//!
//! let path = Path::new().forward(20.0).yaw(90.0).forward(20.0);
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.forward_count(), 2);
//! assert_eq!(path.commands()[1], Command::Yaw(90.0));
//! ```

use crate::error::{ensure_finite, SweepResult};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// A single cursor command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Move along the heading; negative distances move backward.
    Forward(f64),
    /// Rotate heading about up (degrees).
    Yaw(f64),
    /// Rotate heading and up about right (degrees).
    Pitch(f64),
    /// Rotate up about heading (degrees).
    Roll(f64),
    /// Absolute orientation. Never counts as a corner.
    SetHeading(Vec3, Vec3),
}

impl Command {
    /// Command name used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Forward(_) => "forward",
            Command::Yaw(_) => "yaw",
            Command::Pitch(_) => "pitch",
            Command::Roll(_) => "roll",
            Command::SetHeading(..) => "set_heading",
        }
    }

    /// Signed rotation angle in degrees for yaw/pitch/roll, `None` otherwise.
    pub fn rotation_deg(&self) -> Option<f64> {
        match *self {
            Command::Yaw(a) | Command::Pitch(a) | Command::Roll(a) => Some(a),
            Command::Forward(_) | Command::SetHeading(..) => None,
        }
    }

    /// True for every command that changes orientation but not position.
    pub fn is_turn(&self) -> bool {
        !matches!(self, Command::Forward(_))
    }

    /// Rejects NaN or infinite arguments, naming this command.
    pub fn check_finite(&self) -> SweepResult<()> {
        match *self {
            Command::Forward(v) | Command::Yaw(v) | Command::Pitch(v) | Command::Roll(v) => {
                ensure_finite(self.name(), v)?;
            }
            Command::SetHeading(h, u) => {
                for v in h.to_array().into_iter().chain(u.to_array()) {
                    ensure_finite(self.name(), v)?;
                }
            }
        }
        Ok(())
    }
}

/// Ordered list of commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Appends `Forward(distance)`.
    #[must_use]
    pub fn forward(mut self, distance: f64) -> Self {
        self.push(Command::Forward(distance));
        self
    }

    /// Appends `Yaw(angle_deg)`.
    #[must_use]
    pub fn yaw(mut self, angle_deg: f64) -> Self {
        self.push(Command::Yaw(angle_deg));
        self
    }

    /// Appends `Pitch(angle_deg)`.
    #[must_use]
    pub fn pitch(mut self, angle_deg: f64) -> Self {
        self.push(Command::Pitch(angle_deg));
        self
    }

    /// Appends `Roll(angle_deg)`.
    #[must_use]
    pub fn roll(mut self, angle_deg: f64) -> Self {
        self.push(Command::Roll(angle_deg));
        self
    }

    /// Appends `SetHeading(heading, up)`.
    #[must_use]
    pub fn set_heading(mut self, heading: Vec3, up: Vec3) -> Self {
        self.push(Command::SetHeading(heading, up));
        self
    }

    /// Returns the recorded commands.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the number of commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `Forward` commands.
    pub fn forward_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Forward(_)))
            .count()
    }
}

impl From<Vec<Command>> for Path {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

#[cfg(test)]
mod tests;
