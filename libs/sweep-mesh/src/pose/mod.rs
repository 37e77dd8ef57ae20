//! # Cursor Pose
//!
//! Position plus an orthonormal heading/up frame. Every movement consumes a
//! pose and returns a new one; nothing is mutated in place.
//!
//! ## Conventions
//!
//! - `right = heading × up`
//! - Yaw rotates heading about up
//! - Pitch rotates heading and up about right
//! - Roll rotates up about heading
//!
//! Non-finite distances or angles are rejected with
//! [`SweepError::NonFinite`](crate::error::SweepError::NonFinite).

use crate::error::{ensure_finite, SweepResult};
use crate::math::{normalize, rotate_direction_around_axis, Vec3};
use crate::path::Command;
use config::constants::COLINEAR_AXIS_EPSILON;
use serde::{Deserialize, Serialize};

/// Cursor position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Cursor position
    pub position: Vec3,
    /// Unit travel direction
    pub heading: Vec3,
    /// Unit up direction, perpendicular to heading
    pub up: Vec3,
}

impl Default for Pose {
    /// Origin, heading +X, up +Z.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Vec3::X,
            up: Vec3::Z,
        }
    }
}

impl Pose {
    /// Creates a pose, normalizing both directions.
    pub fn new(position: Vec3, heading: Vec3, up: Vec3) -> Self {
        Self {
            position,
            heading: normalize(heading),
            up: normalize(up),
        }
    }

    /// Returns `heading × up`.
    #[inline]
    pub fn right(&self) -> Vec3 {
        normalize(self.heading.cross(self.up))
    }

    /// Returns the same orientation at another position.
    #[must_use]
    pub fn at(&self, position: Vec3) -> Self {
        Self { position, ..*self }
    }

    /// Moves along the heading. Negative distances move backward.
    pub fn forward(&self, distance: f64) -> SweepResult<Self> {
        let distance = ensure_finite("forward", distance)?;
        Ok(self.at(self.position + self.heading * distance))
    }

    /// Rotates heading about up.
    pub fn yaw(&self, angle_deg: f64) -> SweepResult<Self> {
        let angle = ensure_finite("yaw", angle_deg)?.to_radians();
        Ok(Self {
            heading: rotate_direction_around_axis(self.heading, self.up, angle),
            ..*self
        })
    }

    /// Rotates heading and up about right.
    pub fn pitch(&self, angle_deg: f64) -> SweepResult<Self> {
        let angle = ensure_finite("pitch", angle_deg)?.to_radians();
        let right = self.right();
        Ok(Self {
            heading: rotate_direction_around_axis(self.heading, right, angle),
            up: rotate_direction_around_axis(self.up, right, angle),
            ..*self
        })
    }

    /// Rotates up about heading.
    pub fn roll(&self, angle_deg: f64) -> SweepResult<Self> {
        let angle = ensure_finite("roll", angle_deg)?.to_radians();
        Ok(Self {
            up: rotate_direction_around_axis(self.up, self.heading, angle),
            ..*self
        })
    }

    /// Sets an absolute orientation.
    ///
    /// `up` is re-orthogonalized against `heading`. A zero heading leaves the
    /// orientation unchanged; an up parallel to heading keeps the current up
    /// (re-orthogonalized) when possible.
    pub fn set_heading(&self, heading: Vec3, up: Vec3) -> SweepResult<Self> {
        for value in heading.to_array().into_iter().chain(up.to_array()) {
            ensure_finite("set_heading", value)?;
        }
        let heading = normalize(heading);
        if heading == Vec3::ZERO {
            return Ok(*self);
        }
        let up = orthogonal_part(up, heading)
            .or_else(|| orthogonal_part(self.up, heading))
            .unwrap_or_else(|| heading.any_orthonormal_vector());
        Ok(Self {
            heading,
            up,
            ..*self
        })
    }

    /// Applies one command.
    pub fn apply(&self, command: &Command) -> SweepResult<Self> {
        match *command {
            Command::Forward(d) => self.forward(d),
            Command::Yaw(a) => self.yaw(a),
            Command::Pitch(a) => self.pitch(a),
            Command::Roll(a) => self.roll(a),
            Command::SetHeading(h, u) => self.set_heading(h, u),
        }
    }

    /// Applies commands strictly in order.
    pub fn apply_all<'a>(&self, commands: impl IntoIterator<Item = &'a Command>) -> SweepResult<Self> {
        commands
            .into_iter()
            .try_fold(*self, |pose, command| pose.apply(command))
    }
}

/// Unit component of `v` perpendicular to the unit `axis`, if any remains.
fn orthogonal_part(v: Vec3, axis: Vec3) -> Option<Vec3> {
    let perp = v - axis * v.dot(axis);
    let len = perp.length();
    (len > COLINEAR_AXIS_EPSILON).then(|| perp / len)
}

#[cfg(test)]
mod tests;
