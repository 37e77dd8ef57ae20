//! # Turtle Recorder
//!
//! Couples a cursor [`Pose`] with a pen and records the movements made
//! while the pen is down into a [`Path`] ready for sweeping.
//!
//! ## Pen Semantics
//!
//! - **Down**: every command moves the cursor and is recorded.
//! - **Up**: the cursor moves but forward moves are not recorded. Until
//!   the first command has been recorded the path origin follows the
//!   cursor, so pen-up travel simply relocates where the sweep starts.
//!
//! Turns made with the pen up after recording has begun are still
//! recorded so later segments keep the heading the cursor actually has.
//!
//! ## Example
//!
//! ```rust
//! use sweep_mesh::turtle::Turtle;
//!
//! let mut turtle = Turtle::default();
//! turtle.pen_up();
//! turtle.forward(5.0).unwrap();
//! turtle.pen_down();
//! turtle.forward(10.0).unwrap();
//!
//! let (origin, path) = turtle.take_path();
//! assert_eq!(origin.position.x, 5.0);
//! assert_eq!(path.len(), 1);
//! ```

use crate::error::{ensure_finite, SweepResult};
use crate::math::{rotate_direction_around_axis, Vec3};
use crate::path::{Command, Path};
use crate::pose::Pose;
use config::constants::{DEFAULT_ARC_STEP_DEG, EPSILON};
use serde::{Deserialize, Serialize};

/// Whether movements are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenMode {
    /// Movements are recorded
    #[default]
    Down,
    /// Movements only relocate the cursor
    Up,
}

/// Plane an arc turns in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnAxis {
    /// Turn about up (left for positive angles)
    #[default]
    Yaw,
    /// Turn about right (nose up for positive angles)
    Pitch,
}

/// Options for [`Turtle::arc`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcOptions {
    /// Arc radius measured from the cursor to the turn center
    pub radius: f64,
    /// Signed sweep angle in degrees
    pub angle_deg: f64,
    /// Chord count; `None` derives one chord per `DEFAULT_ARC_STEP_DEG`
    pub steps: Option<u32>,
    /// Turning plane
    pub turn: TurnAxis,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            radius: 10.0,
            angle_deg: 90.0,
            steps: None,
            turn: TurnAxis::Yaw,
        }
    }
}

impl ArcOptions {
    /// Arc of `radius` through `angle_deg` with default steps, turning by yaw.
    pub fn new(radius: f64, angle_deg: f64) -> Self {
        Self {
            radius,
            angle_deg,
            ..Self::default()
        }
    }

    /// Number of chords used for the arc, at least one.
    pub fn step_count(&self) -> u32 {
        match self.steps {
            Some(n) => n.max(1),
            None => ((self.angle_deg.abs() / DEFAULT_ARC_STEP_DEG).ceil() as u32).max(1),
        }
    }
}

/// Cursor plus pen plus recorded path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Turtle {
    pose: Pose,
    pen: PenMode,
    origin: Pose,
    path: Path,
}

impl Turtle {
    /// Creates a turtle at `pose` with the pen down.
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            pen: PenMode::Down,
            origin: pose,
            path: Path::new(),
        }
    }

    /// Current cursor pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Current pen mode.
    pub fn pen(&self) -> PenMode {
        self.pen
    }

    /// Pose the recorded path starts from.
    pub fn origin(&self) -> &Pose {
        &self.origin
    }

    /// Path recorded so far.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stops recording movements.
    pub fn pen_up(&mut self) {
        self.pen = PenMode::Up;
    }

    /// Resumes recording movements.
    pub fn pen_down(&mut self) {
        self.pen = PenMode::Down;
    }

    /// Sets the pen mode.
    pub fn set_pen(&mut self, pen: PenMode) {
        self.pen = pen;
    }

    /// Moves along the heading.
    pub fn forward(&mut self, distance: f64) -> SweepResult<()> {
        self.apply(Command::Forward(distance))
    }

    /// Turns left about up.
    pub fn yaw(&mut self, angle_deg: f64) -> SweepResult<()> {
        self.apply(Command::Yaw(angle_deg))
    }

    /// Turns nose-up about right.
    pub fn pitch(&mut self, angle_deg: f64) -> SweepResult<()> {
        self.apply(Command::Pitch(angle_deg))
    }

    /// Rolls up about heading.
    pub fn roll(&mut self, angle_deg: f64) -> SweepResult<()> {
        self.apply(Command::Roll(angle_deg))
    }

    /// Sets an absolute orientation.
    pub fn set_heading(&mut self, heading: Vec3, up: Vec3) -> SweepResult<()> {
        self.apply(Command::SetHeading(heading, up))
    }

    /// Moves the cursor by `command` and records it per the pen mode.
    ///
    /// A rejected command leaves the turtle untouched.
    pub fn apply(&mut self, command: Command) -> SweepResult<()> {
        self.pose = self.pose.apply(&command)?;

        let recording = !self.path.is_empty();
        match (self.pen, command) {
            (PenMode::Down, _) => self.path.push(command),
            (PenMode::Up, _) if !recording => self.origin = self.pose,
            (PenMode::Up, Command::Forward(_)) => {}
            (PenMode::Up, turn) => self.path.push(turn),
        }
        Ok(())
    }

    /// Approximates a circular arc by chords.
    ///
    /// Each chord is preceded by an absolute `SetHeading` along the arc's
    /// mid-chord tangent, and a final `SetHeading` leaves the cursor on the
    /// end tangent. Absolute headings never count as corners, so the sweep
    /// smooths these joints automatically.
    ///
    /// # Arguments
    ///
    /// * `options` - Radius, signed angle, chord count and turning plane
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_mesh::turtle::{ArcOptions, Turtle};
    ///
    /// let mut turtle = Turtle::default();
    /// turtle.arc(ArcOptions::new(10.0, 90.0)).unwrap();
    /// let end = turtle.pose().position;
    /// assert!((end.x - 10.0).abs() < 1e-9 && (end.y - 10.0).abs() < 1e-9);
    /// ```
    pub fn arc(&mut self, options: ArcOptions) -> SweepResult<()> {
        let angle_deg = ensure_finite("arc", options.angle_deg)?;
        let radius = ensure_finite("arc", options.radius)?.abs();
        if angle_deg.abs() < EPSILON || radius < EPSILON {
            return Ok(());
        }

        let start = self.pose;
        let axis = match options.turn {
            TurnAxis::Yaw => start.up,
            TurnAxis::Pitch => start.right(),
        };
        let steps = options.step_count();
        let step = angle_deg.to_radians() / f64::from(steps);
        let chord = 2.0 * radius * (step.abs() / 2.0).sin();

        let orient = |angle: f64| {
            Command::SetHeading(
                rotate_direction_around_axis(start.heading, axis, angle),
                rotate_direction_around_axis(start.up, axis, angle),
            )
        };

        for i in 0..steps {
            self.apply(orient(step * (f64::from(i) + 0.5)))?;
            self.apply(Command::Forward(chord))?;
        }
        self.apply(orient(step * f64::from(steps)))
    }

    /// Returns `(origin, path)` and restarts recording at the current pose.
    pub fn take_path(&mut self) -> (Pose, Path) {
        let origin = std::mem::replace(&mut self.origin, self.pose);
        (origin, std::mem::take(&mut self.path))
    }
}
