//! # Sweep Mesh
//!
//! Procedural mesh generation by sweeping a 2D profile along a recorded
//! cursor path. Produces watertight triangle meshes with mitered, filleted
//! or bevelled corners, closed loops and profiles with holes.
//!
//! ## Architecture
//!
//! ```text
//! Path + Shape → analyze (miter pull-backs) → stamp / corner (rings)
//!              → sweep (side faces + caps) → Mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Rotation**: Rodrigues formula on an orthonormal heading/up frame
//! - **Corners**: Miter shortening, fillet rings about an inner pivot,
//!   bisector bevel rings
//! - **Caps**: Ear clipping (`earcutr`) with winding correction
//! - **Assembly**: Shorter-diagonal quad split, shared rings, torus wrap
//!
//! ## Usage
//!
//! ```rust
//! use sweep_mesh::{sweep, Path, Pose, Shape, SweepOptions};
//!
//! let path = Path::new().forward(30.0).yaw(90.0).forward(30.0);
//! let result = sweep(&Shape::circle(5.0, 16), &path, &Pose::default(), &SweepOptions::default())?;
//! let mesh = result.mesh.expect("path has straight runs");
//! assert!(mesh.triangle_count() > 0);
//! # Ok::<(), sweep_mesh::SweepError>(())
//! ```

pub mod analyze;
pub mod cap;
pub mod corner;
pub mod driver;
pub mod error;
pub mod math;
pub mod mesh;
pub mod path;
pub mod pose;
pub mod shape;
pub mod stamp;
pub mod sweep;
pub mod topology;
pub mod turtle;

pub use corner::{JointMode, Resolution};
pub use driver::{extrude, sweep, sweep_many, Sweep, SweepJob, SweepOptions};
pub use error::{SweepError, SweepResult};
pub use mesh::Mesh;
pub use path::{Command, Path};
pub use pose::Pose;
pub use shape::{Anchor, Shape};
pub use turtle::{ArcOptions, PenMode, Turtle};
