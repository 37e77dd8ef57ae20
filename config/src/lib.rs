//! # Config Crate
//!
//! Centralized configuration constants for the sweep mesh engine.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CORNER_THRESHOLD_DEG, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Rotations below the corner threshold never shorten a segment
//! let turn = 5.0;
//! assert!(turn < CORNER_THRESHOLD_DEG);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Overridable**: [`constants::SweepTuning`] snapshots the constants per sweep
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

pub use constants::{ConfigError, SweepTuning};
