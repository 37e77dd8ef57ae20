//! # Configuration Constants
//!
//! Centralized constants for the sweep pipeline. Corner detection, miter
//! shortening, fillet/bevel construction and precision values are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Corners**: Thresholds deciding when a heading change becomes a corner
//! - **Joints**: Fillet step counts and bevel scale limits
//! - **Shapes**: Default tessellation for profile constructors

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum cross-product magnitude between two unit headings for them to
/// be considered non-colinear.
///
/// Below this the rotation axis of a corner is numerically meaningless and
/// no corner geometry is generated.
///
/// # Example
///
/// ```rust
/// use config::constants::COLINEAR_AXIS_EPSILON;
///
/// let axis_len = 1e-4;
/// assert!(axis_len < COLINEAR_AXIS_EPSILON);
/// ```
pub const COLINEAR_AXIS_EPSILON: f64 = 1e-3;

// =============================================================================
// CORNER CONSTANTS
// =============================================================================

/// Accumulated rotation (degrees) at or above which a joint between two
/// straight runs is a corner.
///
/// Below this the rotation is negligible: the adjacent segments are not
/// shortened and only automatic smoothing applies.
///
/// # Example
///
/// ```rust
/// use config::constants::CORNER_THRESHOLD_DEG;
///
/// assert_eq!(CORNER_THRESHOLD_DEG, 10.0);
/// ```
pub const CORNER_THRESHOLD_DEG: f64 = 10.0;

/// Bend angle (degrees) covered by each automatic smoothing ring.
///
/// Heading changes that are not corners receive
/// `ceil(bend / SMOOTHING_STEP_DEG)` rings (at least one).
///
/// # Example
///
/// ```rust
/// use config::constants::SMOOTHING_STEP_DEG;
///
/// let rings = (40.0_f64 / SMOOTHING_STEP_DEG).ceil() as u32;
/// assert_eq!(rings, 3);
/// ```
pub const SMOOTHING_STEP_DEG: f64 = 15.0;

/// Upper clamp on the miter half-angle before taking its tangent.
///
/// Keeps the shortening finite for near-180° reversals.
pub const MAX_MITER_HALF_ANGLE_DEG: f64 = 87.5;

/// Tolerance (degrees) under which a closed path's rotations are taken to
/// already sum to a whole number of turns.
pub const CLOSING_TOLERANCE_DEG: f64 = 1.0;

// =============================================================================
// JOINT CONSTANTS
// =============================================================================

/// Minimum number of intermediate rings in a round (fillet) joint.
pub const MIN_FILLET_STEPS: u32 = 2;

/// Default number of intermediate rings in a round joint.
pub const DEFAULT_FILLET_STEPS: u32 = 6;

/// Bend angle (degrees) beyond which a bevel ring stops following
/// `1 / cos(half_angle)` and uses [`BEVEL_MAX_SCALE`] instead.
pub const BEVEL_EXTREME_ANGLE_DEG: f64 = 170.0;

/// Scale applied to a bevel ring across the bisector for extreme bends.
///
/// # Example
///
/// ```rust
/// use config::constants::{BEVEL_EXTREME_ANGLE_DEG, BEVEL_MAX_SCALE};
///
/// let bend: f64 = 175.0;
/// let scale = if bend > BEVEL_EXTREME_ANGLE_DEG {
///     BEVEL_MAX_SCALE
/// } else {
///     1.0 / (bend / 2.0).to_radians().cos()
/// };
/// assert_eq!(scale, 2.0);
/// ```
pub const BEVEL_MAX_SCALE: f64 = 2.0;

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Default number of segments for circular profiles.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

/// Default angle (degrees) covered by one chord of an arc approximation.
pub const DEFAULT_ARC_STEP_DEG: f64 = 5.0;

// =============================================================================
// TUNING SNAPSHOT
// =============================================================================

/// Immutable snapshot of the sweep constants that can be overridden per
/// sweep call.
///
/// # Examples
/// ```
/// use config::SweepTuning;
/// let tuning = SweepTuning::default();
/// assert_eq!(tuning.corner_threshold_deg, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepTuning {
    /// Rotation sum (degrees) at which a joint becomes a corner.
    pub corner_threshold_deg: f64,
    /// Bend (degrees) covered by each automatic smoothing ring.
    pub smoothing_step_deg: f64,
    /// Clamp on the miter half-angle (degrees).
    pub max_miter_half_angle_deg: f64,
    /// Whole-turn tolerance (degrees) for closed paths.
    pub closing_tolerance_deg: f64,
    /// Colinearity cutoff on the corner rotation axis length.
    pub colinear_epsilon: f64,
    /// Bend (degrees) beyond which bevels use `bevel_max_scale`.
    pub bevel_extreme_angle_deg: f64,
    /// Bevel scale for extreme bends.
    pub bevel_max_scale: f64,
    /// Floor on fillet ring count.
    pub min_fillet_steps: u32,
}

impl SweepTuning {
    /// Builds a tuning snapshot overriding the two corner constants,
    /// rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::SweepTuning;
    /// let tuning = SweepTuning::new(5.0, 10.0).expect("valid tuning");
    /// assert_eq!(tuning.smoothing_step_deg, 10.0);
    /// assert!(SweepTuning::new(0.0, 10.0).is_err());
    /// ```
    pub fn new(corner_threshold_deg: f64, smoothing_step_deg: f64) -> Result<Self, ConfigError> {
        if !corner_threshold_deg.is_finite() || corner_threshold_deg <= 0.0 {
            return Err(ConfigError::InvalidCornerThreshold(corner_threshold_deg));
        }
        if !smoothing_step_deg.is_finite() || smoothing_step_deg <= 0.0 {
            return Err(ConfigError::InvalidSmoothingStep(smoothing_step_deg));
        }
        Ok(Self {
            corner_threshold_deg,
            smoothing_step_deg,
            ..Self::default()
        })
    }
}

impl Default for SweepTuning {
    fn default() -> Self {
        Self {
            corner_threshold_deg: CORNER_THRESHOLD_DEG,
            smoothing_step_deg: SMOOTHING_STEP_DEG,
            max_miter_half_angle_deg: MAX_MITER_HALF_ANGLE_DEG,
            closing_tolerance_deg: CLOSING_TOLERANCE_DEG,
            colinear_epsilon: COLINEAR_AXIS_EPSILON,
            bevel_extreme_angle_deg: BEVEL_EXTREME_ANGLE_DEG,
            bevel_max_scale: BEVEL_MAX_SCALE,
            min_fillet_steps: MIN_FILLET_STEPS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the corner threshold is zero, negative or non-finite.
    #[error("corner threshold must be positive: {0}")]
    InvalidCornerThreshold(f64),
    /// Raised when the smoothing step is zero, negative or non-finite.
    #[error("smoothing step must be positive: {0}")]
    InvalidSmoothingStep(f64),
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
