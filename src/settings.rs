//! Engine constants and the process-wide unit scaling factor.

use crate::math::Real;
use core::sync::atomic::{AtomicU64, Ordering};

/// The maximum number of vertices of a native engine polygon.
///
/// This is also the capacity of every fixed-size vertex buffer of this crate.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// Number of vertices a chunk gives back to the next one when the boundary
/// would otherwise end with a too small fragment.
pub const SEGMENT_REMAINDER_BALANCE: usize = 4;

/// The engine's base linear slop, in physics units.
pub const DEFAULT_LINEAR_SLOP: Real = 0.005;

/// The engine's implicit polygon skin radius, in physics units.
pub const DEFAULT_POLYGON_RADIUS: Real = 2.0 * DEFAULT_LINEAR_SLOP;

// Bits of a `f64`; `0x3ff0...` is `1.0`.
static SCALING_FACTOR: AtomicU64 = AtomicU64::new(0x3ff0_0000_0000_0000);

/// The process-wide ratio between caller (world) units and physics units.
///
/// Defaults to `1.0`.
pub fn scaling_factor() -> Real {
    f64::from_bits(SCALING_FACTOR.load(Ordering::Relaxed)) as Real
}

/// Sets the process-wide ratio between caller (world) units and physics units.
///
/// Returns `false` and leaves the current value untouched if `factor` is not
/// a finite positive number. Only shapes configured afterwards see the new
/// value.
pub fn set_scaling_factor(factor: Real) -> bool {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Ignoring invalid scaling factor {}.", factor);
        return false;
    }

    SCALING_FACTOR.store((factor as f64).to_bits(), Ordering::Relaxed);
    true
}

/// Tolerances and unit conversions used by the decomposition pipeline.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "f32")]
/// # use polyhull2d::settings::PhysicsSettings;
/// # #[cfg(feature = "f64")]
/// # use polyhull2d_f64::settings::PhysicsSettings;
/// let settings = PhysicsSettings {
///     scaling_factor: 50.0,
///     ..PhysicsSettings::default()
/// };
///
/// assert!(settings.ingestion_weld_threshold_sq() > settings.hull_weld_threshold_sq());
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PhysicsSettings {
    /// Ratio between caller units and physics units.
    pub scaling_factor: Real,
    /// The engine's linear slop, in physics units.
    pub linear_slop: Real,
    /// The radius the engine pads every polygon with, in physics units.
    pub polygon_radius: Real,
    /// The maximum vertex count of a segment polygon.
    ///
    /// Values outside of `[3, MAX_POLYGON_VERTICES]` are clamped.
    pub max_polygon_vertices: usize,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            scaling_factor: scaling_factor(),
            linear_slop: DEFAULT_LINEAR_SLOP,
            polygon_radius: DEFAULT_POLYGON_RADIUS,
            max_polygon_vertices: MAX_POLYGON_VERTICES,
        }
    }
}

impl PhysicsSettings {
    /// Squared weld distance applied to a boundary when it is configured.
    ///
    /// This is expressed in caller units, hence scaled by [`Self::scaling_factor`].
    #[inline]
    pub fn ingestion_weld_threshold_sq(&self) -> Real {
        let threshold = 0.5 * self.linear_slop * self.scaling_factor;
        threshold * threshold
    }

    /// Squared weld distance applied right before hull extraction.
    ///
    /// Unlike [`Self::ingestion_weld_threshold_sq`], this one is never scaled.
    #[inline]
    pub fn hull_weld_threshold_sq(&self) -> Real {
        let threshold = 0.5 * self.linear_slop;
        threshold * threshold
    }

    /// The engine's polygon skin radius converted to caller units.
    #[inline]
    pub fn skin_radius(&self) -> Real {
        self.polygon_radius * self.scaling_factor
    }

    /// The effective maximum vertex count of a segment polygon.
    #[inline]
    pub fn segment_max_vertices(&self) -> usize {
        self.max_polygon_vertices.clamp(3, MAX_POLYGON_VERTICES)
    }
}
