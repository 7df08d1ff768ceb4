//! Merge backends with compile-time selection
//!
//! A merge backend combines two profiles of the same kind, defined on the same
//! domain but with independently chosen breakpoints, into their pointwise sum.
//!
//! # Architecture
//!
//! - Single `MergeBackend` trait covering all three profile kinds
//! - Concrete backend types: `SweepBackend` (single pass), `ReferenceBackend` (naive)
//! - Build-time selection through the `reference-backend` feature
//! - Backends operate on borrowed slices and return owned parts, no dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use profile_core::merge::{default_backend, MergeBackend, StepSlices};
//!
//! let backend = default_backend();
//! let merged = backend.merge_constant(
//!     StepSlices { x: &[0.0, 1.0, 3.0], y: &[1.0, 2.0] },
//!     StepSlices { x: &[0.0, 2.0, 3.0], y: &[5.0, 1.0] },
//! );
//! assert_eq!(merged.x, vec![0.0, 1.0, 2.0, 3.0]);
//! assert_eq!(merged.y, vec![6.0, 7.0, 3.0]);
//! ```

pub mod reference;
pub mod sweep;

pub use reference::ReferenceBackend;
pub use sweep::SweepBackend;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Borrowed arrays of a piecewise-constant profile
#[derive(Debug, Clone, Copy)]
pub struct StepSlices<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

/// Borrowed arrays of a piecewise-linear profile
#[derive(Debug, Clone, Copy)]
pub struct RampSlices<'a> {
    pub x: &'a [f64],
    pub y1: &'a [f64],
    pub y2: &'a [f64],
}

/// Borrowed arrays of a discrete weighted profile
#[derive(Debug, Clone, Copy)]
pub struct PointSlices<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub mp: &'a [f64],
}

/// Merged piecewise-constant arrays
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepParts {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Merged piecewise-linear arrays
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RampParts {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
}

/// Merged discrete weighted arrays
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointParts {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mp: Vec<f64>,
}

/// Pointwise-sum merge for the three profile kinds.
///
/// Implementations may assume both operands are structurally valid and share
/// identical domain endpoints; callers check this before dispatching.
pub trait MergeBackend {
    /// Get the backend name
    fn backend_name(&self) -> &'static str;

    /// Union the breakpoints and sum the step values on every sub-interval
    fn merge_constant(&self, a: StepSlices<'_>, b: StepSlices<'_>) -> StepParts;

    /// Union the breakpoints and sum the (interpolated) ramp endpoint values
    fn merge_linear(&self, a: RampSlices<'_>, b: RampSlices<'_>) -> RampParts;

    /// Union the points, summing values and multiplicities of coinciding points
    fn merge_discrete(&self, a: PointSlices<'_>, b: PointSlices<'_>) -> PointParts;
}

/// Breakpoint order in which IEEE-equal values such as `-0.0` and `0.0` coincide.
///
/// Breakpoints are validated finite, so the comparison is total in practice.
pub(crate) fn cmp_breakpoints(u: &f64, v: &f64) -> Ordering {
    u.partial_cmp(v).unwrap_or(Ordering::Equal)
}

/// Backend used by `add` unless the caller supplies one explicitly
#[cfg(not(feature = "reference-backend"))]
pub type DefaultBackend = SweepBackend;

/// Backend used by `add` unless the caller supplies one explicitly
#[cfg(feature = "reference-backend")]
pub type DefaultBackend = ReferenceBackend;

/// Create the build-time selected backend
pub fn default_backend() -> DefaultBackend {
    DefaultBackend::new()
}

/// Get the build-time selected backend name
pub fn default_backend_name() -> &'static str {
    default_backend().backend_name()
}
