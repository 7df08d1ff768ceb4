//! Piecewise spike-train profiles
//!
//! This crate provides the three concrete profile kinds and the operations
//! built on top of them:
//!
//! - [`PiecewiseConstantFunction`]: step functions such as ISI-profiles
//! - [`PiecewiseLinearFunction`]: per-interval ramps such as SPIKE-profiles
//! - [`DiscreteWeightedFunction`]: multiplicity-weighted points such as
//!   SPIKE-sync profiles
//! - [`ProfileAverager`]: folds many profiles into their mean
//! - [`SmoothingWindow`]: display smoothing for discrete profiles
//!
//! All kinds implement [`profile_core::Profile`], so merging, scaling,
//! integration and averaging share one API.
//!
//! # Examples
//!
//! ```rust
//! use profile_functions::{average_profile, PiecewiseConstantFunction};
//! use profile_core::{AveragingInterval, Profile};
//!
//! let a = PiecewiseConstantFunction::new(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
//! let b = PiecewiseConstantFunction::new(&[0.0, 1.0, 2.0, 3.0], &[5.0, 0.0, 1.0]).unwrap();
//!
//! let mut sum = a.copy();
//! sum.add(&b).unwrap();
//! assert_eq!(sum.y(), &[6.0, 2.0, 4.0]);
//! assert_eq!(sum.integral(&AveragingInterval::Whole).unwrap(), 12.0);
//!
//! let avg = average_profile(&[a, b]).unwrap();
//! assert_eq!(avg.avrg(&(0.0, 1.0).into()).unwrap(), 3.0);
//! ```

pub mod average;
pub mod constant;
pub mod discrete;
pub mod linear;
pub mod smoothing;

pub use average::{average_profile, average_profile_with, ProfileAverager};
pub use constant::PiecewiseConstantFunction;
pub use discrete::DiscreteWeightedFunction;
pub use linear::PiecewiseLinearFunction;
pub use smoothing::SmoothingWindow;

// Re-export the shared result type
pub use profile_core::{Error, Result};
