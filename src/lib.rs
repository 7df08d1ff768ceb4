//! Piecewise profile algebra for spike-train dissimilarity measures
//!
//! Facade over the workspace crates:
//!
//! - [`core`]: error type, query intervals, configuration, the `Profile` trait
//!   and the merge backends
//! - [`functions`]: the constant, linear and discrete profile kinds, averaging
//!   and display smoothing
//!
//! # Example
//!
//! ```rust
//! use spike_profiles::prelude::*;
//!
//! let a = PiecewiseLinearFunction::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], &[1.0, 0.0]).unwrap();
//! let b = PiecewiseLinearFunction::new(&[0.0, 2.0], &[1.0], &[1.0]).unwrap();
//!
//! let avg = average_profile(&[a, b]).unwrap();
//! assert_eq!(avg.x(), &[0.0, 1.0, 2.0]);
//! assert_eq!(avg.integral(&AveragingInterval::Whole).unwrap(), 1.5);
//! ```

pub use profile_core as core;
pub use profile_functions as functions;

pub use profile_core::{
    default_backend_name, AveragingInterval, AveragingStrategy, Error, Interval, Profile,
    ProfileConfig, Result, SmoothingConfig, Tolerance,
};
pub use profile_functions::{
    average_profile, average_profile_with, DiscreteWeightedFunction, PiecewiseConstantFunction,
    PiecewiseLinearFunction, ProfileAverager, SmoothingWindow,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use profile_core::prelude::*;
    pub use profile_functions::{
        average_profile, DiscreteWeightedFunction, PiecewiseConstantFunction,
        PiecewiseLinearFunction, ProfileAverager, SmoothingWindow,
    };
}
