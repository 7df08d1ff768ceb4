//! Core traits and types for piecewise spike-train profiles
//!
//! This crate provides the pieces shared by every profile kind: the error type,
//! query intervals, the binary-search interval locator, the [`Profile`] trait,
//! configuration, and the merge backends that sum two profiles with
//! independently chosen breakpoints.
//!
//! # Example
//!
//! ```rust
//! use profile_core::locate::{bracket, Bracket};
//! use profile_core::Interval;
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let b = bracket(&x, Interval::new(0.5, 2.5)).unwrap();
//! assert_eq!(b, Bracket { start: 1, end: 2 });
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod locate;
pub mod math;
pub mod merge;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use config::{AveragingStrategy, ProfileConfig, SmoothingConfig, Tolerance};
pub use interval::{AveragingInterval, Interval};
pub use merge::{
    default_backend, default_backend_name, DefaultBackend, MergeBackend, ReferenceBackend,
    SweepBackend,
};
pub use traits::Profile;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AveragingInterval, AveragingStrategy, Error, Interval, MergeBackend, Profile,
        ProfileConfig, Result, Tolerance,
    };
}
