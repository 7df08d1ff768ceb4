//! Discrete multiplicity-weighted profiles
//!
//! Values `y` and multiplicities `mp` accumulate at discrete points `x`; the
//! effective value of a point is `y / mp`. The first and last points mark the
//! domain boundaries and are excluded from whole-domain sums.

use crate::smoothing::SmoothingWindow;
use profile_core::locate::{select_points, validate_breakpoints};
use profile_core::math::all_close;
use profile_core::merge::{MergeBackend, PointParts, PointSlices};
use profile_core::traits::check_same_domain;
use profile_core::{AveragingInterval, Error, Interval, Profile, Result, SmoothingConfig, Tolerance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::debug;

/// A discrete function with accumulated multiplicities (e.g. a SPIKE-sync profile)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointParts")]
pub struct DiscreteWeightedFunction {
    x: Vec<f64>,
    y: Vec<f64>,
    mp: Vec<f64>,
}

impl DiscreteWeightedFunction {
    /// Create a discrete function, copying the given arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use profile_functions::DiscreteWeightedFunction;
    /// use profile_core::{AveragingInterval, Profile};
    ///
    /// let f = DiscreteWeightedFunction::new(
    ///     &[0.0, 1.0, 2.0, 3.0],
    ///     &[0.0, 1.0, 3.0, 0.0],
    ///     &[1.0, 2.0, 4.0, 1.0],
    /// )
    /// .unwrap();
    /// assert_eq!(f.integral(&AveragingInterval::Whole).unwrap(), 4.0 / 6.0);
    /// ```
    pub fn new(x: &[f64], y: &[f64], mp: &[f64]) -> Result<Self> {
        Self::from_parts(PointParts {
            x: x.to_vec(),
            y: y.to_vec(),
            mp: mp.to_vec(),
        })
    }

    fn from_parts(parts: PointParts) -> Result<Self> {
        validate_breakpoints(&parts.x, 2)?;
        let n = parts.x.len();
        if parts.y.len() != n {
            return Err(Error::size_mismatch(n, parts.y.len(), "point values"));
        }
        if parts.mp.len() != n {
            return Err(Error::size_mismatch(n, parts.mp.len(), "multiplicities"));
        }
        if parts.y.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("point values"));
        }
        if parts.mp.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(Error::InvalidInput(
                "multiplicities must be finite and non-negative".to_string(),
            ));
        }
        Ok(Self {
            x: parts.x,
            y: parts.y,
            mp: parts.mp,
        })
    }

    /// Get the point coordinates
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Get the accumulated values
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Get the accumulated multiplicities
    pub fn mp(&self) -> &[f64] {
        &self.mp
    }

    pub fn num_points(&self) -> usize {
        self.x.len()
    }

    /// Unsmoothed effective values `y / mp`; zero-multiplicity points give NaN
    pub fn effective_values(&self) -> Vec<f64> {
        SmoothingWindow::new(0).apply(&self.y, &self.mp)
    }

    /// Plot coordinates with effective values smoothed over `window` units
    pub fn plottable_data_smoothed(&self, window: usize) -> (Vec<f64>, Vec<f64>) {
        let y_plot = SmoothingWindow::new(window).apply(&self.y, &self.mp);
        (self.x.clone(), y_plot)
    }

    /// Plot coordinates with the configured smoothing window
    pub fn plottable_data_with(&self, config: &SmoothingConfig) -> (Vec<f64>, Vec<f64>) {
        self.plottable_data_smoothed(config.window)
    }

    fn slices(&self) -> PointSlices<'_> {
        PointSlices {
            x: &self.x,
            y: &self.y,
            mp: &self.mp,
        }
    }

    fn selection(&self, interval: Option<Interval>) -> Result<Range<usize>> {
        match interval {
            None => Ok(1..self.x.len() - 1),
            Some(iv) => select_points(&self.x, iv),
        }
    }

    /// Pooled `(sum y, sum mp)` over every selected point
    fn weighted_sums(&self, interval: &AveragingInterval) -> Result<(f64, f64)> {
        let ranges = match interval {
            AveragingInterval::Whole => vec![self.selection(None)?],
            AveragingInterval::Single(iv) => vec![self.selection(Some(*iv))?],
            AveragingInterval::Multiple(ivs) => {
                if ivs.is_empty() {
                    return Err(Error::InvalidInterval(
                        "sequence of intervals is empty".to_string(),
                    ));
                }
                ivs.iter()
                    .map(|iv| self.selection(Some(*iv)))
                    .collect::<Result<Vec<_>>>()?
            }
        };

        Ok(ranges.into_iter().fold((0.0, 0.0), |(sy, smp), r| {
            (
                sy + self.y[r.clone()].iter().sum::<f64>(),
                smp + self.mp[r].iter().sum::<f64>(),
            )
        }))
    }
}

impl TryFrom<PointParts> for DiscreteWeightedFunction {
    type Error = Error;

    fn try_from(parts: PointParts) -> Result<Self> {
        Self::from_parts(parts)
    }
}

impl Profile for DiscreteWeightedFunction {
    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    fn add_with<B: MergeBackend>(&mut self, other: &Self, backend: &B) -> Result<()> {
        check_same_domain(self.domain(), other.domain())?;
        let merged = backend.merge_discrete(self.slices(), other.slices());
        debug!(
            backend = backend.backend_name(),
            "merged discrete profiles: {} + {} -> {} points",
            self.num_points(),
            other.num_points(),
            merged.x.len()
        );
        self.x = merged.x;
        self.y = merged.y;
        self.mp = merged.mp;
        Ok(())
    }

    /// Scales the accumulated values; multiplicities are counts and stay as they are
    fn mul_scalar(&mut self, factor: f64) {
        self.y.iter_mut().for_each(|v| *v *= factor);
    }

    /// Multiplicity-weighted mean `sum(y) / sum(mp)` over the selected points
    fn integral(&self, interval: &AveragingInterval) -> Result<f64> {
        let (sum_y, sum_mp) = self.weighted_sums(interval)?;
        if sum_mp <= 0.0 {
            let (start, end) = match interval {
                AveragingInterval::Single(iv) => (iv.start, iv.end),
                _ => self.domain(),
            };
            return Err(Error::EmptySelection { start, end });
        }
        Ok(sum_y / sum_mp)
    }

    /// Same as [`integral`](Profile::integral): it is already a weighted mean
    fn avrg(&self, interval: &AveragingInterval) -> Result<f64> {
        self.integral(interval)
    }

    fn almost_equal_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        let eps = tolerance.eps();
        all_close(&self.x, &other.x, eps)
            && all_close(&self.y, &other.y, eps)
            && all_close(&self.mp, &other.mp, eps)
    }

    fn plottable_data(&self) -> (Vec<f64>, Vec<f64>) {
        self.plottable_data_smoothed(0)
    }
}

impl fmt::Display for DiscreteWeightedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.domain();
        write!(
            f,
            "DiscreteWeightedFunction({} points, domain=[{:.3}, {:.3}])",
            self.num_points(),
            start,
            end
        )
    }
}
