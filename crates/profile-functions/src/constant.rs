//! Piecewise-constant profiles
//!
//! A step function over N intervals: `x` holds N+1 strictly increasing
//! breakpoints and `y[i]` is the value on `[x[i], x[i+1])`.

use profile_core::locate::{bracket, locate, validate_breakpoints, Side};
use profile_core::math::all_close;
use profile_core::merge::{MergeBackend, StepParts, StepSlices};
use profile_core::traits::{check_same_domain, length_weighted_average, pooled_integral};
use profile_core::{AveragingInterval, Error, Interval, Profile, Result, Tolerance};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A piecewise-constant function (e.g. an ISI-profile)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StepParts")]
pub struct PiecewiseConstantFunction {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PiecewiseConstantFunction {
    /// Create a step function, copying the given breakpoints and values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use profile_functions::PiecewiseConstantFunction;
    /// use profile_core::{AveragingInterval, Profile};
    ///
    /// let f = PiecewiseConstantFunction::new(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(f.integral(&AveragingInterval::Whole).unwrap(), 6.0);
    /// assert_eq!(f.avrg(&AveragingInterval::Whole).unwrap(), 2.0);
    /// ```
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        Self::from_parts(StepParts {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    fn from_parts(parts: StepParts) -> Result<Self> {
        validate_breakpoints(&parts.x, 2)?;
        if parts.y.len() != parts.x.len() - 1 {
            return Err(Error::size_mismatch(
                parts.x.len() - 1,
                parts.y.len(),
                "step values",
            ));
        }
        if parts.y.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("step values"));
        }
        Ok(Self {
            x: parts.x,
            y: parts.y,
        })
    }

    /// Get the breakpoints
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Get the step values
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Get the number of intervals
    pub fn num_intervals(&self) -> usize {
        self.y.len()
    }

    /// Value of the step function at `t`; the last interval includes the domain end
    pub fn value_at(&self, t: f64) -> Result<f64> {
        let (start, end) = self.domain();
        if !(start..=end).contains(&t) {
            return Err(Error::OutOfDomain {
                start: t,
                end: t,
                domain: (start, end),
            });
        }
        let i = (locate(&self.x, t, Side::Right) - 1).min(self.y.len() - 1);
        Ok(self.y[i])
    }

    fn slices(&self) -> StepSlices<'_> {
        StepSlices {
            x: &self.x,
            y: &self.y,
        }
    }

    fn integral_over(&self, interval: Option<Interval>) -> Result<f64> {
        let Some(iv) = interval else {
            return Ok(self
                .x
                .windows(2)
                .zip(&self.y)
                .map(|(w, y)| (w[1] - w[0]) * y)
                .sum());
        };

        let (start, end) = self.domain();
        if iv.start == iv.end && (start..=end).contains(&iv.start) {
            return Ok(0.0);
        }

        let b = bracket(&self.x, iv)?;
        if b.is_within_one_interval() {
            return Ok(iv.length() * self.y[b.end]);
        }

        let inner: f64 = (b.start..b.end)
            .map(|i| (self.x[i + 1] - self.x[i]) * self.y[i])
            .sum();
        let head = (self.x[b.start] - iv.start) * self.y[b.start - 1];
        let tail = (iv.end - self.x[b.end]) * self.y[b.end];
        Ok(inner + head + tail)
    }
}

impl TryFrom<StepParts> for PiecewiseConstantFunction {
    type Error = Error;

    fn try_from(parts: StepParts) -> Result<Self> {
        Self::from_parts(parts)
    }
}

impl Profile for PiecewiseConstantFunction {
    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    fn add_with<B: MergeBackend>(&mut self, other: &Self, backend: &B) -> Result<()> {
        check_same_domain(self.domain(), other.domain())?;
        let merged = backend.merge_constant(self.slices(), other.slices());
        debug!(
            backend = backend.backend_name(),
            "merged step profiles: {} + {} -> {} intervals",
            self.num_intervals(),
            other.num_intervals(),
            merged.y.len()
        );
        self.x = merged.x;
        self.y = merged.y;
        Ok(())
    }

    fn mul_scalar(&mut self, factor: f64) {
        self.y.iter_mut().for_each(|v| *v *= factor);
    }

    fn integral(&self, interval: &AveragingInterval) -> Result<f64> {
        pooled_integral(interval, |iv| self.integral_over(iv))
    }

    fn avrg(&self, interval: &AveragingInterval) -> Result<f64> {
        length_weighted_average(self.domain(), interval, |iv| self.integral_over(iv))
    }

    fn almost_equal_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        let eps = tolerance.eps();
        all_close(&self.x, &other.x, eps) && all_close(&self.y, &other.y, eps)
    }

    fn plottable_data(&self) -> (Vec<f64>, Vec<f64>) {
        let x_plot = self.x.windows(2).flat_map(|w| [w[0], w[1]]).collect();
        let y_plot = self.y.iter().flat_map(|&v| [v, v]).collect();
        (x_plot, y_plot)
    }
}

impl fmt::Display for PiecewiseConstantFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.domain();
        write!(
            f,
            "PiecewiseConstantFunction({} intervals, domain=[{:.3}, {:.3}])",
            self.num_intervals(),
            start,
            end
        )
    }
}
