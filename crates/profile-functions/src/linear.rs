//! Piecewise-linear profiles
//!
//! Each of the N intervals carries its own left value `y1[i]` and right value
//! `y2[i]`, so neighbouring intervals may disagree at a shared breakpoint.

use profile_core::locate::{bracket, locate, validate_breakpoints, Side};
use profile_core::math::{all_close, interpolate, trapezoid};
use profile_core::merge::{MergeBackend, RampParts, RampSlices};
use profile_core::traits::{check_same_domain, length_weighted_average, pooled_integral};
use profile_core::{AveragingInterval, Error, Interval, Profile, Result, Tolerance};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A piecewise-linear function (e.g. a SPIKE-profile)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RampParts")]
pub struct PiecewiseLinearFunction {
    x: Vec<f64>,
    y1: Vec<f64>,
    y2: Vec<f64>,
}

impl PiecewiseLinearFunction {
    /// Create a piecewise-linear function, copying the given arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use profile_functions::PiecewiseLinearFunction;
    /// use profile_core::{AveragingInterval, Profile};
    ///
    /// let f = PiecewiseLinearFunction::new(&[0.0, 2.0], &[0.0], &[2.0]).unwrap();
    /// assert_eq!(f.integral(&AveragingInterval::Whole).unwrap(), 2.0);
    /// assert_eq!(f.value_at(0.5).unwrap(), 0.5);
    /// ```
    pub fn new(x: &[f64], y1: &[f64], y2: &[f64]) -> Result<Self> {
        Self::from_parts(RampParts {
            x: x.to_vec(),
            y1: y1.to_vec(),
            y2: y2.to_vec(),
        })
    }

    fn from_parts(parts: RampParts) -> Result<Self> {
        validate_breakpoints(&parts.x, 2)?;
        let n = parts.x.len() - 1;
        if parts.y1.len() != n {
            return Err(Error::size_mismatch(n, parts.y1.len(), "left values"));
        }
        if parts.y2.len() != n {
            return Err(Error::size_mismatch(n, parts.y2.len(), "right values"));
        }
        if parts.y1.iter().chain(&parts.y2).any(|v| !v.is_finite()) {
            return Err(Error::non_finite("ramp values"));
        }
        Ok(Self {
            x: parts.x,
            y1: parts.y1,
            y2: parts.y2,
        })
    }

    /// Get the breakpoints
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Get the values at the left end of each interval
    pub fn y1(&self) -> &[f64] {
        &self.y1
    }

    /// Get the values at the right end of each interval
    pub fn y2(&self) -> &[f64] {
        &self.y2
    }

    /// Get the number of intervals
    pub fn num_intervals(&self) -> usize {
        self.y1.len()
    }

    /// Interpolated value at `t`; breakpoints take the value of the interval
    /// starting there, the domain end takes the last right value
    pub fn value_at(&self, t: f64) -> Result<f64> {
        let (start, end) = self.domain();
        if !(start..=end).contains(&t) {
            return Err(Error::OutOfDomain {
                start: t,
                end: t,
                domain: (start, end),
            });
        }
        let i = (locate(&self.x, t, Side::Right) - 1).min(self.y1.len() - 1);
        Ok(self.ramp_at(i, t))
    }

    #[inline]
    fn ramp_at(&self, i: usize, t: f64) -> f64 {
        interpolate(self.x[i], self.x[i + 1], self.y1[i], self.y2[i], t)
    }

    fn slices(&self) -> RampSlices<'_> {
        RampSlices {
            x: &self.x,
            y1: &self.y1,
            y2: &self.y2,
        }
    }

    fn integral_over(&self, interval: Option<Interval>) -> Result<f64> {
        let full = |i: usize| trapezoid(self.x[i + 1] - self.x[i], self.y1[i], self.y2[i]);

        let Some(iv) = interval else {
            return Ok((0..self.num_intervals()).map(full).sum());
        };

        let (start, end) = self.domain();
        if iv.start == iv.end && (start..=end).contains(&iv.start) {
            return Ok(0.0);
        }

        let b = bracket(&self.x, iv)?;
        if b.is_within_one_interval() {
            return Ok(trapezoid(
                iv.length(),
                self.ramp_at(b.end, iv.start),
                self.ramp_at(b.end, iv.end),
            ));
        }

        let inner: f64 = (b.start..b.end).map(full).sum();
        let head = trapezoid(
            self.x[b.start] - iv.start,
            self.ramp_at(b.start - 1, iv.start),
            self.y2[b.start - 1],
        );
        let tail = trapezoid(
            iv.end - self.x[b.end],
            self.y1[b.end],
            self.ramp_at(b.end, iv.end),
        );
        Ok(inner + head + tail)
    }
}

impl TryFrom<RampParts> for PiecewiseLinearFunction {
    type Error = Error;

    fn try_from(parts: RampParts) -> Result<Self> {
        Self::from_parts(parts)
    }
}

impl Profile for PiecewiseLinearFunction {
    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    fn add_with<B: MergeBackend>(&mut self, other: &Self, backend: &B) -> Result<()> {
        check_same_domain(self.domain(), other.domain())?;
        let merged = backend.merge_linear(self.slices(), other.slices());
        debug!(
            backend = backend.backend_name(),
            "merged ramp profiles: {} + {} -> {} intervals",
            self.num_intervals(),
            other.num_intervals(),
            merged.y1.len()
        );
        self.x = merged.x;
        self.y1 = merged.y1;
        self.y2 = merged.y2;
        Ok(())
    }

    fn mul_scalar(&mut self, factor: f64) {
        self.y1
            .iter_mut()
            .chain(self.y2.iter_mut())
            .for_each(|v| *v *= factor);
    }

    fn integral(&self, interval: &AveragingInterval) -> Result<f64> {
        pooled_integral(interval, |iv| self.integral_over(iv))
    }

    fn avrg(&self, interval: &AveragingInterval) -> Result<f64> {
        length_weighted_average(self.domain(), interval, |iv| self.integral_over(iv))
    }

    fn almost_equal_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        let eps = tolerance.eps();
        all_close(&self.x, &other.x, eps)
            && all_close(&self.y1, &other.y1, eps)
            && all_close(&self.y2, &other.y2, eps)
    }

    fn plottable_data(&self) -> (Vec<f64>, Vec<f64>) {
        let x_plot = self.x.windows(2).flat_map(|w| [w[0], w[1]]).collect();
        let y_plot = self
            .y1
            .iter()
            .zip(&self.y2)
            .flat_map(|(&l, &r)| [l, r])
            .collect();
        (x_plot, y_plot)
    }
}

impl fmt::Display for PiecewiseLinearFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.domain();
        write!(
            f,
            "PiecewiseLinearFunction({} intervals, domain=[{:.3}, {:.3}])",
            self.num_intervals(),
            start,
            end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ramp 0 -> 2 on [0, 2], jump, ramp 4 -> 0 on [2, 4]
    fn tent() -> PiecewiseLinearFunction {
        PiecewiseLinearFunction::new(&[0.0, 2.0, 4.0], &[0.0, 4.0], &[2.0, 0.0]).unwrap()
    }

    #[test]
    fn test_construction_validation() {
        assert!(PiecewiseLinearFunction::new(&[0.0, 1.0], &[1.0], &[2.0]).is_ok());
        assert!(PiecewiseLinearFunction::new(&[0.0, 1.0], &[1.0, 2.0], &[2.0]).is_err());
        assert!(PiecewiseLinearFunction::new(&[0.0, 1.0], &[1.0], &[]).is_err());
        assert!(PiecewiseLinearFunction::new(&[1.0, 0.0], &[1.0], &[2.0]).is_err());
    }

    #[test]
    fn test_whole_domain_integral() {
        let f = tent();
        assert_relative_eq!(f.integral(&AveragingInterval::Whole).unwrap(), 6.0);
        assert_relative_eq!(f.avrg(&AveragingInterval::Whole).unwrap(), 1.5);
    }

    #[test]
    fn test_sub_interval_integral() {
        let f = tent();
        // [1, 2]: 1 -> 2 gives 1.5; [2, 3]: 4 -> 2 gives 3.0
        assert_relative_eq!(f.integral(&(1.0, 3.0).into()).unwrap(), 4.5);
        assert_relative_eq!(f.integral(&(0.0, 4.0).into()).unwrap(), 6.0);
        assert_relative_eq!(f.integral(&(0.0, 2.0).into()).unwrap(), 2.0);
    }

    #[test]
    fn test_integral_within_one_interval() {
        let f = tent();
        // [0.5, 1.5]: 0.5 -> 1.5
        assert_relative_eq!(f.integral(&(0.5, 1.5).into()).unwrap(), 1.0);
        assert_relative_eq!(f.integral(&(3.0, 3.0).into()).unwrap(), 0.0);
    }

    #[test]
    fn test_integral_out_of_domain() {
        let f = tent();
        assert!(matches!(
            f.integral(&(-1.0, 1.0).into()),
            Err(Error::OutOfDomain { .. })
        ));
        assert!(matches!(
            f.avrg(&(3.0, 1.0).into()),
            Err(Error::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_avrg_pools_multiple_intervals() {
        let f = tent();
        let pooled = AveragingInterval::from(vec![(0.0, 2.0), (3.0, 4.0)]);
        // (2 + 1) / 3
        assert_relative_eq!(f.avrg(&pooled).unwrap(), 1.0);
    }

    #[test]
    fn test_add_interpolates_split_intervals() {
        let mut f = tent();
        let g = PiecewiseLinearFunction::new(&[0.0, 1.0, 4.0], &[1.0, 1.0], &[1.0, 1.0]).unwrap();
        f.add(&g).unwrap();
        assert_eq!(f.x(), &[0.0, 1.0, 2.0, 4.0]);
        assert_relative_eq!(f.y1()[0], 1.0);
        assert_relative_eq!(f.y2()[0], 2.0);
        assert_relative_eq!(f.y1()[1], 2.0);
        assert_relative_eq!(f.y2()[1], 3.0);
        assert_relative_eq!(f.y1()[2], 5.0);
        assert_relative_eq!(f.y2()[2], 1.0);
        assert_relative_eq!(f.integral(&AveragingInterval::Whole).unwrap(), 10.0);
    }

    #[test]
    fn test_add_domain_mismatch() {
        let mut f = tent();
        let g = PiecewiseLinearFunction::new(&[0.5, 4.0], &[1.0], &[1.0]).unwrap();
        assert!(matches!(f.add(&g), Err(Error::DomainMismatch { .. })));
    }

    #[test]
    fn test_mul_scalar() {
        let mut f = tent();
        f.mul_scalar(-2.0);
        assert_eq!(f.y1(), &[0.0, -8.0]);
        assert_eq!(f.y2(), &[-4.0, 0.0]);
    }

    #[test]
    fn test_value_at() {
        let f = tent();
        assert_relative_eq!(f.value_at(1.0).unwrap(), 1.0);
        assert_relative_eq!(f.value_at(2.0).unwrap(), 4.0);
        assert_relative_eq!(f.value_at(3.0).unwrap(), 2.0);
        assert_relative_eq!(f.value_at(4.0).unwrap(), 0.0);
        assert!(f.value_at(-0.1).is_err());
    }

    #[test]
    fn test_plottable_data() {
        let (x, y) = tent().plottable_data();
        assert_eq!(x, vec![0.0, 2.0, 2.0, 4.0]);
        assert_eq!(y, vec![0.0, 2.0, 4.0, 0.0]);
    }
}
