//! The shared capability set of all profile kinds

use crate::config::Tolerance;
use crate::error::{Error, Result};
use crate::interval::{AveragingInterval, Interval};
use crate::merge::MergeBackend;

/// A combinable interval-indexed profile.
///
/// Implemented by the piecewise-constant, piecewise-linear and discrete
/// weighted function kinds. Dispatch is static: callers pick the concrete type.
pub trait Profile: Clone + Send + Sync {
    /// Domain endpoints `(x[0], x[-1])`
    fn domain(&self) -> (f64, f64);

    /// Add another profile of the same kind in place, using `backend`
    fn add_with<B: MergeBackend>(&mut self, other: &Self, backend: &B) -> Result<()>;

    /// Add another profile of the same kind in place, using the default backend
    fn add(&mut self, other: &Self) -> Result<()> {
        self.add_with(other, &crate::merge::default_backend())
    }

    /// Multiply the profile values by `factor` in place
    fn mul_scalar(&mut self, factor: f64);

    /// Integral over the whole domain, one interval, or several pooled intervals
    fn integral(&self, interval: &AveragingInterval) -> Result<f64>;

    /// Average over the whole domain, one interval, or several pooled intervals
    fn avrg(&self, interval: &AveragingInterval) -> Result<f64>;

    /// Compare with another profile up to the given tolerance
    fn almost_equal_with(&self, other: &Self, tolerance: Tolerance) -> bool;

    /// Compare with another profile up to the default 14 decimals
    fn almost_equal(&self, other: &Self) -> bool {
        self.almost_equal_with(other, Tolerance::default())
    }

    /// Independent deep copy
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Two parallel sequences `(x, y)` suitable for direct line plotting
    fn plottable_data(&self) -> (Vec<f64>, Vec<f64>);
}

/// Fail with [`Error::DomainMismatch`] unless both domains are identical
pub fn check_same_domain(left: (f64, f64), right: (f64, f64)) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(Error::DomainMismatch { left, right });
    }
    Ok(())
}

/// Length-weighted average for the interval kinds.
///
/// Sequences of intervals are pooled: integrals and lengths are summed before
/// one division.
pub fn length_weighted_average<F>(
    domain: (f64, f64),
    interval: &AveragingInterval,
    mut integrate: F,
) -> Result<f64>
where
    F: FnMut(Option<Interval>) -> Result<f64>,
{
    let (total, length) = match interval {
        AveragingInterval::Whole => (integrate(None)?, domain.1 - domain.0),
        AveragingInterval::Single(iv) => (integrate(Some(*iv))?, iv.length()),
        AveragingInterval::Multiple(ivs) => {
            if ivs.is_empty() {
                return Err(Error::InvalidInterval(
                    "sequence of intervals is empty".to_string(),
                ));
            }
            ivs.iter().try_fold((0.0, 0.0), |(total, length), iv| {
                Ok::<_, Error>((total + integrate(Some(*iv))?, length + iv.length()))
            })?
        }
    };

    if length <= 0.0 {
        return Err(Error::InvalidInterval(format!(
            "averaging window has non-positive total length {length}"
        )));
    }
    Ok(total / length)
}

/// Sum of integrals for the interval kinds; sequences are summed
pub fn pooled_integral<F>(interval: &AveragingInterval, mut integrate: F) -> Result<f64>
where
    F: FnMut(Option<Interval>) -> Result<f64>,
{
    match interval {
        AveragingInterval::Whole => integrate(None),
        AveragingInterval::Single(iv) => integrate(Some(*iv)),
        AveragingInterval::Multiple(ivs) => {
            if ivs.is_empty() {
                return Err(Error::InvalidInterval(
                    "sequence of intervals is empty".to_string(),
                ));
            }
            ivs.iter().map(|iv| integrate(Some(*iv))).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn constant_two(iv: Option<Interval>) -> Result<f64> {
        Ok(2.0 * iv.map_or(4.0, |iv| iv.length()))
    }

    #[test]
    fn test_check_same_domain() {
        assert!(check_same_domain((0.0, 3.0), (0.0, 3.0)).is_ok());
        assert_eq!(
            check_same_domain((0.0, 3.0), (0.0, 3.5)),
            Err(Error::DomainMismatch {
                left: (0.0, 3.0),
                right: (0.0, 3.5)
            })
        );
    }

    #[test]
    fn test_length_weighted_average() {
        let domain = (0.0, 4.0);
        assert_relative_eq!(
            length_weighted_average(domain, &AveragingInterval::Whole, constant_two).unwrap(),
            2.0
        );
        assert_relative_eq!(
            length_weighted_average(domain, &(1.0, 2.0).into(), constant_two).unwrap(),
            2.0
        );
        let pooled = AveragingInterval::from(vec![(0.0, 1.0), (2.0, 4.0)]);
        assert_relative_eq!(
            length_weighted_average(domain, &pooled, constant_two).unwrap(),
            2.0
        );
    }

    #[test]
    fn test_length_weighted_average_pools_once() {
        // integral 1 over length 1, integral 9 over length 3: pooled 10/4, not mean(1, 3)
        let mut calls = vec![9.0, 1.0];
        let pooled = AveragingInterval::from(vec![(0.0, 1.0), (1.0, 4.0)]);
        let avg = length_weighted_average((0.0, 4.0), &pooled, |_| {
            Ok(calls.pop().unwrap_or_default())
        })
        .unwrap();
        assert_relative_eq!(avg, 2.5);
    }

    #[test]
    fn test_invalid_windows() {
        let empty = AveragingInterval::Multiple(vec![]);
        assert!(matches!(
            length_weighted_average((0.0, 4.0), &empty, constant_two),
            Err(Error::InvalidInterval(_))
        ));
        assert!(matches!(
            pooled_integral(&empty, constant_two),
            Err(Error::InvalidInterval(_))
        ));
        assert!(matches!(
            length_weighted_average((0.0, 4.0), &(1.0, 1.0).into(), constant_two),
            Err(Error::InvalidInterval(_))
        ));
    }
}
