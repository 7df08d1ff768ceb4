//! Query intervals for integrals and averages
//!
//! An [`AveragingInterval`] is either the whole domain, a single `[start, end]`
//! pair, or a sequence of pairs. Sequences are pooled: integrals and lengths are
//! summed over all pairs before a single division.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A closed query interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval (negative for reversed bounds)
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

/// Interval argument accepted by `integral` and `avrg`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AveragingInterval {
    /// The full domain of the profile
    #[default]
    Whole,
    /// One `[start, end]` pair
    Single(Interval),
    /// Several pairs, pooled into one result
    Multiple(Vec<Interval>),
}

impl AveragingInterval {
    /// Whole-domain query
    pub fn whole() -> Self {
        Self::Whole
    }

    /// Intervals of a multi-interval query; empty for a whole-domain query
    pub fn intervals(&self) -> &[Interval] {
        match self {
            Self::Whole => &[],
            Self::Single(interval) => std::slice::from_ref(interval),
            Self::Multiple(intervals) => intervals,
        }
    }

    /// Parse a dynamically typed interval argument.
    ///
    /// Accepts `null`, a pair `[a, b]`, or a sequence of pairs `[[a, b], ...]`.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Whole),
            Value::Array(items) => match items.first() {
                None => Err(Error::InvalidInterval(
                    "expected a pair or a sequence of pairs, got an empty sequence".to_string(),
                )),
                Some(Value::Array(_)) => items
                    .iter()
                    .map(parse_pair)
                    .collect::<Result<Vec<_>>>()
                    .map(Self::Multiple),
                Some(_) => parse_pair(value).map(Self::Single),
            },
            other => Err(Error::InvalidInterval(format!(
                "expected null, a pair or a sequence of pairs, got {other}"
            ))),
        }
    }
}

fn parse_pair(value: &Value) -> Result<Interval> {
    let invalid = || Error::InvalidInterval(format!("expected a numeric pair, got {value}"));
    let items = value.as_array().ok_or_else(invalid)?;
    match items.as_slice() {
        [start, end] => {
            let start = start.as_f64().ok_or_else(invalid)?;
            let end = end.as_f64().ok_or_else(invalid)?;
            Ok(Interval::new(start, end))
        }
        _ => Err(invalid()),
    }
}

impl From<Interval> for AveragingInterval {
    fn from(interval: Interval) -> Self {
        Self::Single(interval)
    }
}

impl From<(f64, f64)> for AveragingInterval {
    fn from(pair: (f64, f64)) -> Self {
        Self::Single(pair.into())
    }
}

impl From<Option<(f64, f64)>> for AveragingInterval {
    fn from(pair: Option<(f64, f64)>) -> Self {
        pair.map_or(Self::Whole, Self::from)
    }
}

impl From<Vec<(f64, f64)>> for AveragingInterval {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self::Multiple(pairs.into_iter().map(Interval::from).collect())
    }
}

impl From<&[(f64, f64)]> for AveragingInterval {
    fn from(pairs: &[(f64, f64)]) -> Self {
        Self::Multiple(pairs.iter().copied().map(Interval::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversions() {
        assert_eq!(AveragingInterval::from(None), AveragingInterval::Whole);
        assert_eq!(
            AveragingInterval::from((0.5, 2.5)),
            AveragingInterval::Single(Interval::new(0.5, 2.5))
        );
        let multi = AveragingInterval::from(vec![(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(multi.intervals().len(), 2);
        assert!(AveragingInterval::Whole.intervals().is_empty());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            AveragingInterval::from_json(&Value::Null).unwrap(),
            AveragingInterval::Whole
        );
        assert_eq!(
            AveragingInterval::from_json(&json!([0.5, 2.5])).unwrap(),
            AveragingInterval::Single(Interval::new(0.5, 2.5))
        );
        assert_eq!(
            AveragingInterval::from_json(&json!([[0, 1], [2, 3]])).unwrap(),
            AveragingInterval::Multiple(vec![Interval::new(0.0, 1.0), Interval::new(2.0, 3.0)])
        );
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        for value in [
            json!(1.5),
            json!("0, 1"),
            json!([]),
            json!([1.0]),
            json!([1.0, 2.0, 3.0]),
            json!([[0.0, 1.0], 2.0]),
            json!([["a", 1.0]]),
        ] {
            assert!(
                matches!(
                    AveragingInterval::from_json(&value),
                    Err(Error::InvalidInterval(_))
                ),
                "{value} should be rejected"
            );
        }
    }
}
