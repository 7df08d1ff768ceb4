//! Naive reference backend
//!
//! This backend is intentionally simple and unoptimized:
//! - Collects and sorts the union of breakpoints up front
//! - Looks up every operand value with a fresh binary search
//! - Re-interpolates linear operands on every output interval
//!
//! It exists to verify the sweep backend and can be selected at build time with
//! the `reference-backend` feature. Results match the sweep backend up to
//! floating-point rounding.

use super::{
    cmp_breakpoints, MergeBackend, PointParts, PointSlices, RampParts, RampSlices, StepParts,
    StepSlices,
};
use crate::locate::{locate, Side};
use crate::math::interpolate;

/// Reference backend - O((N + M) log(N + M)) merge
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceBackend;

impl ReferenceBackend {
    pub fn new() -> Self {
        Self
    }
}

fn union_sorted(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut edges = a.to_vec();
    edges.extend_from_slice(b);
    edges.sort_by(cmp_breakpoints);
    edges.dedup();
    edges
}

/// Index of the interval of `x` containing the open interval `(lo, hi)`
fn containing_interval(x: &[f64], lo: f64, hi: f64) -> usize {
    let mid = 0.5 * (lo + hi);
    locate(x, mid, Side::Right)
        .saturating_sub(1)
        .min(x.len().saturating_sub(2))
}

/// Value of ramp `k` at `t`, returning stored endpoint values exactly
fn ramp_value(r: &RampSlices<'_>, k: usize, t: f64) -> f64 {
    if t == r.x[k] {
        r.y1[k]
    } else if t == r.x[k + 1] {
        r.y2[k]
    } else {
        interpolate(r.x[k], r.x[k + 1], r.y1[k], r.y2[k], t)
    }
}

impl MergeBackend for ReferenceBackend {
    fn backend_name(&self) -> &'static str {
        "reference"
    }

    fn merge_constant(&self, a: StepSlices<'_>, b: StepSlices<'_>) -> StepParts {
        let x = union_sorted(a.x, b.x);
        let y = x
            .windows(2)
            .map(|w| {
                let i = containing_interval(a.x, w[0], w[1]);
                let j = containing_interval(b.x, w[0], w[1]);
                a.y[i] + b.y[j]
            })
            .collect();
        StepParts { x, y }
    }

    fn merge_linear(&self, a: RampSlices<'_>, b: RampSlices<'_>) -> RampParts {
        let x = union_sorted(a.x, b.x);
        let n = x.len() - 1;
        let mut y1 = Vec::with_capacity(n);
        let mut y2 = Vec::with_capacity(n);
        for w in x.windows(2) {
            let i = containing_interval(a.x, w[0], w[1]);
            let j = containing_interval(b.x, w[0], w[1]);
            y1.push(ramp_value(&a, i, w[0]) + ramp_value(&b, j, w[0]));
            y2.push(ramp_value(&a, i, w[1]) + ramp_value(&b, j, w[1]));
        }
        RampParts { x, y1, y2 }
    }

    fn merge_discrete(&self, a: PointSlices<'_>, b: PointSlices<'_>) -> PointParts {
        let x = union_sorted(a.x, b.x);
        let lookup = |p: &PointSlices<'_>, t: f64| {
            p.x.binary_search_by(|v| cmp_breakpoints(v, &t))
                .map(|k| (p.y[k], p.mp[k]))
                .unwrap_or((0.0, 0.0))
        };
        let (y, mp) = x
            .iter()
            .map(|&t| {
                let (ya, ma) = lookup(&a, t);
                let (yb, mb) = lookup(&b, t);
                (ya + yb, ma + mb)
            })
            .unzip();
        PointParts { x, y, mp }
    }
}
