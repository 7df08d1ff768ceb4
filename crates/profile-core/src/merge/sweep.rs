//! Single-pass sweep backend
//!
//! Both operands' breakpoints are walked together with `merge_join_by`, so each
//! input is read exactly once and the output is produced in order. Coinciding
//! breakpoints, including `-0.0` against `0.0`, collapse into one output
//! breakpoint.

use super::{
    cmp_breakpoints, MergeBackend, PointParts, PointSlices, RampParts, RampSlices, StepParts,
    StepSlices,
};
use crate::math::interpolate;
use itertools::{EitherOrBoth, Itertools};

/// Sweep backend - O(N + M) merge for all profile kinds
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepBackend;

impl SweepBackend {
    pub fn new() -> Self {
        Self
    }
}

impl MergeBackend for SweepBackend {
    fn backend_name(&self) -> &'static str {
        "sweep"
    }

    fn merge_constant(&self, a: StepSlices<'_>, b: StepSlices<'_>) -> StepParts {
        let capacity = a.x.len() + b.x.len();
        let mut x = Vec::with_capacity(capacity);
        let mut y = Vec::with_capacity(capacity);
        x.push(a.x[0]);

        // i, j index the operand intervals covering the sweep position
        let (mut i, mut j) = (0, 0);
        let next_a = a.x[1..].iter().copied();
        let next_b = b.x[1..].iter().copied();
        for step in next_a.merge_join_by(next_b, cmp_breakpoints) {
            y.push(a.y[i] + b.y[j]);
            match step {
                EitherOrBoth::Left(t) => {
                    x.push(t);
                    i += 1;
                }
                EitherOrBoth::Right(t) => {
                    x.push(t);
                    j += 1;
                }
                EitherOrBoth::Both(t, _) => {
                    x.push(t);
                    i += 1;
                    j += 1;
                }
            }
        }

        log::trace!(
            "sweep merged step profiles: {} + {} -> {} breakpoints",
            a.x.len(),
            b.x.len(),
            x.len()
        );
        StepParts { x, y }
    }

    fn merge_linear(&self, a: RampSlices<'_>, b: RampSlices<'_>) -> RampParts {
        let capacity = a.x.len() + b.x.len();
        let mut x = Vec::with_capacity(capacity);
        let mut y1 = Vec::with_capacity(capacity);
        let mut y2 = Vec::with_capacity(capacity);
        x.push(a.x[0]);

        let ramp_at = |r: &RampSlices<'_>, k: usize, t: f64| {
            interpolate(r.x[k], r.x[k + 1], r.y1[k], r.y2[k], t)
        };

        let (mut i, mut j) = (0, 0);
        // Values of each operand at the left end of the current output interval
        let (mut left_a, mut left_b) = (a.y1[0], b.y1[0]);
        let next_a = a.x[1..].iter().copied();
        let next_b = b.x[1..].iter().copied();
        for step in next_a.merge_join_by(next_b, cmp_breakpoints) {
            y1.push(left_a + left_b);
            match step {
                EitherOrBoth::Left(t) => {
                    // t splits b's interval j
                    let split_b = ramp_at(&b, j, t);
                    x.push(t);
                    y2.push(a.y2[i] + split_b);
                    i += 1;
                    left_a = a.y1.get(i).copied().unwrap_or_default();
                    left_b = split_b;
                }
                EitherOrBoth::Right(t) => {
                    let split_a = ramp_at(&a, i, t);
                    x.push(t);
                    y2.push(split_a + b.y2[j]);
                    j += 1;
                    left_a = split_a;
                    left_b = b.y1.get(j).copied().unwrap_or_default();
                }
                EitherOrBoth::Both(t, _) => {
                    x.push(t);
                    y2.push(a.y2[i] + b.y2[j]);
                    i += 1;
                    j += 1;
                    left_a = a.y1.get(i).copied().unwrap_or_default();
                    left_b = b.y1.get(j).copied().unwrap_or_default();
                }
            }
        }

        log::trace!(
            "sweep merged ramp profiles: {} + {} -> {} breakpoints",
            a.x.len(),
            b.x.len(),
            x.len()
        );
        RampParts { x, y1, y2 }
    }

    fn merge_discrete(&self, a: PointSlices<'_>, b: PointSlices<'_>) -> PointParts {
        let capacity = a.x.len() + b.x.len();
        let mut x = Vec::with_capacity(capacity);
        let mut y = Vec::with_capacity(capacity);
        let mut mp = Vec::with_capacity(capacity);

        let points_a = a.x.iter().zip(a.y).zip(a.mp);
        let points_b = b.x.iter().zip(b.y).zip(b.mp);
        for point in points_a.merge_join_by(points_b, |((u, _), _), ((v, _), _)| {
            cmp_breakpoints(u, v)
        }) {
            let (t, value, weight) = match point {
                EitherOrBoth::Left(((t, v), m)) | EitherOrBoth::Right(((t, v), m)) => {
                    (*t, *v, *m)
                }
                EitherOrBoth::Both(((t, va), ma), ((_, vb), mb)) => (*t, va + vb, ma + mb),
            };
            x.push(t);
            y.push(value);
            mp.push(weight);
        }

        log::trace!(
            "sweep merged discrete profiles: {} + {} -> {} points",
            a.x.len(),
            b.x.len(),
            x.len()
        );
        PointParts { x, y, mp }
    }
}
