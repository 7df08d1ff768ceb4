//! Shared utilities for integration tests
#![allow(dead_code)]

pub use approx::{assert_relative_eq, relative_eq};

use profile_functions::{
    DiscreteWeightedFunction, PiecewiseConstantFunction, PiecewiseLinearFunction,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const EPSILON: f64 = 1e-9;

/// Common domain of every generated profile
pub const T_START: f64 = 0.0;
pub const T_END: f64 = 10.0;

/// Interior breakpoints are drawn from this grid so that independently
/// generated profiles share some breakpoints exactly
const GRID_STEP: f64 = 0.25;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Strictly increasing breakpoints `[T_START, ..., T_END]`
pub fn random_breakpoints(rng: &mut StdRng) -> Vec<f64> {
    let density: f64 = rng.gen_range(0.05..0.6);
    let cells = ((T_END - T_START) / GRID_STEP) as usize;
    let mut x = vec![T_START];
    x.extend(
        (1..cells)
            .map(|i| T_START + i as f64 * GRID_STEP)
            .filter(|_| rng.gen_bool(density)),
    );
    x.push(T_END);
    x
}

pub fn random_constant(rng: &mut StdRng) -> PiecewiseConstantFunction {
    let x = random_breakpoints(rng);
    let y: Vec<f64> = (1..x.len()).map(|_| rng.gen_range(-5.0..5.0)).collect();
    PiecewiseConstantFunction::new(&x, &y).unwrap()
}

pub fn random_linear(rng: &mut StdRng) -> PiecewiseLinearFunction {
    let x = random_breakpoints(rng);
    let y1: Vec<f64> = (1..x.len()).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let y2: Vec<f64> = (1..x.len()).map(|_| rng.gen_range(-5.0..5.0)).collect();
    PiecewiseLinearFunction::new(&x, &y1, &y2).unwrap()
}

/// Discrete profile with unit boundary markers and at least one interior point
pub fn random_discrete(rng: &mut StdRng) -> DiscreteWeightedFunction {
    let mut x = random_breakpoints(rng);
    if x.len() == 2 {
        x.insert(1, (T_START + T_END) / 2.0);
    }
    let last = x.len() - 1;
    let mp: Vec<f64> = (0..x.len())
        .map(|i| {
            if i == 0 || i == last {
                1.0
            } else {
                rng.gen_range(1..=3) as f64
            }
        })
        .collect();
    let y: Vec<f64> = mp
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            if i == 0 || i == last {
                0.0
            } else {
                rng.gen_range(0.0..=m)
            }
        })
        .collect();
    DiscreteWeightedFunction::new(&x, &y, &mp).unwrap()
}

/// Random sub-interval `a < b` inside the common domain
pub fn random_interval(rng: &mut StdRng) -> (f64, f64) {
    let a = rng.gen_range(T_START..T_END - 0.5);
    let b = rng.gen_range(a + 0.1..T_END);
    (a, b)
}
