//! Averaging and smoothing with a tracing subscriber installed, so merge
//! and averaging diagnostics can be inspected with `RUST_LOG=debug`

use approx::assert_relative_eq;
use profile_core::{
    default_backend_name, AveragingInterval, AveragingStrategy, Profile, ProfileConfig,
};
use profile_functions::{
    average_profile_with, DiscreteWeightedFunction, PiecewiseConstantFunction,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_average_with_subscriber() {
    init_tracing();
    tracing::info!(backend = default_backend_name(), "averaging step profiles");

    let profiles = [
        PiecewiseConstantFunction::new(&[0.0, 1.0, 2.0], &[2.0, 0.0]).unwrap(),
        PiecewiseConstantFunction::new(&[0.0, 0.5, 2.0], &[0.0, 2.0]).unwrap(),
        PiecewiseConstantFunction::new(&[0.0, 2.0], &[1.0]).unwrap(),
    ];
    let config = ProfileConfig::default().with_averaging(AveragingStrategy::PairwiseTree);
    let avg = average_profile_with(&profiles, &config).unwrap();

    assert_eq!(avg.x(), &[0.0, 0.5, 1.0, 2.0]);
    assert_relative_eq!(avg.integral(&AveragingInterval::Whole).unwrap(), 7.0 / 3.0);
}

#[test]
fn test_smoothing_with_subscriber() {
    init_tracing();
    let f = DiscreteWeightedFunction::new(
        &[0.0, 1.0, 2.0, 3.0],
        &[0.0, 2.0, 0.0, 0.0],
        &[1.0, 1.0, 1.0, 1.0],
    )
    .unwrap();
    let config = ProfileConfig::from_json(r#"{"smoothing": {"window": 1}}"#).unwrap();
    let (_, y) = f.plottable_data_with(&config.smoothing);
    assert_relative_eq!(y[1], 2.0 / 3.0);
    assert_relative_eq!(y[2], 2.0 / 3.0);
}
