//! Tests for curve sampling.
//!
//! The sampler turns a fit into a polyline for line drawing: a fixed number
//! of (x, predict(x)) pairs evenly spaced across the fitted x-domain,
//! endpoints included.

use approx::assert_relative_eq;
use trendline_rs::prelude::*;

fn linear_fit() -> FitResult<f64> {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
    TrendFit::new().build().unwrap().fit(&x, &y).unwrap()
}

#[test]
fn test_curve_points_length_and_endpoints() {
    let fit = linear_fit();
    let curve = fit.curve_points(100).unwrap();

    assert_eq!(curve.len(), 100);
    assert_eq!(curve[0].0, 1.0);
    assert_eq!(curve[99].0, 5.0);
}

#[test]
fn test_curve_points_evenly_spaced() {
    let fit = linear_fit();
    let curve = fit.curve_points(9).unwrap();

    let step = (5.0 - 1.0) / 8.0;
    for window in curve.windows(2) {
        assert_relative_eq!(window[1].0 - window[0].0, step, epsilon = 1e-12);
    }
}

#[test]
fn test_curve_points_lie_on_predict() {
    let fit = linear_fit();
    for (x, y) in fit.curve_points(25).unwrap() {
        assert_eq!(y, fit.predict(x));
    }
}

#[test]
fn test_curve_points_two_is_the_minimum() {
    let fit = linear_fit();

    let curve = fit.curve_points(2).unwrap();
    assert_eq!(curve.len(), 2);
    assert_eq!(curve[0].0, 1.0);
    assert_eq!(curve[1].0, 5.0);

    assert_eq!(
        fit.curve_points(1).unwrap_err(),
        FitError::InvalidCurvePoints(1)
    );
    assert_eq!(
        fit.curve_points(0).unwrap_err(),
        FitError::InvalidCurvePoints(0)
    );
}

#[test]
fn test_model_curve_uses_configured_resolution() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let model = TrendFit::new().curve_points(40).build().unwrap();
    let fit = model.fit(&x, &y).unwrap();
    let curve = model.curve(&fit);

    assert_eq!(model.curve_points(), 40);
    assert_eq!(curve.len(), 40);
    assert_eq!(curve[39].0, 5.0);
}

#[test]
fn test_default_resolution_is_one_hundred() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let model = TrendFit::new().build().unwrap();
    let fit = model.fit(&x, &y).unwrap();

    assert_eq!(model.curve_points(), 100);
    assert_eq!(model.curve(&fit).len(), 100);
}

#[test]
fn test_sampler_standalone() {
    let fit = linear_fit();
    let sampler = CurveSampler::new(5).unwrap();

    assert_eq!(sampler.points(), 5);

    let curve = sampler.sample(&fit.kind, &fit.coefficients, fit.x_domain);
    assert_eq!(curve.len(), 5);
    assert_relative_eq!(curve[2].0, 3.0, epsilon = 1e-12);
    assert_relative_eq!(curve[2].1, 6.0, epsilon = 1e-10);

    assert_eq!(
        CurveSampler::new(0).unwrap_err(),
        FitError::InvalidCurvePoints(0)
    );
}

#[test]
fn test_sampling_is_pure() {
    let fit = linear_fit();
    let first = fit.curve_points(50).unwrap();
    let second = fit.curve_points(50).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_curve_on_exponential_fit() {
    let x: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * (0.5 * xi).exp()).collect();

    let model = TrendFit::new().model(Exponential).build().unwrap();
    let fit = model.fit(&x, &y).unwrap();
    let curve = model.curve(&fit);

    assert_eq!(curve.len(), 100);
    assert_relative_eq!(curve[0].1, y[0], epsilon = 1e-9);
    assert_relative_eq!(curve[99].1, y[3], epsilon = 1e-9);
}
