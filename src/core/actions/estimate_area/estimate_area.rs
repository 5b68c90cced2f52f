use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
use rand::Rng;
use std::error::Error;
use std::fmt;

/// Sampling rectangle for the Monte Carlo estimate. The set fits inside
/// real ∈ [-2, 0.5]; only the upper half-plane imag ∈ [0, 1.125] is drawn
/// from, since the set mirrors about the real axis, and the inside count
/// is doubled instead.
pub const SAMPLE_REAL_MIN: f64 = -2.0;
pub const SAMPLE_REAL_MAX: f64 = 0.5;
pub const SAMPLE_IMAG_MIN: f64 = 0.0;
pub const SAMPLE_IMAG_MAX: f64 = 1.125;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AreaEstimate {
    pub area: f64,
    pub error: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EstimateAreaError {
    ZeroMaxIterations,
    ZeroSamplePoints,
}

impl fmt::Display for EstimateAreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::ZeroSamplePoints => {
                write!(f, "number of sample points must be greater than zero")
            }
        }
    }
}

impl Error for EstimateAreaError {}

pub(crate) fn validate(
    max_iterations: u32,
    number_of_points: u64,
) -> Result<(), EstimateAreaError> {
    if max_iterations == 0 {
        return Err(EstimateAreaError::ZeroMaxIterations);
    }

    if number_of_points == 0 {
        return Err(EstimateAreaError::ZeroSamplePoints);
    }

    Ok(())
}

pub(crate) fn sample_point<R: Rng>(rng: &mut R) -> Complex {
    Complex::new(
        rng.gen_range(SAMPLE_REAL_MIN..SAMPLE_REAL_MAX),
        rng.gen_range(SAMPLE_IMAG_MIN..SAMPLE_IMAG_MAX),
    )
}

/// area = 2 · 2.5 · 1.125 · inside/points, error = area/√points.
///
/// The error term is a heuristic standard-error proxy, kept as-is for
/// output compatibility; it is not a confidence interval.
pub(crate) fn estimate_from_counts(inside_points: u64, number_of_points: u64) -> AreaEstimate {
    let sample_rect_area =
        (SAMPLE_REAL_MAX - SAMPLE_REAL_MIN) * (SAMPLE_IMAG_MAX - SAMPLE_IMAG_MIN);
    let area = 2.0 * sample_rect_area * inside_points as f64 / number_of_points as f64;
    let error = area / (number_of_points as f64).sqrt();

    AreaEstimate { area, error }
}

/// Monte Carlo estimate of the set's area from uniform samples drawn off
/// the caller's generator. Seed the generator to make the result
/// reproducible; identical inputs and generator state give identical
/// estimates.
pub fn estimate_area<R: Rng>(
    max_iterations: u32,
    number_of_points: u64,
    rng: &mut R,
) -> Result<AreaEstimate, EstimateAreaError> {
    validate(max_iterations, number_of_points)?;

    let mut inside_points: u64 = 0;

    for _ in 0..number_of_points {
        if escape_iterations(sample_point(rng), max_iterations) == max_iterations {
            inside_points += 1;
        }
    }

    Ok(estimate_from_counts(inside_points, number_of_points))
}
