use std::time::Instant;

use crate::core::actions::estimate_area::estimate_area::{AreaEstimate, EstimateAreaError};
use crate::core::actions::estimate_area::estimate_area_rayon::estimate_area_rayon;

/// Runs the Monte Carlo estimate and prints the (area, error) pair.
pub fn area_controller(
    max_iterations: u32,
    number_of_points: u64,
    seed: u64,
) -> Result<AreaEstimate, EstimateAreaError> {
    log::info!(
        "estimating area from {} points at {} max iterations",
        number_of_points,
        max_iterations
    );

    let start = Instant::now();
    let estimate = estimate_area_rayon(max_iterations, number_of_points, seed)?;
    log::info!("estimate computed in {:?}", start.elapsed());

    println!("Area: {}", estimate.area);
    println!("Error: {}", estimate.error);

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_controller_returns_the_estimate() {
        let estimate = area_controller(50, 10_000, 42).unwrap();

        assert!(estimate.area > 0.0);
        assert!(estimate.error > 0.0);
    }

    #[test]
    fn test_area_controller_rejects_zero_points() {
        let result = area_controller(50, 0, 42);

        assert_eq!(result, Err(EstimateAreaError::ZeroSamplePoints));
    }
}
