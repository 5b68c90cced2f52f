use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Parallel twin of `generate_fractal`, fanned out over rayon's
/// work-stealing scheduler. Pixels are independent, so the output is
/// bit-identical to the serial version in the same row-major order.
pub fn generate_fractal_rayon<Alg>(
    grid: PixelGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let pixels: Vec<Point> = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Point { x, y }))
        .collect();

    pixels
        .into_par_iter()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
