use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Computes one value per pixel, row by row, into a row-major vector.
/// Index `y * width + x` holds pixel (x, y).
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid: PixelGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let mut values = Vec::with_capacity(grid.pixel_count());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            values.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(values)
}
