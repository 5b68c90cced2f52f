use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};

/// Escape-time classification of a point against the Mandelbrot set.
///
/// Iterates z ← z² + c from z = 0 while |z| ≤ 2 and the cap is not reached,
/// and returns how many iterations ran. A return value equal to
/// `max_iterations` means the point never escaped and is treated as a
/// member of the set. The |z| ≤ 2 test is done on the squared magnitude;
/// |z| > 2 guarantees divergence, so radius 2 is sufficient.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);
    let mut count = 0;

    while z.magnitude_squared() <= 4.0 && count < max_iterations {
        z = z * z + c;
        count += 1;
    }

    count
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid: PixelGrid,
    region: ComplexRect,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        grid: PixelGrid,
        region: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            grid,
            region,
            max_iterations,
        })
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.grid, self.region)?;

        Ok(escape_iterations(c, self.max_iterations))
    }
}
