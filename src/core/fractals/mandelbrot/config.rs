use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// The 4×4 square centred on the origin, the classic full-set view.
#[must_use]
pub fn default_region() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0))
        .expect("default region is valid")
}

/// One rendering request: iteration cap, plane region and target grid.
/// Built once per request and immutable afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotConfig {
    region: ComplexRect,
    grid: PixelGrid,
    max_iterations: u32,
}

impl MandelbrotConfig {
    pub fn new(
        grid: PixelGrid,
        region: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            region,
            grid,
            max_iterations,
        })
    }

    pub fn with_default_region(
        grid: PixelGrid,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        Self::new(grid, default_region(), max_iterations)
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
