use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, grid: PixelGrid },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the complex plane. Pixel (0, 0) lands exactly on the
/// region's bottom-left corner and y grows towards the region's top; the
/// step divides by width/height (not width − 1), so the right/top edges are
/// one step short of the region's far corner.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    grid: PixelGrid,
    region: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel_position,
            grid,
        });
    }

    let real =
        region.left() + (pixel_position.x as f64 / grid.width() as f64) * region.width();
    let imag =
        region.bottom() + (pixel_position.y as f64 / grid.height() as f64) * region.height();

    Ok(Complex::new(real, imag))
}
