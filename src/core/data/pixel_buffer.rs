use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// RGBA8 layout: one byte each for red, green, blue and alpha.
pub const BYTES_PER_PIXEL: usize = 4;

/// Opaque alpha; every pixel the generator produces is fully opaque.
pub const OPAQUE_ALPHA: u8 = 255;

fn grid_buffer_size(grid: PixelGrid) -> usize {
    grid.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        grid: PixelGrid,
    },
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, grid } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x,
                    pixel.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 pixel buffer. Row 0 is the grid's y = 0 row; what that
/// means in plane coordinates is the coordinate mapping's business, not the
/// buffer's.
#[derive(Debug, PartialEq)]
pub struct PixelBuffer {
    grid: PixelGrid,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            grid,
            buffer: vec![0; grid_buffer_size(grid)],
        }
    }

    pub fn from_data(grid: PixelGrid, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let grid_size = grid_buffer_size(grid);

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.grid.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            });
        }

        let index =
            (pixel.y as usize * self.grid.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE_ALPHA;

        Ok(())
    }
}
