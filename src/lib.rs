mod controllers;
mod core;
mod presenters;

pub use controllers::area::area_controller;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::render::RenderController;
pub use presenters::file::ppm::PpmFilePresenter;

pub use self::core::actions::estimate_area::estimate_area::{
    estimate_area, AreaEstimate, EstimateAreaError,
};
pub use self::core::actions::estimate_area::estimate_area_rayon::estimate_area_rayon;
pub use self::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use self::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use self::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use self::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
pub use self::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use self::core::data::colour::Colour;
pub use self::core::data::complex::{Complex, ComplexError};
pub use self::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use self::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use self::core::data::pixel_grid::{PixelGrid, PixelGridError};
pub use self::core::data::point::Point;
pub use self::core::fractals::mandelbrot::algorithm::{escape_iterations, MandelbrotAlgorithm};
pub use self::core::fractals::mandelbrot::config::MandelbrotConfig;
pub use self::core::fractals::mandelbrot::errors::MandelbrotError;
pub use self::core::fractals::mandelbrot::palette::{palette_colour, BandedPalette, PALETTE};
pub use self::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};
