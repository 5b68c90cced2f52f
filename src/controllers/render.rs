use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::palette::BandedPalette;

/// Drives the render pipeline: classify every pixel, colour the counts,
/// hand the buffer to the presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &MandelbrotConfig) -> Result<(), Box<dyn std::error::Error>> {
        log::info!(
            "rendering {}x{} field at {} max iterations",
            config.grid().width(),
            config.grid().height(),
            config.max_iterations()
        );

        let algorithm =
            MandelbrotAlgorithm::new(config.grid(), config.region(), config.max_iterations())?;

        let start = Instant::now();
        let fractal = generate_fractal_rayon(config.grid(), &algorithm)?;
        log::info!("field generated in {:?}", start.elapsed());

        let colour_map = BandedPalette::new(config.max_iterations());
        self.buffer = Some(generate_pixel_buffer(fractal, &colour_map, config.grid())?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}
