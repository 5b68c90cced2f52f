use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = buffer.grid().width();
        let height = buffer.grid().height();

        // P6 is binary RGB; the buffer's constant alpha byte is dropped
        let mut rgb = Vec::with_capacity(buffer.grid().pixel_count() * 3);
        for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            rgb.extend_from_slice(&pixel[..3]);
        }

        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(&rgb)?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_grid::PixelGrid;

    #[test]
    fn test_present_writes_p6_header_and_rgb_bytes() {
        let grid = PixelGrid::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(
            grid,
            vec![
                10, 20, 30, 255, // (0,0)
                40, 50, 60, 255, // (1,0)
            ],
        )
        .unwrap();
        let filepath = std::env::temp_dir().join("mandelbrot_explorer_ppm_test.ppm");

        PpmFilePresenter::new().present(&buffer, &filepath).unwrap();
        let written = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
        assert_eq!(written, expected);
    }
}
