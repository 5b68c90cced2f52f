use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// External rendering collaborator: takes a finished buffer and blits it
/// to a file, a window surface, or an encoder. The core never does
/// display I/O itself.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
