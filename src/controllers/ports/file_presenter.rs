use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Where persisting an image went wrong: opening the destination, or
/// writing to it once open.
#[derive(Debug)]
pub enum PresentError {
    Open(io::Error),
    Write(io::Error),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(err) => write!(f, "open failed: {}", err),
            Self::Write(err) => write!(f, "write failed: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Write(err) => Some(err),
        }
    }
}

/// Persists a finished image. Presenters never modify the buffer.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError>;
}
