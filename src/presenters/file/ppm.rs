use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::{write_ppm, WritePpmError, DEFAULT_PPM_COMMENT};

pub struct PpmFilePresenter {
    comment: String,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        write_ppm(buffer, &self.comment, filepath).map_err(|err| match err {
            WritePpmError::Create(err) => PresentError::Open(err),
            WritePpmError::Write(err) => PresentError::Write(err),
        })
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_comment(DEFAULT_PPM_COMMENT)
    }

    #[must_use]
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}
