use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub const PPM_MAGIC: &str = "P6";
pub const PPM_MAX_VALUE: u32 = 255;
pub const DEFAULT_PPM_COMMENT: &str = "escape-time render";

#[derive(Debug)]
pub enum WritePpmError {
    Create(io::Error),
    Write(io::Error),
}

impl fmt::Display for WritePpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(err) => write!(f, "cannot create file: {}", err),
            Self::Write(err) => write!(f, "cannot write image data: {}", err),
        }
    }
}

impl Error for WritePpmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Create(err) | Self::Write(err) => Some(err),
        }
    }
}

/// Writes `buffer` as a binary PPM: magic, one comment line, dimensions, max
/// channel value, then the raw RGB bytes.
pub fn write_ppm_to<W: Write>(
    buffer: &PixelBuffer,
    comment: &str,
    mut writer: W,
) -> io::Result<()> {
    writeln!(writer, "{}", PPM_MAGIC)?;
    // A newline inside the comment would end it early and corrupt the header
    writeln!(writer, "# {}", comment.replace(['\n', '\r'], " "))?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "{}", PPM_MAX_VALUE)?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

pub fn write_ppm(
    buffer: &PixelBuffer,
    comment: &str,
    filepath: impl AsRef<Path>,
) -> Result<(), WritePpmError> {
    let file = File::create(filepath).map_err(WritePpmError::Create)?;

    write_ppm_to(buffer, comment, BufWriter::new(file)).map_err(WritePpmError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_header_layout() {
        let buffer = PixelBuffer::from_data(
            PixelRect::new(3, 2).unwrap(),
            (1..=18).collect(),
        )
        .unwrap();
        let mut out = Vec::new();

        write_ppm_to(&buffer, "hello", &mut out).unwrap();

        let header = b"P6\n# hello\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], buffer.buffer().as_slice());
    }

    #[test]
    fn test_comment_newlines_are_flattened() {
        let buffer = PixelBuffer::new(PixelRect::new(2, 2).unwrap());
        let mut out = Vec::new();

        write_ppm_to(&buffer, "two\nlines", &mut out).unwrap();

        assert!(out.starts_with(b"P6\n# two lines\n2 2\n255\n"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let buffer = PixelBuffer::new(PixelRect::new(2, 2).unwrap());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");

        let result = write_ppm(&buffer, DEFAULT_PPM_COMMENT, &path);

        assert!(matches!(
            result,
            Err(WritePpmError::Create(ref err)) if err.kind() == io::ErrorKind::NotFound
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_failure_after_open_is_a_write_error() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let buffer = PixelBuffer::new(PixelRect::new(64, 64).unwrap());

        let result = write_ppm(&buffer, DEFAULT_PPM_COMMENT, full);

        assert!(matches!(result, Err(WritePpmError::Write(_))));
    }

    struct FailingWriter {}

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_errors_propagate() {
        let buffer = PixelBuffer::new(PixelRect::new(2, 2).unwrap());

        let result = write_ppm_to(&buffer, "x", FailingWriter {});

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::StorageFull);
    }
}
