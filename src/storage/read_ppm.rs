use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::storage::write_ppm::{PPM_MAGIC, PPM_MAX_VALUE};

#[derive(Debug)]
pub enum PpmError {
    Io(io::Error),
    BadMagic(String),
    MalformedHeader(String),
    UnsupportedMaxValue(u32),
    Dimensions(PixelRectError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::BadMagic(found) => write!(f, "expected {} magic, found {:?}", PPM_MAGIC, found),
            Self::MalformedHeader(token) => write!(f, "malformed header field {:?}", token),
            Self::UnsupportedMaxValue(value) => {
                write!(f, "unsupported max channel value {}", value)
            }
            Self::Dimensions(err) => write!(f, "invalid dimensions: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel data error: {}", err),
        }
    }
}

impl Error for PpmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Dimensions(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::BadMagic(_) | Self::MalformedHeader(_) | Self::UnsupportedMaxValue(_) => None,
        }
    }
}

impl From<io::Error> for PpmError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Header fields of a binary PPM, exactly as read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmHeader {
    pub magic: String,
    pub width: u32,
    pub height: u32,
    pub max_value: String,
}

/// Reads the next whitespace-delimited header token, skipping `#` comments
/// that run to the end of the line. Consumes the single whitespace byte that
/// ends the token, which for the last header field is the separator before
/// the pixel data.
fn next_token<R: BufRead>(reader: &mut R) -> Result<String, PpmError> {
    let mut token = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }

        match byte[0] {
            b'#' if token.is_empty() => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    break;
                }
            }
            b => token.push(b),
        }
    }

    if token.is_empty() {
        return Err(PpmError::MalformedHeader(String::new()));
    }

    Ok(String::from_utf8_lossy(&token).into_owned())
}

fn parse_field(token: String) -> Result<u32, PpmError> {
    token.parse().map_err(|_| PpmError::MalformedHeader(token))
}

pub fn read_ppm_from<R: BufRead>(mut reader: R) -> Result<(PpmHeader, PixelBuffer), PpmError> {
    let magic = next_token(&mut reader)?;
    if magic != PPM_MAGIC {
        return Err(PpmError::BadMagic(magic));
    }

    let width = parse_field(next_token(&mut reader)?)?;
    let height = parse_field(next_token(&mut reader)?)?;
    let max_value = next_token(&mut reader)?;
    let max = parse_field(max_value.clone())?;
    if max != PPM_MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue(max));
    }

    let pixel_rect = PixelRect::new(width, height).map_err(PpmError::Dimensions)?;
    // Read at most one byte past the payload so trailing data is detected
    // without trusting the header for the allocation size
    let limit = u64::try_from(pixel_rect.byte_len())
        .ok()
        .and_then(|expected| expected.checked_add(1))
        .ok_or_else(|| PpmError::MalformedHeader(format!("{} {}", width, height)))?;
    let mut data = Vec::new();
    reader.take(limit).read_to_end(&mut data)?;

    let buffer = PixelBuffer::from_data(pixel_rect, data).map_err(PpmError::PixelBuffer)?;
    let header = PpmHeader {
        magic,
        width,
        height,
        max_value,
    };

    Ok((header, buffer))
}

pub fn read_ppm(filepath: impl AsRef<Path>) -> Result<(PpmHeader, PixelBuffer), PpmError> {
    let file = File::open(filepath)?;

    read_ppm_from(BufReader::new(file))
}
