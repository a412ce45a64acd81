use std::fmt::{Display, Error, Formatter};
use std::io;

use qrcode::types::QrError;

// Error
//------------------------------------------------------------------------------

#[derive(Debug)]
pub enum StyleError {
    // Render pipeline
    EncodingFailure(QrError),
    AssetUnavailable(String),
    GeometryInconsistency(String),
    InvalidColor(String),
    Image(image::ImageError),

    // Batch driver
    Io(io::Error),
    Batch(String),
}

impl Display for StyleError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            // Render pipeline
            Self::EncodingFailure(e) => write!(f, "Payload cannot be encoded: {e}"),
            Self::AssetUnavailable(msg) => write!(f, "Logo asset unavailable: {msg}"),
            Self::GeometryInconsistency(msg) => write!(f, "Inconsistent geometry: {msg}"),
            Self::InvalidColor(s) => write!(f, "Invalid color: {s:?}"),
            Self::Image(e) => write!(f, "Image error: {e}"),

            // Batch driver
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Batch(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EncodingFailure(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QrError> for StyleError {
    fn from(e: QrError) -> Self {
        Self::EncodingFailure(e)
    }
}

impl From<image::ImageError> for StyleError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<io::Error> for StyleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub type StyleResult<T> = Result<T, StyleError>;
