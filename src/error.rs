use alloc::string::String;

use crate::pixel::PixelLayout;

/// Errors from QOI decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QoiError {
    #[error("buffer too short: {len} bytes, a QOI stream needs at least 22")]
    BufferTooShort { len: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),

    #[error("opcode stream truncated at byte offset {offset}")]
    TruncatedStream { offset: usize },

    #[error("opcode stream ended at byte {actual}, expected end marker at {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: PixelLayout,
        actual: PixelLayout,
    },
}

/// Reasons a 14-byte QOI header is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("bad magic bytes {0:02x?}, expected \"qoif\"")]
    BadMagic([u8; 4]),

    #[error("channel count {0} is not 3 (RGB) or 4 (RGBA)")]
    BadChannels(u8),

    #[error("colorspace {0} is not 0 (sRGB) or 1 (linear)")]
    BadColorSpace(u8),
}

/// Non-fatal conditions noticed while decoding.
///
/// The raster is complete and usable when a warning is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeWarning {
    /// The last opcode did not end where the 8-byte end marker begins.
    #[error("opcode stream ended at byte {actual}, expected end marker at {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl From<DecodeWarning> for QoiError {
    fn from(w: DecodeWarning) -> Self {
        match w {
            DecodeWarning::LengthMismatch { expected, actual } => {
                QoiError::LengthMismatch { expected, actual }
            }
        }
    }
}
