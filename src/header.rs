//! QOI header parsing.

use crate::error::{HeaderError, QoiError};
use crate::pixel::{Channels, ColorSpace};

/// `"qoif"`.
pub(crate) const MAGIC: [u8; 4] = *b"qoif";
pub(crate) const HEADER_LEN: usize = 14;
pub(crate) const END_MARKER_LEN: usize = 8;
/// Smallest buffer that can hold a header and the end marker.
pub(crate) const MIN_STREAM_LEN: usize = HEADER_LEN + END_MARKER_LEN;

/// Validated QOI image header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub colorspace: ColorSpace,
}

impl Header {
    /// Parse and validate the header of a complete QOI stream without
    /// decoding any pixels.
    ///
    /// The buffer must be at least 22 bytes (header plus end marker), so a
    /// successful parse here means [`crate::decode`] will get past the header too.
    pub fn from_bytes(data: &[u8]) -> Result<Self, QoiError> {
        if data.len() < MIN_STREAM_LEN {
            return Err(QoiError::BufferTooShort { len: data.len() });
        }
        let magic = [data[0], data[1], data[2], data[3]];
        if magic != MAGIC {
            return Err(HeaderError::BadMagic(magic).into());
        }
        let width = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        let height = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
        let channels = Channels::from_u8(data[12]).ok_or(HeaderError::BadChannels(data[12]))?;
        let colorspace =
            ColorSpace::from_u8(data[13]).ok_or(HeaderError::BadColorSpace(data[13]))?;

        Ok(Self {
            width,
            height,
            channels,
            colorspace,
        })
    }

    /// Total number of pixels, `width * height`.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
