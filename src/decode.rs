use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::{DecodeWarning, QoiError};
use crate::header::{END_MARKER_LEN, HEADER_LEN, Header};
use crate::limits::Limits;
use crate::ops::MAX_PIXELS_PER_BYTE;
use crate::pixel::{Channels, ColorSpace, OutputMode, PixelLayout};
use crate::stream;
use crate::writer::PixelWriter;

/// What to do when the opcode stream does not end exactly where the 8-byte
/// end marker begins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndCheck {
    /// Keep the decoded raster and report
    /// [`DecodeWarning::LengthMismatch`] through [`DecodeOutput::warning`].
    #[default]
    Lenient,
    /// Fail with [`QoiError::LengthMismatch`].
    Strict,
}

/// Decoded image.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Channel count declared in the header.
    pub channels: Channels,
    pub colorspace: ColorSpace,
    /// Layout of [`Self::pixels`], chosen by the [`OutputMode`].
    pub layout: PixelLayout,
    warning: Option<DecodeWarning>,
}

impl DecodeOutput {
    /// Access the pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Integrity warning raised while decoding, if any.
    pub fn warning(&self) -> Option<&DecodeWarning> {
        self.warning.as_ref()
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`QoiError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(QoiError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Decode request builder.
///
/// ```
/// use zenqoi::{DecodeRequest, OutputMode};
///
/// let mut data = Vec::new();
/// data.extend_from_slice(b"qoif");
/// data.extend_from_slice(&1u32.to_be_bytes());
/// data.extend_from_slice(&1u32.to_be_bytes());
/// data.extend_from_slice(&[3, 0]);
/// data.extend_from_slice(&[0xfe, 10, 20, 30]);
/// data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
///
/// let out = DecodeRequest::new(&data)
///     .with_output_mode(OutputMode::Rgba)
///     .decode()?;
/// assert_eq!(out.pixels(), &[10, 20, 30, 255]);
/// # Ok::<(), zenqoi::QoiError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    mode: OutputMode,
    limits: Option<&'a Limits>,
    end_check: EndCheck,
}

impl<'a> DecodeRequest<'a> {
    /// Decode `data` with [`OutputMode::Native`], no limits and a lenient end check.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            mode: OutputMode::Native,
            limits: None,
            end_check: EndCheck::Lenient,
        }
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_end_check(mut self, end_check: EndCheck) -> Self {
        self.end_check = end_check;
        self
    }

    /// Decode into a freshly allocated raster.
    pub fn decode(self) -> Result<DecodeOutput, QoiError> {
        let mut pixels = Vec::new();
        let done = self.decode_into(&mut pixels)?;
        Ok(DecodeOutput {
            pixels,
            width: done.header.width,
            height: done.header.height,
            channels: done.header.channels,
            colorspace: done.header.colorspace,
            layout: done.layout,
            warning: done.warning,
        })
    }

    /// Decode into a caller-owned buffer, which is cleared first.
    ///
    /// On error the buffer is left empty; no partial raster is kept.
    pub fn decode_into(self, out: &mut Vec<u8>) -> Result<DecodeInfo, QoiError> {
        let result = self.decode_raster(out);
        if result.is_err() {
            out.clear();
        }
        result
    }

    fn decode_raster(self, out: &mut Vec<u8>) -> Result<DecodeInfo, QoiError> {
        let header = Header::from_bytes(self.data)?;
        let layout = self.mode.layout(header.channels);
        log::debug!(
            "qoi {}x{} {:?} {:?}, output {:?}",
            header.width,
            header.height,
            header.channels,
            header.colorspace,
            layout
        );

        let (width, height) = (header.width, header.height);
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }

        // Every opcode byte yields at most 62 pixels.
        let region_len = (self.data.len() - HEADER_LEN - END_MARKER_LEN) as u64;
        if header.pixel_count() > region_len.saturating_mul(MAX_PIXELS_PER_BYTE) {
            return Err(QoiError::TruncatedStream {
                offset: self.data.len() - END_MARKER_LEN,
            });
        }

        let pixel_count = usize::try_from(header.pixel_count())
            .map_err(|_| QoiError::DimensionsTooLarge { width, height })?;
        let raster_len = pixel_count
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(QoiError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = self.limits {
            limits.check_memory(raster_len)?;
        }

        let mut writer = PixelWriter::new(out, self.mode, header.channels, raster_len);
        let end = stream::decode_pixels(self.data, pixel_count, &mut writer)?;

        let expected = self.data.len() - END_MARKER_LEN;
        let warning = if end == expected {
            None
        } else {
            let mismatch = DecodeWarning::LengthMismatch {
                expected,
                actual: end,
            };
            if self.end_check == EndCheck::Strict {
                return Err(mismatch.into());
            }
            log::warn!("qoi: {mismatch}, {} bytes unused", expected - end);
            Some(mismatch)
        };

        Ok(DecodeInfo {
            header,
            layout,
            warning,
        })
    }
}

/// Metadata returned by [`DecodeRequest::decode_into`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeInfo {
    pub header: Header,
    /// Layout written to the output buffer.
    pub layout: PixelLayout,
    pub warning: Option<DecodeWarning>,
}
