use alloc::vec::Vec;

use crate::pixel::{Channels, OutputMode, PixelLayout, Rgba};

/// Appends resolved colors to a raster in one fixed [`PixelLayout`].
pub(crate) struct PixelWriter<'a> {
    out: &'a mut Vec<u8>,
    layout: PixelLayout,
    /// Overwrite alpha with 255 (RGBA output of a 3-channel image).
    force_opaque: bool,
}

impl<'a> PixelWriter<'a> {
    /// Clears `out` and reserves room for `pixel_count` pixels.
    ///
    /// `raster_len` must equal `pixel_count * layout.bytes_per_pixel()`; the
    /// caller has already checked it against limits and overflow.
    pub(crate) fn new(
        out: &'a mut Vec<u8>,
        mode: OutputMode,
        channels: Channels,
        raster_len: usize,
    ) -> Self {
        out.clear();
        out.reserve_exact(raster_len);
        let layout = mode.layout(channels);
        Self {
            out,
            layout,
            force_opaque: layout.bytes_per_pixel() > channels.count(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, px: Rgba) {
        match self.layout {
            PixelLayout::Rgb8 => self.out.extend_from_slice(&[px.r, px.g, px.b]),
            PixelLayout::Rgba8 => {
                let a = if self.force_opaque { 255 } else { px.a };
                self.out.extend_from_slice(&[px.r, px.g, px.b, a]);
            }
        }
    }
}
