//! Opcode stream interpreter.
//!
//! Reads the bytes between the header and the end marker, keeps the running
//! pixel, the run counter and the color history cache, and hands every
//! resolved pixel to a [`PixelWriter`].

use crate::cache::ColorCache;
use crate::error::QoiError;
use crate::header::{END_MARKER_LEN, HEADER_LEN};
use crate::ops::{
    DATA_MASK, OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RGBA, OP_RUN, TAG_MASK, diff_deltas,
    luma_deltas,
};
use crate::pixel::Rgba;
use crate::writer::PixelWriter;

// ── Cursor over the opcode region ───────────────────────────────────

/// Reads never cross `data.len()`, which is the start of the end marker.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    #[inline]
    fn read_u8(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    #[inline]
    fn read_fixed_bytes<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes: [u8; N] = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }
}

// ── Decode loop ─────────────────────────────────────────────────────

/// Decode `pixel_count` pixels from a stream whose header has already been
/// validated.
///
/// Returns the byte offset just past the last opcode consumed. A complete,
/// well-formed stream returns `data.len() - 8`.
pub(crate) fn decode_pixels(
    data: &[u8],
    pixel_count: usize,
    writer: &mut PixelWriter<'_>,
) -> Result<usize, QoiError> {
    let region_end = data.len().saturating_sub(END_MARKER_LEN);
    let mut cursor = Cursor::new(&data[..region_end], HEADER_LEN);

    let mut cache = ColorCache::new();
    let mut px = Rgba::START;
    let mut run: u8 = 0;

    for _ in 0..pixel_count {
        if run > 0 {
            run -= 1;
            writer.push(px);
            continue;
        }

        let offset = cursor.pos;
        let truncated = || QoiError::TruncatedStream { offset };
        let tag = cursor.read_u8().ok_or_else(truncated)?;

        px = match tag {
            OP_RGB => {
                let [r, g, b] = cursor.read_fixed_bytes().ok_or_else(truncated)?;
                Rgba::new(r, g, b, px.a)
            }
            OP_RGBA => {
                let [r, g, b, a] = cursor.read_fixed_bytes().ok_or_else(truncated)?;
                Rgba::new(r, g, b, a)
            }
            _ => match tag & TAG_MASK {
                OP_INDEX => cache.lookup(usize::from(tag)),
                OP_DIFF => {
                    let (dr, dg, db) = diff_deltas(tag);
                    px.wrapping_offset(dr, dg, db)
                }
                OP_LUMA => {
                    let second = cursor.read_u8().ok_or_else(truncated)?;
                    let (dr, dg, db) = luma_deltas(tag, second);
                    px.wrapping_offset(dr, dg, db)
                }
                _ => {
                    debug_assert_eq!(tag & TAG_MASK, OP_RUN);
                    run = tag & DATA_MASK;
                    px
                }
            },
        };

        cache.insert(px);
        writer.push(px);
    }

    Ok(cursor.pos)
}
