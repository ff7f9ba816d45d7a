//! QOI opcode tags.
//!
//! The two 8-bit tags are checked first; everything else is identified by
//! its top two bits.

pub(crate) const OP_RGB: u8 = 0b1111_1110;
pub(crate) const OP_RGBA: u8 = 0b1111_1111;

pub(crate) const TAG_MASK: u8 = 0b1100_0000;
pub(crate) const DATA_MASK: u8 = 0b0011_1111;

pub(crate) const OP_INDEX: u8 = 0b0000_0000;
pub(crate) const OP_DIFF: u8 = 0b0100_0000;
pub(crate) const OP_LUMA: u8 = 0b1000_0000;
pub(crate) const OP_RUN: u8 = 0b1100_0000;

/// Most pixels one opcode byte can yield (a run of length 62).
pub(crate) const MAX_PIXELS_PER_BYTE: u64 = 62;

/// `DIFF`: 2-bit deltas for r, g, b in bits 4-5, 2-3, 0-1, biased by 2.
#[inline]
pub(crate) fn diff_deltas(tag: u8) -> (i8, i8, i8) {
    let dr = ((tag >> 4) & 0b11) as i8 - 2;
    let dg = ((tag >> 2) & 0b11) as i8 - 2;
    let db = (tag & 0b11) as i8 - 2;
    (dr, dg, db)
}

/// `LUMA`: 6-bit green delta biased by 32 in the tag, then red and blue
/// relative to green as 4-bit nibbles biased by 8 in the second byte.
#[inline]
pub(crate) fn luma_deltas(tag: u8, second: u8) -> (i8, i8, i8) {
    let dg = (tag & DATA_MASK) as i8 - 32;
    let dr = dg + ((second >> 4) & 0x0f) as i8 - 8;
    let db = dg + (second & 0x0f) as i8 - 8;
    (dr, dg, db)
}
