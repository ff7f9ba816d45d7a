//! # zenqoi
//!
//! Bounds-checked decoder for the QOI ("Quite OK Image") format.
//!
//! A QOI stream is a 14-byte header, a run of 1 to 5 byte opcodes that each
//! produce one pixel (or a run of up to 62 identical pixels), and an 8-byte
//! end marker. Decoding is a single sequential pass with a per-call 64-entry
//! color history; nothing is shared between calls.
//!
//! ## Output modes
//!
//! QOI consumers disagree on what a 3-channel image should decode to, so the
//! choice is explicit:
//!
//! - [`OutputMode::Native`] (default): 3 bytes per pixel for RGB images,
//!   4 for RGBA images.
//! - [`OutputMode::Rgba`]: always 4 bytes per pixel, alpha forced to 255 for
//!   RGB images.
//!
//! ## Errors and warnings
//!
//! Malformed headers and streams that run out of bytes fail with a
//! [`QoiError`]. A stream whose last opcode does not end exactly at the end
//! marker still decodes; the mismatch is logged through the [`log`] facade
//! and reported by [`DecodeOutput::warning`]. Use [`EndCheck::Strict`] to
//! turn it into an error instead.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Colorspace conversion (the header's colorspace is reported, not applied)
//! - Animation
//!
//! ## Usage
//!
//! ```no_run
//! use zenqoi::{DecodeRequest, Header, Limits, OutputMode};
//!
//! let data: &[u8] = &[]; // your QOI bytes
//!
//! // Read the header without decoding
//! let header = Header::from_bytes(data)?;
//! println!("{}x{} {:?}", header.width, header.height, header.channels);
//!
//! let limits = Limits {
//!     max_pixels: Some(64 * 1024 * 1024),
//!     ..Default::default()
//! };
//! let decoded = DecodeRequest::new(data)
//!     .with_output_mode(OutputMode::Rgba)
//!     .with_limits(&limits)
//!     .decode()?;
//! if let Some(warning) = decoded.warning() {
//!     eprintln!("decoded with warning: {warning}");
//! }
//! # Ok::<(), zenqoi::QoiError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod cache;
mod decode;
mod error;
mod header;
mod limits;
mod ops;
mod pixel;
mod stream;
mod writer;

// Re-exports
pub use decode::{DecodeInfo, DecodeOutput, DecodeRequest, EndCheck};
pub use error::{DecodeWarning, HeaderError, QoiError};
pub use header::Header;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{Channels, ColorSpace, OutputMode, PixelLayout, Rgba};

/// Decode a QOI stream with [`OutputMode::Native`]: 3 or 4 bytes per pixel
/// as declared by the header.
pub fn decode(data: &[u8]) -> Result<DecodeOutput, QoiError> {
    DecodeRequest::new(data).decode()
}

/// Decode a QOI stream with [`OutputMode::Rgba`]: always 4 bytes per pixel,
/// alpha forced to 255 for 3-channel images.
pub fn decode_rgba(data: &[u8]) -> Result<DecodeOutput, QoiError> {
    DecodeRequest::new(data)
        .with_output_mode(OutputMode::Rgba)
        .decode()
}
