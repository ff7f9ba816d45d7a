/// Channel count declared in the QOI header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channels {
    /// 3 channels, RGB.
    Rgb,
    /// 4 channels, RGBA.
    Rgba,
}

impl Channels {
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }

    /// Number of channels as stored in the header byte.
    pub fn count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Colorspace declared in the QOI header.
///
/// Informative only: the decoder never converts between colorspaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// sRGB color channels with linear alpha (header byte 0).
    Srgb,
    /// All channels linear (header byte 1).
    Linear,
}

impl ColorSpace {
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Srgb),
            1 => Some(Self::Linear),
            _ => None,
        }
    }
}

/// Pixel memory layout of a decoded raster.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// How resolved pixels are written to the output raster.
///
/// Fixed for one decode call and reflected in [`crate::DecodeOutput::layout`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Exactly `channels` bytes per pixel. Alpha is omitted for 3-channel
    /// images, so the layout is `Rgb8` or `Rgba8` depending on the header.
    #[default]
    Native,
    /// Always 4 bytes per pixel. For 3-channel images alpha is forced to 255,
    /// whatever the opcode stream set it to.
    Rgba,
}

impl OutputMode {
    /// Output layout for an image with the given header channel count.
    pub fn layout(self, channels: Channels) -> PixelLayout {
        match (self, channels) {
            (Self::Native, Channels::Rgb) => PixelLayout::Rgb8,
            (Self::Native, Channels::Rgba) | (Self::Rgba, _) => PixelLayout::Rgba8,
        }
    }
}

/// One 8-bit RGBA color, as held by the running pixel state and the
/// color history cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the state before the first opcode.
    pub const START: Self = Self::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color history slot for this color: `(r*3 + g*5 + b*7 + a*11) % 64`.
    #[inline]
    pub fn hash_index(self) -> usize {
        (usize::from(self.r) * 3
            + usize::from(self.g) * 5
            + usize::from(self.b) * 7
            + usize::from(self.a) * 11)
            % 64
    }

    /// Add signed deltas to red, green and blue modulo 256. Alpha is kept.
    #[inline]
    pub(crate) fn wrapping_offset(self, dr: i8, dg: i8, db: i8) -> Self {
        Self {
            r: self.r.wrapping_add_signed(dr),
            g: self.g.wrapping_add_signed(dg),
            b: self.b.wrapping_add_signed(db),
            a: self.a,
        }
    }
}

/// Pixel types that can view a decoded raster.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy + 'static {
    /// Layout this pixel type expects.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
