use crate::error::QoiError;

/// Caps on what a QOI header may ask the decoder to allocate.
///
/// Dimensions are checked as soon as the header is parsed; the raster size
/// is checked once the [`crate::OutputMode`] has fixed the bytes per pixel.
/// `None` means unchecked, which is the default for every field.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Largest accepted header width.
    pub max_width: Option<u64>,
    /// Largest accepted header height.
    pub max_height: Option<u64>,
    /// Largest accepted `width * height`.
    pub max_pixels: Option<u64>,
    /// Largest output raster in bytes. The same image needs 3 or 4 bytes
    /// per pixel depending on the output mode, so an RGB image can pass
    /// this check in native mode and fail it in RGBA mode.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a header whose dimensions exceed any limit.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), QoiError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(QoiError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(QoiError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(QoiError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Reject an output raster of `bytes` bytes if it is over the memory cap.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), QoiError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(QoiError::LimitExceeded(alloc::format!(
                    "raster of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
