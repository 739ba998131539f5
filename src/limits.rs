use crate::error::PnmError;

/// Resource limits applied after the header is parsed and before any
/// sample storage is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the in-memory sample grid.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a `width x height` grid of `sample_size`-byte samples.
    pub(crate) fn check_grid(
        &self,
        width: usize,
        height: usize,
        sample_size: usize,
    ) -> Result<(), PnmError> {
        let exceeded = |what: &str, value: u64, limit: u64| {
            PnmError::LimitExceeded(alloc::format!("{what} {value} exceeds limit {limit}"))
        };

        if let Some(max_w) = self.max_width.filter(|&m| width as u64 > m) {
            return Err(exceeded("width", width as u64, max_w));
        }
        if let Some(max_h) = self.max_height.filter(|&m| height as u64 > m) {
            return Err(exceeded("height", height as u64, max_h));
        }

        let pixels = width
            .checked_mul(height)
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        if let Some(max_px) = self.max_pixels.filter(|&m| pixels as u64 > m) {
            return Err(exceeded("pixel count", pixels as u64, max_px));
        }

        let bytes = pixels
            .checked_mul(sample_size)
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        if let Some(max_mem) = self.max_memory_bytes.filter(|&m| bytes as u64 > m) {
            return Err(exceeded("grid bytes", bytes as u64, max_mem));
        }
        Ok(())
    }
}
