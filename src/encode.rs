use alloc::vec::Vec;

use crate::format::DimensionOrder;
use crate::image::{Bitmap, Graymap, Image};

/// Encode request. The output variant (P1, P2, P4, P5) follows the
/// image's own format tag.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest {
    bitmap_order: DimensionOrder,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field order of the bitmap dimension line. Greymaps ignore this.
    pub fn with_bitmap_order(mut self, order: DimensionOrder) -> Self {
        self.bitmap_order = order;
        self
    }

    pub fn encode(&self, image: &Image) -> Vec<u8> {
        match image {
            Image::Bitmap(b) => self.encode_bitmap(b),
            Image::Graymap(g) => self.encode_graymap(g),
        }
    }

    pub fn encode_bitmap(&self, bitmap: &Bitmap) -> Vec<u8> {
        crate::pnm::encode_bitmap(bitmap, self.bitmap_order)
    }

    pub fn encode_graymap(&self, graymap: &Graymap) -> Vec<u8> {
        crate::pnm::encode_graymap(graymap)
    }

    /// Encode fully, then hand the bytes to `writer` in one call.
    /// I/O failures come back as [`crate::PnmError::Io`].
    pub fn write_to<W: std::io::Write>(
        &self,
        image: &Image,
        mut writer: W,
    ) -> Result<(), crate::PnmError> {
        writer.write_all(&self.encode(image))?;
        writer.flush()?;
        Ok(())
    }
}
