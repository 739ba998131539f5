use crate::error::PnmError;
use crate::format::{DimensionOrder, ImageInfo};
use crate::image::{Bitmap, Graymap, Image};
use crate::limits::Limits;

/// Decode request over a fully buffered PBM/PGM file.
///
/// ```
/// use zenpbm::DecodeRequest;
///
/// let image = DecodeRequest::new(b"P2\n3 2\n255\n10 20 30\n40 50 60\n")
///     .decode_graymap()?;
/// assert_eq!(image.at(1, 1), 50);
/// # Ok::<(), zenpbm::PnmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    bitmap_order: DimensionOrder,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            bitmap_order: DimensionOrder::default(),
        }
    }

    /// Drain `reader` into `buf` and decode from there.
    ///
    /// The whole stream is read before any parsing starts.
    pub fn from_reader<R: std::io::Read>(
        mut reader: R,
        buf: &'a mut alloc::vec::Vec<u8>,
    ) -> Result<Self, PnmError> {
        buf.clear();
        reader.read_to_end(buf)?;
        Ok(Self::new(buf.as_slice()))
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Field order of the bitmap dimension line. Greymaps ignore this.
    pub fn with_bitmap_order(mut self, order: DimensionOrder) -> Self {
        self.bitmap_order = order;
        self
    }

    /// Parse the header only.
    pub fn info(&self) -> Result<ImageInfo, PnmError> {
        ImageInfo::from_bytes_with_order(self.data, self.bitmap_order)
    }

    /// Decode any of P1, P2, P4, P5.
    pub fn decode(self) -> Result<Image, PnmError> {
        crate::pnm::decode(self.data, self.limits, self.bitmap_order)
    }

    /// Decode, requiring a P1 or P4 file.
    pub fn decode_bitmap(self) -> Result<Bitmap, PnmError> {
        self.decode()?.into_bitmap()
    }

    /// Decode, requiring a P2 or P5 file.
    pub fn decode_graymap(self) -> Result<Graymap, PnmError> {
        self.decode()?.into_graymap()
    }
}
