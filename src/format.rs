use alloc::string::String;

use crate::error::PnmError;

/// Netpbm format tag, identified by its two-byte magic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1 — ASCII bitmap.
    PlainBitmap,
    /// P2 — ASCII greymap.
    PlainGraymap,
    /// P4 — packed binary bitmap.
    RawBitmap,
    /// P5 — binary greymap, one byte per sample.
    RawGraymap,
}

/// On-disk sample encoding shared by both image kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens (P1, P2).
    Plain,
    /// Packed binary samples (P4, P5).
    #[default]
    Raw,
}

/// Field order of the dimension line in bitmap headers.
///
/// Greymap headers are always columns first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DimensionOrder {
    /// `<rows> <columns>`, as written by this crate's bitmap encoder.
    #[default]
    RowsFirst,
    /// `<columns> <rows>`, as written by netpbm and most other tools.
    ColumnsFirst,
}

impl PnmFormat {
    /// Parse a magic tag such as `b"P4"`.
    pub fn from_magic(magic: &[u8]) -> Result<Self, PnmError> {
        match magic {
            b"P1" => Ok(Self::PlainBitmap),
            b"P2" => Ok(Self::PlainGraymap),
            b"P4" => Ok(Self::RawBitmap),
            b"P5" => Ok(Self::RawGraymap),
            other => Err(PnmError::UnrecognizedFormat(String::from_utf8_lossy(other).into())),
        }
    }

    pub fn magic(self) -> &'static str {
        match self {
            Self::PlainBitmap => "P1",
            Self::PlainGraymap => "P2",
            Self::RawBitmap => "P4",
            Self::RawGraymap => "P5",
        }
    }

    pub fn bitmap(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Plain => Self::PlainBitmap,
            Encoding::Raw => Self::RawBitmap,
        }
    }

    pub fn graymap(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Plain => Self::PlainGraymap,
            Encoding::Raw => Self::RawGraymap,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Self::PlainBitmap | Self::PlainGraymap => Encoding::Plain,
            Self::RawBitmap | Self::RawGraymap => Encoding::Raw,
        }
    }

    pub fn is_bitmap(self) -> bool {
        matches!(self, Self::PlainBitmap | Self::RawBitmap)
    }

    pub(crate) fn kind_name(self) -> &'static str {
        if self.is_bitmap() { "bitmap" } else { "greymap" }
    }
}

impl core::fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.magic())
    }
}

/// Header-level facts about an encoded image, available without decoding
/// any samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub format: PnmFormat,
    /// Declared maximum sample value; always 1 for bitmaps.
    pub max_value: u8,
}

impl ImageInfo {
    /// Probe a PBM/PGM header using the default bitmap dimension order.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        Self::from_bytes_with_order(data, DimensionOrder::default())
    }

    pub fn from_bytes_with_order(data: &[u8], order: DimensionOrder) -> Result<Self, PnmError> {
        let header = crate::pnm::parse_header(data, order)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            format: header.format,
            max_value: header.max_value,
        })
    }
}
