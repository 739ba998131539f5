//! PBM/PGM family: P1, P2, P4, P5.
//!
//! Header layout shared by every variant:
//!
//! ```text
//! <magic>
//! [# comments]
//! <dimensions>
//! [<max value>]      greymaps only
//! <samples>
//! ```
//!
//! Bitmap dimensions are read rows-first unless
//! [`DimensionOrder::ColumnsFirst`] is requested; greymap dimensions are
//! always columns-first.

mod pbm;
mod pgm;
mod token;

use alloc::format;
use alloc::vec::Vec;

use log::debug;

use crate::error::PnmError;
use crate::format::{DimensionOrder, Encoding, PnmFormat};
use crate::image::{Bitmap, Graymap, Image};
use crate::limits::Limits;

use token::TokenReader;

/// Parsed header (internal).
#[derive(Debug)]
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub width: usize,
    pub height: usize,
    /// 1 for bitmaps.
    pub max_value: u8,
    /// Offset of the first sample byte (binary formats) or of the byte
    /// after the last header token (ASCII formats).
    pub data_offset: usize,
}

/// Read the header, leaving `reader` positioned at the sample data.
pub(crate) fn read_header(
    reader: &mut TokenReader<'_>,
    order: DimensionOrder,
) -> Result<PnmHeader, PnmError> {
    let magic = reader.next_token().ok_or(PnmError::UnexpectedEof)?;
    let format = PnmFormat::from_magic(magic)?;

    let rows_first = format.is_bitmap() && order == DimensionOrder::RowsFirst;
    let (width, height) = if rows_first {
        let height = reader.header_uint("row count")?;
        let width = reader.header_uint("column count")?;
        (width, height)
    } else {
        let width = reader.header_uint("column count")?;
        let height = reader.header_uint("row count")?;
        (width, height)
    };
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let max_value = if format.is_bitmap() {
        1
    } else {
        match reader.header_uint("max value")? {
            max @ 1..=255 => max as u8,
            max => {
                return Err(PnmError::InvalidHeader(format!(
                    "max value must be in 1..=255, got {max}"
                )));
            }
        }
    };

    if format.encoding() == Encoding::Raw {
        reader.end_binary_header()?;
    }

    debug!("{format} header: {width}x{height}, max value {max_value}");

    Ok(PnmHeader {
        format,
        width,
        height,
        max_value,
        data_offset: reader.position(),
    })
}

pub(crate) fn parse_header(data: &[u8], order: DimensionOrder) -> Result<PnmHeader, PnmError> {
    read_header(&mut TokenReader::new(data), order)
}

/// Decode any supported variant (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    order: DimensionOrder,
) -> Result<Image, PnmError> {
    let mut reader = TokenReader::new(data);
    let header = read_header(&mut reader, order)?;

    if let Some(limits) = limits {
        // bool and u8 samples are both one byte in memory
        limits.check_grid(header.width, header.height, 1)?;
    }

    let image = match header.format {
        PnmFormat::PlainBitmap => Image::Bitmap(pbm::decode_plain(&mut reader, &header)?),
        PnmFormat::RawBitmap => Image::Bitmap(pbm::decode_raw(data, &header)?),
        PnmFormat::PlainGraymap => Image::Graymap(pgm::decode_plain(&mut reader, &header)?),
        PnmFormat::RawGraymap => Image::Graymap(pgm::decode_raw(data, &header)?),
    };
    Ok(image)
}

pub(crate) fn encode_bitmap(bitmap: &Bitmap, order: DimensionOrder) -> Vec<u8> {
    debug!(
        "encoding {}x{} bitmap as {}",
        bitmap.width(),
        bitmap.height(),
        bitmap.format()
    );
    pbm::encode(bitmap, order)
}

pub(crate) fn encode_graymap(graymap: &Graymap) -> Vec<u8> {
    debug!(
        "encoding {}x{} greymap as {}",
        graymap.width(),
        graymap.height(),
        graymap.format()
    );
    pgm::encode(graymap)
}

/// Header text for `format`, ending in the newline that precedes samples.
fn header_text(
    format: PnmFormat,
    width: usize,
    height: usize,
    max_value: u8,
    order: DimensionOrder,
) -> alloc::string::String {
    let magic = format.magic();
    match (format.is_bitmap(), order) {
        (true, DimensionOrder::RowsFirst) => format!("{magic}\n{height} {width}\n"),
        (true, DimensionOrder::ColumnsFirst) => format!("{magic}\n{width} {height}\n"),
        (false, _) => format!("{magic}\n{width} {height}\n{max_value}\n"),
    }
}
