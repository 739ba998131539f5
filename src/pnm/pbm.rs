//! PBM codec: P1 (ASCII) and P4 (bit-packed).

use alloc::format;
use alloc::vec::Vec;

use super::token::{TokenReader, lossy};
use super::{PnmHeader, header_text};
use crate::error::PnmError;
use crate::format::{DimensionOrder, Encoding};
use crate::image::Bitmap;

/// P1: `width * height` tokens, each exactly `0` or `1`.
pub(crate) fn decode_plain(
    reader: &mut TokenReader<'_>,
    header: &PnmHeader,
) -> Result<Bitmap, PnmError> {
    let count = header
        .width
        .checked_mul(header.height)
        .ok_or(PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    // every token takes at least one byte; don't trust the header beyond that
    let mut samples = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        let token = reader.next_token().ok_or(PnmError::UnexpectedEof)?;
        let bit = match token {
            b"0" => false,
            b"1" => true,
            other => {
                return Err(PnmError::InvalidData(format!(
                    "line {}: expected 0 or 1, found {:?}",
                    reader.line(),
                    lossy(other)
                )));
            }
        };
        samples.push(bit);
    }
    Bitmap::from_samples(header.width, header.height, samples, Encoding::Plain)
}

/// P4: eight pixels per byte, MSB first, rows padded to a whole byte.
pub(crate) fn decode_raw(data: &[u8], header: &PnmHeader) -> Result<Bitmap, PnmError> {
    let w = header.width;
    let h = header.height;
    let row_bytes = w.div_ceil(8);
    let raster_len = row_bytes
        .checked_mul(h)
        .ok_or(PnmError::DimensionsTooLarge { width: w, height: h })?;
    let raster = data
        .get(header.data_offset..)
        .and_then(|rest| rest.get(..raster_len))
        .ok_or(PnmError::UnexpectedEof)?;

    let mut samples = Vec::with_capacity(w * h);
    for row in raster.chunks_exact(row_bytes) {
        samples.extend((0..w).map(|x| row[x / 8] & (0x80 >> (x % 8)) != 0));
    }
    Bitmap::from_samples(w, h, samples, Encoding::Raw)
}

pub(crate) fn encode(bitmap: &Bitmap, order: DimensionOrder) -> Vec<u8> {
    let (w, h) = bitmap.size();
    let header = header_text(bitmap.format(), w, h, 1, order);

    match bitmap.encoding() {
        Encoding::Plain => {
            // "1 0 1\n": two bytes per pixel
            let mut out = Vec::with_capacity(header.len() + w * h * 2);
            out.extend_from_slice(header.as_bytes());
            for row in bitmap.grid.rows() {
                for (x, &bit) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    out.push(if bit { b'1' } else { b'0' });
                }
                out.push(b'\n');
            }
            out
        }
        Encoding::Raw => {
            let row_bytes = w.div_ceil(8);
            let mut out = Vec::with_capacity(header.len() + row_bytes * h);
            out.extend_from_slice(header.as_bytes());
            for row in bitmap.grid.rows() {
                out.extend(row.chunks(8).map(|chunk| {
                    chunk
                        .iter()
                        .enumerate()
                        .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << (7 - i)))
                }));
            }
            out
        }
    }
}
