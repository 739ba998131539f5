//! PGM codec: P2 (ASCII) and P5 (one byte per sample).

use alloc::format;
use alloc::vec::Vec;

use super::token::{TokenReader, lossy, parse_uint};
use super::{PnmHeader, header_text};
use crate::error::PnmError;
use crate::format::{DimensionOrder, Encoding};
use crate::image::Graymap;

/// P2: `width * height` decimal tokens in `0..=max_value`.
pub(crate) fn decode_plain(
    reader: &mut TokenReader<'_>,
    header: &PnmHeader,
) -> Result<Graymap, PnmError> {
    let max = header.max_value;
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
        let value = parse_uint(token).ok_or_else(|| {
            PnmError::InvalidData(format!(
                "line {}: expected a sample, found {:?}",
                reader.line(),
                lossy(token)
            ))
        })?;
        if value > usize::from(max) {
            return Err(PnmError::InvalidData(format!(
                "line {}: sample {value} exceeds max value {max}",
                reader.line()
            )));
        }
        samples.push(value as u8);
    }
    Graymap::from_samples(header.width, header.height, samples, max, Encoding::Plain)
}

/// P5: raw bytes, taken as-is (no scaling by max value).
pub(crate) fn decode_raw(data: &[u8], header: &PnmHeader) -> Result<Graymap, PnmError> {
    let (w, h) = (header.width, header.height);
    let max = header.max_value;
    let count = w
        .checked_mul(h)
        .ok_or(PnmError::DimensionsTooLarge { width: w, height: h })?;
    let raster = data
        .get(header.data_offset..)
        .and_then(|rest| rest.get(..count))
        .ok_or(PnmError::UnexpectedEof)?;

    if let Some(i) = raster.iter().position(|&s| s > max) {
        return Err(PnmError::InvalidData(format!(
            "sample {} at ({}, {}) exceeds max value {max}",
            raster[i],
            i % w,
            i / w
        )));
    }
    Graymap::from_samples(w, h, raster.to_vec(), max, Encoding::Raw)
}

pub(crate) fn encode(graymap: &Graymap) -> Vec<u8> {
    let (w, h) = graymap.size();
    // greymap headers ignore the bitmap dimension order
    let header = header_text(
        graymap.format(),
        w,
        h,
        graymap.max_value(),
        DimensionOrder::ColumnsFirst,
    );

    match graymap.encoding() {
        Encoding::Plain => {
            // up to "255 " per sample
            let mut out = Vec::with_capacity(header.len() + w * h * 4);
            out.extend_from_slice(header.as_bytes());
            for row in graymap.grid.rows() {
                for (x, &s) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    push_decimal(&mut out, s);
                }
                out.push(b'\n');
            }
            out
        }
        Encoding::Raw => {
            let mut out = Vec::with_capacity(header.len() + w * h);
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(graymap.samples());
            out
        }
    }
}

fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + value / 10 % 10);
    }
    out.push(b'0' + value % 10);
}
