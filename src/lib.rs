//! # zenpbm
//!
//! Netpbm bitmap (PBM) and greymap (PGM) decoder, encoder and in-memory
//! transforms.
//!
//! ## Supported Formats
//!
//! - **P1** (PBM ASCII) — `0`/`1` tokens
//! - **P4** (PBM binary) — eight pixels per byte, MSB first, rows padded
//! - **P2** (PGM ASCII) — decimal samples, max value 1..=255
//! - **P5** (PGM binary) — one byte per sample, unscaled
//!
//! Bitmap headers put the row count before the column count by default.
//! Use [`DimensionOrder::ColumnsFirst`] to read and write the
//! columns-first order used by netpbm itself.
//!
//! ## Transforms
//!
//! [`Bitmap`] and [`Graymap`] (and the [`Image`] wrapper) support
//! `invert`, `flip` (left-right), `flop` (top-bottom) and `rotate`
//! (90° clockwise). [`Graymap::to_bitmap`] thresholds a greymap at
//! `max_value / 2`.
//!
//! ## Non-Goals
//!
//! - Colour formats (P3, P6, P7)
//! - Streaming or partial decode
//! - Sample depths other than 1 and 8 bits
//!
//! ## Credits
//!
//! Header tokenizing follows [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).
//!
//! ## Usage
//!
//! ```
//! use zenpbm::{DecodeRequest, EncodeRequest};
//!
//! let data = b"P1\n2 3\n1 0 1\n0 1 0\n";
//! let mut image = DecodeRequest::new(data).decode()?;
//! assert_eq!(image.size(), (3, 2));
//!
//! image.invert();
//! image.rotate();
//!
//! let encoded = EncodeRequest::new().encode(&image);
//! let again = zenpbm::decode(&encoded)?;
//! assert_eq!(again, image);
//! # Ok::<(), zenpbm::PnmError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod format;
mod grid;
mod image;
mod limits;
mod transform;

mod pnm;

mod decode;
mod encode;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use error::{ErrorKind, PnmError};
pub use format::{DimensionOrder, Encoding, ImageInfo, PnmFormat};
pub use image::{Bitmap, Graymap, Image};
pub use limits::Limits;

/// Decode P1, P2, P4 or P5 with default settings.
pub fn decode(data: &[u8]) -> Result<Image, PnmError> {
    DecodeRequest::new(data).decode()
}

/// Encode with default settings, using the image's own format tag.
pub fn encode(image: &Image) -> Vec<u8> {
    EncodeRequest::new().encode(image)
}
