use alloc::vec::Vec;

use crate::error::PnmError;
use crate::format::{Encoding, PnmFormat};
use crate::grid::Grid;

/// One-bit image (PBM). `true` is a set (black) pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub(crate) grid: Grid<bool>,
    pub(crate) encoding: Encoding,
}

/// Eight-bit greyscale image (PGM) with a declared maximum sample value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graymap {
    pub(crate) grid: Grid<u8>,
    pub(crate) max_value: u8,
    pub(crate) encoding: Encoding,
}

/// A decoded image of either kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Image {
    Bitmap(Bitmap),
    Graymap(Graymap),
}

impl Bitmap {
    /// A cleared `width x height` bitmap.
    pub fn new(width: usize, height: usize, encoding: Encoding) -> Result<Self, PnmError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            encoding,
        })
    }

    /// Build from row-major samples; `samples.len()` must be `width * height`.
    pub fn from_samples(
        width: usize,
        height: usize,
        samples: Vec<bool>,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        Ok(Self {
            grid: Grid::from_vec(width, height, samples)?,
            encoding,
        })
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Pixel at column `x`, row `y`. Coordinates outside the image read as
    /// `false`.
    pub fn at(&self, x: usize, y: usize) -> bool {
        self.grid.at(x, y)
    }

    /// Returns [`PnmError::OutOfBounds`] if `(x, y)` is outside the image.
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), PnmError> {
        self.grid.set(x, y, value)
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[bool] {
        self.grid.samples()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    pub fn format(&self) -> PnmFormat {
        PnmFormat::bitmap(self.encoding)
    }

    /// Switch between P1 and P4. Greymap tags are rejected.
    pub fn set_format(&mut self, format: PnmFormat) -> Result<(), PnmError> {
        if !format.is_bitmap() {
            return Err(PnmError::WrongImageKind {
                expected: "bitmap",
                found: format.kind_name(),
            });
        }
        self.encoding = format.encoding();
        Ok(())
    }

    /// Borrow the samples as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, bool> {
        imgref::ImgRef::new(self.grid.samples(), self.width(), self.height())
    }
}

impl Graymap {
    /// A black `width x height` greymap.
    pub fn new(
        width: usize,
        height: usize,
        max_value: u8,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        check_max_value(max_value)?;
        Ok(Self {
            grid: Grid::new(width, height)?,
            max_value,
            encoding,
        })
    }

    /// Build from row-major samples. Every sample must be `<= max_value`.
    pub fn from_samples(
        width: usize,
        height: usize,
        samples: Vec<u8>,
        max_value: u8,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        check_max_value(max_value)?;
        if let Some(&value) = samples.iter().find(|&&s| s > max_value) {
            return Err(PnmError::SampleOutOfRange { value, max_value });
        }
        Ok(Self {
            grid: Grid::from_vec(width, height, samples)?,
            max_value,
            encoding,
        })
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Sample at column `x`, row `y`. Coordinates outside the image read
    /// as `0`.
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.grid.at(x, y)
    }

    /// Fails with [`PnmError::OutOfBounds`] outside the image and with
    /// [`PnmError::SampleOutOfRange`] when `value > max_value`.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), PnmError> {
        if value > self.max_value {
            return Err(PnmError::SampleOutOfRange {
                value,
                max_value: self.max_value,
            });
        }
        self.grid.set(x, y, value)
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[u8] {
        self.grid.samples()
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Change the declared maximum. Samples above the new maximum are
    /// clamped to it; no rescaling happens.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), PnmError> {
        check_max_value(max_value)?;
        if max_value < self.max_value {
            for s in self.grid.samples_mut() {
                *s = (*s).min(max_value);
            }
        }
        self.max_value = max_value;
        Ok(())
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    pub fn format(&self) -> PnmFormat {
        PnmFormat::graymap(self.encoding)
    }

    /// Switch between P2 and P5. Bitmap tags are rejected.
    pub fn set_format(&mut self, format: PnmFormat) -> Result<(), PnmError> {
        if format.is_bitmap() {
            return Err(PnmError::WrongImageKind {
                expected: "greymap",
                found: format.kind_name(),
            });
        }
        self.encoding = format.encoding();
        Ok(())
    }

    /// Borrow the samples as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, u8> {
        imgref::ImgRef::new(self.grid.samples(), self.width(), self.height())
    }

    /// Copy an [`imgref::ImgRef`] (any stride) into a new greymap.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(
        img: imgref::ImgRef<'_, u8>,
        max_value: u8,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        let samples: Vec<u8> = img.pixels().collect();
        Self::from_samples(img.width(), img.height(), samples, max_value, encoding)
    }
}

fn check_max_value(max_value: u8) -> Result<(), PnmError> {
    if max_value == 0 {
        return Err(PnmError::InvalidHeader(
            "max value must be in 1..=255, got 0".into(),
        ));
    }
    Ok(())
}

impl Image {
    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        match self {
            Image::Bitmap(b) => b.size(),
            Image::Graymap(g) => g.size(),
        }
    }

    pub fn format(&self) -> PnmFormat {
        match self {
            Image::Bitmap(b) => b.format(),
            Image::Graymap(g) => g.format(),
        }
    }

    pub fn invert(&mut self) {
        match self {
            Image::Bitmap(b) => b.invert(),
            Image::Graymap(g) => g.invert(),
        }
    }

    pub fn flip(&mut self) {
        match self {
            Image::Bitmap(b) => b.flip(),
            Image::Graymap(g) => g.flip(),
        }
    }

    pub fn flop(&mut self) {
        match self {
            Image::Bitmap(b) => b.flop(),
            Image::Graymap(g) => g.flop(),
        }
    }

    pub fn rotate(&mut self) {
        match self {
            Image::Bitmap(b) => b.rotate(),
            Image::Graymap(g) => g.rotate(),
        }
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Image::Bitmap(b) => Some(b),
            Image::Graymap(_) => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            Image::Graymap(g) => Some(g),
            Image::Bitmap(_) => None,
        }
    }

    pub fn into_bitmap(self) -> Result<Bitmap, PnmError> {
        match self {
            Image::Bitmap(b) => Ok(b),
            Image::Graymap(_) => Err(PnmError::WrongImageKind {
                expected: "bitmap",
                found: "greymap",
            }),
        }
    }

    pub fn into_graymap(self) -> Result<Graymap, PnmError> {
        match self {
            Image::Graymap(g) => Ok(g),
            Image::Bitmap(_) => Err(PnmError::WrongImageKind {
                expected: "greymap",
                found: "bitmap",
            }),
        }
    }
}

impl From<Bitmap> for Image {
    fn from(b: Bitmap) -> Self {
        Image::Bitmap(b)
    }
}

impl From<Graymap> for Image {
    fn from(g: Graymap) -> Self {
        Image::Graymap(g)
    }
}
