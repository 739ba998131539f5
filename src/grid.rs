use alloc::vec;
use alloc::vec::Vec;

use crate::error::PnmError;

/// Row-major sample storage shared by bitmaps and greymaps.
///
/// Sample `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid<T> {
    width: usize,
    height: usize,
    samples: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    pub(crate) fn new(width: usize, height: usize) -> Result<Self, PnmError> {
        let len = sample_count(width, height)?;
        Ok(Self {
            width,
            height,
            samples: vec![T::default(); len],
        })
    }

    /// Wrap an existing sample vector. `samples.len()` must equal
    /// `width * height`.
    pub(crate) fn from_vec(width: usize, height: usize, samples: Vec<T>) -> Result<Self, PnmError> {
        let expected = sample_count(width, height)?;
        if samples.len() != expected {
            return Err(PnmError::InvalidData(alloc::format!(
                "{width}x{height} image needs {expected} samples, got {}",
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn samples(&self) -> &[T] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [T] {
        &mut self.samples
    }

    pub(crate) fn rows(&self) -> core::slice::ChunksExact<'_, T> {
        self.samples.chunks_exact(self.width)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Lenient read: out-of-bounds coordinates yield `T::default()`.
    pub(crate) fn at(&self, x: usize, y: usize) -> T {
        self.index(x, y)
            .map(|i| self.samples[i])
            .unwrap_or_default()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), PnmError> {
        let i = self.index(x, y).ok_or(PnmError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.samples[i] = value;
        Ok(())
    }

    pub(crate) fn map<U>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }

    pub(crate) fn replace(&mut self, width: usize, height: usize, samples: Vec<T>) {
        debug_assert_eq!(samples.len(), width * height);
        self.width = width;
        self.height = height;
        self.samples = samples;
    }
}

/// `width * height`, rejecting empty and overflowing grids. Every header
/// the decoder accepts has positive dimensions, so every grid must too.
fn sample_count(width: usize, height: usize) -> Result<usize, PnmError> {
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(alloc::format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    width
        .checked_mul(height)
        .ok_or(PnmError::DimensionsTooLarge { width, height })
}
