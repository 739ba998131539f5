//! In-place transforms over bitmaps and greymaps.
//!
//! Transforms assume a valid buffer and never fail.

use alloc::vec::Vec;

use log::trace;

use crate::grid::Grid;
use crate::image::{Bitmap, Graymap};

impl<T: Copy + Default> Grid<T> {
    /// Mirror left-right: column `j` trades places with `width - 1 - j`.
    pub(crate) fn flip(&mut self) {
        let w = self.width();
        for row in self.samples_mut().chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Mirror top-bottom: row `i` trades places with `height - 1 - i`.
    pub(crate) fn flop(&mut self) {
        let w = self.width();
        let h = self.height();
        let samples = self.samples_mut();
        for i in 0..h / 2 {
            let (top, bottom) = samples.split_at_mut((h - 1 - i) * w);
            top[i * w..(i + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Rotate 90° clockwise. Afterwards `new[x][y] == old[height - 1 - y][x]`
    /// and the dimensions are swapped.
    pub(crate) fn rotate(&mut self) {
        let w = self.width();
        let h = self.height();
        let old = self.samples();
        let mut rotated = Vec::with_capacity(old.len());
        for x in 0..w {
            for y in 0..h {
                rotated.push(old[(h - 1 - y) * w + x]);
            }
        }
        self.replace(h, w, rotated);
    }
}

impl Bitmap {
    /// Negate every sample.
    pub fn invert(&mut self) {
        trace!("bitmap invert {}x{}", self.width(), self.height());
        for s in self.grid.samples_mut() {
            *s = !*s;
        }
    }

    /// Horizontal mirror.
    pub fn flip(&mut self) {
        self.grid.flip();
    }

    /// Vertical mirror.
    pub fn flop(&mut self) {
        self.grid.flop();
    }

    /// Rotate 90° clockwise, swapping width and height.
    pub fn rotate(&mut self) {
        trace!("bitmap rotate {}x{}", self.width(), self.height());
        self.grid.rotate();
    }
}

impl Graymap {
    /// Replace every sample `s` with `max_value - s`.
    pub fn invert(&mut self) {
        trace!("greymap invert {}x{}", self.width(), self.height());
        let max = self.max_value;
        for s in self.grid.samples_mut() {
            *s = max - *s;
        }
    }

    /// Horizontal mirror.
    pub fn flip(&mut self) {
        self.grid.flip();
    }

    /// Vertical mirror.
    pub fn flop(&mut self) {
        self.grid.flop();
    }

    /// Rotate 90° clockwise, swapping width and height.
    pub fn rotate(&mut self) {
        trace!("greymap rotate {}x{}", self.width(), self.height());
        self.grid.rotate();
    }

    /// Threshold into a new bitmap: a pixel is set when its sample is
    /// strictly greater than `max_value / 2`.
    ///
    /// The bitmap keeps this greymap's encoding (P2 becomes P1, P5 becomes
    /// P4). `self` is left untouched.
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max_value / 2;
        Bitmap {
            grid: self.grid.map(|s| s > threshold),
            encoding: self.encoding,
        }
    }
}
