//! Region histogram queries
//!
//! The histogram of a region `[x, x + w) x [y, y + h)` is obtained from
//! the four table cells at its corners by inclusion-exclusion:
//!
//! ```text
//! H = T[y+h][x+w] - T[y][x+w] - T[y+h][x] + T[y][x]
//! ```
//!
//! Queries cost `O(B)` regardless of the region size.

use crate::builder::IntegralHistogram;
use crate::table::{IntegralTable, Layout};
use crate::{IntegralError, IntegralResult};
use inthist_core::{Accumulator, Rect, Sample};

impl<A: Accumulator> IntegralTable<A> {
    /// Histogram of `rect`, every channel concatenated (`C * B` entries).
    ///
    /// A zero-area region yields all zeros.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::OutOfBounds` if `rect` does not fit inside
    /// the grid the table was built from.
    ///
    /// # Examples
    ///
    /// ```
    /// use inthist_core::{Grid, Rect};
    /// use inthist_integral::{HistogramConfig, IntegralHistogram};
    ///
    /// let grid = Grid::from_rows(&[[0u8, 255, 255], [0, 0, 255]]).unwrap();
    /// let engine = IntegralHistogram::<u8, u32>::new(HistogramConfig::new(3, 2, 1, 2)).unwrap();
    /// let table = engine.integral_histogram(&[grid]).unwrap();
    ///
    /// assert_eq!(table.region_histogram(Rect::new(1, 0, 2, 2)).unwrap(), vec![1, 3]);
    /// assert!(table.region_histogram(Rect::new(2, 0, 2, 1)).is_err());
    /// ```
    pub fn region_histogram(&self, rect: Rect) -> IntegralResult<Vec<A>> {
        let mut out = vec![A::ZERO; self.channels() * self.bins()];
        self.region_histogram_into(rect, &mut out)?;
        Ok(out)
    }

    /// Like [`region_histogram`](Self::region_histogram), writing into a
    /// caller-provided buffer of `C * B` entries.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::OutOfBounds` for a region outside the grid
    /// and `IntegralError::DimensionMismatch` if `out` has the wrong length.
    pub fn region_histogram_into(&self, rect: Rect, out: &mut [A]) -> IntegralResult<()> {
        self.check_rect(rect)?;
        let expected = self.channels() * self.bins();
        if out.len() != expected {
            return Err(IntegralError::dimension_mismatch(
                "output length",
                expected,
                out.len(),
            ));
        }

        let layout = self.layout();
        for (hist, dst) in self
            .as_slice()
            .chunks_exact(layout.channel_len())
            .zip(out.chunks_exact_mut(layout.bins()))
        {
            region_hist(hist, layout, rect, dst);
        }
        Ok(())
    }

    /// Histogram of `rect` for a single channel (`B` entries).
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::OutOfBounds` for a region outside the grid
    /// and `IntegralError::DimensionMismatch` for a channel index past the
    /// channel count.
    pub fn channel_region_histogram(&self, channel: usize, rect: Rect) -> IntegralResult<Vec<A>> {
        self.check_rect(rect)?;
        let hist = self.channel(channel).ok_or_else(|| {
            IntegralError::dimension_mismatch(
                "channel index",
                format!("< {}", self.channels()),
                channel,
            )
        })?;
        let mut out = vec![A::ZERO; self.bins()];
        region_hist(hist, self.layout(), rect, &mut out);
        Ok(out)
    }

    fn check_rect(&self, rect: Rect) -> IntegralResult<()> {
        if !rect.fits_within(self.width(), self.height()) {
            return Err(IntegralError::OutOfBounds {
                rect,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}

impl<S: Sample, A: Accumulator> IntegralHistogram<S, A> {
    /// Histogram of `rect` in a table built by this engine.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::DimensionMismatch` if the table was built
    /// with a different configuration and `IntegralError::OutOfBounds` for
    /// a region outside the grid.
    pub fn region_histogram(&self, table: &IntegralTable<A>, rect: Rect) -> IntegralResult<Vec<A>> {
        self.check_table(table)?;
        table.region_histogram(rect)
    }
}

/// Write the histogram of `rect` from one channel into `out`.
///
/// `rect` must already be known to fit the channel.
#[inline]
pub(crate) fn region_hist<A: Accumulator>(hist: &[A], layout: Layout, rect: Rect, out: &mut [A]) {
    let bins = layout.bins();
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());

    let t00 = &hist[layout.cell(y0, x0)..][..bins];
    let t01 = &hist[layout.cell(y0, x1)..][..bins];
    let t10 = &hist[layout.cell(y1, x0)..][..bins];
    let t11 = &hist[layout.cell(y1, x1)..][..bins];

    // Both differences are histograms of real regions, so unsigned
    // accumulators stay non-negative throughout
    for ((((o, &a), &b), &c), &d) in out.iter_mut().zip(t11).zip(t01).zip(t10).zip(t00) {
        *o = (a - b) - (c - d);
    }
}
