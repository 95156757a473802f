//! Integral histogram table
//!
//! One contiguous buffer holds every channel, channel-major. Each channel
//! is an `(H + 1) x (W + 1) x B` array indexed `(row, col, bin)`; row 0 and
//! column 0 are the zero sentinels. Cell `(y, x)` holds the histogram of
//! the half-open region `[0, x) x [0, y)`.
//!
//! All index arithmetic goes through [`Layout`], shared by the table
//! accessors, the builder scans and the region query.

use inthist_core::Accumulator;

/// Offsets of cells inside one channel of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    bins: usize,
    row_len: usize,
    channel_len: usize,
}

impl Layout {
    pub(crate) fn new(width: usize, height: usize, bins: usize) -> Self {
        let row_len = (width + 1) * bins;
        Layout {
            bins,
            row_len,
            channel_len: (height + 1) * row_len,
        }
    }

    #[inline]
    pub(crate) fn bins(&self) -> usize {
        self.bins
    }

    /// Accumulators per table row (`(W + 1) * B`)
    #[inline]
    pub(crate) fn row_len(&self) -> usize {
        self.row_len
    }

    /// Accumulators per channel (`(H + 1) * (W + 1) * B`)
    #[inline]
    pub(crate) fn channel_len(&self) -> usize {
        self.channel_len
    }

    /// Offset of the first bin of `(row, col)` within a channel
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> usize {
        row * self.row_len + col * self.bins
    }
}

/// An integral histogram table, owned by the caller.
///
/// Built by [`IntegralHistogram`](crate::IntegralHistogram); read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralTable<A> {
    width: usize,
    height: usize,
    channels: usize,
    layout: Layout,
    data: Vec<A>,
}

impl<A: Accumulator> IntegralTable<A> {
    /// Allocate a table with every cell, sentinels included, set to zero.
    pub(crate) fn zeroed(width: usize, height: usize, channels: usize, bins: usize) -> Self {
        let layout = Layout::new(width, height, bins);
        IntegralTable {
            width,
            height,
            channels,
            layout,
            data: vec![A::ZERO; layout.channel_len() * channels],
        }
    }

    /// Width of the source grid
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the source grid
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of bins per channel
    #[inline]
    pub fn bins(&self) -> usize {
        self.layout.bins()
    }

    /// Accumulators per channel
    #[inline]
    pub fn channel_len(&self) -> usize {
        self.layout.channel_len()
    }

    /// Histogram stored at table cell `(row, col)` of `channel`.
    ///
    /// `row` ranges over `0..=height` and `col` over `0..=width`.
    pub fn cell(&self, channel: usize, row: usize, col: usize) -> Option<&[A]> {
        if channel >= self.channels || row > self.height || col > self.width {
            return None;
        }
        let start = channel * self.layout.channel_len() + self.layout.cell(row, col);
        Some(&self.data[start..start + self.layout.bins()])
    }

    /// Histogram of the whole grid for `channel`
    pub fn total(&self, channel: usize) -> Option<&[A]> {
        self.cell(channel, self.height, self.width)
    }

    /// All accumulators of one channel
    pub fn channel(&self, channel: usize) -> Option<&[A]> {
        if channel >= self.channels {
            return None;
        }
        let start = channel * self.layout.channel_len();
        Some(&self.data[start..start + self.layout.channel_len()])
    }

    /// The raw channel-major buffer
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Consume the table and return its channel-major buffer
    pub fn into_vec(self) -> Vec<A> {
        self.data
    }

    /// Whether two tables have identical grid size, channel and bin counts
    pub fn same_shape<B>(&self, other: &IntegralTable<B>) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
            && self.layout == other.layout
    }

    #[inline]
    pub(crate) fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [A] {
        &mut self.data
    }
}
