//! Dense sliding-window comparison
//!
//! For every window position the region histograms of both tables are
//! extracted with two O(B) queries and handed to a caller-supplied
//! distance function, so the total cost does not depend on the window
//! size. Output rows are independent and are evaluated in parallel for
//! large inputs.

use crate::builder::IntegralHistogram;
use crate::parallel::for_each_chunk_init;
use crate::query::region_hist;
use crate::table::IntegralTable;
use crate::{IntegralError, IntegralResult};
use inthist_core::{Accumulator, Grid, Rect, Sample};
use log::debug;

/// Per-position dissimilarity scores, one per channel.
///
/// Channels are interleaved per position, like the samples of a
/// multi-channel image: the score of channel `c` at `(x, y)` lives at
/// `(y * width + x) * channels + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct DissimilarityMap<O> {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<O>,
}

impl<O: Copy> DissimilarityMap<O> {
    /// Number of window positions along x (`W - winW + 1`)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of window positions along y (`H - winH + 1`)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Score of `channel` for the window whose top-left corner is `(x, y)`
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<O> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        Some(self.data[(y * self.width + x) * self.channels + channel])
    }

    /// All channel scores at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[O]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * self.channels;
        Some(&self.data[start..start + self.channels])
    }

    /// Extract one channel as a grid.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::DimensionMismatch` if `channel` is not
    /// below the channel count.
    pub fn channel(&self, channel: usize) -> IntegralResult<Grid<O>> {
        if channel >= self.channels {
            return Err(IntegralError::dimension_mismatch(
                "channel index",
                format!("< {}", self.channels),
                channel,
            ));
        }
        let data = self
            .data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect();
        Ok(Grid::from_vec(self.width, self.height, data)?)
    }

    /// The interleaved score buffer
    #[inline]
    pub fn as_slice(&self) -> &[O] {
        &self.data
    }

    /// Consume the map and return its interleaved buffer
    pub fn into_vec(self) -> Vec<O> {
        self.data
    }
}

/// Compare two tables under a sliding `win_width` x `win_height` window.
///
/// `distance` receives the two `B`-bin histograms of one channel at one
/// window position and returns a score; it must not depend on anything
/// but its arguments.
///
/// # Errors
///
/// Returns `IntegralError::DimensionMismatch` if the tables differ in
/// shape, `IntegralError::InvalidConfiguration` for a window with a zero
/// side, and `IntegralError::OutOfBounds` for a window larger than the
/// grid.
///
/// # Examples
///
/// ```
/// use inthist_core::Grid;
/// use inthist_integral::{compare_tables, distance, HistogramConfig, IntegralHistogram};
///
/// let engine = IntegralHistogram::<u8, u32>::new(HistogramConfig::new(3, 3, 1, 4)).unwrap();
/// let a = engine.integral_histogram(&[Grid::from_fn(3, 3, |x, y| (85 + x * 50 + y * 20) as u8).unwrap()]).unwrap();
/// let b = engine.integral_histogram(&[Grid::new_with_value(3, 3, 0u8).unwrap()]).unwrap();
///
/// let same = compare_tables(&a, &a, 2, 2, distance::chi_squared).unwrap();
/// assert_eq!(same.dimensions(), (2, 2));
/// assert!(same.as_slice().iter().all(|&d| d == 0.0));
///
/// let diff = compare_tables(&a, &b, 2, 2, distance::l1_distance).unwrap();
/// assert!(diff.as_slice().iter().all(|&d| d > 0.0));
/// ```
pub fn compare_tables<A, O, D>(
    first: &IntegralTable<A>,
    second: &IntegralTable<A>,
    win_width: usize,
    win_height: usize,
    distance: D,
) -> IntegralResult<DissimilarityMap<O>>
where
    A: Accumulator,
    O: Copy + Default + Send,
    D: Fn(&[A], &[A]) -> O + Sync,
{
    if !first.same_shape(second) {
        return Err(IntegralError::dimension_mismatch(
            "table shape (width, height, channels, bins)",
            format!(
                "{:?}",
                (first.width(), first.height(), first.channels(), first.bins())
            ),
            format!(
                "{:?}",
                (second.width(), second.height(), second.channels(), second.bins())
            ),
        ));
    }
    if win_width == 0 || win_height == 0 {
        return Err(IntegralError::InvalidConfiguration(format!(
            "comparison window must be non-empty: {}x{}",
            win_width, win_height
        )));
    }
    let window = Rect::new(0, 0, win_width, win_height);
    if !window.fits_within(first.width(), first.height()) {
        return Err(IntegralError::OutOfBounds {
            rect: window,
            width: first.width(),
            height: first.height(),
        });
    }

    let out_width = first.width() - win_width + 1;
    let out_height = first.height() - win_height + 1;
    let channels = first.channels();
    let bins = first.bins();
    let layout = first.layout();
    debug!(
        "compare: {}x{} window over {}x{}, {} channel(s), {} bins -> {}x{} map",
        win_width,
        win_height,
        first.width(),
        first.height(),
        channels,
        bins,
        out_width,
        out_height
    );

    let mut data = vec![O::default(); out_width * out_height * channels];
    let (hist1, hist2) = (first.as_slice(), second.as_slice());
    let channel_len = layout.channel_len();

    for_each_chunk_init(
        &mut data,
        out_width * channels,
        out_width * channels * bins,
        || (vec![A::ZERO; bins], vec![A::ZERO; bins]),
        |scratch: &mut (Vec<A>, Vec<A>), y: usize, row: &mut [O]| {
            let (h1, h2) = (&mut scratch.0[..], &mut scratch.1[..]);
            for (x, scores) in row.chunks_exact_mut(channels).enumerate() {
                let rect = Rect::new(x, y, win_width, win_height);
                for (c, score) in scores.iter_mut().enumerate() {
                    let start = c * channel_len;
                    region_hist(&hist1[start..start + channel_len], layout, rect, h1);
                    region_hist(&hist2[start..start + channel_len], layout, rect, h2);
                    *score = distance(&*h1, &*h2);
                }
            }
        },
    );

    Ok(DissimilarityMap {
        width: out_width,
        height: out_height,
        channels,
        data,
    })
}

impl<S: Sample, A: Accumulator> IntegralHistogram<S, A> {
    /// Compare two tables built by this engine.
    ///
    /// Same as [`compare_tables`], additionally checking that both tables
    /// match this engine's configuration.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::DimensionMismatch` if either table was built
    /// with a different configuration, plus every error of
    /// [`compare_tables`].
    pub fn compare<O, D>(
        &self,
        first: &IntegralTable<A>,
        second: &IntegralTable<A>,
        win_width: usize,
        win_height: usize,
        distance: D,
    ) -> IntegralResult<DissimilarityMap<O>>
    where
        O: Copy + Default + Send,
        D: Fn(&[A], &[A]) -> O + Sync,
    {
        self.check_table(first)?;
        self.check_table(second)?;
        compare_tables(first, second, win_width, win_height, distance)
    }
}
