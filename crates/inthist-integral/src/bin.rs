//! Sample-to-bin mapping
//!
//! [`BinMapper`] quantizes one sample into `[0, bins)`. It is used for the
//! plain and value-magnitude tables. [`JointBinMapper`] combines a value
//! axis and a magnitude axis into one linear bin index:
//!
//! ```text
//! bin = value_bin + magnitude_bin * value_bins
//! ```

use inthist_core::Sample;

/// Maps a sample to `floor(sample * (bins - 1) / max)`.
///
/// # Examples
///
/// ```
/// use inthist_integral::BinMapper;
///
/// let mapper = BinMapper::new(2, 255u8);
/// assert_eq!(mapper.map(0), 0);
/// assert_eq!(mapper.map(255), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinMapper<S> {
    bins: usize,
    max: S,
}

impl<S: Sample> BinMapper<S> {
    /// Create a mapper over `bins` bins normalized to `max`
    pub fn new(bins: usize, max: S) -> Self {
        BinMapper { bins, max }
    }

    /// Number of bins
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Normalization maximum
    #[inline]
    pub fn max(&self) -> S {
        self.max
    }

    /// Bin index of `sample`, always in `[0, bins)`
    #[inline]
    pub fn map(&self, sample: S) -> usize {
        sample.scale_to_bin(self.max, self.bins)
    }
}

/// Joint value x magnitude binning.
///
/// The value axis has `bins / magnitude_bins` bins, the magnitude axis
/// `magnitude_bins`; each magnitude bin owns a contiguous run of value bins.
///
/// # Examples
///
/// ```
/// use inthist_integral::JointBinMapper;
///
/// // 4 bins = 2 value bins x 2 magnitude bins
/// let mapper = JointBinMapper::new(4, 2, 255u8, 255u8);
/// assert_eq!(mapper.value_bins(), 2);
/// assert_eq!(mapper.map(255, 255), 1 + 1 * 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointBinMapper<S, M> {
    value: BinMapper<S>,
    magnitude: BinMapper<M>,
}

impl<S: Sample, M: Sample> JointBinMapper<S, M> {
    /// Create a joint mapper.
    ///
    /// `bins` is the total bin count and should be divisible by
    /// `magnitude_bins`; the configuration validates this before a mapper
    /// is ever built.
    pub fn new(bins: usize, magnitude_bins: usize, max_value: S, max_magnitude: M) -> Self {
        let value_bins = if magnitude_bins == 0 {
            bins
        } else {
            bins / magnitude_bins
        };
        JointBinMapper {
            value: BinMapper::new(value_bins, max_value),
            magnitude: BinMapper::new(magnitude_bins, max_magnitude),
        }
    }

    /// Value bins per magnitude bin (`nval`)
    #[inline]
    pub fn value_bins(&self) -> usize {
        self.value.bins()
    }

    /// Number of magnitude bins
    #[inline]
    pub fn magnitude_bins(&self) -> usize {
        self.magnitude.bins()
    }

    /// Total number of joint bins
    #[inline]
    pub fn bins(&self) -> usize {
        self.value.bins() * self.magnitude.bins()
    }

    /// Joint bin index of a (value, magnitude) pair
    #[inline]
    pub fn map(&self, value: S, magnitude: M) -> usize {
        self.value.map(value) + self.magnitude.map(magnitude) * self.value.bins()
    }
}
