//! Engine configuration
//!
//! A [`HistogramConfig`] fixes everything a table depends on: grid size,
//! channel count, bin layout and normalization. It is validated once, when
//! the engine is constructed, and never changes afterwards.

use crate::{IntegralError, IntegralResult};
use inthist_core::Sample;

/// Order in which the builder visits the grid.
///
/// With integer accumulators both orders produce bit-identical tables.
/// Float accumulators sum in a different order and agree only up to
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// `T[y+1][x+1] = T[y][x+1] + T[y+1][x] - T[y][x]`, then add the sample
    #[default]
    Wavefront,
    /// Keep a running histogram of the current row and set
    /// `T[y+1][x+1] = T[y][x+1] + row`
    RowRunningSum,
}

/// Configuration of an [`IntegralHistogram`](crate::IntegralHistogram).
///
/// # Examples
///
/// ```
/// use inthist_integral::{HistogramConfig, ScanOrder};
///
/// let config = HistogramConfig::<u8>::new(640, 480, 3, 20)
///     .with_max_value(200)
///     .with_scan_order(ScanOrder::RowRunningSum);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_value, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramConfig<S> {
    /// Grid width W
    pub width: usize,
    /// Grid height H
    pub height: usize,
    /// Number of channels C
    pub channels: usize,
    /// Number of bins B per channel
    pub bins: usize,
    /// Normalization maximum for value samples
    pub max_value: S,
    /// Magnitude-bin count M for joint binning; `bins` must be divisible by it
    pub magnitude_bins: Option<usize>,
    /// Normalization maximum for magnitude samples in joint binning
    pub max_magnitude: S,
    /// Builder scan order
    pub scan_order: ScanOrder,
}

impl<S: Sample> HistogramConfig<S> {
    /// Create a configuration normalized to the full range of `S`
    pub fn new(width: usize, height: usize, channels: usize, bins: usize) -> Self {
        HistogramConfig {
            width,
            height,
            channels,
            bins,
            max_value: S::MAX,
            magnitude_bins: None,
            max_magnitude: S::MAX,
            scan_order: ScanOrder::default(),
        }
    }

    /// Set the normalization maximum for value samples
    pub fn with_max_value(mut self, max_value: S) -> Self {
        self.max_value = max_value;
        self
    }

    /// Enable joint binning with `magnitude_bins` magnitude bins
    pub fn with_magnitude_bins(mut self, magnitude_bins: usize) -> Self {
        self.magnitude_bins = Some(magnitude_bins);
        self
    }

    /// Set the normalization maximum for magnitude samples
    pub fn with_max_magnitude(mut self, max_magnitude: S) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    /// Set the builder scan order
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Number of value bins per magnitude bin (`nval = B / M`).
    ///
    /// Equals `bins` when joint binning is not configured.
    pub fn value_bins(&self) -> usize {
        match self.magnitude_bins {
            Some(m) if m > 0 => self.bins / m,
            _ => self.bins,
        }
    }

    /// Number of accumulators in one channel of a table
    pub fn channel_len(&self) -> usize {
        (self.height + 1) * (self.width + 1) * self.bins
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::InvalidConfiguration` for zero dimensions,
    /// zero channels or bins, a non-positive normalization maximum, or a
    /// bin count not divisible by the magnitude-bin count.
    pub fn validate(&self) -> IntegralResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(IntegralError::InvalidConfiguration(format!(
                "grid dimensions must be non-zero: {}x{}",
                self.width, self.height
            )));
        }
        if self.channels == 0 {
            return Err(IntegralError::InvalidConfiguration(
                "channel count must be non-zero".into(),
            ));
        }
        if self.bins == 0 {
            return Err(IntegralError::InvalidConfiguration(
                "bin count must be non-zero".into(),
            ));
        }
        if !self.max_value.is_positive() {
            return Err(IntegralError::InvalidConfiguration(format!(
                "max value must be positive, got {:?}",
                self.max_value
            )));
        }
        if let Some(m) = self.magnitude_bins {
            if m == 0 {
                return Err(IntegralError::InvalidConfiguration(
                    "magnitude bin count must be non-zero".into(),
                ));
            }
            if self.bins % m != 0 {
                return Err(IntegralError::InvalidConfiguration(format!(
                    "bin count {} is not divisible by magnitude bin count {}",
                    self.bins, m
                )));
            }
            if !self.max_magnitude.is_positive() {
                return Err(IntegralError::InvalidConfiguration(format!(
                    "max magnitude must be positive, got {:?}",
                    self.max_magnitude
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HistogramConfig::<u16>::new(8, 6, 1, 16);
        assert_eq!(config.max_value, u16::MAX);
        assert_eq!(config.max_magnitude, u16::MAX);
        assert_eq!(config.magnitude_bins, None);
        assert_eq!(config.scan_order, ScanOrder::Wavefront);
        assert_eq!(config.value_bins(), 16);
        assert_eq!(config.channel_len(), 7 * 9 * 16);
    }

    #[test]
    fn test_config_joint_value_bins() {
        let config = HistogramConfig::<u8>::new(4, 4, 1, 12).with_magnitude_bins(3);
        assert_eq!(config.value_bins(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_sizes() {
        assert!(HistogramConfig::<u8>::new(0, 4, 1, 4).validate().is_err());
        assert!(HistogramConfig::<u8>::new(4, 0, 1, 4).validate().is_err());
        assert!(HistogramConfig::<u8>::new(4, 4, 0, 4).validate().is_err());
        assert!(HistogramConfig::<u8>::new(4, 4, 1, 0).validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_max() {
        let config = HistogramConfig::<u8>::new(4, 4, 1, 4).with_max_value(0);
        assert!(matches!(
            config.validate(),
            Err(IntegralError::InvalidConfiguration(_))
        ));
        let config = HistogramConfig::<f32>::new(4, 4, 1, 4).with_max_value(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_indivisible_joint_bins() {
        let config = HistogramConfig::<u8>::new(4, 4, 1, 10).with_magnitude_bins(3);
        assert!(matches!(
            config.validate(),
            Err(IntegralError::InvalidConfiguration(_))
        ));
        let config = HistogramConfig::<u8>::new(4, 4, 1, 10).with_magnitude_bins(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_max_magnitude() {
        let config = HistogramConfig::<u8>::new(4, 4, 1, 4)
            .with_magnitude_bins(2)
            .with_max_magnitude(0);
        assert!(config.validate().is_err());
    }
}
