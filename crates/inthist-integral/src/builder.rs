//! Integral histogram construction
//!
//! [`IntegralHistogram`] owns a validated configuration and builds tables
//! from per-channel sample grids. Three variants differ only in how a
//! sample picks its bin and what it contributes:
//!
//! | Variant | bin | contribution |
//! |---|---|---|
//! | [`integral_histogram`](IntegralHistogram::integral_histogram) | value | 1 |
//! | [`integral_histogram_vm`](IntegralHistogram::integral_histogram_vm) | value | magnitude |
//! | [`integral_histogram_joint`](IntegralHistogram::integral_histogram_joint) | value x magnitude | 1 |
//!
//! Channels are independent and are scanned in parallel for large inputs.

use std::marker::PhantomData;

use crate::bin::{BinMapper, JointBinMapper};
use crate::config::HistogramConfig;
use crate::parallel::for_each_chunk;
use crate::scan::scan_channel;
use crate::table::IntegralTable;
use crate::{IntegralError, IntegralResult};
use inthist_core::{Accumulator, Grid, Sample};
use log::{debug, trace};

/// Integral histogram engine for samples `S` accumulated into `A`.
///
/// # Examples
///
/// ```
/// use inthist_core::{Grid, Rect};
/// use inthist_integral::{HistogramConfig, IntegralHistogram};
///
/// let grid = Grid::from_rows(&[[0u8, 255], [255, 0]]).unwrap();
/// let engine = IntegralHistogram::<u8, u32>::new(HistogramConfig::new(2, 2, 1, 2)).unwrap();
///
/// let table = engine.integral_histogram(&[grid]).unwrap();
/// assert_eq!(table.region_histogram(Rect::full(2, 2)).unwrap(), vec![2, 2]);
/// assert_eq!(table.region_histogram(Rect::new(1, 0, 1, 1)).unwrap(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct IntegralHistogram<S, A> {
    config: HistogramConfig<S>,
    _accumulator: PhantomData<fn() -> A>,
}

impl<S: Sample, A: Accumulator> IntegralHistogram<S, A> {
    /// Create an engine.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::InvalidConfiguration` if the configuration
    /// does not validate.
    pub fn new(config: HistogramConfig<S>) -> IntegralResult<Self> {
        config.validate()?;
        Ok(IntegralHistogram {
            config,
            _accumulator: PhantomData,
        })
    }

    /// The engine configuration
    pub fn config(&self) -> &HistogramConfig<S> {
        &self.config
    }

    /// Build a count table: every sample adds one to its value bin.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::DimensionMismatch` if the number of grids
    /// differs from the configured channel count or a grid has the wrong
    /// size.
    pub fn integral_histogram(&self, channels: &[Grid<S>]) -> IntegralResult<IntegralTable<A>> {
        self.check_grids("value channel count", channels)?;

        let mapper = BinMapper::new(self.config.bins, self.config.max_value);
        debug!(
            "integral histogram: {}x{}, {} channel(s), {} bins, {:?} scan",
            self.config.width,
            self.config.height,
            self.config.channels,
            self.config.bins,
            self.config.scan_order
        );

        Ok(self.build(|c, x, y| (mapper.map(channels[c].get_unchecked(x, y)), A::ONE)))
    }

    /// Build a magnitude-weighted table: every sample adds the magnitude
    /// at the same position to its value bin.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::TypeMismatch` if value and magnitude samples
    /// have different depths, and `IntegralError::DimensionMismatch` if
    /// either grid list does not match the configuration.
    pub fn integral_histogram_vm<M>(
        &self,
        values: &[Grid<S>],
        magnitudes: &[Grid<M>],
    ) -> IntegralResult<IntegralTable<A>>
    where
        M: Sample,
        A: From<M>,
    {
        check_depths::<S, M>()?;
        self.check_grids("value channel count", values)?;
        self.check_grids("magnitude channel count", magnitudes)?;

        let mapper = BinMapper::new(self.config.bins, self.config.max_value);
        debug!(
            "value-magnitude histogram: {}x{}, {} channel(s), {} bins",
            self.config.width, self.config.height, self.config.channels, self.config.bins
        );

        Ok(self.build(|c, x, y| {
            (
                mapper.map(values[c].get_unchecked(x, y)),
                A::from(magnitudes[c].get_unchecked(x, y)),
            )
        }))
    }

    /// Build a joint table: every sample adds one to the bin of its
    /// (value, magnitude) pair.
    ///
    /// # Errors
    ///
    /// Returns `IntegralError::InvalidConfiguration` if the engine was
    /// configured without magnitude bins, `IntegralError::TypeMismatch` if
    /// value and magnitude samples have different depths, and
    /// `IntegralError::DimensionMismatch` if either grid list does not
    /// match the configuration.
    pub fn integral_histogram_joint<M: Sample>(
        &self,
        values: &[Grid<S>],
        magnitudes: &[Grid<M>],
    ) -> IntegralResult<IntegralTable<A>> {
        let magnitude_bins = self.config.magnitude_bins.ok_or_else(|| {
            IntegralError::InvalidConfiguration(
                "joint histogram requires magnitude bins in the configuration".into(),
            )
        })?;
        check_depths::<S, M>()?;
        self.check_grids("value channel count", values)?;
        self.check_grids("magnitude channel count", magnitudes)?;

        // Same depth, so the round trip through f64 is exact
        let max_magnitude = M::from_f64(self.config.max_magnitude.to_f64());
        let mapper = JointBinMapper::new(
            self.config.bins,
            magnitude_bins,
            self.config.max_value,
            max_magnitude,
        );
        debug!(
            "joint histogram: {}x{}, {} channel(s), {} value x {} magnitude bins",
            self.config.width,
            self.config.height,
            self.config.channels,
            mapper.value_bins(),
            mapper.magnitude_bins()
        );

        Ok(self.build(|c, x, y| {
            (
                mapper.map(values[c].get_unchecked(x, y), magnitudes[c].get_unchecked(x, y)),
                A::ONE,
            )
        }))
    }

    /// Allocate a zeroed table and scan every channel into its own slice.
    fn build<F>(&self, pixel: F) -> IntegralTable<A>
    where
        F: Fn(usize, usize, usize) -> (usize, A) + Sync,
    {
        let HistogramConfig {
            width,
            height,
            channels,
            bins,
            scan_order,
            ..
        } = self.config;

        let mut table = IntegralTable::zeroed(width, height, channels, bins);
        let layout = table.layout();
        for_each_chunk(
            table.data_mut(),
            layout.channel_len(),
            width * height * bins,
            |channel, hist| {
                trace!("scanning channel {}", channel);
                scan_channel(hist, layout, width, height, scan_order, |x, y| {
                    pixel(channel, x, y)
                });
            },
        );
        table
    }

    /// Check a per-channel grid list against the configuration
    fn check_grids<T: Copy>(&self, what: &'static str, grids: &[Grid<T>]) -> IntegralResult<()> {
        if grids.len() != self.config.channels {
            return Err(IntegralError::dimension_mismatch(
                what,
                self.config.channels,
                grids.len(),
            ));
        }
        let expected = (self.config.width, self.config.height);
        for grid in grids {
            if grid.dimensions() != expected {
                return Err(IntegralError::dimension_mismatch(
                    "grid size",
                    format!("{}x{}", expected.0, expected.1),
                    format!("{}x{}", grid.width(), grid.height()),
                ));
            }
        }
        Ok(())
    }

    /// Check that a table was built with this engine's configuration
    pub(crate) fn check_table(&self, table: &IntegralTable<A>) -> IntegralResult<()> {
        let cfg = &self.config;
        let expected = (cfg.width, cfg.height, cfg.channels, cfg.bins);
        let actual = (table.width(), table.height(), table.channels(), table.bins());
        if expected != actual {
            return Err(IntegralError::dimension_mismatch(
                "table shape (width, height, channels, bins)",
                format!("{:?}", expected),
                format!("{:?}", actual),
            ));
        }
        Ok(())
    }
}

fn check_depths<S: Sample, M: Sample>() -> IntegralResult<()> {
    if S::DEPTH != M::DEPTH {
        return Err(IntegralError::TypeMismatch {
            value: S::DEPTH,
            magnitude: M::DEPTH,
        });
    }
    Ok(())
}
