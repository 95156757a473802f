//! Deterministic synthetic inputs

use inthist_core::{Grid, Rect, Result, Sample};

/// Linear congruential generator for reproducible test data
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        // Top 53 bits; the low bits of an LCG are weak
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[0, n)`; `n` must be non-zero
    pub fn below(&mut self, n: usize) -> usize {
        ((self.next_u64() >> 32) % n as u64) as usize
    }

    /// Random rectangle inside a `width` x `height` grid, possibly empty
    pub fn rect_within(&mut self, width: usize, height: usize) -> Rect {
        let x = self.below(width + 1);
        let y = self.below(height + 1);
        let w = self.below(width - x + 1);
        let h = self.below(height - y + 1);
        Rect::new(x, y, w, h)
    }
}

/// Diagonal ramp from 0 at the top-left corner to `max` at the bottom-right.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` if width or height is 0.
pub fn gradient_grid<T: Sample>(width: usize, height: usize, max: T) -> Result<Grid<T>> {
    let span = (width + height).saturating_sub(2).max(1) as f64;
    let max = max.to_f64();
    Grid::from_fn(width, height, |x, y| {
        T::from_f64(((x + y) as f64 * max / span).floor())
    })
}

/// Checkerboard of `cell` x `cell` squares alternating `low` and `high`,
/// starting with `low` at the origin.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` if width or height is 0.
pub fn checker_grid<T: Sample>(
    width: usize,
    height: usize,
    cell: usize,
    low: T,
    high: T,
) -> Result<Grid<T>> {
    let cell = cell.max(1);
    Grid::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            low
        } else {
            high
        }
    })
}

/// Pseudo-random samples in `[0, max]`, reproducible from `seed`.
///
/// Integer samples are uniform over `0..=max`; float samples over
/// `[0, max)`.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` if width or height is 0.
pub fn lcg_grid<T: Sample>(width: usize, height: usize, seed: u64, max: T) -> Result<Grid<T>> {
    let mut rng = Lcg::new(seed);
    let max = max.to_f64();
    Grid::from_fn(width, height, |_, _| {
        let r = rng.next_f64();
        if T::DEPTH.is_float() {
            T::from_f64(r * max)
        } else {
            T::from_f64((r * (max + 1.0)).floor().min(max))
        }
    })
}
