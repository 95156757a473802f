//! Numeric traits for samples and histogram accumulators
//!
//! - [`Sample`] - a raw grid value that can be quantized into a bin
//! - [`Accumulator`] - a per-bin count or weighted sum stored in tables
//!
//! Conversions between the two are never implicit. Weighted accumulation
//! requires `A: From<M>` for the magnitude type, which the standard
//! library only provides for lossless widenings.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, AddAssign, Sub};

/// Storage representation of a sample type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleDepth {
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl SampleDepth {
    /// Width of the representation in bits
    pub fn bits(self) -> u32 {
        match self {
            SampleDepth::U8 => 8,
            SampleDepth::U16 => 16,
            SampleDepth::U32 | SampleDepth::F32 => 32,
            SampleDepth::F64 => 64,
        }
    }

    /// Whether the representation is a floating-point type
    pub fn is_float(self) -> bool {
        matches!(self, SampleDepth::F32 | SampleDepth::F64)
    }
}

impl Display for SampleDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleDepth::U8 => "u8",
            SampleDepth::U16 => "u16",
            SampleDepth::U32 => "u32",
            SampleDepth::F32 => "f32",
            SampleDepth::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// A raw sample value stored in a [`Grid`](crate::Grid).
pub trait Sample: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Largest representable value, the default normalization maximum
    const MAX: Self;

    /// Storage representation
    const DEPTH: SampleDepth;

    /// Quantize into `[0, nbins)`: `floor(self * (nbins - 1) / max)`.
    ///
    /// Integer samples use truncating integer arithmetic, floats use
    /// `floor`. Values above `max` saturate into the last bin; negative
    /// or NaN values land in bin 0. A non-positive `max` or `nbins <= 1`
    /// maps everything to bin 0.
    fn scale_to_bin(self, max: Self, nbins: usize) -> usize;

    /// Whether this value is usable as a normalization maximum (> 0)
    fn is_positive(self) -> bool;

    /// Widen to `f64`
    fn to_f64(self) -> f64;

    /// Convert from `f64`, saturating at the type's range
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_sample_uint {
    ($($t:ty => $depth:ident),* $(,)?) => {$(
        impl Sample for $t {
            const MAX: Self = <$t>::MAX;
            const DEPTH: SampleDepth = SampleDepth::$depth;

            #[inline]
            fn scale_to_bin(self, max: Self, nbins: usize) -> usize {
                if nbins <= 1 || max == 0 {
                    return 0;
                }
                let top = (nbins - 1) as u64;
                let v = self.min(max) as u64;
                (v * top / max as u64) as usize
            }

            #[inline]
            fn is_positive(self) -> bool {
                self > 0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_sample_float {
    ($($t:ty => $depth:ident),* $(,)?) => {$(
        impl Sample for $t {
            const MAX: Self = <$t>::MAX;
            const DEPTH: SampleDepth = SampleDepth::$depth;

            #[inline]
            fn scale_to_bin(self, max: Self, nbins: usize) -> usize {
                if nbins <= 1 || !(max > 0.0) {
                    return 0;
                }
                let top = (nbins - 1) as f64;
                let scaled = (self as f64) * top / (max as f64);
                if !(scaled > 0.0) {
                    0
                } else if scaled >= top {
                    nbins - 1
                } else {
                    scaled.floor() as usize
                }
            }

            #[inline]
            fn is_positive(self) -> bool {
                self > 0.0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_sample_uint!(u8 => U8, u16 => U16, u32 => U32);
impl_sample_float!(f32 => F32, f64 => F64);

/// A per-bin accumulator stored in an integral histogram table.
///
/// Unsigned accumulators only ever receive unsigned, hence non-negative,
/// contributions, and the engine orders its arithmetic so that no
/// intermediate exceeds the final cell value. They therefore never
/// underflow. Float magnitudes may be negative; overflow is the caller's
/// choice of type.
pub trait Accumulator:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + 'static
{
    /// Additive identity
    const ZERO: Self;

    /// Contribution of one sample in count mode
    const ONE: Self;

    /// Widen to `f64` for distance computations
    fn to_f64(self) -> f64;
}

macro_rules! impl_accumulator {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {$(
        impl Accumulator for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_accumulator! {
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    usize => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}
