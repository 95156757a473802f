//! Grid - single-channel 2D sample buffer
//!
//! `Grid<T>` is the input and output plane of the engine: one grid per
//! channel of sample values, or one channel of a dissimilarity map.
//!
//! # Examples
//!
//! ```
//! use inthist_core::Grid;
//!
//! let mut grid = Grid::<u8>::new(4, 3).unwrap();
//! grid.set(1, 2, 200).unwrap();
//! assert_eq!(grid.get(1, 2), Some(200));
//! assert_eq!(grid.row(2), &[0, 200, 0, 0]);
//! ```

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Row-major 2D array of samples.
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a new grid with every sample set to `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::new_with_value(width, height, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Create a new grid with every sample set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: usize, height: usize, value: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Grid {
            width,
            height,
            data: vec![value; width * height],
        })
    }

    /// Create a grid from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are zero or the data length doesn't
    /// match `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Create a grid from a list of equally long rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the
    /// rows have different lengths.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Self::from_vec(width, height, data)
    }

    /// Create a grid by evaluating `f(x, y)` at every position
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Grid width in samples
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The rectangle covering the whole grid
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::full(self.width, self.height)
    }

    /// Get the sample at (x, y), or `None` if outside the grid
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if !self.bounds().contains_point(x, y) {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Set the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        if !self.bounds().contains_point(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y * self.width + x] = value;
        Ok(())
    }

    /// Get the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the backing buffer.
    #[inline]
    pub fn get_unchecked(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    /// A row of samples
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width)
    }

    /// Raw row-major sample data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid and return its row-major data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
