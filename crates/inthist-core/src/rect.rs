//! Rect - axis-aligned region descriptor
//!
//! Regions are half-open: a `Rect { x, y, w, h }` covers columns
//! `x..x + w` and rows `y..y + h`. A rectangle with zero width or height
//! is valid and empty.

/// A rectangular region of a grid.
///
/// A small `Copy` type; coordinates are unsigned so a region can never
/// start left of or above the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: usize,
    /// Top y coordinate
    pub y: usize,
    /// Width
    pub w: usize,
    /// Height
    pub h: usize,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle covering a whole `width` x `height` grid
    pub const fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> usize {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> usize {
        self.y + self.h
    }

    /// Area in samples
    #[inline]
    pub fn area(&self) -> usize {
        self.w * self.h
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle contains another one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if the rectangle lies within a `width` x `height` grid.
    ///
    /// Uses checked arithmetic so that huge coordinates cannot wrap around
    /// into range.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        match (self.x.checked_add(self.w), self.y.checked_add(self.h)) {
            (Some(_), Some(_)) => Rect::full(width, height).contains_rect(self),
            _ => false,
        }
    }

    /// Split into a left and right part, the left part being `dx` wide.
    ///
    /// Returns `None` if `dx` exceeds the width.
    pub fn split_x(&self, dx: usize) -> Option<(Rect, Rect)> {
        if dx > self.w {
            return None;
        }
        Some((
            Rect::new(self.x, self.y, dx, self.h),
            Rect::new(self.x + dx, self.y, self.w - dx, self.h),
        ))
    }

    /// Split into a top and bottom part, the top part being `dy` tall.
    ///
    /// Returns `None` if `dy` exceeds the height.
    pub fn split_y(&self, dy: usize) -> Option<(Rect, Rect)> {
        if dy > self.h {
            return None;
        }
        Some((
            Rect::new(self.x, self.y, self.w, dy),
            Rect::new(self.x, self.y + dy, self.w, self.h - dy),
        ))
    }
}
