//! Splitting a usable frame into equal columns, rows and grid cells.
//!
//! Interior edges are floored to whole units; the final edge is always the
//! frame's own edge, so the last slice absorbs the remainder and adjacent
//! slices tile the frame without gaps.

use shoji_ipc::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Slices are columns laid out along x.
    Horizontal,
    /// Slices are rows laid out along y.
    Vertical,
}

impl Axis {
    /// Axis along the frame's longer side. Square frames count as portrait.
    pub fn long(frame: &Rect) -> Self {
        if frame.is_landscape() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

/// A fraction kept as integers so that `of` stays exact for whole-unit lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator.max(1) as f64
    }

    pub fn complement(self) -> Self {
        Self::new(self.denominator.saturating_sub(self.numerator), self.denominator)
    }

    /// `length * self`, floored.
    pub fn of(self, length: f64) -> f64 {
        (length * self.numerator as f64 / self.denominator.max(1) as f64).floor()
    }
}

/// Offset of the `k`-th of `n` division points along `length`.
pub fn edge(length: f64, k: u32, n: u32) -> f64 {
    if k >= n {
        length
    } else {
        Fraction::new(k, n).of(length)
    }
}

/// Slices `from..to` (of `n`) of `frame` along `axis`.
pub fn slice(frame: &Rect, axis: Axis, from: u32, to: u32, n: u32) -> Rect {
    match axis {
        Axis::Horizontal => {
            let start = edge(frame.width, from, n);
            let end = edge(frame.width, to, n);
            Rect::new(frame.x + start, frame.y, end - start, frame.height)
        }
        Axis::Vertical => {
            let start = edge(frame.height, from, n);
            let end = edge(frame.height, to, n);
            Rect::new(frame.x, frame.y + start, frame.width, end - start)
        }
    }
}

/// Cell `(col, row)` of a `cols` x `rows` grid over `frame`.
pub fn cell(frame: &Rect, cols: u32, rows: u32, col: u32, row: u32) -> Rect {
    let x0 = edge(frame.width, col, cols);
    let x1 = edge(frame.width, col + 1, cols);
    let y0 = edge(frame.height, row, rows);
    let y1 = edge(frame.height, row + 1, rows);
    Rect::new(frame.x + x0, frame.y + y0, x1 - x0, y1 - y0)
}
