use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.left == 0.0 && self.bottom == 0.0 && self.right == 0.0
    }
}

/// Global coordinates, top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Size comparison only; position is ignored.
    pub fn fits_within(&self, other: &Rect) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    // contained, centers within one unit
    pub fn centered_within(&self, other: &Rect) -> bool {
        let centered_x = (other.mid_x() - self.mid_x()).abs() <= 1.0;
        let centered_y = (other.mid_y() - self.mid_y()).abs() <= 1.0;
        other.contains_rect(self) && centered_x && centered_y
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.min_x().max(other.min_x());
        let top = self.min_y().max(other.min_y());
        let right = self.max_x().min(other.max_x());
        let bottom = self.max_y().min(other.max_y());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.min_x().min(other.min_x());
        let top = self.min_y().min(other.min_y());
        let right = self.max_x().max(other.max_x());
        let bottom = self.max_y().max(other.max_y());

        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn with_origin(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    pub fn inset(&self, insets: &EdgeInsets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.left - insets.right,
            self.height - insets.top - insets.bottom,
        )
        .sanitized()
    }

    pub fn sanitized(&self) -> Rect {
        let finite_or_zero = |v: f64| if v.is_nan() { 0.0 } else { v };
        Rect::new(
            finite_or_zero(self.x),
            finite_or_zero(self.y),
            self.width.max(0.0),
            self.height.max(0.0),
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.1},{:.1} {:.1}x{:.1})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 40.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 60.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
        assert_eq!(r.area(), 1200.0);
    }

    #[test]
    fn test_fits_within_ignores_position() {
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rect::new(500.0, 500.0, 100.0, 100.0).fits_within(&frame));
        assert!(Rect::new(0.0, 0.0, 50.0, 99.0).fits_within(&frame));
        assert!(!Rect::new(0.0, 0.0, 101.0, 10.0).fits_within(&frame));
        assert!(!Rect::new(0.0, 0.0, 10.0, 100.5).fits_within(&frame));
    }

    #[test]
    fn test_centered_within_tolerance() {
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rect::new(25.0, 25.0, 50.0, 50.0).centered_within(&frame));
        // One unit off is still centered.
        assert!(Rect::new(26.0, 24.0, 50.0, 50.0).centered_within(&frame));
        assert!(!Rect::new(27.0, 25.0, 50.0, 50.0).centered_within(&frame));
        // Centered but not contained.
        assert!(!Rect::new(-10.0, -10.0, 120.0, 120.0).centered_within(&frame));
    }

    #[test]
    fn test_is_landscape() {
        assert!(Rect::new(0.0, 0.0, 1920.0, 1080.0).is_landscape());
        assert!(!Rect::new(0.0, 0.0, 1080.0, 1920.0).is_landscape());
        assert!(!Rect::new(0.0, 0.0, 500.0, 500.0).is_landscape());
    }

    #[test]
    fn test_intersection_and_union() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(10.0, 10.0, 10.0, 10.0)));
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 30.0, 30.0));

        // Touching edges have no area in common.
        let c = Rect::new(20.0, 0.0, 20.0, 20.0);
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn test_inset_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(
            r.inset(&EdgeInsets::uniform(10.0)),
            Rect::new(10.0, 10.0, 80.0, 20.0)
        );
        assert_eq!(r.inset(&EdgeInsets::uniform(30.0)).height, 0.0);
    }

    #[test]
    fn test_sanitized() {
        let r = Rect::new(f64::NAN, 5.0, -3.0, f64::NAN).sanitized();
        assert_eq!(r, Rect::new(0.0, 5.0, 0.0, 0.0));
    }
}
