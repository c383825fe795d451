#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in screen pixels. Exact until snapped with [`Point::to_pixels`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by an offset on both axes.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Snap to whole pixels, flooring each axis.
    #[must_use]
    pub fn to_pixels(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Screen or window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle `(x1, y1)..(x2, y2)`.
///
/// Containment is half-open: the left/top edges belong to the rectangle,
/// the right/bottom edges do not, so adjacent rectangles never share a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle from an origin and a size.
    #[must_use]
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    /// Translate along x only.
    #[must_use]
    pub fn shift_x(self, dx: f64) -> Self {
        Self { x1: self.x1 + dx, x2: self.x2 + dx, ..self }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x < self.x2 && p.y >= self.y1 && p.y < self.y2
    }
}

/// `actual / base` for one axis.
#[must_use]
pub fn scale_factor(actual: u32, base: u32) -> f64 {
    f64::from(actual) / f64::from(base)
}

/// Per-axis scale from a base frame to an actual resolution.
///
/// The axes are scaled independently: anchors are screen-relative, not
/// aspect-locked, so a 16:10 screen stretches x and y by different amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub sx: f64,
    pub sy: f64,
}

impl Scale {
    #[must_use]
    pub fn between(base: Resolution, actual: Resolution) -> Self {
        Self { sx: scale_factor(actual.width, base.width), sy: scale_factor(actual.height, base.height) }
    }

    /// Scale for arbitrary (possibly fractional) actual dimensions, such as
    /// a window rectangle reported by the game client.
    #[must_use]
    pub fn to_size(base: Resolution, width: f64, height: f64) -> Self {
        Self { sx: width / f64::from(base.width), sy: height / f64::from(base.height) }
    }

    #[must_use]
    pub fn project(&self, p: Point) -> Point {
        Point { x: p.x * self.sx, y: p.y * self.sy }
    }

    #[must_use]
    pub fn project_rect(&self, r: Rect) -> Rect {
        Rect { x1: r.x1 * self.sx, y1: r.y1 * self.sy, x2: r.x2 * self.sx, y2: r.y2 * self.sy }
    }
}
