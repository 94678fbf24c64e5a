//! Geometry and hit testing.
//!
//! Widgets are placed by the caller in absolute screen coordinates; there is
//! no flow layout. This module only answers "where is it" and "is the
//! pointer inside it".

/// A point or size in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from a position and a size.
    #[must_use]
    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom edges exclusive.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Grows the rectangle by `amount` on every side.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Returns the same rectangle moved down by `rows` of its own height.
    #[must_use]
    pub fn stacked(&self, rows: usize) -> Self {
        Self::new(self.x, self.y + self.height * rows as f32, self.width, self.height)
    }
}

/// A triangle, used for the numeric input arrows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Vec2,
    /// Second vertex.
    pub b: Vec2,
    /// Third vertex.
    pub c: Vec2,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Returns true if the point lies strictly inside the triangle.
    ///
    /// Barycentric test; works for either winding.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        let Self { a, b, c } = *self;
        let det = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        if det == 0.0 {
            return false;
        }
        let alpha = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / det;
        let beta = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / det;
        let gamma = 1.0 - alpha - beta;
        alpha > 0.0 && beta > 0.0 && gamma > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(!rect.contains(Vec2::new(110.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 80.0)));
    }

    #[test]
    fn test_rect_stacked() {
        let header = Rect::new(0.0, 10.0, 80.0, 20.0);
        assert_eq!(header.stacked(2), Rect::new(0.0, 50.0, 80.0, 20.0));
    }

    #[test]
    fn test_triangle_contains_either_winding() {
        let cw = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), Vec2::new(0.0, 10.0));
        let ccw = Triangle::new(cw.a, cw.c, cw.b);

        for tri in [cw, ccw] {
            assert!(tri.contains(Vec2::new(2.0, 5.0)));
            assert!(!tri.contains(Vec2::new(9.0, 1.0)));
            assert!(!tri.contains(Vec2::new(-1.0, 5.0)));
        }
    }

    #[test]
    fn test_degenerate_triangle_contains_nothing() {
        let flat = Triangle::new(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(!flat.contains(Vec2::new(5.0, 0.0)));
    }
}
