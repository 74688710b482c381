use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        self.offset(other.x, other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        self.offset(-other.x, -other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A positioned box: the container, a pile slot, a card face.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(self.origin, self.size)
    }

    /// Hit test, inclusive of the top-left edge and exclusive of the bottom-right one.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }
}

/// Axis-aligned box from the top-left corner `a` to the bottom-right corner `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub a: Point,
    pub b: Point,
}

impl Rectangle {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            a: origin,
            b: origin.offset(size.width, size.height),
        }
    }

    /// Grows the rectangle downwards by `dy`.
    pub fn extended(self, dy: f64) -> Self {
        Self {
            a: self.a,
            b: self.b.offset(0.0, dy),
        }
    }

    pub fn width(&self) -> f64 {
        self.b.x - self.a.x
    }

    pub fn height(&self) -> f64 {
        self.b.y - self.a.y
    }

    /// Exact area of the intersection, zero when the rectangles do not overlap.
    pub fn overlapping_area(&self, other: &Rectangle) -> f64 {
        let x_overlap = self.b.x.min(other.b.x) - self.a.x.max(other.a.x);
        let y_overlap = self.b.y.min(other.b.y) - self.a.y.max(other.a.y);
        if x_overlap > 0.0 && y_overlap > 0.0 {
            x_overlap * y_overlap
        } else {
            0.0
        }
    }
}
