//! 2D geometry primitives in scene coordinates.
//!
//! Scene coordinates follow the screen convention: x grows to the right and
//! y grows downward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or free vector) in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A directed line segment from `p1` to `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Horizontal extent, `p2.x - p1.x`.
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    /// Vertical extent, `p2.y - p1.y`. Positive when the segment points down.
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(&self.p2)
    }

    /// Shortest distance from `p` to any point of the segment.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        let d = self.p2 - self.p1;
        let l2 = d.dot(&d);
        if l2 == 0.0 {
            return p.distance_to(&self.p1);
        }
        let t = ((p - self.p1).dot(&d) / l2).clamp(0.0, 1.0);
        p.distance_to(&(self.p1 + d * t))
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.p1.x.min(self.p2.x),
            self.p1.y.min(self.p2.y),
            self.p1.x.max(self.p2.x),
            self.p1.y.max(self.p2.y),
        )
    }
}

/// Tests whether `p` lies inside (or on the boundary of) triangle `abc`,
/// regardless of winding.
pub fn triangle_contains(tri: &[Point; 3], p: Point) -> bool {
    let cross = |a: Point, b: Point, c: Point| (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    let d1 = cross(tri[0], tri[1], p);
    let d2 = cross(tri[1], tri[2], p);
    let d3 = cross(tri[2], tri[0], p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
