//! Geometric primitives for timeline layout and positioning.
//!
//! This module provides the geometric types used throughout Chronoline for
//! calculating positions, sizes, and bounding boxes of timeline elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Chronoline uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X (later instants)
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Time, increasing rightward
//! - **Y-axis**: Increases downward; the timeline centerline sits at half the layout height

/// A 2D point representing a position in layout coordinate space.
///
/// # Examples
///
/// ```
/// # use chronoline_core::geometry::Point;
/// let anchor = Point::new(10.0, 20.0);
/// let moved = anchor.add_point(Point::new(5.0, 5.0));
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates.
///
/// Intersection tests treat the rectangle as open on every side, so two
/// rectangles that only share an edge do not intersect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns a copy of these bounds grown downward by `amount`.
    pub fn grow_height(self, amount: f32) -> Self {
        Self {
            max_y: self.max_y + amount,
            ..self
        }
    }

    /// Returns `true` when the horizontal extents of both bounds overlap.
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        self.min_x < other.max_x && self.max_x > other.min_x
    }

    /// Returns `true` when the vertical extents of both bounds overlap.
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.min_y < other.max_y && self.max_y > other.min_y
    }

    /// Returns `true` when both rectangles overlap on both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chronoline_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(50.0, 20.0));
    /// let b = Bounds::new_from_top_left(Point::new(40.0, 10.0), Size::new(50.0, 20.0));
    /// let c = Bounds::new_from_top_left(Point::new(50.0, 0.0), Size::new(50.0, 20.0));
    ///
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c)); // touching edges only
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlaps_horizontally(other) && self.overlaps_vertically(other)
    }

    /// Returns `true` if `point` lies inside or on the edge of the bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
