use crate::color::Color;

/// A two-dimensional point
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn from_array(xy: [f64; 2]) -> Self {
        Point { x: xy[0], y: xy[1] }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn dist(&self, b: &Point) -> f64 {
        ((self.x - b.x).powi(2) + (self.y - b.y).powi(2)).sqrt()
    }
}

/// A point given by its angle (in radians) and distance from the center
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PolarPoint {
    pub angle: f64,
    pub distance: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl PolarPoint {
    pub fn to_cartesian(&self, center: Point) -> CartesianPoint {
        CartesianPoint {
            x: center.x + self.distance * self.angle.cos(),
            y: center.y + self.distance * self.angle.sin(),
            color: self.color,
        }
    }
}

impl CartesianPoint {
    pub fn position(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}
