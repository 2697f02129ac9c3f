use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Weighted affine combination of this point and `other`. Weights `(1, 2)`
    /// land 1/3 of the way from `self` to `other`; `(1, 1)` is the midpoint.
    /// The weights must not sum to zero.
    #[must_use]
    pub fn section(&self, self_weight: f64, other_weight: f64, other: Point) -> Point {
        let divisor = self_weight + other_weight;

        Point {
            x: (other_weight * self.x + self_weight * other.x) / divisor,
            y: (other_weight * self.y + self_weight * other.y) / divisor,
        }
    }

    /// Rotates this point by `angle_degrees` (counter-clockwise for positive
    /// angles) about `reference`.
    #[must_use]
    pub fn rotate(&self, angle_degrees: f64, reference: Point) -> Point {
        let theta = angle_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();

        let dx = self.x - reference.x;
        let dy = self.y - reference.y;

        Point {
            x: reference.x + dx * cos - dy * sin,
            y: reference.y + dx * sin + dy * cos,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
