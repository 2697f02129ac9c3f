use crate::core::actions::generate_curve::generate_curve::{generate_curve, GenerateCurveError};
use crate::core::data::point::Point;
use crate::core::data::queue::Queue;
use crate::core::fractals::koch::motif::KochMotif;

/// A fully generated Koch curve: the fixed start point, the requested
/// recursion level, and every subsequent vertex of the traversal in visiting
/// order. The point queue is populated once here and drained once by a
/// presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct KochCurve {
    first_point: Point,
    level: i32,
    points: Queue<Point>,
}

impl KochCurve {
    pub fn generate(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        level: i32,
    ) -> Result<Self, GenerateCurveError> {
        let first_point = Point { x: x1, y: y1 };
        let last_point = Point { x: x2, y: y2 };
        let points = generate_curve(&KochMotif, first_point, last_point, level)?;

        Ok(Self {
            first_point,
            level,
            points,
        })
    }

    #[must_use]
    pub fn first_point(&self) -> Point {
        self.first_point
    }

    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn points(&self) -> &Queue<Point> {
        &self.points
    }

    /// Hands the point queue to the caller for its one-time drain.
    #[must_use]
    pub fn into_points(self) -> Queue<Point> {
        self.points
    }
}
