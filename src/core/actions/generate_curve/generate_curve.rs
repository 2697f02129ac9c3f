use std::error::Error;
use std::fmt;

use crate::core::actions::generate_curve::ports::curve_motif::CurveMotif;
use crate::core::data::point::Point;
use crate::core::data::queue::Queue;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GenerateCurveError {
    NegativeLevel { level: i32 },
}

impl fmt::Display for GenerateCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLevel { level } => {
                write!(f, "curve level must be zero or greater: {}", level)
            }
        }
    }
}

impl Error for GenerateCurveError {}

/// Recursively replaces the segment `start..end` with the motif's sub-segments
/// `level` times, collecting every vertex visited along the way. Only far
/// endpoints enter the queue; `start` is the caller's fixed curve start and is
/// never pushed. A motif with n interior vertices yields (n+1)^level points.
pub fn generate_curve<M: CurveMotif>(
    motif: &M,
    start: Point,
    end: Point,
    level: i32,
) -> Result<Queue<Point>, GenerateCurveError> {
    if level < 0 {
        return Err(GenerateCurveError::NegativeLevel { level });
    }

    let mut points = Queue::new();
    trace_segment(motif, start, end, level, &mut points);

    Ok(points)
}

fn trace_segment<M: CurveMotif>(
    motif: &M,
    start: Point,
    end: Point,
    level: i32,
    points: &mut Queue<Point>,
) {
    if level <= 0 {
        points.push_back(end);
        return;
    }

    let mut prior = start;
    for vertex in motif.expand(start, end) {
        trace_segment(motif, prior, vertex, level - 1, points);
        prior = vertex;
    }
    trace_segment(motif, prior, end, level - 1, points);
}
