use std::io::Write;

use crate::controllers::ports::stream_presenter::StreamPresenterPort;
use crate::core::fractals::koch::generator::KochCurve;

pub struct PostScriptPresenter {}

impl StreamPresenterPort for PostScriptPresenter {
    fn present(&self, curve: KochCurve, out: &mut impl Write) -> std::io::Result<()> {
        // PostScript header, then one moveto from the curve's start point
        writeln!(out, "%!PS-Adobe-2.0")?;

        let start = curve.first_point();
        let level = curve.level();
        let mut points = curve.into_points();

        let start_x = start.x.round() as i64;
        let start_y = start.y.round() as i64;
        writeln!(out, "{}\t{}\tmoveto", start_x, start_y)?;

        if level == 0 {
            if let Some(point) = points.pop_front() {
                let x = point.x.round() as i64;
                let y = point.y.round() as i64;
                writeln!(out, "{}\t{}\tlineto", x, y)?;
            }
        } else {
            // each coordinate is rounded before differencing, so the emitted
            // deltas telescope back to every rounded absolute position
            let mut prior_x = start_x;
            let mut prior_y = start_y;

            while let Some(point) = points.pop_front() {
                let x = point.x.round() as i64;
                let y = point.y.round() as i64;
                writeln!(out, "{}\t{}\trlineto", x - prior_x, y - prior_y)?;

                prior_x = x;
                prior_y = y;
            }
        }

        writeln!(out, "stroke")?;
        writeln!(out, "showpage")?;

        Ok(())
    }
}

impl Default for PostScriptPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PostScriptPresenter {
    pub fn new() -> Self {
        Self {}
    }
}
