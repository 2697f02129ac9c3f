use std::io::Write;

use crate::core::fractals::koch::generator::KochCurve;

/// Renders a generated curve into a command stream. Rendering drains the
/// curve's point queue, so the curve is taken by value; a curve can be
/// presented exactly once.
pub trait StreamPresenterPort {
    fn present(&self, curve: KochCurve, out: &mut impl Write) -> std::io::Result<()>;
}
