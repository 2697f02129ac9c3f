//! Koch-curve generation.
//!
//! The recursive engine lives in `core/actions/generate_curve` and is generic
//! over a segment-replacement rule; this module supplies the Koch rule
//! (`KochMotif`) and the generated-curve state (`KochCurve`) that presenters
//! consume.

pub mod generator;
pub mod motif;
