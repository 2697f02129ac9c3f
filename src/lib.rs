mod presenters;
mod controllers;
mod core;

pub use controllers::koch::koch_controller;
pub use controllers::ports::stream_presenter::StreamPresenterPort;
pub use crate::core::fractals::koch::generator::KochCurve;
pub use presenters::stream::postscript::PostScriptPresenter;
