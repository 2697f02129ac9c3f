use std::io::Write;

use crate::controllers::cli_args::CliArgs;
use crate::controllers::ports::stream_presenter::StreamPresenterPort;
use crate::core::fractals::koch::generator::KochCurve;
use crate::presenters::stream::postscript::PostScriptPresenter;

/// Parses the command line, generates the curve, and renders it into `out`.
/// Nothing is written before generation succeeds, so a rejected level leaves
/// the stream untouched.
pub fn koch_controller(
    args: &[String],
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse(args)?;

    let curve = KochCurve::generate(
        args.x1 as f64,
        args.y1 as f64,
        args.x2 as f64,
        args.y2 as f64,
        args.level,
    )?;

    let presenter = PostScriptPresenter::new();
    presenter.present(curve, out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_controller_writes_command_stream_for_valid_arguments() {
        let mut out: Vec<u8> = Vec::new();

        let result = koch_controller(&args(&["0", "0", "500", "0", "3"]), &mut out);

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("%!PS-Adobe-2.0\n"));
        assert!(output.ends_with("stroke\nshowpage\n"));
        assert_eq!(output.matches("rlineto").count(), 64); // 4^3 segments
    }

    #[test]
    fn test_controller_rejects_negative_level_without_output() {
        let mut out: Vec<u8> = Vec::new();

        let result = koch_controller(&args(&["0", "0", "500", "0", "-1"]), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_controller_rejects_missing_arguments_without_output() {
        let mut out: Vec<u8> = Vec::new();

        let result = koch_controller(&args(&["0", "0"]), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_controller_rejects_non_numeric_arguments_without_output() {
        let mut out: Vec<u8> = Vec::new();

        let result = koch_controller(&args(&["a", "b", "c", "d", "e"]), &mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_controller_level_zero_draws_a_single_line() {
        let mut out: Vec<u8> = Vec::new();

        koch_controller(&args(&["0", "0", "9", "0", "0"]), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "%!PS-Adobe-2.0\n\
             0\t0\tmoveto\n\
             9\t0\tlineto\n\
             stroke\n\
             showpage\n"
        );
    }
}
