use std::error::Error;
use std::fmt;

const USAGE: &str = "x1 y1 x2 y2 level";

#[derive(Debug, Clone, PartialEq)]
pub enum CliArgsError {
    MissingArgument { name: &'static str },
    InvalidInteger { name: &'static str, value: String },
}

impl fmt::Display for CliArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { name } => {
                write!(f, "missing argument {}, expected: {}", name, USAGE)
            }
            Self::InvalidInteger { name, value } => {
                write!(f, "argument {} must be an integer: {}", name, value)
            }
        }
    }
}

impl Error for CliArgsError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CliArgs {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub level: i32,
}

impl CliArgs {
    /// Parses the positional arguments `x1 y1 x2 y2 level`. Level range
    /// validation is left to curve generation.
    pub fn parse(args: &[String]) -> Result<Self, CliArgsError> {
        Ok(Self {
            x1: parse_integer(args, 0, "x1")?,
            y1: parse_integer(args, 1, "y1")?,
            x2: parse_integer(args, 2, "x2")?,
            y2: parse_integer(args, 3, "y2")?,
            level: parse_integer(args, 4, "level")?,
        })
    }
}

fn parse_integer(args: &[String], index: usize, name: &'static str) -> Result<i32, CliArgsError> {
    let raw = args
        .get(index)
        .ok_or(CliArgsError::MissingArgument { name })?;

    raw.parse().map_err(|_| CliArgsError::InvalidInteger {
        name,
        value: raw.clone(),
    })
}
