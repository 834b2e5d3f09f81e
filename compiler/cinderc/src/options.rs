//! Command-line options for the driver commands.
//!
//! Options are parsed by hand from `--flag` and `--key=value` arguments.
//! Positional arguments are paths; anything else starting with `-` is
//! rejected so typos do not turn into file names.

use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostic::ColorMode;

/// Iterations of the `bench` loop when `--iterations` is not given.
pub const DEFAULT_ITERATIONS: u32 = 1024;

/// Invalid command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing file path")]
    MissingPath,

    #[error("expected a single file path, got '{0}' as well")]
    ExtraPath(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },
}

/// Options for `cinder lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Files to lex, in output order.
    pub paths: Vec<PathBuf>,
    /// Print only the token count per file.
    pub quiet: bool,
    /// Print the tokens produced before a scan error.
    pub partial: bool,
    /// Color mode for diagnostics.
    pub color: ColorMode,
}

impl LexOptions {
    /// Parse the arguments following `lex`.
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut options = LexOptions::default();
        for arg in args {
            if arg == "--quiet" || arg == "-q" {
                options.quiet = true;
            } else if arg == "--partial" {
                options.partial = true;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                options.color = parse_color(value)?;
            } else if arg.starts_with('-') {
                return Err(OptionsError::UnknownOption(arg.clone()));
            } else {
                options.paths.push(PathBuf::from(arg));
            }
        }
        if options.paths.is_empty() {
            return Err(OptionsError::MissingPath);
        }
        Ok(options)
    }
}

/// Options for `cinder bench`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchOptions {
    pub path: PathBuf,
    /// Number of full scans to time. At least 1.
    pub iterations: u32,
}

impl BenchOptions {
    /// Options for benchmarking `path` with the default iteration count.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BenchOptions {
            path: path.into(),
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Parse the arguments following `bench`.
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut path: Option<PathBuf> = None;
        let mut iterations = DEFAULT_ITERATIONS;
        for arg in args {
            if let Some(value) = arg.strip_prefix("--iterations=") {
                iterations = match value.parse::<u32>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(OptionsError::InvalidValue {
                            option: "--iterations",
                            value: value.to_string(),
                        })
                    }
                };
            } else if arg.starts_with('-') {
                return Err(OptionsError::UnknownOption(arg.clone()));
            } else if path.is_some() {
                return Err(OptionsError::ExtraPath(arg.clone()));
            } else {
                path = Some(PathBuf::from(arg));
            }
        }
        let Some(path) = path else {
            return Err(OptionsError::MissingPath);
        };
        Ok(BenchOptions { path, iterations })
    }
}

fn parse_color(value: &str) -> Result<ColorMode, OptionsError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(OptionsError::InvalidValue {
            option: "--color",
            value: value.to_string(),
        }),
    }
}
