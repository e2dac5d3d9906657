use bank::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Accounts,
    History,
}

#[derive(Debug)]
pub struct InputArgs {
    pub path: PathBuf,
    pub output: OutputMode,
}

/// Parses the input arguments: a required filepath, optionally followed by `--history`
pub fn parse_input_args() -> Result<InputArgs> {
    return parse_args(env::args().skip(1));
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<InputArgs> {
    let filename = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the input file.".to_string())
    })?;

    let output = match args.next().as_deref() {
        None => OutputMode::Accounts,
        Some("--history") => OutputMode::History,
        Some(other) => Err(InputArgsError::Parse(format!("Unknown argument: {other}")))?,
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?;
    }

    let path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(InputArgs { path, output });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .into_iter()
    }

    #[test]
    fn parse_args() {
        let manifest = env!("CARGO_MANIFEST_DIR");
        let file = format!("{manifest}/Cargo.toml");

        let parsed = super::parse_args(args(&[&file])).unwrap();
        assert_eq!(parsed.output, OutputMode::Accounts);
        assert!(parsed.path.ends_with("Cargo.toml"));

        let parsed = super::parse_args(args(&[&file, "--history"])).unwrap();
        assert_eq!(parsed.output, OutputMode::History);

        assert!(super::parse_args(args(&[])).is_err());
        assert!(super::parse_args(args(&[&file, "--verbose"])).is_err());
        assert!(super::parse_args(args(&[&file, "--history", "x"])).is_err());
        assert!(super::parse_args(args(&["./does/not/exist.csv"])).is_err());
    }
}
