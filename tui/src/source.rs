use crate::args::Args;
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use rlelife_lib::Pattern;
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

/// Somewhere to read the text of a pattern from.
pub trait PatternSource {
    /// Read the whole text of the pattern.
    fn read(&self) -> Result<String>;
}

/// A pattern file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource(pub PathBuf);

impl PatternSource for FileSource {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.0).wrap_err_with(|| format!("could not read {}", self.0.display()))
    }
}

/// The standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdinSource;

impl PatternSource for StdinSource {
    fn read(&self) -> Result<String> {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .wrap_err("could not read stdin")?;
        Ok(text)
    }
}

/// One of the patterns shipped with the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinSource(pub String);

impl PatternSource for BuiltinSource {
    fn read(&self) -> Result<String> {
        Pattern::builtin_rle(&self.0)
            .map(str::to_string)
            .ok_or_else(|| eyre!("unknown built-in pattern `{}`", self.0))
    }
}

/// Read a pattern from a source and decode it.
pub fn read_pattern(source: &dyn PatternSource) -> Result<Pattern> {
    let text = source.read().wrap_err("could not obtain pattern")?;
    let pattern = text
        .parse::<Pattern>()
        .wrap_err("could not decode pattern")?;
    Ok(pattern)
}

/// Get the initial pattern from the command line arguments.
///
/// A file takes precedence over a random soup, which takes precedence over a
/// built-in pattern.
pub fn load_pattern(args: &Args) -> Result<Pattern> {
    let pattern = match (&args.file, args.random) {
        (Some(path), _) if path.as_os_str() == "-" => read_pattern(&StdinSource)?,
        (Some(path), _) => read_pattern(&FileSource(path.clone()))?,
        (None, Some(density)) => {
            Pattern::random(args.config.width, args.config.height, density, args.seed)
        }
        (None, None) => read_pattern(&BuiltinSource(args.builtin.clone()))?,
    };

    log::info!(
        "Loaded pattern {:?} ({}x{}, rule {}).",
        pattern.name(),
        pattern.width(),
        pattern.height(),
        pattern.rule()
    );

    Ok(pattern)
}
