use clap::{error::ErrorKind, CommandFactory, Parser};
use rlelife_lib::{Config, Pattern};
use std::path::PathBuf;

/// Run Life-like cellular automata from patterns in RLE format.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    #[command(flatten)]
    pub config: Config,

    /// Read the pattern from an RLE file.
    ///
    /// Use `-` to read the pattern from stdin.
    #[arg(short, long, conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Name of a built-in pattern, used when neither `--file` nor `--random` is given.
    #[arg(short, long, default_value = "glider")]
    pub builtin: String,

    /// Start from a random soup filling the whole board, with the given density of living
    /// cells.
    #[arg(short, long)]
    pub random: Option<f64>,

    /// Seed for the random soup.
    ///
    /// If not given, the seed is randomly generated.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Minimum number of milliseconds between two generations.
    #[arg(short, long, default_value = "500")]
    pub interval: u64,

    /// Whether to disable the TUI interface.
    ///
    /// If the TUI interface is disabled, the program will print each generation to stdout
    /// as a line of JSON.
    #[arg(long)]
    pub no_tui: bool,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        match Self::parse().validate() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Check the values that clap cannot check by itself.
    fn validate(self) -> Result<Self, clap::Error> {
        if let Some(density) = self.random {
            if !(0.0..=1.0).contains(&density) {
                return Err(Self::command().error(
                    ErrorKind::ValueValidation,
                    "the density of a random soup must be between 0 and 1",
                ));
            }
        }

        if self.file.is_none()
            && self.random.is_none()
            && Pattern::builtin_rle(&self.builtin).is_none()
        {
            let names = Pattern::builtin_names().collect::<Vec<_>>().join(", ");
            return Err(Self::command().error(
                ErrorKind::ValueValidation,
                format!(
                    "unknown built-in pattern `{}`, expected one of: {names}",
                    self.builtin
                ),
            ));
        }

        match self.config.clone().check() {
            Ok(config) => Ok(Self { config, ..self }),
            Err(e) => Err(Self::command().error(ErrorKind::ValueValidation, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["rlelife"]).unwrap();
        assert_eq!(args.config, Config::default());
        assert_eq!(args.builtin, "glider");
        assert_eq!(args.interval, 500);
        assert!(args.file.is_none());
        assert!(!args.no_tui);
    }

    #[test]
    fn test_parse() {
        let args = Args::try_parse_from([
            "rlelife", "-W", "40", "-H", "20", "-g", "10", "--random", "0.3", "--seed", "7",
            "--no-tui",
        ])
        .unwrap();
        assert_eq!(args.config, Config::new(40, 20).with_max_generations(10));
        assert_eq!(args.random, Some(0.3));
        assert_eq!(args.seed, Some(7));
        assert!(args.no_tui);

        assert!(Args::try_parse_from(["rlelife", "--seed", "7"]).is_err());
        assert!(Args::try_parse_from(["rlelife", "-f", "a.rle", "-r", "0.5"]).is_err());
    }

    fn validate(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(args.iter().copied()).unwrap().validate()
    }

    #[test]
    fn test_validate() {
        assert!(validate(&["rlelife"]).is_ok());
        assert!(validate(&["rlelife", "-b", "Pulsar"]).is_ok());
        assert!(validate(&["rlelife", "-r", "0.25"]).is_ok());

        let error = validate(&["rlelife", "-b", "nothing"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);

        // The built-in name is not used when a file is given.
        assert!(validate(&["rlelife", "-b", "nothing", "-f", "a.rle"]).is_ok());

        let error = validate(&["rlelife", "-r", "2"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);

        let error = validate(&["rlelife", "-W", "0"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }
}
