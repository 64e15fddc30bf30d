//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Every setting can also be
//! supplied through a `DEV_START_*` environment variable.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::probe::DEFAULT_FETCH_TIMEOUT;

/// dev-start - Read-only development environment checkup.
#[derive(Debug, Parser)]
#[command(name = "dev-start")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show confirmations and explanations, not just problems
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to project root (overrides current directory)
    #[arg(short = 'C', long, env = "DEV_START_PROJECT")]
    pub project: Option<PathBuf>,

    /// Do not contact the remote when checking how far behind the branch is
    #[arg(long, env = "DEV_START_NO_FETCH")]
    pub no_fetch: bool,

    /// Seconds to wait for `git fetch` before giving up
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 10,
        env = "DEV_START_FETCH_TIMEOUT"
    )]
    pub fetch_timeout: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Parse arguments, falling back to a terse run when they don't parse.
    ///
    /// Only `--help` and `--version` come back as `Err`, for the caller to
    /// print and exit. Any other parse error keeps the environment-derived
    /// settings and treats the whole command line as ignored extras.
    pub fn parse_lenient_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match Self::try_parse_from(args.iter().cloned()) {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(e)
            }
            Err(_) => {
                let bin = args.first().cloned().unwrap_or_else(|| "dev-start".into());
                let mut cli = Self::try_parse_from([bin]).unwrap_or_else(|_| Self::terse());
                cli.extra = args
                    .iter()
                    .skip(1)
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect();
                Ok(cli)
            }
        }
    }

    fn terse() -> Self {
        Self {
            verbose: false,
            project: None,
            no_fetch: false,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT.as_secs(),
            no_color: false,
            debug: false,
            extra: Vec::new(),
        }
    }
}
