//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status lines, prose suggestions and confirmations.
    Verbose,
    /// Problems and bare remediation commands only.
    #[default]
    Normal,
}

impl OutputMode {
    /// Pick the mode for a `--verbose` flag.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode prints confirmations and prose suggestions.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
