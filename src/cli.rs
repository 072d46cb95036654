// std imports
use std::{ffi::OsString, path::PathBuf};

// third-party imports
use clap::{ArgAction, Parser};
use globmatch::Case;

// local imports
use crate::settings::UnitKind;

// ---

/// Glob pattern matcher for command line subjects and text lines.
///
/// In PATTERN, '*' matches any number of units and '?' matches a single unit except '.'.
/// There is no escaping, every other unit matches itself.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Pattern to match subjects against.
    pub pattern: String,

    /// Subjects to test, lines of the inputs are tested if none is given.
    pub subjects: Vec<OsString>,

    /// Files to read subjects from, one per line, '-' means stdin.
    #[arg(short = 'f', long = "input", value_name = "FILE", num_args = 1, conflicts_with = "subjects")]
    pub inputs: Vec<PathBuf>,

    /// Case sensitivity, only ASCII letters are folded in insensitive mode.
    #[arg(long, env = "WILDGLOB_CASE", overrides_with = "case")]
    #[arg(value_enum)]
    pub case: Option<Case>,

    /// Handful alias for --case=insensitive, overrides --case option.
    #[arg(short = 'i', conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Handful alias for --case=sensitive, overrides --case option.
    #[arg(short = 's')]
    pub case_sensitive: bool,

    /// Units of matching.
    #[arg(long, env = "WILDGLOB_UNITS", overrides_with = "units")]
    #[arg(value_enum)]
    pub units: Option<UnitKind>,

    /// Select subjects that do not match.
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Print only the number of selected subjects.
    #[arg(short, long)]
    pub count: bool,

    /// Print nothing, report the result by exit status only.
    #[arg(short, long, conflicts_with = "count")]
    pub quiet: bool,

    /// Configuration file path, '-' or empty value disables the user configuration file.
    #[arg(long, value_name = "FILE", env = "WILDGLOB_CONFIG", action = ArgAction::Append, num_args = 1)]
    pub config: Vec<String>,
}

impl Opt {
    /// Resolves case sensitivity from the options with fallback to `default`.
    pub fn case(&self, default: Case) -> Case {
        if self.ignore_case {
            Case::Insensitive
        } else if self.case_sensitive {
            Case::Sensitive
        } else {
            self.case.unwrap_or(default)
        }
    }

    /// Splits configuration paths from the flag that disables the user configuration file.
    ///
    /// Everything up to and including the last '-' or empty value is dropped.
    pub fn configs(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }
}
