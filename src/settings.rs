// third-party imports
use clap::ValueEnum;
use globmatch::Case;
use serde::{Deserialize, Serialize};

// ---

pub(crate) static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub case: Case,
    pub units: UnitKind,
    pub max_stars: usize,
}

// ---

/// Units that patterns and subjects are split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// UTF-8 code units.
    #[default]
    Bytes,
    /// Unicode scalar values, subjects must be valid UTF-8.
    Chars,
}
