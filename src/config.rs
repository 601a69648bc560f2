use clap::{Args, ValueEnum};
use strum_macros::Display;

use crate::error::{WfResult, WordfitError};

/// Case normalization applied to every word before caching.
// Display must match the ValueEnum spelling: clap renders default_value_t
// through Display and parses it back as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CasePolicy {
    Upper,
    Lower,
    /// First character uppercased, remainder lowercased.
    InitialCap,
}

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub cache: CacheParams,
    #[command(flatten)]
    pub selection: SelectionParams,
}

#[derive(Args, Debug, Clone)]
pub struct CacheParams {
    #[arg(long, value_enum, default_value_t = CasePolicy::InitialCap)]
    pub case: CasePolicy,

    /// Shuffle the word list before truncation, so a truncated cache
    /// samples the whole list instead of the alphabetically-early part.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub shuffle: bool,

    /// Seed for the shuffle. Unseeded runs use a fresh RNG.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Limit on how many words get their width computed.
    #[arg(long, default_value_t = 100_000)]
    pub max_words: usize,

    /// Apply pair kerning on top of advance widths.
    /// Fonts without a kern table compute plain advance sums either way.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub kerning: bool,

    /// Recompute widths even when a valid cache file exists.
    /// Required after changing the case policy, font or word list.
    #[arg(long, default_value_t = false)]
    pub force_recompute: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SelectionParams {
    /// Width the selected words should have, in font units.
    #[arg(short, long, default_value_t = 4000.0)]
    pub target: f64,

    /// Initial miss tolerance around the target.
    #[arg(long, default_value_t = 10.0)]
    pub tolerance: f64,

    /// How many words to select.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Widen the tolerance and rescan when the count is not met.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub retry: bool,

    /// Amount the tolerance is multiplied by between scans.
    #[arg(long, default_value_t = 1.25)]
    pub multiplier: f64,

    /// How many scans to run before giving up.
    #[arg(long, default_value_t = 10)]
    pub max_cycles: usize,
}

impl Config {
    pub fn validate(&self) -> WfResult<()> {
        self.cache.validate()?;
        self.selection.validate()
    }
}

impl CacheParams {
    pub fn validate(&self) -> WfResult<()> {
        if self.max_words == 0 {
            return Err(WordfitError::Config(
                "--max-words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl SelectionParams {
    pub fn validate(&self) -> WfResult<()> {
        if self.tolerance < 0.0 {
            return Err(WordfitError::Config(
                "--tolerance must not be negative".to_string(),
            ));
        }
        if self.max_cycles == 0 {
            return Err(WordfitError::Config(
                "--max-cycles must be at least 1".to_string(),
            ));
        }
        if self.retry && self.multiplier <= 1.0 {
            return Err(WordfitError::Config(
                "--multiplier must be greater than 1 when retries are enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheParams {
    fn default() -> Self {
        Self {
            case: CasePolicy::InitialCap,
            shuffle: true,
            seed: None,
            max_words: 100_000,
            kerning: true,
            force_recompute: false,
        }
    }
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            target: 4000.0,
            tolerance: 10.0,
            count: 10,
            retry: true,
            multiplier: 1.25,
            max_cycles: 10,
        }
    }
}
