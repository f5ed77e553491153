//! Default settings for reorder and word-mapping calls
//!
//! [`Config::default`] mirrors the long-standing defaults: right-to-left
//! paragraphs, cleaned output, non-spacing marks kept with their base and
//! unmatched words dropped. Any of them can be overridden from the
//! environment:
//!
//! | variable | values |
//! |---|---|
//! | `WORDBIDI_DIRECTION` | `LTR`, `RTL`, `ON`, `WLTR`, `WRTL` (any case) |
//! | `WORDBIDI_CLEAN` | `1/true/yes/on`, `0/false/no/off` |
//! | `WORDBIDI_REORDER_NSM` | same as above |
//! | `WORDBIDI_MIRROR` | same as above |
//! | `WORDBIDI_ON_UNMATCHED` | `drop`, `error` |
//!
//! ```bash
//! WORDBIDI_DIRECTION=ltr WORDBIDI_CLEAN=0 wordbidi vis "hello"
//! ```
//!
//! Nothing here is global: callers build a `Config` and pass it along.

use crate::{
    direction::Direction,
    error::{Result, WordBidiError},
    types::UnmatchedWordPolicy,
    ReorderOptions,
};

pub const ENV_DIRECTION: &str = "WORDBIDI_DIRECTION";
pub const ENV_CLEAN: &str = "WORDBIDI_CLEAN";
pub const ENV_REORDER_NSM: &str = "WORDBIDI_REORDER_NSM";
pub const ENV_MIRROR: &str = "WORDBIDI_MIRROR";
pub const ENV_ON_UNMATCHED: &str = "WORDBIDI_ON_UNMATCHED";

/// Settings shared by the library facade and the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub direction: Direction,
    pub clean: bool,
    pub reorder_nsm: bool,
    pub mirror: bool,
    pub on_unmatched: UnmatchedWordPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            direction: Direction::Rtl,
            clean: true,
            reorder_nsm: true,
            mirror: true,
            on_unmatched: UnmatchedWordPolicy::Drop,
        }
    }
}

impl Config {
    /// Defaults overlaid with the `WORDBIDI_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_DIRECTION) {
            config.direction = val
                .parse()
                .map_err(|err| WordBidiError::Config(format!("{ENV_DIRECTION}: {err}")))?;
        }
        if let Some(val) = lookup(ENV_CLEAN) {
            config.clean = parse_flag(ENV_CLEAN, &val)?;
        }
        if let Some(val) = lookup(ENV_REORDER_NSM) {
            config.reorder_nsm = parse_flag(ENV_REORDER_NSM, &val)?;
        }
        if let Some(val) = lookup(ENV_MIRROR) {
            config.mirror = parse_flag(ENV_MIRROR, &val)?;
        }
        if let Some(val) = lookup(ENV_ON_UNMATCHED) {
            config.on_unmatched = val
                .parse()
                .map_err(|err| WordBidiError::Config(format!("{ENV_ON_UNMATCHED}: {err}")))?;
        }

        log::debug!("wordbidi config: {config:?}");
        Ok(config)
    }

    /// Reorder options carrying this config's flags, no arrays requested.
    pub fn reorder_options(&self) -> ReorderOptions {
        ReorderOptions::default()
            .clean(self.clean)
            .reorder_nsm(self.reorder_nsm)
            .mirror(self.mirror)
    }
}

fn parse_flag(key: &str, val: &str) -> Result<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WordBidiError::Config(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}
