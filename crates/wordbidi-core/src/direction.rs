//! Paragraph base directions and the resolver that normalizes them
//!
//! Callers hand directions around in three shapes: the [`Direction`] enum,
//! a case-insensitive name such as `"rtl"`, or the numeric code an engine
//! uses for it. [`DirectionResolver`] turns all three into one canonical
//! [`Direction`], checked against the [`Capabilities`] of the engine that
//! will do the reordering.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordBidiError};

/// Base direction of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forced left-to-right
    Ltr,
    /// Forced right-to-left
    Rtl,
    /// Computed from the first strong character, left-to-right if none
    Natural,
    /// Like `Natural`, falling back to left-to-right
    WeakLtr,
    /// Like `Natural`, falling back to right-to-left
    WeakRtl,
}

impl Direction {
    /// Every direction, in the order names are listed in error messages.
    pub const ALL: [Direction; 5] = [
        Direction::Ltr,
        Direction::Rtl,
        Direction::Natural,
        Direction::WeakLtr,
        Direction::WeakRtl,
    ];

    /// Canonical short name
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Ltr => "LTR",
            Direction::Rtl => "RTL",
            Direction::Natural => "ON",
            Direction::WeakLtr => "WLTR",
            Direction::WeakRtl => "WRTL",
        }
    }

    /// Longer spellings accepted in addition to [`Direction::name`]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Direction::Ltr => &["LEFT_TO_RIGHT"],
            Direction::Rtl => &["RIGHT_TO_LEFT"],
            Direction::Natural => &["NATURAL", "AUTO"],
            Direction::WeakLtr => &["WEAK_LTR"],
            Direction::WeakRtl => &["WEAK_RTL"],
        }
    }

    /// Numeric code, matching the paragraph type constants of FriBidi.
    pub const fn code(self) -> i64 {
        match self {
            Direction::Ltr => 0x110,
            Direction::Rtl => 0x111,
            Direction::Natural => 0x40,
            Direction::WeakLtr => 0x20,
            Direction::WeakRtl => 0x21,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.code() == code)
    }

    /// Case-insensitive lookup by name or alias.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|dir| {
            dir.name().eq_ignore_ascii_case(name)
                || dir
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// True for the two directions that force a paragraph level.
    pub const fn is_strong(self) -> bool {
        matches!(self, Direction::Ltr | Direction::Rtl)
    }

    pub const fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = WordBidiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            WordBidiError::invalid_direction(s, Direction::ALL.iter().map(|dir| dir.name()))
        })
    }
}

/// A direction as a caller supplied it, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionSpec {
    Value(Direction),
    Name(String),
    Code(i64),
}

impl fmt::Display for DirectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionSpec::Value(dir) => write!(f, "{dir}"),
            DirectionSpec::Name(name) => write!(f, "{name}"),
            DirectionSpec::Code(code) => write!(f, "{code}"),
        }
    }
}

impl From<Direction> for DirectionSpec {
    fn from(dir: Direction) -> Self {
        DirectionSpec::Value(dir)
    }
}

impl From<&str> for DirectionSpec {
    fn from(name: &str) -> Self {
        DirectionSpec::Name(name.to_string())
    }
}

impl From<String> for DirectionSpec {
    fn from(name: String) -> Self {
        DirectionSpec::Name(name)
    }
}

impl From<&String> for DirectionSpec {
    fn from(name: &String) -> Self {
        DirectionSpec::Name(name.clone())
    }
}

impl From<i64> for DirectionSpec {
    fn from(code: i64) -> Self {
        DirectionSpec::Code(code)
    }
}

impl From<i32> for DirectionSpec {
    fn from(code: i32) -> Self {
        DirectionSpec::Code(i64::from(code))
    }
}

/// What a reorder engine can do, fetched once when the engine is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Engine identifier, e.g. `"unicode-bidi"`
    pub engine: &'static str,
    /// Version of the underlying bidi implementation
    pub engine_version: String,
    /// Unicode version the engine's character data follows
    pub unicode_version: String,
    /// Version of wordbidi itself
    pub crate_version: &'static str,
    /// Directions the engine accepts
    pub directions: Vec<Direction>,
}

impl Capabilities {
    /// Capabilities accepting every [`Direction`].
    pub fn new(
        engine: &'static str,
        engine_version: impl Into<String>,
        unicode_version: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            engine_version: engine_version.into(),
            unicode_version: unicode_version.into(),
            crate_version: env!("CARGO_PKG_VERSION"),
            directions: Direction::ALL.to_vec(),
        }
    }

    /// Restrict the accepted directions.
    pub fn with_directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions = directions.into_iter().collect();
        self
    }

    pub fn supports(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    /// Canonical names of the accepted directions
    pub fn direction_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.directions.iter().map(|dir| dir.name())
    }

    /// Shorthand for `DirectionResolver::new(self)`.
    pub fn resolver(&self) -> DirectionResolver<'_> {
        DirectionResolver::new(self)
    }
}

/// Normalizes [`DirectionSpec`] values against an engine's capabilities
#[derive(Debug, Clone, Copy)]
pub struct DirectionResolver<'a> {
    capabilities: &'a Capabilities,
}

impl<'a> DirectionResolver<'a> {
    pub fn new(capabilities: &'a Capabilities) -> Self {
        Self { capabilities }
    }

    /// Resolve a direction value, name or numeric code.
    ///
    /// Fails with [`WordBidiError::InvalidDirection`] naming the offending
    /// value and the accepted names when nothing matches.
    pub fn resolve(&self, spec: impl Into<DirectionSpec>) -> Result<Direction> {
        let spec = spec.into();
        let found = match &spec {
            DirectionSpec::Value(dir) => Some(*dir),
            DirectionSpec::Name(name) => Direction::from_name(name),
            DirectionSpec::Code(code) => Direction::from_code(*code),
        };

        match found {
            Some(dir) if self.capabilities.supports(dir) => Ok(dir),
            _ => Err(WordBidiError::invalid_direction(
                &spec,
                self.capabilities.direction_names(),
            )),
        }
    }
}
