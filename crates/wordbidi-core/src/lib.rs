//! wordbidi core: the pieces every reorder engine and word mapper share
//!
//! Reordering bidirectional text happens in two layers. An engine runs the
//! Unicode Bidirectional Algorithm over a paragraph and reports where each
//! character ended up; the word mapper in the `wordbidi` crate lifts those
//! character positions to whole words. This crate holds the contract between
//! the two.
//!
//! ## The pieces
//!
//! - [`ReorderEngine`] - the one trait an engine implements
//! - [`ReorderOptions`] / [`Reordered`] - what goes in and what comes back
//! - [`Direction`] and [`DirectionResolver`] - base directions, by value, name or code
//! - [`Capabilities`] - read-only facts about an engine, fetched once
//! - [`config::Config`] - defaults, optionally taken from the environment
//!
//! ```rust
//! use wordbidi_core::{Capabilities, Direction};
//!
//! let caps = Capabilities::new("demo", "1.0", "15.0.0");
//! assert_eq!(caps.resolver().resolve("rtl")?, Direction::Rtl);
//! # Ok::<(), wordbidi_core::WordBidiError>(())
//! ```

pub mod config;
pub mod direction;
pub mod error;
pub mod traits;

pub use direction::{Capabilities, Direction, DirectionResolver, DirectionSpec};
pub use error::{EngineError, Result, WordBidiError};
pub use traits::ReorderEngine;

/// Data passed between the engine and the word mapper
pub mod types {
    use std::fmt;
    use std::ops::Range;
    use std::str::FromStr;

    use crate::error::WordBidiError;

    /// A maximal run of non-whitespace characters
    ///
    /// `span` counts chars, not bytes, in whichever text the word was found.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Word {
        pub text: String,
        pub span: Range<usize>,
    }

    /// One logical word slot matched to a word of the visual text
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WordCorrespondence {
        /// Text of the matched visual word
        pub text: String,
        /// Rank of the matched word among the visual words (0 = first displayed)
        pub visual_index: usize,
        /// Position of the originating word in the input
        pub logical_index: usize,
    }

    /// What to do with an input word that never shows up in the visual text
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum UnmatchedWordPolicy {
        /// Leave the slot out of the result
        #[default]
        Drop,
        /// Fail the whole call
        Error,
    }

    impl UnmatchedWordPolicy {
        pub const fn as_str(self) -> &'static str {
            match self {
                Self::Drop => "drop",
                Self::Error => "error",
            }
        }
    }

    impl fmt::Display for UnmatchedWordPolicy {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for UnmatchedWordPolicy {
        type Err = WordBidiError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "drop" => Ok(Self::Drop),
                "error" => Ok(Self::Error),
                other => Err(WordBidiError::InvalidArgument(format!(
                    "unknown unmatched-word policy {other:?}; should be one of (drop, error)"
                ))),
            }
        }
    }
}

/// How a reorder call should behave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderOptions {
    /// Strip bidi control characters from the visual text
    pub clean: bool,
    /// Keep non-spacing marks after their base character in right-to-left runs
    pub reorder_nsm: bool,
    /// Swap mirrored characters such as brackets in right-to-left runs
    pub mirror: bool,
    /// Populate [`Reordered::l2v`]
    pub want_l2v: bool,
    /// Populate [`Reordered::v2l`]
    pub want_v2l: bool,
    /// Populate [`Reordered::levels`]
    pub want_levels: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            clean: true,
            reorder_nsm: true,
            mirror: true,
            want_l2v: false,
            want_v2l: false,
            want_levels: false,
        }
    }
}

impl ReorderOptions {
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn reorder_nsm(mut self, reorder_nsm: bool) -> Self {
        self.reorder_nsm = reorder_nsm;
        self
    }

    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_l2v(mut self) -> Self {
        self.want_l2v = true;
        self
    }

    pub fn with_v2l(mut self) -> Self {
        self.want_v2l = true;
        self
    }

    pub fn with_levels(mut self) -> Self {
        self.want_levels = true;
        self
    }

    /// Request every position array.
    pub fn with_all_maps(self) -> Self {
        self.with_l2v().with_v2l().with_levels()
    }
}

/// Result of one reorder call
///
/// Every index counts chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    /// Text in display order
    pub visual: String,
    /// Resolved base direction of the first paragraph, `Ltr` or `Rtl`
    pub base: Direction,
    /// `v2l[v]` is the logical index of visual char `v`
    pub v2l: Option<Vec<usize>>,
    /// `l2v[l]` is the visual index of logical char `l`, `None` if cleaned away
    pub l2v: Option<Vec<Option<usize>>>,
    /// Embedding level of each logical char
    pub levels: Option<Vec<u8>>,
}

impl Reordered {
    /// Result for an empty input.
    pub fn empty(base: Direction, options: &ReorderOptions) -> Self {
        Self {
            visual: String::new(),
            base,
            v2l: options.want_v2l.then(Vec::new),
            l2v: options.want_l2v.then(Vec::new),
            levels: options.want_levels.then(Vec::new),
        }
    }
}
