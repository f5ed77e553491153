//! wordbidi - word-level logical-to-visual bidi reordering
//!
//! Give it the words of a sentence in the order they were typed and a
//! paragraph direction; get back, for every word, the word that is displayed
//! in its place and where it sits in display order.
//!
//! ```rust
//! # #[cfg(feature = "unicode")]
//! # {
//! let mapped = wordbidi::map_words(&["hello", "world"], "LTR", true)?;
//! assert_eq!(mapped[1].text, "world");
//! assert_eq!(mapped[1].visual_index, 1);
//!
//! let visual = wordbidi::log2vis("hello - שלום", "rtl", &Default::default())?;
//! assert_eq!(visual.visual, "םולש - hello");
//! # }
//! # Ok::<(), wordbidi::WordBidiError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `unicode` (default): the [`UnicodeBidiEngine`] and the free functions
//!   that use it. Without it, bring your own [`ReorderEngine`] and drive a
//!   [`WordMapper`] directly.

pub mod mapper;
pub mod words;

pub use mapper::WordMapper;
pub use wordbidi_core::{
    config, error, traits, types, Capabilities, Direction, DirectionResolver, DirectionSpec,
    EngineError, ReorderEngine, ReorderOptions, Reordered, Result, WordBidiError,
};

#[cfg(feature = "unicode")]
pub use wordbidi_unicode::UnicodeBidiEngine;

#[cfg(feature = "unicode")]
mod facade {
    use std::sync::Arc;

    use wordbidi_core::{
        types::WordCorrespondence, Capabilities, Direction, DirectionSpec, EngineError,
        ReorderEngine, ReorderOptions, Reordered, Result,
    };
    use wordbidi_unicode::UnicodeBidiEngine;

    use crate::WordMapper;

    /// The bundled engine, ready to share.
    pub fn default_engine() -> Arc<dyn ReorderEngine> {
        Arc::new(UnicodeBidiEngine::new())
    }

    /// Versions and accepted directions of the bundled engine.
    pub fn capabilities() -> Capabilities {
        UnicodeBidiEngine::new().capabilities().clone()
    }

    /// [`WordMapper::map_words`] with the bundled engine and default settings.
    pub fn map_words<S: AsRef<str>>(
        words: &[S],
        direction: impl Into<DirectionSpec>,
        clean: bool,
    ) -> Result<Vec<WordCorrespondence>> {
        WordMapper::new(default_engine()).map_words(words, direction, clean)
    }

    /// Reorder one line of text for display.
    ///
    /// Does not break lines: call it once per line. Arabic letters come back
    /// in their nominal code points; contextual shaping into presentation
    /// forms (as FriBidi's `log2vis` does) is left to the font shaper.
    pub fn log2vis(
        text: &str,
        direction: impl Into<DirectionSpec>,
        options: &ReorderOptions,
    ) -> Result<Reordered> {
        let engine = UnicodeBidiEngine::new();
        let direction = engine.capabilities().resolver().resolve(direction)?;
        engine.reorder(text, direction, options)
    }

    /// Visual-to-logical char map of `text` laid out in a left-to-right paragraph.
    pub fn reorder_map(text: &str) -> Result<Vec<usize>> {
        let options = ReorderOptions::default().clean(false).with_v2l();
        let reordered = UnicodeBidiEngine::new().reorder(text, Direction::Ltr, &options)?;
        reordered
            .v2l
            .ok_or_else(|| EngineError::Failed("no visual-to-logical map".into()).into())
    }
}

#[cfg(feature = "unicode")]
pub use facade::{capabilities, default_engine, log2vis, map_words, reorder_map};

/// Common imports for typical usage
pub mod prelude {
    pub use crate::mapper::WordMapper;
    pub use wordbidi_core::{
        config::Config,
        types::{UnmatchedWordPolicy, WordCorrespondence},
        Direction, ReorderEngine, ReorderOptions, Reordered, Result, WordBidiError,
    };
}
