//! The contract between wordbidi and a bidi engine
//!
//! Anything that can run the Unicode Bidirectional Algorithm and report
//! character positions can sit behind [`ReorderEngine`]. The word mapper
//! never looks past this trait, so engines are interchangeable.

use crate::{
    direction::{Capabilities, Direction},
    error::Result,
    ReorderOptions, Reordered,
};

/// Turns logical text into visual text
///
/// ```ignore
/// struct Identity(Capabilities);
///
/// impl ReorderEngine for Identity {
///     fn name(&self) -> &'static str {
///         "identity"
///     }
///
///     fn capabilities(&self) -> &Capabilities {
///         &self.0
///     }
///
///     fn reorder(&self, text: &str, _: Direction, options: &ReorderOptions) -> Result<Reordered> {
///         let n = text.chars().count();
///         Ok(Reordered {
///             visual: text.to_string(),
///             base: Direction::Ltr,
///             v2l: options.want_v2l.then(|| (0..n).collect()),
///             l2v: options.want_l2v.then(|| (0..n).map(Some).collect()),
///             levels: options.want_levels.then(|| vec![0; n]),
///         })
///     }
/// }
/// ```
pub trait ReorderEngine: Send + Sync {
    /// Used in logs and `info` output
    fn name(&self) -> &'static str;

    /// Versions and accepted directions, fixed for the engine's lifetime
    fn capabilities(&self) -> &Capabilities;

    /// Reorder `text` for display.
    ///
    /// Empty text must yield an empty result. Only the arrays requested in
    /// `options` need to be filled in. Engine failures come back as
    /// [`crate::WordBidiError::Engine`].
    fn reorder(
        &self,
        text: &str,
        direction: Direction,
        options: &ReorderOptions,
    ) -> Result<Reordered>;
}
