//! Word-level reordering
//!
//! An engine reports where each *character* lands; callers that lay text out
//! word by word need to know where each *word* lands. [`WordMapper`] joins
//! the words into one paragraph, lets the engine reorder it, splits the
//! visual text back into words and pairs every input word with the visual
//! word that holds its characters.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use unicode_bidi::{bidi_class, BidiClass};
use wordbidi_core::{
    config::Config,
    types::{UnmatchedWordPolicy, Word, WordCorrespondence},
    DirectionSpec, EngineError, ReorderEngine, ReorderOptions, Result, WordBidiError,
};

use crate::words::{join_words, split_words};

/// Maps logical words to their visual counterparts
#[derive(Clone)]
pub struct WordMapper {
    engine: Arc<dyn ReorderEngine>,
    options: ReorderOptions,
    policy: UnmatchedWordPolicy,
}

impl fmt::Debug for WordMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordMapper")
            .field("engine", &self.engine.name())
            .field("options", &self.options)
            .field("policy", &self.policy)
            .finish()
    }
}

impl WordMapper {
    pub fn new(engine: Arc<dyn ReorderEngine>) -> Self {
        Self {
            engine,
            options: ReorderOptions::default(),
            policy: UnmatchedWordPolicy::default(),
        }
    }

    /// Mapper using the mark, mirroring and unmatched-word settings of `config`.
    pub fn from_config(engine: Arc<dyn ReorderEngine>, config: &Config) -> Self {
        Self::new(engine)
            .with_reorder_options(config.reorder_options())
            .with_policy(config.on_unmatched)
    }

    pub fn with_policy(mut self, policy: UnmatchedWordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Base options for engine calls. `clean` is still taken per call and
    /// the visual-to-logical map is always requested.
    pub fn with_reorder_options(mut self, options: ReorderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn policy(&self) -> UnmatchedWordPolicy {
        self.policy
    }

    pub fn engine(&self) -> &Arc<dyn ReorderEngine> {
        &self.engine
    }

    /// Pair each of `words` with the visual word it ends up in.
    ///
    /// Results come back in input order. Directions other than LTR and RTL
    /// leave the words as they are, each at its own index. An input word
    /// none of whose characters survive into the visual text is dropped or
    /// reported, depending on the [`UnmatchedWordPolicy`].
    pub fn map_words<S: AsRef<str>>(
        &self,
        words: &[S],
        direction: impl Into<DirectionSpec>,
        clean: bool,
    ) -> Result<Vec<WordCorrespondence>> {
        let direction = self.engine.capabilities().resolver().resolve(direction)?;
        validate_words(words)?;

        if !direction.is_strong() {
            return Ok(pass_through(words));
        }

        let (joined, spans) = join_words(words);
        let options = self.options.clone().clean(clean).with_v2l();
        let reordered = self.engine.reorder(&joined, direction, &options)?;
        let v2l = reordered.v2l.ok_or_else(|| {
            EngineError::Failed(format!(
                "{} returned no visual-to-logical map",
                self.engine.name()
            ))
        })?;

        let visual_words = split_words(&reordered.visual);
        let owners = visual_word_owners(&visual_words, &v2l, joined.chars().count());

        log::debug!(
            "mapped {} logical words onto {} visual words ({direction})",
            words.len(),
            visual_words.len()
        );

        let mut result = Vec::with_capacity(words.len());
        for (slot, span) in spans.into_iter().enumerate() {
            match first_owner(&owners, span) {
                Some(visual_index) => result.push(WordCorrespondence {
                    text: visual_words[visual_index].text.clone(),
                    visual_index,
                    logical_index: slot,
                }),
                None => {
                    let word = words[slot].as_ref().to_string();
                    match self.policy {
                        UnmatchedWordPolicy::Drop => {
                            log::warn!("dropping word {slot} ({word:?}): not found in visual text");
                        },
                        UnmatchedWordPolicy::Error => {
                            return Err(WordBidiError::UnmatchedWord { index: slot, word });
                        },
                    }
                },
            }
        }

        Ok(result)
    }
}

fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<()> {
    if words.is_empty() {
        return Err(WordBidiError::InvalidArgument(
            "words should be a non-empty list of strings".into(),
        ));
    }
    for (idx, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(WordBidiError::InvalidArgument(format!("word {idx} is empty")));
        }
        if word.chars().any(is_separator) {
            return Err(WordBidiError::InvalidArgument(format!(
                "word {idx} ({word:?}) contains whitespace or a separator"
            )));
        }
    }
    Ok(())
}

/// Chars that would split a word in the joined text: whitespace plus the
/// paragraph and segment separators that `char::is_whitespace` misses
/// (U+001C..U+001F).
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(bidi_class(ch), BidiClass::B | BidiClass::S)
}

fn pass_through<S: AsRef<str>>(words: &[S]) -> Vec<WordCorrespondence> {
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| WordCorrespondence {
            text: word.as_ref().to_string(),
            visual_index: idx,
            logical_index: idx,
        })
        .collect()
}

/// For every logical char index, the visual word that displays it.
///
/// Visual words are scanned left to right; when two claim the same logical
/// index the later one wins. Map entries pointing past `logical_len` are
/// ignored.
fn visual_word_owners(
    visual_words: &[Word],
    v2l: &[usize],
    logical_len: usize,
) -> Vec<Option<usize>> {
    let mut owners = vec![None; logical_len];
    for (visual_index, word) in visual_words.iter().enumerate() {
        for v in word.span.clone() {
            let Some(&logical) = v2l.get(v) else {
                continue;
            };
            if let Some(owner) = owners.get_mut(logical) {
                *owner = Some(visual_index);
            }
        }
    }
    owners
}

/// The owner of the first char in `span` that has one.
fn first_owner(owners: &[Option<usize>], span: Range<usize>) -> Option<usize> {
    owners
        .get(span)
        .and_then(|slice| slice.iter().copied().flatten().next())
}
