// this_file: crates/wordbidi-unicode/src/lib.rs

//! Reorder engine backed by the `unicode-bidi` crate.
//!
//! `unicode-bidi` resolves embedding levels (UAX #9 up to rule L2). This
//! crate adds what a display-ready reordering needs on top: per-char
//! position maps, non-spacing marks kept after their base (rule L3),
//! mirrored brackets (rule L4) and removal of bidi control characters.

pub mod mirror;

use unicode_bidi::{
    bidi_class, get_base_direction, BidiClass, BidiInfo, Level, LTR_LEVEL, RTL_LEVEL,
};
use wordbidi_core::{
    Capabilities, Direction, ReorderEngine, ReorderOptions, Reordered, Result, WordBidiError,
};

const ENGINE_NAME: &str = "unicode-bidi";
const ENGINE_VERSION: &str = "0.3";

const LRM: char = '\u{200E}';
const RLM: char = '\u{200F}';

/// [`ReorderEngine`] over `unicode-bidi`
///
/// Holds nothing but its capabilities, so one instance can serve any number
/// of threads. Output characters are only reordered, mirrored or removed,
/// never shaped: Arabic stays in nominal (not presentation) forms.
#[derive(Debug, Clone)]
pub struct UnicodeBidiEngine {
    capabilities: Capabilities,
}

impl UnicodeBidiEngine {
    pub fn new() -> Self {
        let (major, minor, micro) = unicode_bidi::UNICODE_VERSION;
        Self {
            capabilities: Capabilities::new(
                ENGINE_NAME,
                ENGINE_VERSION,
                format!("{major}.{minor}.{micro}"),
            ),
        }
    }

    /// Paragraph level to force, or `None` to detect it per paragraph.
    fn paragraph_level(text: &str, direction: Direction) -> Option<Level> {
        match direction {
            Direction::Ltr => Some(LTR_LEVEL),
            Direction::Rtl => Some(RTL_LEVEL),
            // unicode-bidi already falls back to LTR when nothing is strong
            Direction::Natural | Direction::WeakLtr => None,
            Direction::WeakRtl => match get_base_direction(text) {
                unicode_bidi::Direction::Ltr => Some(LTR_LEVEL),
                unicode_bidi::Direction::Rtl | unicode_bidi::Direction::Mixed => Some(RTL_LEVEL),
            },
        }
    }

    fn fallback_base(direction: Direction) -> Direction {
        match direction {
            Direction::Rtl | Direction::WeakRtl => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }
}

impl Default for UnicodeBidiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderEngine for UnicodeBidiEngine {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn reorder(
        &self,
        text: &str,
        direction: Direction,
        options: &ReorderOptions,
    ) -> Result<Reordered> {
        if !self.capabilities.supports(direction) {
            return Err(WordBidiError::invalid_direction(
                direction,
                self.capabilities.direction_names(),
            ));
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Ok(Reordered::empty(Self::fallback_base(direction), options));
        }

        let info = BidiInfo::new(text, Self::paragraph_level(text, direction));
        let byte_starts: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();

        let mut levels: Vec<Level> = Vec::with_capacity(chars.len());
        let mut order: Vec<usize> = Vec::with_capacity(chars.len());

        for para in &info.paragraphs {
            let start = byte_starts.partition_point(|&b| b < para.range.start);
            let end = byte_starts.partition_point(|&b| b < para.range.end);
            if start >= end {
                continue;
            }

            // Each paragraph is laid out as a single line.
            let byte_levels = info.reordered_levels(para, para.range.clone());
            let para_levels: Vec<Level> = byte_starts[start..end]
                .iter()
                .map(|&b| byte_levels[b])
                .collect();

            let mut para_order = BidiInfo::reorder_visual(&para_levels);
            if options.reorder_nsm {
                keep_marks_after_base(&mut para_order, &chars[start..end], &para_levels);
            }

            order.extend(para_order.into_iter().map(|idx| idx + start));
            levels.extend(para_levels);
        }

        let base = match info.paragraphs.first() {
            Some(para) if para.level.is_rtl() => Direction::Rtl,
            Some(_) => Direction::Ltr,
            None => Self::fallback_base(direction),
        };

        let mut visual = String::with_capacity(text.len());
        let mut v2l = Vec::with_capacity(order.len());
        for logical in order {
            let ch = chars[logical];
            if options.clean && is_bidi_mark(ch) {
                continue;
            }
            let ch = if options.mirror && levels[logical].is_rtl() {
                mirror::mirrored(ch)
            } else {
                ch
            };
            visual.push(ch);
            v2l.push(logical);
        }

        log::debug!(
            "{ENGINE_NAME}: reordered {} chars as {direction} (base {base}), {} visible",
            chars.len(),
            v2l.len()
        );
        log::trace!("{ENGINE_NAME}: v2l={v2l:?}");

        let l2v = options.want_l2v.then(|| {
            let mut l2v = vec![None; chars.len()];
            for (visual_idx, &logical) in v2l.iter().enumerate() {
                l2v[logical] = Some(visual_idx);
            }
            l2v
        });
        let levels = options
            .want_levels
            .then(|| levels.iter().map(|level| level.number()).collect());

        Ok(Reordered {
            visual,
            base,
            v2l: options.want_v2l.then_some(v2l),
            l2v,
            levels,
        })
    }
}

/// Bidi control characters dropped from cleaned output: explicit embeddings,
/// overrides and isolates, boundary neutrals, LRM and RLM.
pub fn is_bidi_mark(ch: char) -> bool {
    if ch == LRM || ch == RLM {
        return true;
    }
    matches!(
        bidi_class(ch),
        BidiClass::LRE
            | BidiClass::LRO
            | BidiClass::RLE
            | BidiClass::RLO
            | BidiClass::PDF
            | BidiClass::LRI
            | BidiClass::RLI
            | BidiClass::FSI
            | BidiClass::PDI
            | BidiClass::BN
    )
}

/// Reverse each "marks then base" group that a right-to-left run produced,
/// so the base is displayed first and its marks follow it.
///
/// `order` maps visual to logical indices within `chars` and `levels`.
fn keep_marks_after_base(order: &mut [usize], chars: &[char], levels: &[Level]) {
    let is_mark = |logical: usize| bidi_class(chars[logical]) == BidiClass::NSM;

    let mut v = 0;
    while v < order.len() {
        let level = levels[order[v]];
        if !(level.is_rtl() && is_mark(order[v])) {
            v += 1;
            continue;
        }

        let mut end = v + 1;
        while end < order.len() && levels[order[end]] == level && is_mark(order[end]) {
            end += 1;
        }
        if end < order.len() && levels[order[end]] == level {
            end += 1;
        }
        order[v..end].reverse();
        v = end;
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
