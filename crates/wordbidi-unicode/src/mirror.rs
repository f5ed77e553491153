//! Mirrored glyphs for characters displayed in right-to-left runs
//!
//! Backed by the `Bidi_Mirroring_Glyph` property from `icu_properties`, so
//! brackets, quotation marks and the mathematical operators all mirror.

use icu_properties::{props::BidiMirroringGlyph, CodePointMapData};

/// Return the mirrored counterpart of `ch`, or `ch` itself if it has none.
pub fn mirrored(ch: char) -> char {
    CodePointMapData::<BidiMirroringGlyph>::new()
        .get(ch)
        .mirroring_glyph
        .unwrap_or(ch)
}
