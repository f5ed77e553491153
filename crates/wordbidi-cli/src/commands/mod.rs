//! Command implementations

pub mod batch;
pub mod info;
pub mod map;
pub mod vis;
pub mod words;

use std::io::{self, Read, Write};

use serde::Serialize;
use wordbidi::{Reordered, Result};

/// The argument if given, otherwise all of stdin.
pub(crate) fn read_input(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        },
    }
}

/// Write `value` as one line of JSON.
///
/// Encoding failures surface as I/O errors: they happen while writing output.
pub(crate) fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct ReorderedOut {
    pub visual: String,
    pub base: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2l: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2v: Option<Vec<Option<usize>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<u8>>,
}

impl From<Reordered> for ReorderedOut {
    fn from(r: Reordered) -> Self {
        Self {
            visual: r.visual,
            base: r.base.name(),
            v2l: r.v2l,
            l2v: r.l2v,
            levels: r.levels,
        }
    }
}
