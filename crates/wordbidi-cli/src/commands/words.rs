//! Words command implementation
//!
//! Maps words given in logical order to their visual position.

use std::io::{self, Write};

use wordbidi::config::Config;
use wordbidi::{DirectionSpec, Result, WordMapper};

use super::{read_input, write_json_line};
use crate::cli::WordsArgs;

pub fn run(args: &WordsArgs, config: &Config) -> Result<()> {
    let words: Vec<String> = if args.words.is_empty() {
        read_input(None)?
            .split_whitespace()
            .map(str::to_string)
            .collect()
    } else {
        args.words.clone()
    };

    let direction = args
        .direction
        .as_deref()
        .map_or(DirectionSpec::Value(config.direction), DirectionSpec::from);
    let clean = config.clean && !args.no_clean;

    let mut mapper = WordMapper::from_config(wordbidi::default_engine(), config);
    if let Some(policy) = args.on_unmatched {
        mapper = mapper.with_policy(policy);
    }

    let mapped = mapper.map_words(&words, direction, clean)?;

    let mut out = io::stdout().lock();
    if args.json {
        write_json_line(&mut out, &mapped)?;
    } else {
        for c in mapped {
            writeln!(out, "{}\t{}\t{}", c.logical_index, c.visual_index, c.text)?;
        }
    }

    Ok(())
}
