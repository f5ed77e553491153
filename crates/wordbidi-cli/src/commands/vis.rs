//! Vis command implementation
//!
//! Reorders each input line as its own paragraph.

use std::io::{self, Write};

use wordbidi::config::Config;
use wordbidi::{DirectionSpec, ReorderOptions, Result};

use super::{read_input, write_json_line, ReorderedOut};
use crate::cli::VisArgs;

pub fn run(args: &VisArgs, config: &Config) -> Result<()> {
    let direction = args
        .direction
        .as_deref()
        .map_or(DirectionSpec::Value(config.direction), DirectionSpec::from);
    let options = options_for(args, config);
    let input = read_input(args.text.as_deref())?;

    let mut out = io::stdout().lock();
    for line in input.lines() {
        let reordered = wordbidi::log2vis(line, direction.clone(), &options)?;
        if args.positions {
            write_json_line(&mut out, &ReorderedOut::from(reordered))?;
        } else {
            writeln!(out, "{}", reordered.visual)?;
        }
    }

    Ok(())
}

fn options_for(args: &VisArgs, config: &Config) -> ReorderOptions {
    let options = config
        .reorder_options()
        .clean(config.clean && !args.no_clean)
        .reorder_nsm(config.reorder_nsm && !args.no_reorder_nsm)
        .mirror(config.mirror && !args.no_mirror);
    if args.positions {
        options.with_all_maps()
    } else {
        options
    }
}
