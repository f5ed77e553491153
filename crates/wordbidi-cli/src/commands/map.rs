//! Map command implementation

use std::io;

use wordbidi::Result;

use super::{read_input, write_json_line};
use crate::cli::MapArgs;

pub fn run(args: &MapArgs) -> Result<()> {
    let input = read_input(args.text.as_deref())?;
    let mut out = io::stdout().lock();
    for line in input.lines() {
        write_json_line(&mut out, &wordbidi::reorder_map(line)?)?;
    }
    Ok(())
}
