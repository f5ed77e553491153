//! Info command implementation
//!
//! Displays engine versions and the accepted paragraph directions.

use std::io;

use serde::Serialize;
use wordbidi::Result;

use super::write_json_line;
use crate::cli::InfoArgs;

#[derive(Serialize)]
struct InfoOut<'a> {
    version: &'a str,
    engine: &'a str,
    engine_version: &'a str,
    unicode_version: &'a str,
    directions: Vec<&'static str>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let caps = wordbidi::capabilities();

    if args.json {
        let info = InfoOut {
            version: env!("CARGO_PKG_VERSION"),
            engine: caps.engine,
            engine_version: &caps.engine_version,
            unicode_version: &caps.unicode_version,
            directions: caps.direction_names().collect(),
        };
        return write_json_line(&mut io::stdout().lock(), &info);
    }

    println!("wordbidi v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Engine:");
    println!("  {:<18}- version {}", caps.engine, caps.engine_version);
    println!("  Unicode           - {}", caps.unicode_version);
    println!();
    println!("Directions:");
    for direction in &caps.directions {
        let aliases = direction.aliases().join(", ");
        println!(
            "  {:<18}- {} (code {:#x})",
            direction.name(),
            aliases,
            direction.code()
        );
    }

    Ok(())
}
