//! Regex literals inside shorthand.
//!
//! Run with: cargo run --example patterns

use expand_object::{expand, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let rules = expand("errors:/^(ERROR|FATAL)/i|warnings:/^warn/|exact:/a|b+c/")?;
    let lines = ["error: disk full", "Fatal: oom", "warn: slow", "info: ok"];

    for (name, rule) in rules.as_object().into_iter().flatten() {
        let Value::Regex(pattern) = rule else {
            continue;
        };
        let re = pattern.to_regex()?;
        let hits: Vec<_> = lines.iter().filter(|line| re.is_match(line)).collect();
        println!("{:<9} {:<20} {:?}", name, pattern.to_string(), hits);
    }

    // A slash that never closes is plain text.
    println!("{}", expand("path:/usr|x")?);

    Ok(())
}
