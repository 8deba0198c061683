//! Filling a typed configuration struct from one shorthand argument.
//!
//! Run with: cargo run --example typed_config -- "name:worker|limits.cpu:2+memory:1024"

use expand_object::from_str;
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Limits {
    cpu: f64,
    memory: u32,
}

#[derive(Debug, Deserialize)]
struct Job {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    limits: Limits,
}

fn main() -> Result<(), Box<dyn Error>> {
    let shorthand = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "name:build|tags:ci,linux|limits.cpu:1.5+memory:512".to_string());

    let job: Job = from_str(&shorthand)?;
    println!("{:#?}", job);
    println!(
        "{} wants {} cpu and {} MiB ({} tags)",
        job.name,
        job.limits.cpu,
        job.limits.memory,
        job.tags.len()
    );

    Ok(())
}
