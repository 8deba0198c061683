//! Expanding shorthand into dynamic values.
//!
//! Run with: cargo run --example basic

use expand_object::{expand, get_path};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = [
        "a.b.c:d",
        "a:b|c:d|e:f",
        "a.b:c+d:e+f:g",
        "a:b,c,d",
        "a:b,c:d,e:f",
        "foo:bar,baz,a:b",
        r"a\.b.c\.d",
        "1,2,3,true",
    ];

    for input in inputs {
        let value = expand(input)?;
        println!("{:<20} {}", input, serde_json::to_string(&value)?);
    }

    let value = expand("server.host:localhost+port:8080")?;
    let port = get_path(&value, "server.port");
    println!("\nserver.port = {}", port.map(ToString::to_string).unwrap_or_default());

    Ok(())
}
