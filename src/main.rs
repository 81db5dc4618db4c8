//! A binary executable that demonstrates how to use the `sift-json` library.
//!
//! This is not part of the library itself, but provides a simple example
//! of decoding both valid and malformed input.
//!
//! You can run this example with: `cargo run`

use sift_json::from_json;

fn main() {
    let input = r#"
    {
        "user_id": 18446744073709551616,
        "username": "big_int_user",
        "active": true,
        "nested": { "values": [1.5, null] }
    }
    "#;
    println!("--- Decoding a valid document ---");
    println!("Input:{input}");
    match from_json(input) {
        Ok(Some(value)) => println!("Decoded: {value:#?}"),
        Ok(None) => println!("Input was empty"),
        Err(e) => println!("{e}"),
    }

    println!("\n--- Decoding a malformed document ---");
    let bad_input = r#"{"a":13"#;
    println!("Input: {bad_input}");
    match from_json(bad_input) {
        Ok(value) => println!("Decoded: {value:?}"),
        Err(e) => println!("{e}"),
    }
}
