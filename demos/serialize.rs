//! Rendering Rust data as pretty-printed document text.
//!
//! Run with: `cargo run --example serialize`

use lax_json::{to_string, to_value};
use serde::Serialize;

#[derive(Serialize)]
struct Release {
    version: String,
    stable: bool,
    downloads: u64,
    // private-by-convention fields serialize like any other
    checksums: Vec<String>,
}

fn main() {
    let release = Release {
        version: "1.4.2".to_string(),
        stable: true,
        downloads: 1_204_775,
        checksums: vec!["ab12".to_string(), "cd34".to_string()],
    };

    // Straight to text, fields in declaration order.
    println!("{}", to_string(&release).expect("serializes"));

    // Or to a dynamic value first, for inspection or editing.
    let value = to_value(&release).expect("serializes");
    println!(
        "downloads = {:?}",
        value.find_by_key("downloads").and_then(|v| v.as_i64())
    );
}
