//! Parsing documents with unknown shapes into dynamic values.
//!
//! Run with: `cargo run --example dynamic_values`

use lax_json::{from_str, json, Value};

fn main() {
    let doc = r#"
    {
        "service": "billing",
        "replicas": 3,
        "endpoints": [
            {"path": "/invoices", "auth": true},
            {"path": "/health", "auth": false}
        ]
    }
    "#;

    let value = from_str(doc).expect("document should parse");

    // Walk the tree explicitly...
    if let Value::Object(root) = &value {
        println!("service = {:?}", root.get("service").and_then(|v| v.as_str()));
    }

    // ...or search depth-first for a key at any level.
    println!(
        "first path = {:?}",
        value.find_by_key("path").and_then(|v| v.as_str())
    );
    println!(
        "replicas = {:?}",
        value.find_by_key("replicas").and_then(|v| v.as_i64())
    );

    // Values can also be built in code.
    let built = json!({
        "service": "billing",
        "tags": ["internal", "v2"]
    });
    println!("built:\n{}", built);
}
