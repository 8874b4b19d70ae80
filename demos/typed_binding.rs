//! Binding parsed documents onto plain Rust structs.
//!
//! Run with: `cargo run --example typed_binding`

use lax_json::{from_str, from_value, json_record, parse_by_key};

#[derive(Debug, Default)]
struct PoolConfig {
    max_connections: i32,
    idle_timeout_secs: f64,
    name: String,
}

json_record!(PoolConfig {
    max_connections,
    idle_timeout_secs,
    name
});

fn main() {
    let doc = r#"
    {
        "database": {
            "pool": {
                "max_connections": 32.9,
                "name": "primary"
            }
        }
    }
    "#;

    // Bind the whole "pool" object; note the float truncates onto the
    // i32 field and the missing idle_timeout_secs keeps its default.
    let pool: PoolConfig = parse_by_key(doc, "pool").expect("pool config should bind");
    println!("{pool:?}");

    // Individual values coerce too.
    let max: i64 = parse_by_key(doc, "max_connections").expect("key exists");
    println!("max_connections as i64 = {max}");

    // Or go through an explicit Value first.
    let value = from_str("{\"max_connections\": 8}").expect("parses");
    let small: PoolConfig = from_value(value).expect("binds");
    println!("{small:?}");
}
