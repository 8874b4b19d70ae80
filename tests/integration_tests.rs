use lax_json::{
    from_str, from_value, json_record, parse_by_key, to_string, to_value, Parser, Value,
};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    total: f64,
}

#[derive(Debug, Default, PartialEq)]
struct ServerConfig {
    host: String,
    port: i32,
    timeout_secs: f64,
    verbose: bool,
}

json_record!(ServerConfig {
    host,
    port,
    timeout_secs,
    verbose
});

#[derive(Debug, Default, PartialEq)]
struct Limits {
    low: i16,
    high: i16,
}

json_record!(Limits { low, high });

#[derive(Debug, Default, PartialEq)]
struct Profile {
    name: String,
    limits: Limits,
    aliases: Vec<String>,
}

json_record!(Profile {
    name,
    limits,
    aliases
});

#[test]
fn test_serialize_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    let expected = "{\n  \"id\": 123,\n  \"name\": \"Alice\",\n  \"active\": true,\n  \"tags\": [\n    \"admin\",\n    \"developer\"\n  ]\n}";
    assert_eq!(text, expected);
}

#[test]
fn test_serialize_nested_struct_then_reparse() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        total: 109.97,
    };

    let text = to_string(&order).unwrap();
    let value = from_str(&text).unwrap();

    assert_eq!(value.find_by_key("order_id").and_then(|v| v.as_i64()), Some(12345));
    assert_eq!(value.find_by_key("name").and_then(|v| v.as_str()), Some("Alice"));
    assert_eq!(value.find_by_key("total").and_then(|v| v.as_f64()), Some(109.97));
}

#[test]
fn test_bind_object_onto_record() {
    let doc = "{\n  \"host\": \"example.com\",\n  \"port\": 8080,\n  \"timeout_secs\": 2.5,\n  \"verbose\": true\n}";
    let config: ServerConfig = from_value(from_str(doc).unwrap()).unwrap();
    assert_eq!(
        config,
        ServerConfig {
            host: "example.com".to_string(),
            port: 8080,
            timeout_secs: 2.5,
            verbose: true,
        }
    );
}

#[test]
fn test_missing_entries_keep_defaults() {
    let config: ServerConfig = from_value(from_str("{\"port\": 9}").unwrap()).unwrap();
    assert_eq!(config.port, 9);
    assert_eq!(config.host, "");
    assert_eq!(config.timeout_secs, 0.0);
    assert!(!config.verbose);
}

#[test]
fn test_record_fields_coerce_numerically() {
    // floats bound onto i16 fields truncate
    let limits: Limits = from_value(from_str("{\"low\": 1.9, \"high\": 7.2}").unwrap()).unwrap();
    assert_eq!(limits, Limits { low: 1, high: 7 });
}

#[test]
fn test_nested_record_binding() {
    let doc = "{\"name\": \"base\", \"limits\": {\"low\": 1, \"high\": 10}, \"aliases\": [\"b\", \"dflt\"]}";
    let profile: Profile = from_value(from_str(doc).unwrap()).unwrap();
    assert_eq!(profile.name, "base");
    assert_eq!(profile.limits, Limits { low: 1, high: 10 });
    assert_eq!(profile.aliases, vec!["b".to_string(), "dflt".to_string()]);
}

#[test]
fn test_record_binding_rejects_non_object() {
    let err = from_value::<ServerConfig>(from_str("[1, 2]").unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "cannot coerce array into ServerConfig");
}

#[test]
fn test_parse_by_key_with_record_target() {
    let doc = "{\"servers\": [{\"primary\": {\"host\": \"a\", \"port\": 1}}]}";
    let config: ServerConfig = parse_by_key(doc, "primary").unwrap();
    assert_eq!(config.host, "a");
    assert_eq!(config.port, 1);
}

#[test]
fn test_parser_reuse_for_search_and_full_parse() {
    let mut parser = Parser::from_str("{\"a\": {\"n\": 5}}").unwrap();
    let n: i64 = parser.parse_by_key("n").unwrap();
    assert_eq!(n, 5);
    // the cursor resets, so a full parse still works afterwards
    let doc = parser.parse().unwrap();
    assert!(doc.is_object());
}

#[test]
fn test_value_display_matches_to_string() {
    let value = from_str("{\"a\": [1, 2]}").unwrap();
    assert_eq!(value.to_string(), to_string(&value).unwrap());
}

#[test]
fn test_to_value_of_value_is_identity() {
    let value = from_str("{\"a\": [1, 2.5, null]}").unwrap();
    assert_eq!(to_value(&value).unwrap(), value);
}

#[test]
fn test_serde_json_interop_via_value() {
    // Value implements Deserialize, so strict-JSON text can be read into
    // it by serde_json and then rendered by this crate.
    let value: Value = serde_json::from_str("{\"a\": [1, true, \"x\"]}").unwrap();
    assert_eq!(value.find_by_key("a").and_then(|v| v.as_array()).map(Vec::len), Some(3));

    // And Value implements Serialize, so serde_json can render our trees.
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "{\"a\":[1,true,\"x\"]}");
}

#[test]
fn test_hashmap_serializes_as_object() {
    use std::collections::BTreeMap;

    let mut map = BTreeMap::new();
    map.insert("one", 1);
    map.insert("two", 2);

    let value = to_value(&map).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("one"), Some(&Value::Integer(1)));
    assert_eq!(object.get("two"), Some(&Value::Integer(2)));
}

#[test]
fn test_option_fields_serialize_as_null() {
    #[derive(Serialize)]
    struct Sparse {
        present: Option<i32>,
        absent: Option<i32>,
    }

    let text = to_string(&Sparse {
        present: Some(1),
        absent: None,
    })
    .unwrap();
    assert_eq!(text, "{\n  \"present\": 1,\n  \"absent\": null\n}");
}
