/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use lax_json::json;
///
/// let data = json!({
///     "name": "Alice",
///     "scores": [1, 2, 3],
///     "active": true
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    }};
}

/// Registers a struct as a coercion target: implements
/// [`FromValue`](crate::FromValue) by binding same-named object entries
/// onto its fields.
///
/// The struct must implement `Default`. Each listed field looks up its
/// entry in the object and coerces it recursively; a missing entry leaves
/// the field at its default value. Coercing anything other than an object
/// into the struct fails.
///
/// ```rust
/// use lax_json::{from_str, from_value, json_record};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Config {
///     host: String,
///     port: i32,
/// }
///
/// json_record!(Config { host, port });
///
/// let value = from_str("{\"host\": \"localhost\"}").unwrap();
/// let config: Config = from_value(value).unwrap();
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 0); // missing entry keeps the default
/// ```
#[macro_export]
macro_rules! json_record {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::FromValue for $name {
            fn from_value(value: $crate::Value) -> $crate::Result<Self> {
                match value {
                    $crate::Value::Object(mut map) => {
                        let mut record = <$name as ::core::default::Default>::default();
                        $(
                            if let Some(member) = map.remove(stringify!($field)) {
                                record.$field = $crate::FromValue::from_value(member)?;
                            }
                        )*
                        Ok(record)
                    }
                    other => Err($crate::Error::coerce(
                        other.kind_name(),
                        stringify!($name),
                    )),
                }
            }
        }
    };
}
