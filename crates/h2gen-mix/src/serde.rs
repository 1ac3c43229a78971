use std::collections::BTreeMap;

use h2gen_core::errors::{ErrorInfo, H2Error};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

fn serde_error(code: &str, err: impl ToString) -> H2Error {
    H2Error::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect();
            Value::Object(ordered.into_iter().collect())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON with deterministic key order.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, H2Error> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    serde_json::to_string(&canonicalize(value)).map_err(|err| serde_error("json-write", err))
}

/// Serializes a value into canonical JSON bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, H2Error> {
    to_canonical_json_string(value).map(String::into_bytes)
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, H2Error> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-deserialize", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, H2Error> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-serialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, H2Error> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml-deserialize", err))
}
