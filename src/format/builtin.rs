//! Built-in JSON, YAML and TOML codec functions.

use serde::Deserialize;
use serde_json::Value;

use crate::error::BoxError;

pub fn encode_json(value: &Value) -> Result<Vec<u8>, BoxError> {
    Ok(serde_json::to_vec_pretty(value)?)
}

pub fn decode_json(bytes: &[u8]) -> Result<Value, BoxError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_yaml(value: &Value) -> Result<Vec<u8>, BoxError> {
    Ok(serde_yaml::to_string(value)?.into_bytes())
}

/// Rejects `.inf`/`.nan` rather than letting them turn into `null`.
pub fn decode_yaml(bytes: &[u8]) -> Result<Value, BoxError> {
    let doc: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
    if let Some(f) = yaml_non_finite(&doc) {
        return Err(non_finite_error(f));
    }
    Ok(serde_yaml::from_value(doc)?)
}

/// TOML has no null, so `null` members are removed from tables first.
pub fn encode_toml(value: &Value) -> Result<Vec<u8>, BoxError> {
    let mut value = value.clone();
    drop_nulls(&mut value);
    Ok(toml::to_string_pretty(&value)?.into_bytes())
}

/// Rejects `inf`/`nan` rather than letting them turn into `null`.
pub fn decode_toml(bytes: &[u8]) -> Result<Value, BoxError> {
    let text = std::str::from_utf8(bytes)?;
    let doc: toml::Value = toml::from_str(text)?;
    if let Some(f) = toml_non_finite(&doc) {
        return Err(non_finite_error(f));
    }
    Ok(Value::deserialize(doc)?)
}

/// The value tree is JSON, which has no infinity or NaN.
pub(crate) fn non_finite_error(f: f64) -> BoxError {
    format!("non-finite float {f} cannot be represented").into()
}

/// Returns the first infinite or NaN number in a YAML tree.
pub(crate) fn yaml_non_finite(value: &serde_yaml::Value) -> Option<f64> {
    use serde_yaml::Value as Yaml;
    match value {
        Yaml::Number(n) => n.as_f64().filter(|f| !f.is_finite()),
        Yaml::Sequence(items) => items.iter().find_map(yaml_non_finite),
        Yaml::Mapping(map) => map
            .iter()
            .find_map(|(k, v)| yaml_non_finite(k).or_else(|| yaml_non_finite(v))),
        Yaml::Tagged(tagged) => yaml_non_finite(&tagged.value),
        _ => None,
    }
}

fn toml_non_finite(value: &toml::Value) -> Option<f64> {
    match value {
        toml::Value::Float(f) if !f.is_finite() => Some(*f),
        toml::Value::Array(items) => items.iter().find_map(toml_non_finite),
        toml::Value::Table(table) => table.values().find_map(toml_non_finite),
        _ => None,
    }
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}
