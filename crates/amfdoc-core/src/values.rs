//! Representative values for parameters and scalar shapes.
//!
//! The query, header and payload materializers do not invent values on their
//! own. They ask a [`SchemaValues`] implementation, so callers can plug in a
//! generator with a different policy. [`DefaultSchemaValues`] produces stable
//! placeholders that do not depend on the clock.

use serde_json::{Number, Value as JsonValue};

use crate::model::{Parameter, ScalarShape, Shape};
use crate::vocab::{shapes, xsd};

/// Options for [`SchemaValues::read_input_value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValueOptions {
    /// Prefer declared examples over generated placeholders
    pub from_examples: bool,
}

/// Source of representative values for documentation samples.
pub trait SchemaValues {
    /// A plausible placeholder for a shape, or `None` when the type has no
    /// sensible placeholder. `Some(JsonValue::Null)` is a real value.
    fn generate_default_value(&self, schema: &Shape) -> Option<JsonValue>;

    /// The value a request editor would pre-fill for a parameter.
    fn read_input_value(
        &self,
        parameter: &Parameter,
        schema: &Shape,
        options: InputValueOptions,
    ) -> Option<JsonValue>;
}

/// Stock value source.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSchemaValues;

impl SchemaValues for DefaultSchemaValues {
    fn generate_default_value(&self, schema: &Shape) -> Option<JsonValue> {
        let scalar = schema.as_scalar();
        let data_type = scalar.and_then(|s| s.data_type.as_deref());
        if let Some(value) = schema.values.iter().find_map(|v| enum_value(v, data_type)) {
            return Some(value);
        }
        generate_scalar(scalar?)
    }

    fn read_input_value(
        &self,
        parameter: &Parameter,
        schema: &Shape,
        options: InputValueOptions,
    ) -> Option<JsonValue> {
        let data_type = schema.as_scalar().and_then(|s| s.data_type.as_deref());
        if let Some(default) = schema.default_value_str.as_deref().filter(|v| !v.is_empty()) {
            return Some(parse_scalar_input(default, data_type));
        }
        if options.from_examples {
            let example = parameter
                .examples
                .iter()
                .chain(schema.examples.iter())
                .find(|e| e.has_value())
                .and_then(|e| e.value.as_deref());
            if let Some(raw) = example {
                return Some(parse_scalar_input(raw, data_type));
            }
        }
        self.generate_default_value(schema)
    }
}

/// Value of an enum entry. The serializer writes entries as data nodes
/// (`{"types": [...], "value": "asc", "dataType": ...}`); bare JSON scalars
/// are taken as they are.
fn enum_value(entry: &JsonValue, data_type: Option<&str>) -> Option<JsonValue> {
    let JsonValue::Object(node) = entry else {
        return Some(entry.clone());
    };
    let data_type = node
        .get("dataType")
        .and_then(JsonValue::as_str)
        .or(data_type);
    match node.get("value")? {
        JsonValue::String(raw) => Some(parse_scalar_input(raw, data_type)),
        JsonValue::Object(_) | JsonValue::Array(_) => None,
        other => Some(other.clone()),
    }
}

fn generate_scalar(scalar: &ScalarShape) -> Option<JsonValue> {
    let data_type = scalar.data_type.as_deref().unwrap_or(xsd::STRING);
    let value = match data_type {
        xsd::STRING => JsonValue::String(String::new()),
        xsd::INTEGER | xsd::LONG | xsd::FLOAT | xsd::DOUBLE | shapes::NUMBER => {
            JsonValue::from(0)
        }
        xsd::BOOLEAN => JsonValue::Bool(false),
        shapes::NIL => JsonValue::Null,
        xsd::DATE => JsonValue::from("1970-01-01"),
        xsd::TIME => JsonValue::from("00:00:00"),
        shapes::DATE_TIME_ONLY => JsonValue::from("1970-01-01T00:00:00"),
        xsd::DATE_TIME => {
            if scalar.format.as_deref() == Some("rfc2616") {
                JsonValue::from("Thu, 01 Jan 1970 00:00:00 GMT")
            } else {
                JsonValue::from("1970-01-01T00:00:00Z")
            }
        }
        _ => return None,
    };
    Some(value)
}

/// Interpret a raw declared value according to the scalar data type.
pub fn parse_scalar_input(raw: &str, data_type: Option<&str>) -> JsonValue {
    match data_type {
        Some(xsd::INTEGER | xsd::LONG) => raw
            .trim()
            .parse::<i64>()
            .map(JsonValue::from)
            .unwrap_or_else(|_| JsonValue::from(raw)),
        Some(xsd::FLOAT | xsd::DOUBLE | shapes::NUMBER) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|n| {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    Some(JsonValue::from(n as i64))
                } else {
                    Number::from_f64(n).map(JsonValue::Number)
                }
            })
            .unwrap_or_else(|| JsonValue::from(raw)),
        Some(xsd::BOOLEAN) => match raw.trim() {
            "true" => JsonValue::Bool(true),
            "false" => JsonValue::Bool(false),
            _ => JsonValue::from(raw),
        },
        Some(shapes::NIL) if raw.trim() == "null" => JsonValue::Null,
        _ => JsonValue::from(raw),
    }
}

/// Text form of a value as it appears in a URL or a header line.
pub fn value_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Whether a generated value is usable in a sample: `false`, `0` and `null`
/// count, an empty string does not.
pub fn is_usable(value: &JsonValue) -> bool {
    !matches!(value, JsonValue::String(s) if s.is_empty())
}
