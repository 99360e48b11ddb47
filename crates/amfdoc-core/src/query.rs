//! Query parameters for code snippets.
//!
//! Only required parameters are materialized: a snippet shows the smallest
//! valid request. Each value comes from the declared default, then the first
//! example with a value, then a generated placeholder.

use indexmap::IndexMap;
use log::debug;
use serde_json::Value as JsonValue;
use url::form_urlencoded;

use crate::model::{Parameter, Request, Shape, ShapeKind};
use crate::values::{is_usable, value_to_string, SchemaValues};

/// Ordered name to value map of query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryValues(IndexMap<String, JsonValue>);

impl QueryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value; a repeated name keeps its first position.
    pub fn insert(&mut self, name: impl Into<String>, value: JsonValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize as a query string suffix (`?a=1&b=2`), or `""` when empty.
    pub fn to_query_string(&self) -> String {
        apply_url_parameters("", self)
    }
}

/// Append encoded parameters to a URL. Array values repeat the name.
pub fn apply_url_parameters(url: &str, params: &QueryValues) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params.iter() {
        match value {
            JsonValue::Array(items) => {
                for item in items {
                    serializer.append_pair(name, &value_to_string(item));
                }
            }
            other => {
                serializer.append_pair(name, &value_to_string(other));
            }
        }
    }
    let query = serializer.finish();
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}

/// Compute representative values for the required query parameters of a request.
pub fn query_values(request: &Request, values: &dyn SchemaValues) -> QueryValues {
    let params = if !request.query_parameters.is_empty() {
        request.query_parameters.clone()
    } else if let Some(query_string) = &request.query_string {
        collect_query_string_parameters(query_string)
    } else {
        Vec::new()
    };

    let mut result = QueryValues::new();
    for param in params.iter().filter(|p| p.required) {
        let name = param.effective_name();
        let Some(schema) = param.schema.as_ref() else {
            debug!("query parameter '{}' has no schema, skipping", name);
            continue;
        };
        match parameter_value(schema, values) {
            Some(value) => result.insert(name, value),
            None => debug!("no value for query parameter '{}'", name),
        }
    }
    result
}

fn parameter_value(schema: &Shape, values: &dyn SchemaValues) -> Option<JsonValue> {
    if let Some(default) = schema.default_value_str.as_deref().filter(|v| !v.is_empty()) {
        return Some(JsonValue::from(default));
    }
    // Declared examples without a value leave the parameter out
    if !schema.examples.is_empty() {
        return schema
            .examples
            .iter()
            .find(|e| e.has_value())
            .and_then(|e| e.value.clone())
            .map(JsonValue::from);
    }
    values.generate_default_value(schema).filter(is_usable)
}

/// Break a query string shape into parameters: one per property of an object
/// shape, or of every object member of a union.
pub fn collect_query_string_parameters(shape: &Shape) -> Vec<Parameter> {
    match &shape.kind {
        ShapeKind::Object(node) => node
            .properties
            .iter()
            .map(|property| Parameter {
                id: property.id.clone(),
                name: property.name.clone(),
                required: property.is_required(),
                binding: Some("query".to_string()),
                schema: property.range.clone(),
                ..Default::default()
            })
            .collect(),
        ShapeKind::Union(union) => union
            .any_of
            .iter()
            .flat_map(collect_query_string_parameters)
            .collect(),
        _ => Vec::new(),
    }
}
