//! Request body for code snippets.
//!
//! A declared example is used verbatim when one exists. Otherwise JSON media
//! types get an example generated from the payload schema.

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::model::{Example, Operation, Payload, Shape, ShapeKind};
use crate::values::{parse_scalar_input, SchemaValues};

/// Nesting limit of generated examples, guards recursive types.
const MAX_DEPTH: usize = 8;

/// Body of a code snippet for the payload with the given media type.
pub fn snippet_payload(
    operation: &Operation,
    request_mime_type: &str,
    values: &dyn SchemaValues,
) -> Option<String> {
    let request = operation.request.as_ref()?;
    let payload = request
        .payloads
        .iter()
        .find(|p| p.media_type.as_deref() == Some(request_mime_type))?;

    if let Some(example) = candidate_examples(payload).find(|e| e.has_value()) {
        return example.value.clone();
    }
    if !is_json(request_mime_type) {
        return None;
    }
    let schema = payload.schema.as_ref()?;
    let generated = generate_json_example(schema, values)?;
    serde_json::to_string_pretty(&generated).ok()
}

/// Examples of the payload followed by the examples of its schema, keeping
/// those with a raw or structured value.
fn candidate_examples(payload: &Payload) -> impl Iterator<Item = &Example> {
    let schema_examples = payload
        .schema
        .as_ref()
        .map(|s| s.examples.as_slice())
        .unwrap_or_default();
    payload
        .examples
        .iter()
        .chain(schema_examples.iter())
        .filter(|e| e.has_value() || e.structured_value.is_some())
}

fn is_json(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    essence == "application/json" || essence.ends_with("+json")
}

/// Build a JSON value that matches a shape.
pub fn generate_json_example(schema: &Shape, values: &dyn SchemaValues) -> Option<JsonValue> {
    generate(schema, values, 0)
}

fn generate(schema: &Shape, values: &dyn SchemaValues, depth: usize) -> Option<JsonValue> {
    if depth > MAX_DEPTH {
        return None;
    }
    match &schema.kind {
        ShapeKind::Scalar(scalar) => {
            let data_type = scalar.data_type.as_deref();
            if let Some(default) = schema.default_value_str.as_deref().filter(|v| !v.is_empty()) {
                return Some(parse_scalar_input(default, data_type));
            }
            if let Some(raw) = schema
                .examples
                .iter()
                .find(|e| e.has_value())
                .and_then(|e| e.value.as_deref())
            {
                return Some(parse_scalar_input(raw, data_type));
            }
            values.generate_default_value(schema)
        }
        ShapeKind::Array(array) => {
            let item = array
                .items
                .as_deref()
                .and_then(|items| generate(items, values, depth + 1));
            Some(JsonValue::Array(item.into_iter().collect()))
        }
        ShapeKind::Object(node) => {
            let mut object = JsonMap::new();
            for property in &node.properties {
                let (Some(name), Some(range)) = (property.name.as_ref(), property.range.as_ref())
                else {
                    continue;
                };
                if let Some(value) = generate(range, values, depth + 1) {
                    object.insert(name.clone(), value);
                }
            }
            Some(JsonValue::Object(object))
        }
        ShapeKind::Union(union) => union
            .any_of
            .first()
            .and_then(|member| generate(member, values, depth + 1)),
        ShapeKind::File | ShapeKind::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyShape, Request};
    use crate::values::DefaultSchemaValues;
    use crate::vocab::xsd;
    use serde_json::json;

    fn operation(payloads: Vec<Payload>) -> Operation {
        Operation {
            method: Some("post".into()),
            request: Some(Request {
                payloads,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn payload(mime: &str, schema: Option<Shape>) -> Payload {
        Payload {
            media_type: Some(mime.to_string()),
            schema,
            ..Default::default()
        }
    }

    fn order() -> Shape {
        Shape::object(
            Some("Order"),
            vec![
                PropertyShape::new("id", Shape::scalar(xsd::INTEGER).with_example("7")),
                PropertyShape::new("status", Shape::scalar(xsd::STRING).with_default("placed")),
                PropertyShape::new("tags", Shape::array(Some(Shape::scalar(xsd::STRING)))),
                PropertyShape::new("paid", Shape::scalar(xsd::BOOLEAN)),
            ],
        )
    }

    #[test]
    fn test_payload_example_is_used() {
        let mut body = payload("application/json", Some(order()));
        body.examples.push(Example::new(r#"{"id": 1}"#));
        let op = operation(vec![body]);
        assert_eq!(
            snippet_payload(&op, "application/json", &DefaultSchemaValues).as_deref(),
            Some(r#"{"id": 1}"#)
        );
    }

    #[test]
    fn test_schema_example_is_used() {
        let schema = order().with_example("<order/>");
        let op = operation(vec![payload("application/xml", Some(schema))]);
        assert_eq!(
            snippet_payload(&op, "application/xml", &DefaultSchemaValues).as_deref(),
            Some("<order/>")
        );
    }

    #[test]
    fn test_generated_json() {
        let op = operation(vec![payload("application/json", Some(order()))]);
        let body = snippet_payload(&op, "application/json", &DefaultSchemaValues).unwrap();
        let value: JsonValue = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "status": "placed", "tags": [""], "paid": false})
        );
    }

    #[test]
    fn test_no_generation_for_other_media_types() {
        let op = operation(vec![payload("application/xml", Some(order()))]);
        assert_eq!(snippet_payload(&op, "application/xml", &DefaultSchemaValues), None);
    }

    #[test]
    fn test_unknown_media_type() {
        let op = operation(vec![payload("application/json", Some(order()))]);
        assert_eq!(snippet_payload(&op, "text/csv", &DefaultSchemaValues), None);
    }

    #[test]
    fn test_json_media_type_detection() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("application/vnd.api+json"));
        assert!(!is_json("application/xml"));
    }

    #[test]
    fn test_empty_default_is_ignored() {
        let count = Shape::scalar(xsd::INTEGER).with_default("");
        assert_eq!(
            generate_json_example(&count, &DefaultSchemaValues),
            Some(json!(0))
        );
        let count = Shape::scalar(xsd::INTEGER).with_default("").with_example("3");
        assert_eq!(
            generate_json_example(&count, &DefaultSchemaValues),
            Some(json!(3))
        );
    }

    #[test]
    fn test_union_uses_first_member() {
        let union = Shape::union(vec![Shape::scalar(xsd::INTEGER), Shape::scalar(xsd::STRING)]);
        assert_eq!(
            generate_json_example(&union, &DefaultSchemaValues),
            Some(json!(0))
        );
    }
}
