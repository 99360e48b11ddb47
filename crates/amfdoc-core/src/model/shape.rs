//! Data shapes of the API model.
//!
//! A serialized shape carries a `types` set of vocabulary URIs. The set is
//! inspected once while deserializing and turned into a [`ShapeKind`], so the
//! rest of the crate matches on the variant instead of testing membership.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::Example;
use crate::vocab;

/// A data shape (scalar, array, object, union or file) with its value metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ShapeNode")]
pub struct Shape {
    /// The `@id` of the node in the graph
    pub id: String,
    /// Declared name of the shape, if any
    pub name: Option<String>,
    /// Default value as declared in the API description
    pub default_value_str: Option<String>,
    /// Examples declared on the shape
    pub examples: Vec<Example>,
    /// Enum values declared on the shape
    pub values: Vec<JsonValue>,
    /// The variant of the shape
    pub kind: ShapeKind,
}

/// Variant data of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Scalar(ScalarShape),
    Array(ArrayShape),
    Object(NodeShape),
    Union(UnionShape),
    File,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalarShape {
    /// Data type URI, e.g. `http://www.w3.org/2001/XMLSchema#string`
    pub data_type: Option<String>,
    /// Format hint, e.g. `int64` or `rfc2616`
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayShape {
    pub items: Option<Box<Shape>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeShape {
    pub properties: Vec<PropertyShape>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnionShape {
    pub any_of: Vec<Shape>,
}

/// A named property of an object shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyShape {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Shape of the property value
    #[serde(default)]
    pub range: Option<Shape>,
    /// Minimum number of occurrences; a value above zero makes the property required
    #[serde(default)]
    pub min_count: u32,
}

/// Wire form of a shape, as produced by the AMF serializer.
///
/// `types` has no default: a node without it is malformed and fails to load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapeNode {
    #[serde(default)]
    id: String,
    types: Vec<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    default_value_str: Option<String>,
    #[serde(default)]
    examples: Vec<Example>,
    #[serde(default)]
    values: Vec<JsonValue>,
    #[serde(default)]
    data_type: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    items: Option<Box<Shape>>,
    #[serde(default)]
    properties: Vec<PropertyShape>,
    #[serde(default)]
    any_of: Vec<Shape>,
}

impl From<ShapeNode> for Shape {
    fn from(node: ShapeNode) -> Self {
        let has = |uri: &str| node.types.iter().any(|t| t == uri);
        let kind = if has(vocab::shapes::SCALAR_SHAPE) {
            ShapeKind::Scalar(ScalarShape {
                data_type: node.data_type,
                format: node.format,
            })
        } else if has(vocab::shapes::ARRAY_SHAPE) {
            ShapeKind::Array(ArrayShape { items: node.items })
        } else if has(vocab::shacl::NODE_SHAPE) {
            ShapeKind::Object(NodeShape {
                properties: node.properties,
            })
        } else if has(vocab::shapes::UNION_SHAPE) {
            ShapeKind::Union(UnionShape {
                any_of: node.any_of,
            })
        } else if has(vocab::shapes::FILE_SHAPE) {
            ShapeKind::File
        } else {
            ShapeKind::Unknown
        };

        Self {
            id: node.id,
            name: node.name,
            default_value_str: node.default_value_str,
            examples: node.examples,
            values: node.values,
            kind,
        }
    }
}

impl Shape {
    /// Create a shape of the given kind with no metadata
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: String::new(),
            name: None,
            default_value_str: None,
            examples: Vec::new(),
            values: Vec::new(),
            kind,
        }
    }

    /// Create a scalar shape for a data type URI
    pub fn scalar(data_type: impl Into<String>) -> Self {
        Self::new(ShapeKind::Scalar(ScalarShape {
            data_type: Some(data_type.into()),
            format: None,
        }))
    }

    /// Create an array shape
    pub fn array(items: Option<Shape>) -> Self {
        Self::new(ShapeKind::Array(ArrayShape {
            items: items.map(Box::new),
        }))
    }

    /// Create an object shape
    pub fn object(name: Option<&str>, properties: Vec<PropertyShape>) -> Self {
        let mut shape = Self::new(ShapeKind::Object(NodeShape { properties }));
        shape.name = name.map(String::from);
        shape
    }

    /// Create a union shape
    pub fn union(any_of: Vec<Shape>) -> Self {
        Self::new(ShapeKind::Union(UnionShape { any_of }))
    }

    /// Set the declared default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value_str = Some(value.into());
        self
    }

    /// Append an example with a raw value
    pub fn with_example(mut self, value: impl Into<String>) -> Self {
        self.examples.push(Example::new(value));
        self
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, ShapeKind::Scalar(_))
    }

    /// The scalar variant data, if this is a scalar shape
    pub fn as_scalar(&self) -> Option<&ScalarShape> {
        match &self.kind {
            ShapeKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

impl PropertyShape {
    pub fn new(name: impl Into<String>, range: Shape) -> Self {
        Self {
            id: String::new(),
            name: Some(name.into()),
            range: Some(range),
            min_count: 0,
        }
    }

    /// Mark the property as required
    pub fn required(mut self) -> Self {
        self.min_count = 1;
        self
    }

    pub fn is_required(&self) -> bool {
        self.min_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_types() {
        let shape: Shape = serde_json::from_value(json!({
            "id": "s1",
            "types": [vocab::shapes::SCALAR_SHAPE, "http://a.ml/vocabularies/shapes#AnyShape"],
            "dataType": vocab::xsd::STRING,
            "defaultValueStr": "abc"
        }))
        .unwrap();
        assert_eq!(shape.id, "s1");
        assert_eq!(shape.default_value_str.as_deref(), Some("abc"));
        assert_eq!(
            shape.as_scalar().and_then(|s| s.data_type.as_deref()),
            Some(vocab::xsd::STRING)
        );
    }

    #[test]
    fn test_scalar_wins_over_other_facets() {
        let shape: Shape = serde_json::from_value(json!({
            "types": [vocab::shapes::UNION_SHAPE, vocab::shapes::SCALAR_SHAPE]
        }))
        .unwrap();
        assert!(shape.is_scalar());
    }

    #[test]
    fn test_nested_shapes() {
        let shape: Shape = serde_json::from_value(json!({
            "types": [vocab::shapes::ARRAY_SHAPE],
            "items": {
                "types": [vocab::shacl::NODE_SHAPE],
                "name": "Item",
                "properties": [{
                    "name": "value",
                    "minCount": 1,
                    "range": { "types": [vocab::shapes::SCALAR_SHAPE], "dataType": vocab::xsd::INTEGER }
                }]
            }
        }))
        .unwrap();
        let ShapeKind::Array(array) = &shape.kind else {
            panic!("expected an array shape");
        };
        let items = array.items.as_deref().unwrap();
        assert_eq!(items.name.as_deref(), Some("Item"));
        let ShapeKind::Object(node) = &items.kind else {
            panic!("expected an object shape");
        };
        assert!(node.properties[0].is_required());
    }

    #[test]
    fn test_unknown_types() {
        let shape: Shape =
            serde_json::from_value(json!({ "types": ["http://example.com/Other"] })).unwrap();
        assert_eq!(shape.kind, ShapeKind::Unknown);
    }

    #[test]
    fn test_missing_types_is_rejected() {
        let result = serde_json::from_value::<Shape>(json!({ "dataType": vocab::xsd::STRING }));
        assert!(result.is_err());
    }
}
