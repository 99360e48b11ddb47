//! Read-only views over the serialized AMF graph model.
//!
//! The views mirror the JSON produced by the AMF serializer (camelCase keys,
//! `id` instead of `@id`). Missing optional data always deserializes to
//! `None` or an empty collection.

mod operation;
mod shape;

pub use operation::{
    ApiModel, Documentation, EndPoint, Operation, Parameter, Payload, Request, Response, Server,
    Trait,
};
pub use shape::{
    ArrayShape, NodeShape, PropertyShape, ScalarShape, Shape, ShapeKind, UnionShape,
};

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// An example declared on a shape, parameter or payload.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw value of the example as written in the API description
    #[serde(default)]
    pub value: Option<String>,
    /// Parsed structure of the example, when the serializer provides one
    #[serde(default)]
    pub structured_value: Option<JsonValue>,
    #[serde(default)]
    pub media_type: Option<String>,
}

impl Example {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Whether the example carries a non-empty raw value
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}
