//! API model views: the document root, endpoints, operations and their parts.

use serde::Deserialize;

use super::{Example, Shape};

/// Root of a serialized API model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Schemes supported by the API, e.g. `HTTPS`
    #[serde(default, alias = "schemes")]
    pub protocols: Vec<String>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub end_points: Vec<EndPoint>,
    /// Types declared in the API
    #[serde(default)]
    pub declares: Vec<Shape>,
    #[serde(default)]
    pub documentations: Vec<Documentation>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndPoint {
    #[serde(default)]
    pub id: String,
    /// Relative path of the endpoint, e.g. `/orders/{orderId}`
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub servers: Vec<Server>,
}

/// A named trait applied to an operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trait {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One action on an endpoint (an HTTP method).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub id: String,
    /// Lower case HTTP method as it appears in the graph, e.g. `get`
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub request: Option<Request>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default, alias = "extends")]
    pub traits: Vec<Trait>,
}

impl Operation {
    /// Display label: the operation name, falling back to the method
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.method.as_deref())
    }

    /// Phrase describing the traits mixed into the operation, e.g. `"a, b, and c"`
    pub fn traits_label(&self) -> Option<String> {
        let names: Vec<&str> = self
            .traits
            .iter()
            .filter_map(|t| t.name.as_deref())
            .filter(|n| !n.is_empty())
            .collect();
        match names.as_slice() {
            [] => None,
            [one] => Some(one.to_string()),
            [first, second] => Some(format!("{} and {}", first, second)),
            [init @ .., last] => Some(format!("{}, and {}", init.join(", "), last)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub query_parameters: Vec<Parameter>,
    /// Query string declared as a single shape instead of a parameter list
    #[serde(default)]
    pub query_string: Option<Shape>,
    #[serde(default)]
    pub headers: Vec<Parameter>,
    #[serde(default)]
    pub payloads: Vec<Payload>,
}

/// A named input of an operation (query, header, path or cookie).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Name used on the wire, overrides `name` when set
    #[serde(default)]
    pub param_name: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Where the parameter is bound: `query`, `header`, `path` or `cookie`
    #[serde(default)]
    pub binding: Option<String>,
    #[serde(default)]
    pub schema: Option<Shape>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, schema: Shape) -> Self {
        Self {
            name: Some(name.into()),
            schema: Some(schema),
            ..Default::default()
        }
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Name used in requests: `paramName` when set, `name` otherwise
    pub fn effective_name(&self) -> &str {
        self.param_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub schema: Option<Shape>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headers: Vec<Parameter>,
    #[serde(default)]
    pub payloads: Vec<Payload>,
}

/// A documentation page of the API (RAML `documentation` entries and the like).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Documentation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Documentation {
    /// Title of the page, or `"Unnamed document"`
    pub fn title_label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Unnamed document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_traits(names: &[&str]) -> Operation {
        Operation {
            traits: names
                .iter()
                .map(|n| Trait {
                    id: String::new(),
                    name: Some(n.to_string()),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_traits_label() {
        assert_eq!(with_traits(&[]).traits_label(), None);
        assert_eq!(with_traits(&["paged"]).traits_label().as_deref(), Some("paged"));
        assert_eq!(
            with_traits(&["paged", "secured"]).traits_label().as_deref(),
            Some("paged and secured")
        );
        assert_eq!(
            with_traits(&["paged", "secured", "cached"])
                .traits_label()
                .as_deref(),
            Some("paged, secured, and cached")
        );
    }

    #[test]
    fn test_operation_label() {
        let op: Operation = serde_json::from_value(json!({"method": "post"})).unwrap();
        assert_eq!(op.label(), Some("post"));
        let op: Operation =
            serde_json::from_value(json!({"method": "post", "name": "Create order"})).unwrap();
        assert_eq!(op.label(), Some("Create order"));
    }

    #[test]
    fn test_effective_name() {
        let param: Parameter =
            serde_json::from_value(json!({"name": "limit", "paramName": "page[limit]"})).unwrap();
        assert_eq!(param.effective_name(), "page[limit]");
        let param: Parameter = serde_json::from_value(json!({"name": "limit"})).unwrap();
        assert_eq!(param.effective_name(), "limit");
        assert!(!param.required);
    }

    #[test]
    fn test_documentation_title() {
        let doc = Documentation::default();
        assert_eq!(doc.title_label(), "Unnamed document");
    }
}
