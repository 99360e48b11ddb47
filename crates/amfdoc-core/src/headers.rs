//! Header lines for code snippets.

use log::debug;

use crate::model::Operation;
use crate::values::{value_to_string, InputValueOptions, SchemaValues};

const CONTENT_TYPE: &str = "content-type";

/// Compute `name: value` header lines for an operation's request.
///
/// Only scalar headers take part. A `content-type` line is appended when
/// the request declares none, a mime type is known and the method is not
/// `get`.
pub fn header_lines(
    operation: &Operation,
    request_mime_type: Option<&str>,
    values: &dyn SchemaValues,
) -> Vec<String> {
    let Some(request) = operation.request.as_ref() else {
        return Vec::new();
    };

    let options = InputValueOptions {
        from_examples: true,
    };
    let mut lines = Vec::new();
    let mut has_mime = false;
    for param in &request.headers {
        let name = param.effective_name();
        let Some(schema) = param.schema.as_ref().filter(|s| s.is_scalar()) else {
            debug!("header '{}' is not a scalar, skipping", name);
            continue;
        };
        // Array values are joined with commas by `value_to_string`.
        let Some(value) = values.read_input_value(param, schema, options) else {
            continue;
        };
        let value = value_to_string(&value);
        if name.eq_ignore_ascii_case(CONTENT_TYPE) {
            has_mime = true;
        }
        lines.push(format!("{}: {}", name, value));
    }

    if let Some(mime) = request_mime_type.filter(|m| !m.is_empty()) {
        if !has_mime && operation.method.as_deref() != Some("get") {
            lines.push(format!("{}: {}", CONTENT_TYPE, mime));
        }
    }
    lines
}

/// Header lines joined with new lines, the form code snippet renderers take.
pub fn header_block(
    operation: &Operation,
    request_mime_type: Option<&str>,
    values: &dyn SchemaValues,
) -> String {
    header_lines(operation, request_mime_type, values).join("\n")
}
