//! Code snippet material for one operation.
//!
//! A [`CodeSnippet`] holds everything a snippet renderer (curl, fetch, ...)
//! needs: the request URL with its query string, the method, the header
//! lines and the body.

use log::debug;
use serde::Serialize;

use crate::context::ApiContext;
use crate::headers::header_block;
use crate::payload::snippet_payload;
use crate::query::query_values;
use crate::uri::{compute_endpoint_uri, select_server, EndpointUriOptions};
use crate::values::{DefaultSchemaValues, SchemaValues};
use crate::Error;

/// Inputs that are not part of the API model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetOptions {
    /// Replaces the server URL when set
    pub base_uri: Option<String>,
    /// Id of the server to use; the first server when unset
    pub server_id: Option<String>,
    /// Media type of the request body
    pub request_mime_type: Option<String>,
    /// Asynchronous APIs have no URL, headers or body to show
    pub async_api: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CodeSnippet {
    /// Endpoint URL followed by the query string of required parameters
    pub url: String,
    /// Upper case HTTP method
    pub method: String,
    /// Header lines separated by new lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl CodeSnippet {
    /// Build the snippet of an operation with the stock value source
    pub fn build(
        api: &ApiContext,
        operation_id: &str,
        options: &SnippetOptions,
    ) -> crate::Result<Self> {
        Self::build_with(api, operation_id, options, &DefaultSchemaValues)
    }

    /// Build the snippet of an operation with a custom value source
    pub fn build_with(
        api: &ApiContext,
        operation_id: &str,
        options: &SnippetOptions,
        values: &dyn SchemaValues,
    ) -> crate::Result<Self> {
        let operation = api
            .operation(operation_id)
            .ok_or_else(|| Error::model(format!("Operation '{}' not found", operation_id)))?;
        let method = operation
            .method
            .as_deref()
            .unwrap_or_default()
            .to_uppercase();
        if options.async_api {
            debug!("'{}' belongs to an async API, no snippet material", operation_id);
            return Ok(Self {
                method,
                ..Default::default()
            });
        }

        let servers = api.servers_for(&operation.id);
        let server = select_server(servers, options.server_id.as_deref());
        let url = compute_endpoint_uri(&EndpointUriOptions {
            base_uri: options.base_uri.as_deref(),
            server,
            endpoint: api.endpoint_of(&operation.id),
            protocols: api.protocols(),
            version: api.version(),
        });
        let query = operation
            .request
            .as_ref()
            .map(|request| query_values(request, values).to_query_string())
            .unwrap_or_default();

        let mime = options.request_mime_type.as_deref();
        let headers = Some(header_block(operation, mime, values)).filter(|h| !h.is_empty());
        let payload = mime.and_then(|m| snippet_payload(operation, m, values));

        Ok(Self {
            url: format!("{}{}", url, query),
            method,
            headers,
            payload,
        })
    }
}
