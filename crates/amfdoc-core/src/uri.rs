//! Endpoint URL composition.
//!
//! The base comes from an explicit base URI when one is set, otherwise from
//! the selected server. The endpoint path is appended to it.

use crate::model::{EndPoint, Server};

/// Inputs of [`compute_endpoint_uri`].
#[derive(Debug, Clone, Default)]
pub struct EndpointUriOptions<'a> {
    /// Overrides the server URL when set
    pub base_uri: Option<&'a str>,
    pub server: Option<&'a Server>,
    pub endpoint: Option<&'a EndPoint>,
    /// Protocols declared by the API, the first one is used for servers without a scheme
    pub protocols: &'a [String],
    /// Replaces the `{version}` variable of the server URL
    pub version: Option<&'a str>,
}

/// Pick the server with the given id, or the first server.
pub fn select_server<'a>(servers: &'a [Server], server_id: Option<&str>) -> Option<&'a Server> {
    match server_id.filter(|id| !id.is_empty()) {
        Some(id) => servers.iter().find(|s| s.id == id),
        None => servers.first(),
    }
}

/// Base URI of the API without a trailing slash, or `""` when unknown.
pub fn compute_api_base_uri(options: &EndpointUriOptions<'_>) -> String {
    if let Some(base_uri) = options.base_uri.filter(|b| !b.is_empty()) {
        return base_uri.trim_end_matches('/').to_string();
    }
    let Some(server) = options.server else {
        return String::new();
    };
    let base = server.url.trim_end_matches('/');
    if base.is_empty() {
        return String::new();
    }
    let mut base = set_protocol(base, options.protocols);
    if let Some(version) = options.version.filter(|v| !v.is_empty()) {
        base = base.replace("{version}", version);
    }
    base
}

/// Full URL of an endpoint.
pub fn compute_endpoint_uri(options: &EndpointUriOptions<'_>) -> String {
    let base = compute_api_base_uri(options);
    let path = options.endpoint.map(|e| e.path.as_str()).unwrap_or_default();
    if base.ends_with('/') && path.starts_with('/') {
        return format!("{}{}", base, &path[1..]);
    }
    format!("{}{}", base, path)
}

fn set_protocol(base: &str, protocols: &[String]) -> String {
    if base.contains("://") {
        return base.to_string();
    }
    let protocol = protocols
        .first()
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| "http".to_string());
    format!("{}://{}", protocol, base)
}
