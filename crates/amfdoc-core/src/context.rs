//! Loading and querying a serialized API model.
//!
//! The API model is the output of an AMF serializer: typed views of the
//! graph (`endPoints`, `operations`, `declares`, ...) encoded as JSON or YAML.
//!
//! # Examples
//!
//! ```no_run
//! use amfdoc_core::context::ApiContext;
//! use amfdoc_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let api = ApiContext::from_file_or_url("api-model.json").await?;
//! if let Some(name) = api.name() {
//!     println!("API: {}", name);
//! }
//! for shape in api.declared_types() {
//!     println!("{}: {:?}", shape.id, shape.type_label());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::{debug, warn};
use tokio::fs;
use url::Url;

use crate::model::{ApiModel, Documentation, EndPoint, Operation, Server, Shape};
use crate::Error;

/// A loaded API model with lookup helpers.
#[derive(Debug, Clone)]
pub struct ApiContext {
    model: ApiModel,
}

impl ApiContext {
    pub fn new(model: ApiModel) -> Self {
        Self { model }
    }

    /// Load a model from a file path or an HTTP(S) URL
    pub async fn from_file_or_url<P: AsRef<str>>(location: P) -> crate::Result<Self> {
        let location = location.as_ref();
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::from_url(url.as_str()).await,
            _ => Self::from_file(location).await,
        }
    }

    /// Load a model from a file (JSON or YAML)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        debug!("reading API model file {}", path.display());
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content)
            .map_err(|e| Error::model(format!("{} is not a valid API model: {}", path.display(), e)))
    }

    /// Load a model from a URL (JSON or YAML)
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        debug!("downloading API model from {}", url);
        let content = reqwest::get(url)
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::model(format!("API model download from {} failed: {}", url, e)))?
            .text()
            .await
            .map_err(|e| Error::model(format!("API model download from {} failed: {}", url, e)))?;
        Self::parse_content(&content)
            .map_err(|e| Error::model(format!("{} is not a valid API model: {}", url, e)))
    }

    /// Parse a serialized model. Content that opens like a JSON document is
    /// reported with its JSON error; anything else is read as YAML.
    pub fn parse_content(content: &str) -> crate::Result<Self> {
        let model: ApiModel = if content.trim_start().starts_with(['{', '[']) {
            serde_json::from_str(content)?
        } else {
            serde_yaml::from_str(content)?
        };
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &ApiModel {
        &self.model
    }

    /// Name of the API
    pub fn name(&self) -> Option<&str> {
        self.model.name.as_deref()
    }

    /// Version of the API
    pub fn version(&self) -> Option<&str> {
        self.model.version.as_deref()
    }

    pub fn protocols(&self) -> &[String] {
        &self.model.protocols
    }

    pub fn end_points(&self) -> &[EndPoint] {
        &self.model.end_points
    }

    pub fn declared_types(&self) -> &[Shape] {
        &self.model.declares
    }

    pub fn documentations(&self) -> &[Documentation] {
        &self.model.documentations
    }

    /// Find a declared type by id
    pub fn declared_type(&self, id: &str) -> Option<&Shape> {
        self.model.declares.iter().find(|s| s.id == id)
    }

    /// Find an operation by id, or by its `operationId` when no id matches
    pub fn operation(&self, id: &str) -> Option<&Operation> {
        let operations = || self.model.end_points.iter().flat_map(|e| &e.operations);
        operations()
            .find(|op| op.id == id)
            .or_else(|| operations().find(|op| op.operation_id.as_deref() == Some(id)))
    }

    /// The endpoint that declares the given operation
    pub fn endpoint_of(&self, operation_id: &str) -> Option<&EndPoint> {
        self.model
            .end_points
            .iter()
            .find(|e| e.operations.iter().any(|op| op.id == operation_id))
    }

    /// Servers applicable to an operation. Operation servers override endpoint
    /// servers, which override the API servers.
    pub fn servers_for(&self, operation_id: &str) -> &[Server] {
        let endpoint = self.endpoint_of(operation_id);
        let operation = endpoint.and_then(|e| e.operations.iter().find(|op| op.id == operation_id));
        if let Some(op) = operation.filter(|op| !op.servers.is_empty()) {
            return &op.servers;
        }
        if let Some(ep) = endpoint.filter(|e| !e.servers.is_empty()) {
            return &ep.servers;
        }
        if endpoint.is_none() {
            warn!("operation '{}' is not declared by any endpoint", operation_id);
        }
        &self.model.servers
    }
}
