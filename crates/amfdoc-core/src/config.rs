//! Configuration for code snippet generation.
//!
//! The configuration can be loaded from a YAML file, created
//! programmatically, or assembled from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use amfdoc_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> amfdoc_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("api-model.json");
//! config.request_mime_type = Some("application/json".to_string());
//!
//! // Or load it from a config file
//! let config = Config::from_file("amfdoc.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

use crate::snippets::SnippetOptions;

/// Configuration for snippet generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path or URL of the serialized API model
    #[serde(default)]
    pub model_path: String,

    /// Base URI that replaces the server URL of the model (Optional)
    #[serde(default)]
    pub base_uri: Option<Url>,

    /// Id of the server used to build URLs; the first server when unset
    #[serde(default)]
    pub server_id: Option<String>,

    /// Media type of the request body shown in snippets
    #[serde(default)]
    pub request_mime_type: Option<String>,

    /// The model describes an asynchronous API, which has no HTTP snippets
    #[serde(default)]
    pub async_api: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Snippet options described by this configuration
    pub fn snippet_options(&self) -> SnippetOptions {
        SnippetOptions {
            base_uri: self.base_uri.as_ref().map(Url::to_string),
            server_id: self.server_id.clone(),
            request_mime_type: self.request_mime_type.clone(),
            async_api: self.async_api,
        }
    }
}
