//! amfdoc CLI entrypoint
//! Parses command-line arguments and dispatches to the core library.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use amfdoc_core::{ApiContext, CodeSnippet, Config, DefaultSchemaValues};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use url::Url;

#[derive(Parser)]
#[command(name = "amfdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the type labels of the declared types
    Labels {
        /// Path or URL to the serialized API model (YAML or JSON)
        #[arg(long)]
        model: String,
        /// Only print the label of the shape with this id
        #[arg(long)]
        shape: Option<String>,
    },
    /// Print the code snippet material of an operation as JSON
    Snippet {
        /// Path or URL to the serialized API model (YAML or JSON)
        ///
        /// Can be omitted when the config file names the model
        #[arg(long)]
        model: Option<String>,
        /// Id (or operationId) of the operation
        #[arg(long)]
        operation: String,
        /// Config file with snippet defaults (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Base URI that replaces the server URL (Optional)
        #[arg(long)]
        base_uri: Option<Url>,
        /// Id of the server to use
        #[arg(long)]
        server_id: Option<String>,
        /// Media type of the request body
        #[arg(long)]
        mime: Option<String>,
    },
    /// Print the query string of the required query parameters of an operation
    Query {
        /// Path or URL to the serialized API model (YAML or JSON)
        #[arg(long)]
        model: String,
        /// Id (or operationId) of the operation
        #[arg(long)]
        operation: String,
    },
}

async fn load_model(location: &str) -> anyhow::Result<ApiContext> {
    info!("Loading API model from: {}", location);
    ApiContext::from_file_or_url(location)
        .await
        .with_context(|| format!("Failed to load API model from {}", location))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Labels { model, shape } => {
            let api = load_model(model).await?;
            match shape {
                Some(id) => {
                    let shape = api
                        .declared_type(id)
                        .ok_or_else(|| anyhow::anyhow!("Shape '{}' is not declared", id))?;
                    println!("{}", shape.type_label().unwrap_or_default());
                }
                None => {
                    for shape in api.declared_types() {
                        println!("{}\t{}", shape.id, shape.type_label().unwrap_or_default());
                    }
                }
            }
        }
        Commands::Snippet {
            model,
            operation,
            config,
            base_uri,
            server_id,
            mime,
        } => {
            let mut settings = match config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to read config {}", path.display()))?,
                None => Config::default(),
            };
            // Flags win over the config file
            if let Some(model) = model {
                settings.model_path = model.clone();
            }
            if base_uri.is_some() {
                settings.base_uri = base_uri.clone();
            }
            if server_id.is_some() {
                settings.server_id = server_id.clone();
            }
            if mime.is_some() {
                settings.request_mime_type = mime.clone();
            }
            if settings.model_path.is_empty() {
                anyhow::bail!("No API model given, use --model or set model_path in the config");
            }
            debug!(?settings, "resolved snippet settings");

            let api = load_model(&settings.model_path).await?;
            let snippet = CodeSnippet::build(&api, operation, &settings.snippet_options())
                .context("Failed to build code snippet")?;
            println!("{}", serde_json::to_string_pretty(&snippet)?);
        }
        Commands::Query { model, operation } => {
            let api = load_model(model).await?;
            let op = api
                .operation(operation)
                .ok_or_else(|| anyhow::anyhow!("Operation '{}' not found", operation))?;
            let query = op
                .request
                .as_ref()
                .map(|request| amfdoc_core::query_values(request, &DefaultSchemaValues))
                .unwrap_or_default();
            println!("{}", query.to_query_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snippet_args() {
        let cli = Cli::try_parse_from([
            "amfdoc",
            "snippet",
            "--model",
            "api.json",
            "--operation",
            "createOrder",
            "--mime",
            "application/json",
        ])
        .unwrap();
        match cli.command {
            Commands::Snippet {
                model,
                operation,
                mime,
                base_uri,
                ..
            } => {
                assert_eq!(model.as_deref(), Some("api.json"));
                assert_eq!(operation, "createOrder");
                assert_eq!(mime.as_deref(), Some("application/json"));
                assert!(base_uri.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base_uri_is_rejected() {
        let result = Cli::try_parse_from([
            "amfdoc",
            "snippet",
            "--operation",
            "x",
            "--base-uri",
            "not a url",
        ]);
        assert!(result.is_err());
    }
}
