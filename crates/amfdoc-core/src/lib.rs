//! amfdoc Core Library
//!
//! This library computes the human readable parts of API documentation
//! built from a serialized AMF graph model: type labels of data shapes and
//! the URL, query string, headers and body of code snippets.

pub mod config;
pub mod context;
pub mod error;
pub mod headers;
pub mod label;
pub mod model;
pub mod payload;
pub mod query;
pub mod responses;
pub mod snippets;
pub mod uri;
pub mod values;
pub mod vocab;

pub use crate::{
    config::Config,
    context::ApiContext,
    error::{Error, Result},
    headers::{header_block, header_lines},
    label::resolve_label,
    query::{query_values, QueryValues},
    snippets::{CodeSnippet, SnippetOptions},
    values::{DefaultSchemaValues, SchemaValues},
};
