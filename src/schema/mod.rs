//! schema.org JSON-LD generators.
//!
//! Every generator returns a typed, serde-serializable struct carrying
//! `"@context": "https://schema.org"`. Structs deserialize back to equal values,
//! so a generated schema survives a JSON round trip unchanged.

pub mod article;
pub mod breadcrumb;
pub mod collection_page;
pub mod faq;
pub mod product;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use article::{generate_article_schema, ArticleSchema};
pub use breadcrumb::{generate_breadcrumb_schema, BreadcrumbItem, BreadcrumbListSchema};
pub use collection_page::{generate_collection_page_schema, CollectionPageSchema};
pub use faq::{generate_faq_schema, FaqPageSchema};
pub use product::{generate_product_schema, ProductSchema};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Schema is not JSON serializable: {0}")]
    SerializationFailure(#[from] serde_json::Error),
}

/// Checks `@context`, `@type` and object shape of an already serialized schema.
pub fn validate_schema(schema: &Value) -> Result<(), SchemaError> {
    let obj = schema
        .as_object()
        .ok_or_else(|| SchemaError::InvalidInput("schema must be a JSON object".into()))?;

    if obj.get("@context").and_then(Value::as_str) != Some(SCHEMA_CONTEXT) {
        return Err(SchemaError::InvalidInput(format!(
            "schema must have @context: \"{SCHEMA_CONTEXT}\""
        )));
    }

    match obj.get("@type").and_then(Value::as_str) {
        Some(kind) if !kind.is_empty() => Ok(()),
        _ => Err(SchemaError::InvalidInput("schema must have a valid @type".into())),
    }
}

/// Serializes `schema`, then validates the result.
pub fn validate<T: Serialize + ?Sized>(schema: &T) -> Result<(), SchemaError> {
    let value = serde_json::to_value(schema)?;
    validate_schema(&value)
}

/// Compact JSON ready for a `<script type="application/ld+json">` block.
pub fn to_json_ld<T: Serialize + ?Sized>(schema: &T) -> Result<String, SchemaError> {
    let value = serde_json::to_value(schema)?;
    validate_schema(&value)?;
    Ok(serde_json::to_string(&value)?)
}

pub(crate) fn context() -> String {
    SCHEMA_CONTEXT.to_string()
}
