//! Deterministic query, ranking and structured-data generation for an AI
//! tools catalog.
//!
//! `catalog-core` takes already-parsed content records (tools, categories,
//! blog posts) and derives everything a static site renders from them:
//! rating and date ordering, AND tag filtering, category membership,
//! related-tool ranking, schema.org JSON-LD, page meta and sitemap URLs.
//! All operations are pure: identical inputs always produce identical
//! outputs, and inputs are never mutated.

pub mod catalog;
pub mod config;
pub mod content;
pub mod pages;
pub mod query;
pub mod schema;
pub mod seo;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
