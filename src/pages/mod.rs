//! Page assemblers.
//!
//! Each page gathers every derived view the renderer needs in one pass. A
//! required schema that cannot be generated fails the whole page rather than
//! emitting partial structured data.

pub mod blog_page;
pub mod category_page;
pub mod tool_page;

use thiserror::Error;

use crate::catalog::RecordKind;
use crate::schema::SchemaError;

pub use blog_page::BlogPostPage;
pub use category_page::CategoryPage;
pub use tool_page::ToolPage;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("No {kind} with slug {slug}")]
    NotFound { kind: RecordKind, slug: String },
    #[error("Structured data error: {0}")]
    Schema(#[from] SchemaError),
}
