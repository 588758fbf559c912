pub mod identifiers;

pub use identifiers::{Slug, SlugError};
