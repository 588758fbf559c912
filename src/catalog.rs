use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{BlogPost, Collection, Tool};
use crate::query::sort_collections_by_order;
use crate::types::identifiers::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Tool,
    Collection,
    Post,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Tool => "tool",
            RecordKind::Collection => "collection",
            RecordKind::Post => "post",
        })
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: RecordKind, slug: Slug },
    #[error("Tool has no tags: {0}")]
    EmptyTags(Slug),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wire shape accepted by the loaders.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogRecords {
    tools: Vec<Tool>,
    collections: Vec<Collection>,
    posts: Vec<BlogPost>,
}

/// Read-only snapshot of every record of one build.
///
/// Constructed only through [`Catalog::new`], which enforces slug uniqueness
/// per kind and non-empty tool tags. Record order is the content order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
    collections: Vec<Collection>,
    posts: Vec<BlogPost>,
}

impl Catalog {
    pub fn new(
        tools: Vec<Tool>,
        collections: Vec<Collection>,
        posts: Vec<BlogPost>,
    ) -> Result<Self, CatalogError> {
        if let Some(tool) = tools.iter().find(|t| t.tags.is_empty()) {
            return Err(CatalogError::EmptyTags(tool.slug.clone()));
        }

        ensure_unique(RecordKind::Tool, tools.iter().map(|t| &t.slug))?;
        ensure_unique(RecordKind::Collection, collections.iter().map(|c| &c.slug))?;
        ensure_unique(RecordKind::Post, posts.iter().map(|p| &p.slug))?;

        log::debug!(
            "catalog loaded: {} tools, {} collections, {} posts",
            tools.len(),
            collections.len(),
            posts.len()
        );

        Ok(Self {
            tools,
            collections,
            posts,
        })
    }

    /// Parses `{"tools": [...], "collections": [...], "posts": [...]}`.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let records: CatalogRecords = serde_json::from_str(raw)?;
        Self::new(records.tools, records.collections, records.posts)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: CatalogRecords = serde_json::from_reader(reader)?;
        Self::new(records.tools, records.collections, records.posts)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn tool(&self, slug: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.slug == slug)
    }

    pub fn collection(&self, slug: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn collections_by_order(&self) -> Vec<&Collection> {
        sort_collections_by_order(&self.collections)
    }
}

fn ensure_unique<'a, I>(kind: RecordKind, slugs: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = &'a Slug>,
{
    let mut sorted: Vec<&Slug> = slugs.into_iter().collect();
    sorted.sort();

    // Duplicates are adjacent after sort
    for pair in sorted.windows(2) {
        if pair[0] == pair[1] {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: pair[0].clone(),
            });
        }
    }
    Ok(())
}
