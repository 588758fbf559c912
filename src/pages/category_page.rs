use serde::Serialize;

use crate::catalog::{Catalog, RecordKind};
use crate::config::SiteConfig;
use crate::content::{Collection, Tool};
use crate::pages::PageError;
use crate::query::{other_collections, sort_tools_by_rating, tools_for_collection};
use crate::schema::{
    generate_breadcrumb_schema, generate_collection_page_schema, validate, BreadcrumbItem,
    BreadcrumbListSchema, CollectionPageSchema,
};
use crate::seo::{category_breadcrumbs, category_meta, PageMeta};

#[derive(Debug, Serialize)]
pub struct CategoryPage<'a> {
    pub collection: &'a Collection,
    /// Members of the collection, best rated first.
    pub tools: Vec<&'a Tool>,
    pub tool_count: usize,
    pub show_comparison: bool,
    pub other_collections: Vec<&'a Collection>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub breadcrumb_schema: BreadcrumbListSchema,
    pub collection_schema: CollectionPageSchema,
    pub meta: PageMeta,
}

impl<'a> CategoryPage<'a> {
    pub fn build(catalog: &'a Catalog, slug: &str, config: &SiteConfig) -> Result<Self, PageError> {
        let collection = catalog.collection(slug).ok_or_else(|| PageError::NotFound {
            kind: RecordKind::Collection,
            slug: slug.to_string(),
        })?;
        let site_url = config.site_url.as_str();

        let tools = sort_tools_by_rating(tools_for_collection(catalog.tools(), collection));
        let breadcrumbs = category_breadcrumbs(collection, config);
        let breadcrumb_schema = generate_breadcrumb_schema(&breadcrumbs, site_url)?;
        let collection_schema = generate_collection_page_schema(collection, &tools, site_url);

        validate(&breadcrumb_schema)?;
        validate(&collection_schema)?;

        log::debug!("category page {}: {} tools", collection.slug, tools.len());

        Ok(Self {
            collection,
            tool_count: tools.len(),
            show_comparison: tools.len() > 1,
            tools,
            other_collections: other_collections(collection, catalog.collections()),
            breadcrumbs,
            breadcrumb_schema,
            collection_schema,
            meta: category_meta(collection, config),
        })
    }
}
