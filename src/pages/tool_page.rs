use serde::Serialize;

use crate::catalog::{Catalog, RecordKind};
use crate::config::SiteConfig;
use crate::content::{Collection, Tool};
use crate::pages::PageError;
use crate::query::{find_related_tools_with_collections, primary_collection, DEFAULT_RELATED_LIMIT};
use crate::schema::{
    generate_breadcrumb_schema, generate_faq_schema, generate_product_schema, validate,
    BreadcrumbItem, BreadcrumbListSchema, FaqPageSchema, ProductSchema,
};
use crate::seo::{tool_breadcrumbs, tool_meta, PageMeta};

#[derive(Debug, Serialize)]
pub struct ToolPage<'a> {
    pub tool: &'a Tool,
    pub primary_collection: Option<&'a Collection>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub product_schema: ProductSchema,
    pub breadcrumb_schema: BreadcrumbListSchema,
    /// Present iff the FAQ section is rendered.
    pub faq_schema: Option<FaqPageSchema>,
    pub related: Vec<&'a Tool>,
    pub meta: PageMeta,
}

impl<'a> ToolPage<'a> {
    pub fn build(catalog: &'a Catalog, slug: &str, config: &SiteConfig) -> Result<Self, PageError> {
        let tool = catalog.tool(slug).ok_or_else(|| PageError::NotFound {
            kind: RecordKind::Tool,
            slug: slug.to_string(),
        })?;
        let site_url = config.site_url.as_str();
        let collections = catalog.collections();

        let breadcrumbs = tool_breadcrumbs(tool, collections, config);
        let product_schema = generate_product_schema(tool, site_url)?;
        let breadcrumb_schema = generate_breadcrumb_schema(&breadcrumbs, site_url)?;
        let faq_schema = generate_faq_schema(tool.faq.as_deref());

        validate(&product_schema)?;
        validate(&breadcrumb_schema)?;
        if let Some(faq) = &faq_schema {
            validate(faq)?;
        }

        let related = find_related_tools_with_collections(
            tool,
            catalog.tools(),
            collections,
            DEFAULT_RELATED_LIMIT,
        );

        log::debug!("tool page {}: {} related", tool.slug, related.len());

        Ok(Self {
            tool,
            primary_collection: primary_collection(tool, collections),
            breadcrumbs,
            product_schema,
            breadcrumb_schema,
            faq_schema,
            related,
            meta: tool_meta(tool, config),
        })
    }
}
