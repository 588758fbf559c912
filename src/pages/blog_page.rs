use serde::Serialize;

use crate::catalog::{Catalog, RecordKind};
use crate::config::SiteConfig;
use crate::content::{BlogPost, Tool};
use crate::pages::PageError;
use crate::query::resolve_post_tools;
use crate::schema::{
    generate_article_schema, generate_breadcrumb_schema, validate, ArticleSchema, BreadcrumbItem,
    BreadcrumbListSchema,
};
use crate::seo::{post_breadcrumbs, post_meta, PageMeta};

#[derive(Debug, Serialize)]
pub struct BlogPostPage<'a> {
    pub post: &'a BlogPost,
    pub reading_time_minutes: usize,
    pub article_schema: ArticleSchema,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub breadcrumb_schema: BreadcrumbListSchema,
    pub related_tools: Vec<&'a Tool>,
    pub meta: PageMeta,
}

impl<'a> BlogPostPage<'a> {
    pub fn build(catalog: &'a Catalog, slug: &str, config: &SiteConfig) -> Result<Self, PageError> {
        let post = catalog.post(slug).ok_or_else(|| PageError::NotFound {
            kind: RecordKind::Post,
            slug: slug.to_string(),
        })?;

        let article_schema = generate_article_schema(post, config)?;
        let breadcrumbs = post_breadcrumbs(post, config);
        let breadcrumb_schema = generate_breadcrumb_schema(&breadcrumbs, &config.site_url)?;

        validate(&article_schema)?;
        validate(&breadcrumb_schema)?;

        Ok(Self {
            post,
            reading_time_minutes: post.reading_time_minutes(),
            article_schema,
            breadcrumbs,
            breadcrumb_schema,
            related_tools: resolve_post_tools(post, catalog.tools()),
            meta: post_meta(post, config),
        })
    }
}
