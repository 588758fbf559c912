use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{BlogPost, Collection, Tool};
use crate::seo::urls::{absolute_url, category_url, post_url, tool_url};

pub const X_DEFAULT: &str = "x-default";

/// Everything the `<head>` of a page needs besides JSON-LD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub hreflang: Vec<HreflangLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub hreflang: String,
    pub href: String,
}

/// Locale link plus `x-default`, both pointing at the canonical URL.
pub fn hreflang_links(canonical: &str, config: &SiteConfig) -> Vec<HreflangLink> {
    vec![
        HreflangLink {
            hreflang: config.locale.clone(),
            href: canonical.to_string(),
        },
        HreflangLink {
            hreflang: X_DEFAULT.to_string(),
            href: canonical.to_string(),
        },
    ]
}

fn page_meta(
    heading: &str,
    description: &str,
    canonical: String,
    kind: &str,
    image: Option<String>,
    config: &SiteConfig,
) -> PageMeta {
    PageMeta {
        title: format!("{heading} | {}", config.site_name),
        description: description.to_string(),
        hreflang: hreflang_links(&canonical, config),
        open_graph: OpenGraph {
            title: heading.to_string(),
            description: description.to_string(),
            url: canonical.clone(),
            kind: kind.to_string(),
            image,
        },
        canonical,
    }
}

pub fn tool_meta(tool: &Tool, config: &SiteConfig) -> PageMeta {
    let image = (!tool.needs_placeholder()).then(|| absolute_url(&config.site_url, &tool.cover_image));
    page_meta(
        &tool.title,
        &tool.short_description,
        tool_url(&config.site_url, tool.slug.as_str()),
        "website",
        image,
        config,
    )
}

pub fn category_meta(collection: &Collection, config: &SiteConfig) -> PageMeta {
    page_meta(
        &collection.title,
        &collection.seo_description,
        category_url(&config.site_url, collection.slug.as_str()),
        "website",
        None,
        config,
    )
}

pub fn post_meta(post: &BlogPost, config: &SiteConfig) -> PageMeta {
    let image = post
        .cover_image
        .as_deref()
        .filter(|image| !image.is_empty())
        .map(|image| absolute_url(&config.site_url, image));
    page_meta(
        &post.title,
        &post.description,
        post_url(&config.site_url, post.slug.as_str()),
        "article",
        image,
        config,
    )
}
