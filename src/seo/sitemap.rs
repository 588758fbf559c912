use std::collections::BTreeSet;

use crate::config::SiteConfig;
use crate::content::{BlogPost, Collection, Tool};
use crate::seo::urls::{absolute_url, category_url, post_url, tool_url};

/// Site root, configured static pages, then categories, tools and posts.
///
/// Order is stable across builds; a URL listed twice keeps its first position.
pub fn sitemap_urls(
    config: &SiteConfig,
    tools: &[Tool],
    collections: &[Collection],
    posts: &[BlogPost],
) -> Vec<String> {
    let site = config.site_url.as_str();

    let candidates = std::iter::once(site.to_string())
        .chain(config.static_pages.iter().map(|page| absolute_url(site, page)))
        .chain(collections.iter().map(|c| category_url(site, c.slug.as_str())))
        .chain(tools.iter().map(|t| tool_url(site, t.slug.as_str())))
        .chain(posts.iter().map(|p| post_url(site, p.slug.as_str())));

    let mut seen = BTreeSet::new();
    let urls: Vec<String> = candidates.filter(|url| seen.insert(url.clone())).collect();

    log::debug!("sitemap: {} urls", urls.len());
    urls
}
