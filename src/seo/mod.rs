pub mod breadcrumbs;
pub mod meta;
pub mod sitemap;
pub mod urls;

pub use breadcrumbs::{category_breadcrumbs, post_breadcrumbs, tool_breadcrumbs};
pub use meta::{category_meta, hreflang_links, post_meta, tool_meta, HreflangLink, OpenGraph, PageMeta};
pub use sitemap::sitemap_urls;
pub use urls::{absolute_url, catalog_url, category_url, post_url, tool_url};
