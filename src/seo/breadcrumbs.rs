use crate::config::SiteConfig;
use crate::content::{BlogPost, Collection, Tool};
use crate::query::primary_collection;
use crate::schema::BreadcrumbItem;
use crate::seo::urls::{category_path, BLOG_PATH, CATALOG_PATH, HOME_PATH};

/// Home → Catalog → primary category (when one matches) → tool.
pub fn tool_breadcrumbs(tool: &Tool, collections: &[Collection], config: &SiteConfig) -> Vec<BreadcrumbItem> {
    let mut items = vec![
        BreadcrumbItem::link(&config.home_label, HOME_PATH),
        BreadcrumbItem::link(&config.catalog_label, CATALOG_PATH),
    ];

    if let Some(category) = primary_collection(tool, collections) {
        items.push(BreadcrumbItem::link(
            &category.title,
            category_path(category.slug.as_str()),
        ));
    }

    items.push(BreadcrumbItem::current(&tool.title));
    items
}

pub fn category_breadcrumbs(collection: &Collection, config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::link(&config.home_label, HOME_PATH),
        BreadcrumbItem::link(&config.catalog_label, CATALOG_PATH),
        BreadcrumbItem::current(&collection.title),
    ]
}

pub fn post_breadcrumbs(post: &BlogPost, config: &SiteConfig) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::link(&config.home_label, HOME_PATH),
        BreadcrumbItem::link(&config.blog_label, BLOG_PATH),
        BreadcrumbItem::current(&post.title),
    ]
}
