// Canonical URL shapes. `site_url` never carries a trailing slash.

/// Values already starting with `http` are kept; everything else is prefixed.
pub fn absolute_url(site_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{site_url}{path}")
    }
}

pub fn tool_path(slug: &str) -> String {
    format!("/tool/{slug}")
}

pub fn category_path(slug: &str) -> String {
    format!("/category/{slug}")
}

pub fn post_path(slug: &str) -> String {
    format!("/blog/{slug}")
}

pub const HOME_PATH: &str = "/";
pub const CATALOG_PATH: &str = "/catalog";
pub const BLOG_PATH: &str = "/blog";

pub fn tool_url(site_url: &str, slug: &str) -> String {
    format!("{site_url}{}", tool_path(slug))
}

pub fn category_url(site_url: &str, slug: &str) -> String {
    format!("{site_url}{}", category_path(slug))
}

pub fn catalog_url(site_url: &str) -> String {
    format!("{site_url}{CATALOG_PATH}")
}

pub fn post_url(site_url: &str, slug: &str) -> String {
    format!("{site_url}{}", post_path(slug))
}
