use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::BlogPost;
use crate::schema::{context, SchemaError};
use crate::seo::urls::{absolute_url, post_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub headline: String,
    pub description: String,
    pub date_published: String,
    pub author: Person,
    pub publisher: Organization,
    pub main_entity_of_page: WebPage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
}

pub fn generate_article_schema(post: &BlogPost, config: &SiteConfig) -> Result<ArticleSchema, SchemaError> {
    if post.title.is_empty() || post.author.is_empty() {
        return Err(SchemaError::InvalidInput(
            "article schema requires title and author".into(),
        ));
    }

    let site_url = config.site_url.as_str();

    Ok(ArticleSchema {
        context: context(),
        kind: "Article".into(),
        headline: post.title.clone(),
        description: post.description.clone(),
        // Same shape as JavaScript's Date#toISOString.
        date_published: post.published_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        author: Person {
            kind: "Person".into(),
            name: post.author.clone(),
        },
        publisher: Organization {
            kind: "Organization".into(),
            name: config.site_name.clone(),
            url: site_url.to_string(),
        },
        main_entity_of_page: WebPage {
            kind: "WebPage".into(),
            id: post_url(site_url, post.slug.as_str()),
        },
        image: post
            .cover_image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map(|image| absolute_url(site_url, image)),
    })
}
