use serde::{Deserialize, Serialize};

use crate::schema::{context, SchemaError};
use crate::seo::urls::absolute_url;

/// One step of a breadcrumb trail. The current page carries no `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub item_list_element: Vec<BreadcrumbListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbListItem {
    #[serde(rename = "@type")]
    pub kind: String,
    pub position: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

pub fn generate_breadcrumb_schema(
    items: &[BreadcrumbItem],
    site_url: &str,
) -> Result<BreadcrumbListSchema, SchemaError> {
    if items.is_empty() {
        return Err(SchemaError::InvalidInput(
            "breadcrumb list requires at least one item".into(),
        ));
    }

    let item_list_element = items
        .iter()
        .enumerate()
        .map(|(index, crumb)| BreadcrumbListItem {
            kind: "ListItem".into(),
            position: index + 1,
            name: crumb.label.clone(),
            item: crumb
                .href
                .as_deref()
                .filter(|href| !href.is_empty())
                .map(|href| absolute_url(site_url, href)),
        })
        .collect();

    Ok(BreadcrumbListSchema {
        context: context(),
        kind: "BreadcrumbList".into(),
        item_list_element,
    })
}
