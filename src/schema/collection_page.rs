use serde::{Deserialize, Serialize};

use crate::content::{Collection, Tool};
use crate::schema::context;
use crate::seo::urls::{category_url, tool_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPageSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub main_entity: ItemList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    #[serde(rename = "@type")]
    pub kind: String,
    pub number_of_items: usize,
    pub item_list_element: Vec<ItemListElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListElement {
    #[serde(rename = "@type")]
    pub kind: String,
    pub position: usize,
    pub url: String,
    pub name: String,
}

/// `tools` is the display list, already filtered and ordered.
pub fn generate_collection_page_schema(
    collection: &Collection,
    tools: &[&Tool],
    site_url: &str,
) -> CollectionPageSchema {
    let item_list_element: Vec<ItemListElement> = tools
        .iter()
        .enumerate()
        .map(|(index, tool)| ItemListElement {
            kind: "ListItem".into(),
            position: index + 1,
            url: tool_url(site_url, tool.slug.as_str()),
            name: tool.title.clone(),
        })
        .collect();

    CollectionPageSchema {
        context: context(),
        kind: "CollectionPage".into(),
        name: collection.title.clone(),
        description: collection.seo_description.clone(),
        url: category_url(site_url, collection.slug.as_str()),
        main_entity: ItemList {
            kind: "ItemList".into(),
            number_of_items: item_list_element.len(),
            item_list_element,
        },
    }
}
