use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::tool::{PriceModel, Tool};
use crate::types::identifiers::Slug;

/// Tool fields a collection may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    AcceptsRussianCards,
    RequiresVpn,
    PriceModel,
}

/// A typed `filterField` + `filterValue` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFilter {
    AcceptsRussianCards(bool),
    RequiresVpn(bool),
    PriceModel(PriceModel),
}

impl FieldFilter {
    pub fn field(&self) -> FilterField {
        match self {
            FieldFilter::AcceptsRussianCards(_) => FilterField::AcceptsRussianCards,
            FieldFilter::RequiresVpn(_) => FilterField::RequiresVpn,
            FieldFilter::PriceModel(_) => FilterField::PriceModel,
        }
    }

    pub fn matches(&self, tool: &Tool) -> bool {
        match *self {
            FieldFilter::AcceptsRussianCards(expected) => tool.accepts_russian_cards == expected,
            FieldFilter::RequiresVpn(expected) => tool.requires_vpn == expected,
            FieldFilter::PriceModel(expected) => tool.price_model == expected,
        }
    }

    fn from_wire(field: FilterField, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match field {
            FilterField::AcceptsRussianCards => {
                FieldFilter::AcceptsRussianCards(serde_json::from_value(value)?)
            }
            FilterField::RequiresVpn => FieldFilter::RequiresVpn(serde_json::from_value(value)?),
            FilterField::PriceModel => FieldFilter::PriceModel(serde_json::from_value(value)?),
        })
    }

    fn value(&self) -> Value {
        match *self {
            FieldFilter::AcceptsRussianCards(v) | FieldFilter::RequiresVpn(v) => Value::Bool(v),
            FieldFilter::PriceModel(model) => Value::String(model.as_str().to_string()),
        }
    }
}

/// A category page: a named, filterable grouping of tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CollectionRecord", into = "CollectionRecord")]
pub struct Collection {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub seo_description: String,
    pub icon: String,
    pub order: i64,
    pub filter_tag: Option<String>,
    pub filter_field: Option<FieldFilter>,
}

// Wire shape of a collection entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionRecord {
    slug: Slug,
    title: String,
    description: String,
    seo_description: String,
    icon: String,
    #[serde(default)]
    order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filter_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filter_field: Option<FilterField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filter_value: Option<Value>,
}

impl TryFrom<CollectionRecord> for Collection {
    type Error = serde_json::Error;

    fn try_from(record: CollectionRecord) -> Result<Self, Self::Error> {
        // A field without a value filters nothing.
        let filter_field = match (record.filter_field, record.filter_value) {
            (Some(field), Some(value)) if !value.is_null() => {
                Some(FieldFilter::from_wire(field, value)?)
            }
            _ => None,
        };

        Ok(Collection {
            slug: record.slug,
            title: record.title,
            description: record.description,
            seo_description: record.seo_description,
            icon: record.icon,
            order: record.order,
            filter_tag: record.filter_tag.filter(|tag| !tag.is_empty()),
            filter_field,
        })
    }
}

impl From<Collection> for CollectionRecord {
    fn from(collection: Collection) -> Self {
        CollectionRecord {
            slug: collection.slug,
            title: collection.title,
            description: collection.description,
            seo_description: collection.seo_description,
            icon: collection.icon,
            order: collection.order,
            filter_tag: collection.filter_tag,
            filter_field: collection.filter_field.map(|f| f.field()),
            filter_value: collection.filter_field.map(|f| f.value()),
        }
    }
}
