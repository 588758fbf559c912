use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::content::{PriceModel, Tool};
use crate::schema::{context, SchemaError};
use crate::seo::urls::absolute_url;

pub const PRICE_CURRENCY: &str = "USD";
pub const IN_STOCK: &str = "https://schema.org/InStock";
pub const BEST_RATING: u8 = 5;
pub const WORST_RATING: u8 = 1;

// Largest integer an f64 holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub offers: Offer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub price: Number,
    pub price_currency: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: String,
    pub rating_value: Number,
    pub best_rating: u8,
    pub worst_rating: u8,
}

pub fn generate_product_schema(tool: &Tool, site_url: &str) -> Result<ProductSchema, SchemaError> {
    if tool.title.is_empty() || tool.short_description.is_empty() {
        return Err(SchemaError::InvalidInput(
            "product schema requires title and shortDescription".into(),
        ));
    }

    let price = match tool.price_model {
        PriceModel::Free => 0.0,
        _ => tool.price_from.unwrap_or(0.0),
    };

    let image = (!tool.cover_image.is_empty()).then(|| absolute_url(site_url, &tool.cover_image));

    let aggregate_rating = tool.rating.filter(|r| *r > 0.0).map(|rating| AggregateRating {
        kind: "AggregateRating".into(),
        rating_value: json_number(rating),
        best_rating: BEST_RATING,
        worst_rating: WORST_RATING,
    });

    Ok(ProductSchema {
        context: context(),
        kind: "Product".into(),
        name: tool.title.clone(),
        description: tool.short_description.clone(),
        offers: Offer {
            kind: "Offer".into(),
            price: json_number(price),
            price_currency: PRICE_CURRENCY.into(),
            availability: IN_STOCK.into(),
        },
        image,
        aggregate_rating,
    })
}

/// Whole values print without a fraction (`0`, not `0.0`); non-finite ones become `0`.
fn json_number(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}
