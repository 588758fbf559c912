use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::tags::TELEGRAM_BOT_TAG;
use crate::types::identifiers::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceModel {
    Free,
    Freemium,
    Paid,
}

impl PriceModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceModel::Free => "free",
            PriceModel::Freemium => "freemium",
            PriceModel::Paid => "paid",
        }
    }

    /// Human readable label shown on cards and tables.
    pub fn label(&self) -> &'static str {
        match self {
            PriceModel::Free => "Бесплатно",
            PriceModel::Freemium => "Freemium",
            PriceModel::Paid => "Платно",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A cataloged AI service, as parsed from its front matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub slug: Slug,
    pub title: String,
    pub short_description: String,
    /// Empty means the card falls back to a placeholder.
    #[serde(default)]
    pub cover_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_preview: Option<String>,
    pub tags: Vec<String>,
    pub price_model: PriceModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,
    #[serde(default = "default_true")]
    pub is_nsfw: bool,
    pub affiliate_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub accepts_russian_cards: bool,
    #[serde(default = "default_true")]
    pub requires_vpn: bool,
    #[serde(default)]
    pub supports_russian: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_bot_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqItem>>,
    /// Explicit collection membership; overrides every filter rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<String>>,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentBadges {
    pub free: bool,
    pub russian_cards: bool,
    pub crypto: bool,
    pub sbp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessBadges {
    pub no_vpn: bool,
    pub vpn_required: bool,
    pub russian: bool,
}

impl Tool {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_explicit_member_of(&self, collection: &Slug) -> bool {
        self.collections
            .as_deref()
            .map_or(false, |slugs| slugs.iter().any(|s| s == collection.as_str()))
    }

    pub fn has_faq(&self) -> bool {
        self.faq.as_deref().map_or(false, |faq| !faq.is_empty())
    }

    pub fn needs_placeholder(&self) -> bool {
        self.cover_image.trim().is_empty()
    }

    /// Direct bot link, only for tools tagged as Telegram bots.
    pub fn telegram_link(&self) -> Option<&str> {
        if !self.has_tag(TELEGRAM_BOT_TAG) {
            return None;
        }
        self.telegram_bot_link.as_deref().filter(|link| !link.is_empty())
    }

    pub fn shows_telegram_guide(&self) -> bool {
        self.has_tag(TELEGRAM_BOT_TAG)
    }

    pub fn payment_badges(&self) -> PaymentBadges {
        let methods = self.payment_methods.as_deref().unwrap_or_default();
        PaymentBadges {
            free: self.price_model == PriceModel::Free,
            russian_cards: self.accepts_russian_cards,
            crypto: methods.iter().any(|m| m == "crypto"),
            sbp: methods.iter().any(|m| m == "sbp"),
        }
    }

    pub fn access_badges(&self) -> AccessBadges {
        AccessBadges {
            no_vpn: !self.requires_vpn,
            vpn_required: self.requires_vpn,
            russian: self.supports_russian,
        }
    }
}
