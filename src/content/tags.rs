use serde::Serialize;

pub const TELEGRAM_BOT_TAG: &str = "telegram-bot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Type,
    Language,
    Payment,
    Access,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub label_en: &'static str,
    pub category: TagCategory,
}

/// The fixed tag vocabulary, in display order.
pub const TAGS: &[TagInfo] = &[
    TagInfo { id: "chatbot", label: "Чат-бот", label_en: "Chatbot", category: TagCategory::Type },
    TagInfo { id: "image-gen", label: "Генерация изображений", label_en: "Image Gen", category: TagCategory::Type },
    TagInfo { id: "video", label: "Видео", label_en: "Video", category: TagCategory::Type },
    TagInfo { id: TELEGRAM_BOT_TAG, label: "Telegram бот", label_en: "Telegram Bot", category: TagCategory::Type },
    TagInfo { id: "russian", label: "Понимает русский", label_en: "Russian", category: TagCategory::Language },
    TagInfo { id: "russian-cards", label: "Карты РФ", label_en: "Russian Cards", category: TagCategory::Payment },
    TagInfo { id: "crypto", label: "Крипто", label_en: "Crypto", category: TagCategory::Payment },
    TagInfo { id: "no-vpn", label: "Без VPN", label_en: "No VPN", category: TagCategory::Access },
];

pub fn tag_by_id(id: &str) -> Option<&'static TagInfo> {
    TAGS.iter().find(|tag| tag.id == id)
}

pub fn tags_in_category(category: TagCategory) -> impl Iterator<Item = &'static TagInfo> {
    TAGS.iter().filter(move |tag| tag.category == category)
}

pub fn is_known_tag(id: &str) -> bool {
    tag_by_id(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_ids_are_unique() {
        for (i, a) in TAGS.iter().enumerate() {
            assert!(TAGS[i + 1..].iter().all(|b| b.id != a.id), "duplicate tag {}", a.id);
        }
    }

    #[test]
    fn grouping_by_category() {
        let payment: Vec<_> = tags_in_category(TagCategory::Payment).map(|t| t.id).collect();
        assert_eq!(payment, vec!["russian-cards", "crypto"]);
        assert_eq!(tag_by_id("no-vpn").map(|t| t.category), Some(TagCategory::Access));
        assert!(!is_known_tag("unknown"));
    }
}
