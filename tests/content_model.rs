use std::fs;
use std::io::Write;

use catalog_core::catalog::RecordKind;
use catalog_core::content::{PriceModel, Slug, Tool};
use catalog_core::types::SlugError;
use catalog_core::{Catalog, CatalogError, ConfigError, SiteConfig};
use serde_json::json;

fn tool_json(slug: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "slug": slug,
        "title": slug,
        "shortDescription": "desc",
        "tags": tags,
        "priceModel": "freemium",
        "affiliateLink": "https://example.com",
        "publishedAt": "2024-01-01T00:00:00Z"
    })
}

fn collection_json(slug: &str) -> serde_json::Value {
    json!({
        "slug": slug,
        "title": slug,
        "description": "desc",
        "seoDescription": "seo",
        "icon": "*",
        "order": 1,
        "filterTag": "chatbot"
    })
}

#[test]
fn tool_defaults_follow_front_matter_conventions() {
    let tool: Tool = serde_json::from_value(tool_json("claude", &["chatbot"])).unwrap();

    assert!(tool.is_nsfw);
    assert!(tool.requires_vpn);
    assert!(!tool.accepts_russian_cards);
    assert!(!tool.supports_russian);
    assert_eq!(tool.price_model, PriceModel::Freemium);
    assert_eq!(tool.rating, None);
    assert!(tool.needs_placeholder());
    assert!(!tool.has_faq());
}

#[test]
fn tool_serialization_skips_absent_optionals() {
    let tool: Tool = serde_json::from_value(tool_json("claude", &["chatbot"])).unwrap();
    let value = serde_json::to_value(&tool).unwrap();

    assert!(value.get("rating").is_none());
    assert!(value.get("faq").is_none());
    assert!(value.get("collections").is_none());
    assert_eq!(value["priceModel"], "freemium");

    let back: Tool = serde_json::from_value(value).unwrap();
    assert_eq!(back, tool);
}

#[test]
fn invalid_slugs_are_rejected() {
    assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    assert_eq!(Slug::parse("Chat GPT"), Err(SlugError::InvalidCharacter('C')));
    assert_eq!(Slug::parse("-gpt"), Err(SlugError::EdgeHyphen));
    assert!(Slug::parse("gpt-4o").is_ok());

    let result: Result<Tool, _> = serde_json::from_value(tool_json("Bad_Slug", &["chatbot"]));
    assert!(result.is_err());
}

#[test]
fn display_predicates() {
    let mut tool: Tool = serde_json::from_value(json!({
        "slug": "syntx",
        "title": "SYNTX",
        "shortDescription": "Бот с нейросетями",
        "tags": ["telegram-bot", "russian-cards"],
        "priceModel": "free",
        "affiliateLink": "https://t.me/syntxaibot",
        "telegramBotLink": "https://t.me/syntxaibot",
        "acceptsRussianCards": true,
        "requiresVpn": false,
        "paymentMethods": ["sbp"],
        "coverImage": "/images/syntx.png",
        "publishedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert!(tool.shows_telegram_guide());
    assert_eq!(tool.telegram_link(), Some("https://t.me/syntxaibot"));
    assert!(!tool.needs_placeholder());

    let payment = tool.payment_badges();
    assert!(payment.free && payment.russian_cards && payment.sbp);
    assert!(!payment.crypto);

    let access = tool.access_badges();
    assert!(access.no_vpn);
    assert!(!access.vpn_required);

    // Link is ignored without the tag
    tool.tags = vec!["chatbot".into()];
    assert_eq!(tool.telegram_link(), None);
    assert!(!tool.shows_telegram_guide());
}

#[test]
fn catalog_rejects_duplicate_slugs() {
    let raw = json!({
        "tools": [tool_json("claude", &["chatbot"]), tool_json("claude", &["chatbot"])]
    })
    .to_string();

    match Catalog::from_json_str(&raw) {
        Err(CatalogError::DuplicateSlug { kind, slug }) => {
            assert_eq!(kind, RecordKind::Tool);
            assert_eq!(slug, "claude");
        }
        other => panic!("expected duplicate slug error, got {other:?}"),
    }
}

#[test]
fn same_slug_across_kinds_is_allowed() {
    let raw = json!({
        "tools": [tool_json("chatbots", &["chatbot"])],
        "collections": [collection_json("chatbots")]
    })
    .to_string();

    let catalog = Catalog::from_json_str(&raw).unwrap();
    assert!(catalog.tool("chatbots").is_some());
    assert!(catalog.collection("chatbots").is_some());
    assert!(catalog.posts().is_empty());
}

#[test]
fn catalog_rejects_untagged_tools() {
    let raw = json!({"tools": [tool_json("claude", &[])]}).to_string();
    assert!(matches!(Catalog::from_json_str(&raw), Err(CatalogError::EmptyTags(_))));
}

#[test]
fn catalog_parse_errors_surface() {
    assert!(matches!(Catalog::from_json_str("{"), Err(CatalogError::Parse(_))));
}

#[test]
fn catalog_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let raw = json!({
        "tools": [tool_json("claude", &["chatbot"]), tool_json("kling", &["video"])],
        "collections": [collection_json("chatbots")]
    });
    file.write_all(raw.to_string().as_bytes()).unwrap();

    let catalog = Catalog::from_reader(fs::File::open(file.path()).unwrap()).unwrap();

    let slugs: Vec<&str> = catalog.tools().iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["claude", "kling"]);
    assert_eq!(catalog.collections_by_order().len(), 1);
}

#[test]
fn site_config_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("site.json");
    fs::write(
        &path,
        r#"{"site_url": "https://example.com/", "site_name": "Example"}"#,
    )
    .unwrap();

    let config = SiteConfig::from_path(&path).unwrap();
    assert_eq!(config.site_url, "https://example.com");
    assert_eq!(config.site_name, "Example");
    assert_eq!(config.locale, "ru-RU");
}

#[test]
fn site_config_errors() {
    let dir = tempfile::TempDir::new().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(SiteConfig::from_path(&missing), Err(ConfigError::Io(_))));

    assert!(matches!(SiteConfig::from_json_str("[]"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        SiteConfig::from_json_str(r#"{"site_url": "ftp://example.com"}"#),
        Err(ConfigError::InvalidSiteUrl(_))
    ));
}
