pub mod collection;
pub mod post;
pub mod tags;
pub mod tool;

pub use crate::types::identifiers::Slug;
pub use collection::{Collection, FieldFilter, FilterField};
pub use post::{reading_time_minutes, BlogPost};
pub use tags::{tag_by_id, tags_in_category, TagCategory, TagInfo, TAGS};
pub use tool::{AccessBadges, FaqItem, PaymentBadges, PriceModel, Tool};
