//! Pure, order-preserving views over catalog records.
//!
//! Every function borrows its inputs and returns a freshly collected `Vec` of
//! references; nothing here mutates or reorders the caller's slices.

pub mod filters;
pub mod membership;
pub mod related;
pub mod sorting;

pub use filters::{filter_by_tags, shared_tag_count};
pub use membership::{
    collections_for_tool, other_collections, primary_collection, tool_count_for_collection,
    tool_matches_collection, tools_for_collection,
};
pub use related::{
    featured_tools, find_related_tools, find_related_tools_with_collections, recent_posts,
    resolve_post_tools, Relevance, DEFAULT_FEATURED_COUNT, DEFAULT_RECENT_POSTS,
    DEFAULT_RELATED_LIMIT,
};
pub use sorting::{compare_ratings, sort_collections_by_order, sort_posts_by_date, sort_tools_by_rating};
