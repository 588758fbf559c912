use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::content::{BlogPost, Collection, Tool};
use crate::query::filters::shared_tag_count;
use crate::query::membership::collections_for_tool;
use crate::query::sorting::{sort_posts_by_date, sort_tools_by_rating};

pub const DEFAULT_RELATED_LIMIT: usize = 4;
pub const DEFAULT_FEATURED_COUNT: usize = 4;
pub const DEFAULT_RECENT_POSTS: usize = 3;

/// Why a candidate was considered related to the current tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Relevance {
    pub shared_collections: usize,
    pub shared_tags: usize,
}

impl Relevance {
    pub fn is_relevant(&self) -> bool {
        self.shared_collections > 0 || self.shared_tags > 0
    }

    /// Priority tiers, most relevant first: shared collections, then shared tags.
    pub fn rank(&self, other: &Relevance) -> Ordering {
        other
            .shared_collections
            .cmp(&self.shared_collections)
            .then_with(|| other.shared_tags.cmp(&self.shared_tags))
    }
}

/// Tools sharing at least one tag with `current`, most shared tags first.
pub fn find_related_tools<'a>(current: &Tool, all_tools: &'a [Tool], limit: usize) -> Vec<&'a Tool> {
    let mut scored: Vec<(&Tool, usize)> = all_tools
        .iter()
        .filter(|tool| tool.slug != current.slug)
        .map(|tool| (tool, shared_tag_count(tool, current)))
        .filter(|(_, shared)| *shared > 0)
        .collect();

    // Stable: equal overlap keeps catalog order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored.into_iter().take(limit).map(|(tool, _)| tool).collect()
}

/// Related tools where sharing a collection outranks any tag-only overlap.
pub fn find_related_tools_with_collections<'a>(
    current: &Tool,
    all_tools: &'a [Tool],
    collections: &[Collection],
    limit: usize,
) -> Vec<&'a Tool> {
    let current_collections: BTreeSet<&str> = collections_for_tool(current, collections)
        .into_iter()
        .map(|c| c.slug.as_str())
        .collect();

    let mut scored: Vec<(&Tool, Relevance)> = all_tools
        .iter()
        .filter(|tool| tool.slug != current.slug)
        .map(|tool| {
            let shared_collections = collections_for_tool(tool, collections)
                .into_iter()
                .filter(|c| current_collections.contains(c.slug.as_str()))
                .count();
            let relevance = Relevance {
                shared_collections,
                shared_tags: shared_tag_count(tool, current),
            };
            (tool, relevance)
        })
        .filter(|(_, relevance)| relevance.is_relevant())
        .collect();

    scored.sort_by(|a, b| a.1.rank(&b.1));

    debug_assert!(scored.windows(2).all(|w| w[0].1.rank(&w[1].1) != Ordering::Greater));

    log::debug!(
        "related tools for {}: {} candidates, limit {}",
        current.slug,
        scored.len(),
        limit
    );

    scored.into_iter().take(limit).map(|(tool, _)| tool).collect()
}

/// Resolves a post's `relatedTools` slugs in the post's order.
pub fn resolve_post_tools<'a>(post: &BlogPost, tools: &'a [Tool]) -> Vec<&'a Tool> {
    let Some(slugs) = post.related_tools.as_deref() else {
        return Vec::new();
    };

    slugs
        .iter()
        .filter_map(|slug| {
            let found = tools.iter().find(|tool| tool.slug == slug.as_str());
            if found.is_none() {
                log::warn!("post {} references unknown tool {}", post.slug, slug);
            }
            found
        })
        .collect()
}

/// Top-rated tools for the landing page.
pub fn featured_tools<'a>(tools: &'a [Tool], count: usize) -> Vec<&'a Tool> {
    let mut sorted = sort_tools_by_rating(tools);
    sorted.truncate(count);
    sorted
}

pub fn recent_posts<'a>(posts: &'a [BlogPost], count: usize) -> Vec<&'a BlogPost> {
    let mut sorted = sort_posts_by_date(posts);
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_tier_outranks_tag_tier() {
        let by_collection = Relevance { shared_collections: 1, shared_tags: 0 };
        let by_tags = Relevance { shared_collections: 0, shared_tags: 5 };
        assert_eq!(by_collection.rank(&by_tags), Ordering::Less);
        assert_eq!(by_tags.rank(&by_collection), Ordering::Greater);
    }

    #[test]
    fn tags_break_collection_ties() {
        let a = Relevance { shared_collections: 2, shared_tags: 3 };
        let b = Relevance { shared_collections: 2, shared_tags: 1 };
        assert_eq!(a.rank(&b), Ordering::Less);
        assert_eq!(a.rank(&a), Ordering::Equal);
        assert!(!Relevance::default().is_relevant());
    }
}
