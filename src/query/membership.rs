use crate::content::{Collection, Tool};
use crate::query::sorting::sort_collections_by_order;

/// First true tier wins: explicit membership, then tag, then field.
pub fn tool_matches_collection(tool: &Tool, collection: &Collection) -> bool {
    if tool.is_explicit_member_of(&collection.slug) {
        return true;
    }

    if let Some(tag) = collection.filter_tag.as_deref() {
        if tool.has_tag(tag) {
            return true;
        }
    }

    match &collection.filter_field {
        Some(filter) => filter.matches(tool),
        None => false,
    }
}

pub fn tools_for_collection<'a, I>(tools: I, collection: &Collection) -> Vec<&'a Tool>
where
    I: IntoIterator<Item = &'a Tool>,
{
    tools
        .into_iter()
        .filter(|tool| tool_matches_collection(tool, collection))
        .collect()
}

pub fn tool_count_for_collection<'a, I>(tools: I, collection: &Collection) -> usize
where
    I: IntoIterator<Item = &'a Tool>,
{
    tools
        .into_iter()
        .filter(|tool| tool_matches_collection(tool, collection))
        .count()
}

/// Every collection the tool belongs to, in input order.
pub fn collections_for_tool<'a, I>(tool: &Tool, collections: I) -> Vec<&'a Collection>
where
    I: IntoIterator<Item = &'a Collection>,
{
    collections
        .into_iter()
        .filter(|c| tool_matches_collection(tool, c))
        .collect()
}

/// The single collection used for a tool's breadcrumb.
///
/// Explicit membership resolves against the input order of `collections`;
/// otherwise the first match by ascending `order` wins.
pub fn primary_collection<'a>(tool: &Tool, collections: &'a [Collection]) -> Option<&'a Collection> {
    if let Some(explicit) = tool.collections.as_deref().filter(|slugs| !slugs.is_empty()) {
        let found = collections
            .iter()
            .find(|c| explicit.iter().any(|s| c.slug == s.as_str()));
        if found.is_some() {
            return found;
        }
    }

    sort_collections_by_order(collections)
        .into_iter()
        .find(|c| tool_matches_collection(tool, c))
}

/// All collections except `current`, by ascending order.
pub fn other_collections<'a>(current: &Collection, collections: &'a [Collection]) -> Vec<&'a Collection> {
    sort_collections_by_order(collections.iter().filter(|c| c.slug != current.slug))
}
