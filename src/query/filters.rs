use crate::content::Tool;

/// Tools carrying every selected tag (AND). No selection keeps everything.
pub fn filter_by_tags<'a, I, S>(tools: I, selected: &[S]) -> Vec<&'a Tool>
where
    I: IntoIterator<Item = &'a Tool>,
    S: AsRef<str>,
{
    if selected.is_empty() {
        return tools.into_iter().collect();
    }

    tools
        .into_iter()
        .filter(|tool| selected.iter().all(|tag| tool.has_tag(tag.as_ref())))
        .collect()
}

/// Number of shared tags, counted over the candidate's tag list.
pub fn shared_tag_count(candidate: &Tool, current: &Tool) -> usize {
    candidate
        .tags
        .iter()
        .filter(|tag| current.has_tag(tag))
        .count()
}
