use std::cmp::Ordering;

use crate::content::{BlogPost, Collection, Tool};

/// Rated tools first by rating descending, unrated tools last.
///
/// `slice::sort_by` is stable, so equal ratings and the unrated tail both keep
/// their input order.
pub fn sort_tools_by_rating<'a, I>(tools: I) -> Vec<&'a Tool>
where
    I: IntoIterator<Item = &'a Tool>,
{
    let mut sorted: Vec<&Tool> = tools.into_iter().collect();
    sorted.sort_by(|a, b| compare_ratings(a.rating, b.rating));

    debug_assert!(sorted
        .windows(2)
        .all(|w| compare_ratings(w[0].rating, w[1].rating) != Ordering::Greater));

    sorted
}

/// Three-way comparator where an absent rating sorts after every present one.
pub fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        // Descending
        (Some(a), Some(b)) => b.total_cmp(&a),
    }
}

/// Newest first; equal instants keep input order.
pub fn sort_posts_by_date<'a, I>(posts: I) -> Vec<&'a BlogPost>
where
    I: IntoIterator<Item = &'a BlogPost>,
{
    let mut sorted: Vec<&BlogPost> = posts.into_iter().collect();
    sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    sorted
}

/// Ascending `order`; ties keep input order.
pub fn sort_collections_by_order<'a, I>(collections: I) -> Vec<&'a Collection>
where
    I: IntoIterator<Item = &'a Collection>,
{
    let mut sorted: Vec<&Collection> = collections.into_iter().collect();
    sorted.sort_by_key(|c| c.order);
    sorted
}
