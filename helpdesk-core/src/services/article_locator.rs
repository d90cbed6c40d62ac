//! Article lookup across the topic collection
//!
//! Topics are scanned in collection order, articles in list order; the first id match wins.
//! Duplicate ids across topics are not rejected upstream, so the tie-break is part of the contract.

use crate::types::{Article, Topic};

/// Find the first article with `article_id`
pub fn locate_article<'a>(topics: &'a [Topic], article_id: &str) -> Option<&'a Article> {
    locate_article_with_topic(topics, article_id).map(|(_, article)| article)
}

/// Find the first article with `article_id` together with the topic holding it
pub fn locate_article_with_topic<'a>(
    topics: &'a [Topic],
    article_id: &str,
) -> Option<(&'a Topic, &'a Article)> {
    topics.iter().find_map(|topic| {
        topic
            .articles
            .iter()
            .find(|article| article.id == article_id)
            .map(|article| (topic, article))
    })
}
