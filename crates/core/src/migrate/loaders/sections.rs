//! Ordered-list loaders: trending topics, topics, navigation and
//! testimonials. All are replaced wholesale with positions assigned as
//! the zero-based input index, so positions stay dense regardless of
//! what was stored before.

use crate::entities::{NewNavigationItem, NewTestimonial, NewTopic, NewTrendingTopic};
use crate::legacy::{LegacyNavigationItem, LegacyTestimonial, LegacyTopic, LegacyTrendingTopic};
use crate::store::{ImportStore, StoreError};

pub async fn load_trending_topics<S: ImportStore>(
    store: &mut S,
    items: &[LegacyTrendingTopic],
) -> Result<u32, StoreError> {
    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| NewTrendingTopic::from_legacy(item, i as i32))
        .collect();
    store.replace_trending_topics(rows).await
}

pub async fn load_topics<S: ImportStore>(
    store: &mut S,
    items: &[LegacyTopic],
) -> Result<u32, StoreError> {
    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| NewTopic::from_legacy(item, i as i32))
        .collect();
    store.replace_topics(rows).await
}

pub async fn load_navigation<S: ImportStore>(
    store: &mut S,
    items: &[LegacyNavigationItem],
) -> Result<u32, StoreError> {
    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| NewNavigationItem::from_legacy(item, i as i32))
        .collect();
    store.replace_navigation(rows).await
}

pub async fn load_testimonials<S: ImportStore>(
    store: &mut S,
    items: &[LegacyTestimonial],
) -> Result<u32, StoreError> {
    let rows = items
        .iter()
        .enumerate()
        .map(|(i, item)| NewTestimonial::from_legacy(item, i as i32))
        .collect();
    store.replace_testimonials(rows).await
}
