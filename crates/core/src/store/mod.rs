//! Data-access interface consumed by the import engine.
//!
//! The engine is generic over [`ImportStore`] so the transactional
//! properties of a run can be exercised against the in-memory test store
//! as well as Postgres. Every method runs inside the one import
//! transaction; any error returned here is a hard error that aborts and
//! rolls back the whole run.

pub mod pg;

#[cfg(test)]
pub(crate) mod mem;

use std::future::Future;

use uuid::Uuid;

use crate::entities::{
    ArticleAggregate, EntityCounts, NewAuthor, NewFooterConfig, NewFooterLink, NewHeroConfig,
    NewNavigationItem, NewNewsletter, NewSiteConfig, NewTag, NewTestimonial, NewTopic,
    NewTrendingTopic,
};

/// Failure at the data-access boundary. Always fatal to the import run.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Transaction-scoped mutations the import engine needs.
///
/// The `replace_*` methods are wholesale-replace set operations: delete all
/// existing rows of the type, then insert one row per input element, inside
/// the current transaction. Authors are the exception; they are only ever
/// appended during an import.
pub trait ImportStore: Send {
    fn replace_site_config(
        &mut self,
        config: NewSiteConfig,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn replace_hero_config(
        &mut self,
        config: NewHeroConfig,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn replace_footer(
        &mut self,
        config: NewFooterConfig,
        links: Vec<NewFooterLink>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn replace_tags(
        &mut self,
        tags: Vec<NewTag>,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    fn replace_trending_topics(
        &mut self,
        items: Vec<NewTrendingTopic>,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    fn replace_topics(
        &mut self,
        items: Vec<NewTopic>,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    fn replace_navigation(
        &mut self,
        items: Vec<NewNavigationItem>,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    fn replace_testimonials(
        &mut self,
        items: Vec<NewTestimonial>,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    fn insert_author(
        &mut self,
        author: NewAuthor,
    ) -> impl Future<Output = Result<Uuid, StoreError>> + Send;

    fn delete_all_newsletters(&mut self) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn create_newsletter(
        &mut self,
        newsletter: NewNewsletter,
        tag_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Uuid, StoreError>> + Send;

    fn delete_all_articles(&mut self) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Aggregate-root write: article row, then insights, then resources,
    /// then tag links, as ordered sub-steps.
    fn create_article(
        &mut self,
        aggregate: ArticleAggregate,
    ) -> impl Future<Output = Result<Uuid, StoreError>> + Send;

    /// Batched tag lookup. Returns `(name, id)` for every requested name
    /// that exists; missing names are simply absent from the result.
    fn find_tag_ids(
        &mut self,
        names: Vec<String>,
    ) -> impl Future<Output = Result<Vec<(String, Uuid)>, StoreError>> + Send;

    fn entity_counts(&mut self) -> impl Future<Output = Result<EntityCounts, StoreError>> + Send;
}
