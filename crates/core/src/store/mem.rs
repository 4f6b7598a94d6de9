//! In-memory store used by the engine tests.
//!
//! Cloneable so the test-side transaction boundary can stage a run and
//! swap it in only on success, mirroring what the Postgres wrapper does
//! with a real transaction. A `FailPoint` forces a hard error at a chosen
//! operation to exercise rollback behavior.

use uuid::Uuid;

use super::{ImportStore, StoreError};
use crate::entities::{
    ArticleAggregate, EntityCounts, NewAuthor, NewFooterConfig, NewFooterLink, NewHeroConfig,
    NewNavigationItem, NewNewsletter, NewSiteConfig, NewTag, NewTestimonial, NewTopic,
    NewTrendingTopic,
};
use crate::legacy::LegacyDocument;
use crate::migrate::{self, MigrateError, MigrateOptions, MigrationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    ReplaceTags,
    InsertAuthor,
    CreateNewsletter,
    CreateArticle,
}

#[derive(Debug, Clone, Default)]
pub struct MemStore {
    pub site: Vec<NewSiteConfig>,
    pub hero: Vec<NewHeroConfig>,
    pub footer: Vec<NewFooterConfig>,
    pub footer_links: Vec<NewFooterLink>,
    pub tags: Vec<(Uuid, NewTag)>,
    pub authors: Vec<(Uuid, NewAuthor)>,
    pub trending_topics: Vec<NewTrendingTopic>,
    pub topics: Vec<NewTopic>,
    pub navigation: Vec<NewNavigationItem>,
    pub testimonials: Vec<NewTestimonial>,
    pub newsletters: Vec<(Uuid, NewNewsletter, Vec<Uuid>)>,
    pub articles: Vec<(Uuid, ArticleAggregate)>,
    pub fail_on: Option<FailPoint>,
    /// Number of batched tag lookups issued, for asserting read-through
    /// cache behavior.
    pub tag_lookups: u32,
}

impl MemStore {
    pub fn seed_tag(&mut self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.tags.push((
            id,
            NewTag {
                name: name.to_string(),
                color: None,
                is_active: true,
            },
        ));
        id
    }

    fn fail_if(&self, point: FailPoint) -> Result<(), StoreError> {
        if self.fail_on == Some(point) {
            return Err(StoreError::Backend(format!(
                "injected failure at {point:?}"
            )));
        }
        Ok(())
    }
}

impl ImportStore for MemStore {
    async fn replace_site_config(&mut self, config: NewSiteConfig) -> Result<(), StoreError> {
        self.site.clear();
        self.site.push(config);
        Ok(())
    }

    async fn replace_hero_config(&mut self, config: NewHeroConfig) -> Result<(), StoreError> {
        self.hero.clear();
        self.hero.push(config);
        Ok(())
    }

    async fn replace_footer(
        &mut self,
        config: NewFooterConfig,
        links: Vec<NewFooterLink>,
    ) -> Result<(), StoreError> {
        self.footer.clear();
        self.footer.push(config);
        self.footer_links = links;
        Ok(())
    }

    async fn replace_tags(&mut self, tags: Vec<NewTag>) -> Result<u32, StoreError> {
        self.fail_if(FailPoint::ReplaceTags)?;
        self.tags = tags.into_iter().map(|t| (Uuid::new_v4(), t)).collect();
        Ok(self.tags.len() as u32)
    }

    async fn replace_trending_topics(
        &mut self,
        items: Vec<NewTrendingTopic>,
    ) -> Result<u32, StoreError> {
        self.trending_topics = items;
        Ok(self.trending_topics.len() as u32)
    }

    async fn replace_topics(&mut self, items: Vec<NewTopic>) -> Result<u32, StoreError> {
        self.topics = items;
        Ok(self.topics.len() as u32)
    }

    async fn replace_navigation(
        &mut self,
        items: Vec<NewNavigationItem>,
    ) -> Result<u32, StoreError> {
        self.navigation = items;
        Ok(self.navigation.len() as u32)
    }

    async fn replace_testimonials(
        &mut self,
        items: Vec<NewTestimonial>,
    ) -> Result<u32, StoreError> {
        self.testimonials = items;
        Ok(self.testimonials.len() as u32)
    }

    async fn insert_author(&mut self, author: NewAuthor) -> Result<Uuid, StoreError> {
        self.fail_if(FailPoint::InsertAuthor)?;
        let id = Uuid::new_v4();
        self.authors.push((id, author));
        Ok(id)
    }

    async fn delete_all_newsletters(&mut self) -> Result<(), StoreError> {
        self.newsletters.clear();
        Ok(())
    }

    async fn create_newsletter(
        &mut self,
        newsletter: NewNewsletter,
        tag_ids: Vec<Uuid>,
    ) -> Result<Uuid, StoreError> {
        self.fail_if(FailPoint::CreateNewsletter)?;
        let id = Uuid::new_v4();
        self.newsletters.push((id, newsletter, tag_ids));
        Ok(id)
    }

    async fn delete_all_articles(&mut self) -> Result<(), StoreError> {
        self.articles.clear();
        Ok(())
    }

    async fn create_article(&mut self, aggregate: ArticleAggregate) -> Result<Uuid, StoreError> {
        self.fail_if(FailPoint::CreateArticle)?;
        let id = Uuid::new_v4();
        self.articles.push((id, aggregate));
        Ok(id)
    }

    async fn find_tag_ids(&mut self, names: Vec<String>) -> Result<Vec<(String, Uuid)>, StoreError> {
        self.tag_lookups += 1;
        Ok(self
            .tags
            .iter()
            .filter(|(_, tag)| names.iter().any(|n| n == &tag.name))
            .map(|(id, tag)| (tag.name.clone(), *id))
            .collect())
    }

    async fn entity_counts(&mut self) -> Result<EntityCounts, StoreError> {
        Ok(EntityCounts {
            site: self.site.len() as i64,
            hero: self.hero.len() as i64,
            tags: self.tags.len() as i64,
            authors: self.authors.len() as i64,
            trending_topics: self.trending_topics.len() as i64,
            topics: self.topics.len() as i64,
            navigation: self.navigation.len() as i64,
            testimonials: self.testimonials.len() as i64,
            footer: self.footer.len() as i64,
            newsletters: self.newsletters.len() as i64,
            news_articles: self.articles.len() as i64,
        })
    }
}

/// In-memory equivalent of the Postgres transaction boundary: stage the run
/// on a clone, swap it in only if the whole run succeeded.
pub async fn migrate(
    store: &mut MemStore,
    doc: &LegacyDocument,
    options: &MigrateOptions,
) -> Result<MigrationReport, MigrateError> {
    let mut staged = store.clone();
    match migrate::engine::run(&mut staged, doc, options).await {
        Ok(report) => {
            *store = staged;
            Ok(report)
        }
        Err(err) => Err(err.into()),
    }
}
