//! Postgres implementation of the import store.
//!
//! Wraps one `sqlx` transaction; the import orchestrator commits on success
//! and rolls back on any hard error, so nothing here is visible to readers
//! until the whole run has succeeded.

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::{ImportStore, StoreError};
use crate::entities::{
    ArticleAggregate, EntityCounts, NewAuthor, NewFooterConfig, NewFooterLink, NewHeroConfig,
    NewNavigationItem, NewNewsletter, NewSiteConfig, NewTag, NewTestimonial, NewTopic,
    NewTrendingTopic,
};

pub struct PgStore {
    tx: Transaction<'static, Postgres>,
}

impl PgStore {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }

    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await.map_err(StoreError::from)
    }

    pub async fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().await.map_err(StoreError::from)
    }
}

impl ImportStore for PgStore {
    async fn replace_site_config(&mut self, config: NewSiteConfig) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM site_config")
            .execute(&mut *self.tx)
            .await?;
        sqlx::query(
            "INSERT INTO site_config (id, name, tagline, description, url, logo, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(&config.name)
        .bind(&config.tagline)
        .bind(&config.description)
        .bind(&config.url)
        .bind(&config.logo)
        .bind(Utc::now())
        .execute(&mut *self.tx)
        .await?;
        Ok(())
    }

    async fn replace_hero_config(&mut self, config: NewHeroConfig) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM hero_config")
            .execute(&mut *self.tx)
            .await?;
        sqlx::query(
            "INSERT INTO hero_config (id, title, subtitle, cta_text, cta_url, background_image, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(&config.title)
        .bind(&config.subtitle)
        .bind(&config.cta_text)
        .bind(&config.cta_url)
        .bind(&config.background_image)
        .bind(Utc::now())
        .execute(&mut *self.tx)
        .await?;
        Ok(())
    }

    async fn replace_footer(
        &mut self,
        config: NewFooterConfig,
        links: Vec<NewFooterLink>,
    ) -> Result<(), StoreError> {
        // footer_links has no FK to footer_config; clear both explicitly.
        sqlx::query("DELETE FROM footer_links")
            .execute(&mut *self.tx)
            .await?;
        sqlx::query("DELETE FROM footer_config")
            .execute(&mut *self.tx)
            .await?;
        sqlx::query("INSERT INTO footer_config (id, copyright, created_at) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(&config.copyright)
            .bind(Utc::now())
            .execute(&mut *self.tx)
            .await?;
        for link in &links {
            sqlx::query(
                "INSERT INTO footer_links (id, label, url, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(&link.label)
            .bind(&link.url)
            .bind(link.position)
            .execute(&mut *self.tx)
            .await?;
        }
        Ok(())
    }

    async fn replace_tags(&mut self, tags: Vec<NewTag>) -> Result<u32, StoreError> {
        sqlx::query("DELETE FROM tags").execute(&mut *self.tx).await?;
        let mut created = 0u32;
        for tag in &tags {
            sqlx::query(
                "INSERT INTO tags (id, name, color, is_active, created_at)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(&tag.name)
            .bind(&tag.color)
            .bind(tag.is_active)
            .bind(Utc::now())
            .execute(&mut *self.tx)
            .await?;
            created += 1;
        }
        Ok(created)
    }

    async fn replace_trending_topics(
        &mut self,
        items: Vec<NewTrendingTopic>,
    ) -> Result<u32, StoreError> {
        sqlx::query("DELETE FROM trending_topics")
            .execute(&mut *self.tx)
            .await?;
        let mut created = 0u32;
        for item in &items {
            sqlx::query(
                "INSERT INTO trending_topics (id, title, url, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(&item.title)
            .bind(&item.url)
            .bind(item.position)
            .execute(&mut *self.tx)
            .await?;
            created += 1;
        }
        Ok(created)
    }

    async fn replace_topics(&mut self, items: Vec<NewTopic>) -> Result<u32, StoreError> {
        sqlx::query("DELETE FROM topics")
            .execute(&mut *self.tx)
            .await?;
        let mut created = 0u32;
        for item in &items {
            sqlx::query("INSERT INTO topics (id, name, icon, position) VALUES ($1, $2, $3, $4)")
                .bind(Uuid::new_v4())
                .bind(&item.name)
                .bind(&item.icon)
                .bind(item.position)
                .execute(&mut *self.tx)
                .await?;
            created += 1;
        }
        Ok(created)
    }

    async fn replace_navigation(
        &mut self,
        items: Vec<NewNavigationItem>,
    ) -> Result<u32, StoreError> {
        sqlx::query("DELETE FROM navigation_items")
            .execute(&mut *self.tx)
            .await?;
        let mut created = 0u32;
        for item in &items {
            sqlx::query(
                "INSERT INTO navigation_items (id, label, href, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(&item.label)
            .bind(&item.href)
            .bind(item.position)
            .execute(&mut *self.tx)
            .await?;
            created += 1;
        }
        Ok(created)
    }

    async fn replace_testimonials(
        &mut self,
        items: Vec<NewTestimonial>,
    ) -> Result<u32, StoreError> {
        sqlx::query("DELETE FROM testimonials")
            .execute(&mut *self.tx)
            .await?;
        let mut created = 0u32;
        for item in &items {
            sqlx::query(
                "INSERT INTO testimonials (id, quote, name, role, avatar, position)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(Uuid::new_v4())
            .bind(&item.quote)
            .bind(&item.name)
            .bind(&item.role)
            .bind(&item.avatar)
            .bind(item.position)
            .execute(&mut *self.tx)
            .await?;
            created += 1;
        }
        Ok(created)
    }

    async fn insert_author(&mut self, author: NewAuthor) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO authors (id, name, role, avatar, bio, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(&author.name)
        .bind(&author.role)
        .bind(&author.avatar)
        .bind(&author.bio)
        .bind(Utc::now())
        .execute(&mut *self.tx)
        .await?;
        Ok(id)
    }

    async fn delete_all_newsletters(&mut self) -> Result<(), StoreError> {
        // newsletter_tags rows go with them via ON DELETE CASCADE.
        sqlx::query("DELETE FROM newsletters")
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn create_newsletter(
        &mut self,
        newsletter: NewNewsletter,
        tag_ids: Vec<Uuid>,
    ) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO newsletters (id, title, key_discussion, content, url, image, date, views, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(id)
        .bind(&newsletter.title)
        .bind(&newsletter.key_discussion)
        .bind(&newsletter.content)
        .bind(&newsletter.url)
        .bind(&newsletter.image)
        .bind(&newsletter.date)
        .bind(newsletter.views)
        .bind(Utc::now())
        .execute(&mut *self.tx)
        .await?;
        for tag_id in &tag_ids {
            sqlx::query("INSERT INTO newsletter_tags (newsletter_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *self.tx)
                .await?;
        }
        Ok(id)
    }

    async fn delete_all_articles(&mut self) -> Result<(), StoreError> {
        // insights, resources and article_tags cascade.
        sqlx::query("DELETE FROM news_articles")
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn create_article(&mut self, aggregate: ArticleAggregate) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let article = &aggregate.article;
        sqlx::query(
            "INSERT INTO news_articles (id, article_type, category, title, summary, content,
                 showcase_section, is_visible, position, date, views, image, image_alt,
                 author_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
        )
        .bind(id)
        .bind(&article.article_type)
        .bind(&article.category)
        .bind(&article.title)
        .bind(&article.summary)
        .bind(&article.content)
        .bind(&article.showcase_section)
        .bind(article.is_visible)
        .bind(article.position)
        .bind(&article.date)
        .bind(article.views)
        .bind(&article.image)
        .bind(&article.image_alt)
        .bind(aggregate.author_id)
        .bind(Utc::now())
        .execute(&mut *self.tx)
        .await?;

        for insight in &aggregate.insights {
            sqlx::query(
                "INSERT INTO insights (id, article_id, content, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(Uuid::new_v4())
            .bind(id)
            .bind(&insight.content)
            .bind(insight.position)
            .execute(&mut *self.tx)
            .await?;
        }
        for resource in &aggregate.resources {
            sqlx::query(
                "INSERT INTO resources (id, article_id, title, description, url, resource_type, position)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(Uuid::new_v4())
            .bind(id)
            .bind(&resource.title)
            .bind(&resource.description)
            .bind(&resource.url)
            .bind(&resource.resource_type)
            .bind(resource.position)
            .execute(&mut *self.tx)
            .await?;
        }
        for tag_id in &aggregate.tag_ids {
            sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *self.tx)
                .await?;
        }
        Ok(id)
    }

    async fn find_tag_ids(&mut self, names: Vec<String>) -> Result<Vec<(String, Uuid)>, StoreError> {
        let rows: Vec<(String, Uuid)> =
            sqlx::query_as("SELECT name, id FROM tags WHERE name = ANY($1)")
                .bind(&names)
                .fetch_all(&mut *self.tx)
                .await?;
        Ok(rows)
    }

    async fn entity_counts(&mut self) -> Result<EntityCounts, StoreError> {
        let counts = sqlx::query_as::<_, EntityCounts>(COUNTS_QUERY)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(counts)
    }
}

const COUNTS_QUERY: &str = "SELECT
    (SELECT COUNT(*) FROM site_config) AS site,
    (SELECT COUNT(*) FROM hero_config) AS hero,
    (SELECT COUNT(*) FROM tags) AS tags,
    (SELECT COUNT(*) FROM authors) AS authors,
    (SELECT COUNT(*) FROM trending_topics) AS trending_topics,
    (SELECT COUNT(*) FROM topics) AS topics,
    (SELECT COUNT(*) FROM navigation_items) AS navigation,
    (SELECT COUNT(*) FROM testimonials) AS testimonials,
    (SELECT COUNT(*) FROM footer_config) AS footer,
    (SELECT COUNT(*) FROM newsletters) AS newsletters,
    (SELECT COUNT(*) FROM news_articles) AS news_articles";

/// Row counts for the read-only status endpoint. Runs outside any import
/// transaction.
pub async fn fetch_entity_counts(pool: &PgPool) -> Result<EntityCounts, sqlx::Error> {
    sqlx::query_as::<_, EntityCounts>(COUNTS_QUERY)
        .fetch_one(pool)
        .await
}
