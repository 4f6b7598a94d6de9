//! Target schema records built from legacy input.
//!
//! Each `New*` type has a `from_legacy` constructor that enumerates every
//! optional input field and its default in one place; the loaders never
//! null-coalesce inline. Required text columns default to the empty string,
//! visibility flags default to true, and `position` is always the zero-based
//! input index.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::legacy;

/// Fallback title used when a legacy record carries none, so soft errors
/// and logs can still name the record.
pub const UNTITLED: &str = "(untitled)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSiteConfig {
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub logo: Option<String>,
}

impl NewSiteConfig {
    pub fn from_legacy(site: &legacy::LegacySite) -> Self {
        Self {
            name: site.name.clone().unwrap_or_default(),
            tagline: site.tagline.clone(),
            description: site.description.clone(),
            url: site.url.clone(),
            logo: site.logo.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewHeroConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub background_image: Option<String>,
}

impl NewHeroConfig {
    pub fn from_legacy(hero: &legacy::LegacyHero) -> Self {
        Self {
            title: hero.title.clone().unwrap_or_default(),
            subtitle: hero.subtitle.clone(),
            cta_text: hero.cta_text.clone(),
            cta_url: hero.cta_url.clone(),
            background_image: hero.background_image.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFooterConfig {
    pub copyright: String,
}

impl NewFooterConfig {
    pub fn from_legacy(footer: &legacy::LegacyFooter) -> Self {
        Self {
            copyright: footer.copyright.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFooterLink {
    pub label: String,
    pub url: String,
    pub position: i32,
}

impl NewFooterLink {
    pub fn from_legacy(link: &legacy::LegacyFooterLink, position: i32) -> Self {
        Self {
            label: link.label.clone().unwrap_or_default(),
            url: link.url.clone().unwrap_or_default(),
            position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTag {
    pub name: String,
    pub color: Option<String>,
    pub is_active: bool,
}

impl NewTag {
    pub fn from_legacy(tag: &legacy::LegacyTag) -> Self {
        Self {
            name: tag.name.clone().unwrap_or_default(),
            color: tag.color.clone(),
            is_active: tag.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAuthor {
    pub name: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

impl NewAuthor {
    pub fn from_legacy(author: &legacy::LegacyAuthor) -> Self {
        Self {
            name: author.name.clone().unwrap_or_default(),
            role: author.role.clone(),
            avatar: author.avatar.clone(),
            bio: author.bio.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTrendingTopic {
    pub title: String,
    pub url: Option<String>,
    pub position: i32,
}

impl NewTrendingTopic {
    pub fn from_legacy(topic: &legacy::LegacyTrendingTopic, position: i32) -> Self {
        Self {
            title: topic.title.clone().unwrap_or_default(),
            url: topic.url.clone(),
            position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTopic {
    pub name: String,
    pub icon: Option<String>,
    pub position: i32,
}

impl NewTopic {
    pub fn from_legacy(topic: &legacy::LegacyTopic, position: i32) -> Self {
        Self {
            name: topic.name.clone().unwrap_or_default(),
            icon: topic.icon.clone(),
            position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewNavigationItem {
    pub label: String,
    pub href: String,
    pub position: i32,
}

impl NewNavigationItem {
    pub fn from_legacy(item: &legacy::LegacyNavigationItem, position: i32) -> Self {
        Self {
            label: item.label.clone().unwrap_or_default(),
            href: item.href.clone().unwrap_or_default(),
            position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTestimonial {
    pub quote: String,
    pub name: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub position: i32,
}

impl NewTestimonial {
    pub fn from_legacy(item: &legacy::LegacyTestimonial, position: i32) -> Self {
        Self {
            quote: item.quote.clone().unwrap_or_default(),
            name: item.name.clone().unwrap_or_default(),
            role: item.role.clone(),
            avatar: item.avatar.clone(),
            position,
        }
    }
}

/// Newsletter row. Views are always zero-initialized on import; the legacy
/// counter is not carried over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewNewsletter {
    pub title: String,
    pub key_discussion: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub date: String,
    pub views: i64,
}

impl NewNewsletter {
    pub fn from_legacy(item: &legacy::LegacyNewsletter) -> Self {
        Self {
            title: item.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            key_discussion: item.key_discussion.clone(),
            content: item.content.clone(),
            url: item.url.clone(),
            image: item.image.clone(),
            date: item.date.clone().unwrap_or_default(),
            views: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewArticle {
    pub article_type: String,
    pub category: Option<String>,
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub showcase_section: Option<String>,
    pub is_visible: bool,
    pub position: i32,
    pub date: String,
    pub views: i64,
    pub image: Option<String>,
    pub image_alt: Option<String>,
}

impl NewArticle {
    pub fn from_legacy(item: &legacy::LegacyArticle, position: i32) -> Self {
        Self {
            article_type: item.article_type.clone().unwrap_or_else(|| "standard".to_string()),
            category: item.category.clone(),
            title: item.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            summary: item.summary.clone(),
            content: item.content.clone(),
            showcase_section: item.showcase_section.clone(),
            is_visible: item.is_visible.unwrap_or(true),
            position,
            date: item.date.clone().unwrap_or_default(),
            views: item.views.unwrap_or(0),
            image: item.image.clone(),
            image_alt: item.image_alt.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewInsight {
    pub content: String,
    pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewResource {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub resource_type: Option<String>,
    pub position: i32,
}

impl NewResource {
    pub fn from_legacy(res: &legacy::LegacyResource, position: i32) -> Self {
        Self {
            title: res.title.clone().unwrap_or_default(),
            description: res.description.clone(),
            url: res.url.clone(),
            resource_type: res.resource_type.clone(),
            position,
        }
    }
}

/// Aggregate-root write for one article: the row itself, its resolved
/// author, its positioned children, and the tag links. Applied as ordered
/// sub-steps inside the import transaction; all or none.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleAggregate {
    pub article: NewArticle,
    pub author_id: Uuid,
    pub insights: Vec<NewInsight>,
    pub resources: Vec<NewResource>,
    pub tag_ids: Vec<Uuid>,
}

impl ArticleAggregate {
    pub fn from_legacy(
        item: &legacy::LegacyArticle,
        position: i32,
        author_id: Uuid,
        tag_ids: Vec<Uuid>,
    ) -> Self {
        Self {
            article: NewArticle::from_legacy(item, position),
            author_id,
            insights: item
                .insights
                .iter()
                .enumerate()
                .map(|(i, content)| NewInsight {
                    content: content.clone(),
                    position: i as i32,
                })
                .collect(),
            resources: item
                .resources
                .iter()
                .enumerate()
                .map(|(i, res)| NewResource::from_legacy(res, i as i32))
                .collect(),
            tag_ids,
        }
    }
}

/// Current row counts per entity type, returned by the status query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub site: i64,
    pub hero: i64,
    pub tags: i64,
    pub authors: i64,
    pub trending_topics: i64,
    pub topics: i64,
    pub navigation: i64,
    pub testimonials: i64,
    pub footer: i64,
    pub newsletters: i64,
    pub news_articles: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::{LegacyArticle, LegacyTag};

    #[test]
    fn article_defaults_fill_missing_fields() {
        let item = LegacyArticle::default();
        let article = NewArticle::from_legacy(&item, 3);
        assert_eq!(article.article_type, "standard");
        assert_eq!(article.title, UNTITLED);
        assert!(article.is_visible);
        assert_eq!(article.position, 3);
        assert_eq!(article.views, 0);
        assert!(article.category.is_none());
    }

    #[test]
    fn tag_defaults_to_active() {
        let tag = NewTag::from_legacy(&LegacyTag::default());
        assert!(tag.is_active);
        assert_eq!(tag.name, "");
        assert!(tag.color.is_none());
    }

    #[test]
    fn aggregate_positions_children_by_input_index() {
        let item = LegacyArticle {
            title: Some("A".into()),
            insights: vec!["one".into(), "two".into()],
            resources: vec![Default::default(), Default::default(), Default::default()],
            ..Default::default()
        };
        let agg = ArticleAggregate::from_legacy(&item, 0, Uuid::new_v4(), vec![]);
        assert_eq!(
            agg.insights.iter().map(|i| i.position).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(
            agg.resources.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn entity_counts_serialize_camel_case() {
        let value = serde_json::to_value(EntityCounts::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("trendingTopics"));
        assert!(obj.contains_key("newsArticles"));
        assert_eq!(obj.len(), 11);
    }
}
