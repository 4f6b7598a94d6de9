//! Legacy export document model.
//!
//! One denormalized tree representing an entire site's content, produced by
//! the previous CMS. Every section is optional; an absent section means the
//! corresponding entity type is left untouched by an import. Unknown fields
//! are ignored so newer exports with extra keys still parse.

use serde::Deserialize;

/// Top-level legacy document accepted by the import endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyDocument {
    pub site: Option<LegacySite>,
    pub hero: Option<LegacyHero>,
    pub available_tags: Option<Vec<LegacyTag>>,
    pub news: Option<LegacyItems<LegacyArticle>>,
    pub trending_topics: Option<LegacyItems<LegacyTrendingTopic>>,
    pub topics: Option<LegacyItems<LegacyTopic>>,
    pub navigation: Option<LegacyItems<LegacyNavigationItem>>,
    pub testimonials: Option<LegacyItems<LegacyTestimonial>>,
    pub footer: Option<LegacyFooter>,
    pub newsletters: Option<LegacyItems<LegacyNewsletter>>,
}

/// Wrapper the legacy export uses for every list-shaped section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyItems<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacySite {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyHero {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_url: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyTag {
    pub name: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAuthor {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyArticle {
    #[serde(rename = "type")]
    pub article_type: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub showcase_section: Option<String>,
    pub is_visible: Option<bool>,
    pub date: Option<String>,
    pub views: Option<i64>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub author: Option<LegacyAuthor>,
    pub tags: Vec<String>,
    pub insights: Vec<String>,
    pub resources: Vec<LegacyResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyTrendingTopic {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyTopic {
    pub name: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyNavigationItem {
    pub label: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyTestimonial {
    pub quote: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFooter {
    pub copyright: Option<String>,
    pub links: Vec<LegacyFooterLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFooterLink {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyNewsletter {
    pub title: Option<String>,
    pub key_discussion: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub views: Option<i64>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_full_document() {
        let doc: LegacyDocument = serde_json::from_value(json!({
            "site": { "name": "The Daily", "tagline": "All the news" },
            "availableTags": [
                { "name": "tech", "color": "#ff0000", "isActive": true }
            ],
            "news": {
                "items": [{
                    "type": "feature",
                    "title": "First post",
                    "isVisible": true,
                    "author": { "name": "Ada", "role": "Editor" },
                    "tags": ["tech"],
                    "insights": ["key takeaway"],
                    "resources": [{ "title": "Link", "url": "https://x", "type": "article" }]
                }]
            },
            "footer": {
                "copyright": "2024",
                "links": [{ "label": "About", "url": "/about" }]
            }
        }))
        .unwrap();

        assert_eq!(doc.site.unwrap().name.as_deref(), Some("The Daily"));
        let tags = doc.available_tags.unwrap();
        assert_eq!(tags[0].is_active, Some(true));
        let news = doc.news.unwrap();
        assert_eq!(news.items.len(), 1);
        let article = &news.items[0];
        assert_eq!(article.article_type.as_deref(), Some("feature"));
        assert_eq!(article.author.as_ref().unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(article.resources[0].resource_type.as_deref(), Some("article"));
        assert_eq!(doc.footer.unwrap().links.len(), 1);
        assert!(doc.newsletters.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc: LegacyDocument = serde_json::from_value(json!({
            "site": { "name": "X", "legacyOnlyField": 42 },
            "somethingNew": { "items": [] }
        }))
        .unwrap();
        assert_eq!(doc.site.unwrap().name.as_deref(), Some("X"));
    }

    #[test]
    fn empty_document_parses_with_no_sections() {
        let doc: LegacyDocument = serde_json::from_value(json!({})).unwrap();
        assert!(doc.site.is_none());
        assert!(doc.news.is_none());
        assert!(doc.available_tags.is_none());
    }
}
