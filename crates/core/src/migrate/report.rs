//! Aggregated result of one import run.

use serde::{Deserialize, Serialize};

/// Returned to the caller after a committed run. Every count is committed;
/// every listed error is a skipped record, not a rolled-back one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub migrated: MigratedCounts,
    pub errors: Vec<String>,
}

/// Records created per entity type during the run. A type whose input
/// section was absent stays at zero and its existing rows are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigratedCounts {
    pub site: u32,
    pub hero: u32,
    pub tags: u32,
    pub authors: u32,
    pub trending_topics: u32,
    pub topics: u32,
    pub navigation: u32,
    pub testimonials: u32,
    pub footer: u32,
    pub newsletters: u32,
    pub news_articles: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_camel_case() {
        let report = MigrationReport {
            migrated: MigratedCounts {
                trending_topics: 2,
                news_articles: 5,
                ..Default::default()
            },
            errors: vec!["no author found for article: X".to_string()],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["migrated"]["trendingTopics"], 2);
        assert_eq!(value["migrated"]["newsArticles"], 5);
        assert_eq!(value["errors"][0], "no author found for article: X");
    }
}
