//! Import orchestrator. Drives the loaders strictly sequentially in a
//! fixed dependency order: tags must exist before newsletters and
//! articles connect to them, and authors must exist before articles
//! reference them. Absent sections are skipped entirely.

use crate::legacy::LegacyDocument;
use crate::migrate::context::MigrationContext;
use crate::migrate::loaders;
use crate::migrate::report::MigrationReport;
use crate::migrate::MigrateOptions;
use crate::store::{ImportStore, StoreError};

/// Run every loader against `store`, which the caller has already scoped
/// to one transaction. Any `StoreError` is a hard error: the caller must
/// roll the transaction back and discard the partial state.
pub async fn run<S: ImportStore>(
    store: &mut S,
    doc: &LegacyDocument,
    options: &MigrateOptions,
) -> Result<MigrationReport, StoreError> {
    let mut ctx = MigrationContext::new(options.author_fallback);
    let mut report = MigrationReport::default();

    if let Some(site) = &doc.site {
        report.migrated.site = loaders::config::load_site(store, site).await?;
    }
    if let Some(hero) = &doc.hero {
        report.migrated.hero = loaders::config::load_hero(store, hero).await?;
    }
    if let Some(tags) = &doc.available_tags {
        report.migrated.tags = loaders::tags::load(store, tags).await?;
    }
    if let Some(news) = &doc.news {
        report.migrated.authors = loaders::authors::load(store, &news.items, &mut ctx).await?;
    }
    if let Some(section) = &doc.trending_topics {
        report.migrated.trending_topics =
            loaders::sections::load_trending_topics(store, &section.items).await?;
    }
    if let Some(section) = &doc.topics {
        report.migrated.topics = loaders::sections::load_topics(store, &section.items).await?;
    }
    if let Some(section) = &doc.navigation {
        report.migrated.navigation =
            loaders::sections::load_navigation(store, &section.items).await?;
    }
    if let Some(section) = &doc.testimonials {
        report.migrated.testimonials =
            loaders::sections::load_testimonials(store, &section.items).await?;
    }
    if let Some(footer) = &doc.footer {
        report.migrated.footer = loaders::config::load_footer(store, footer).await?;
    }
    if let Some(section) = &doc.newsletters {
        let (created, errors) = loaders::newsletters::load(store, &section.items, &mut ctx).await?;
        report.migrated.newsletters = created;
        report.errors.extend(errors);
    }
    if let Some(news) = &doc.news {
        let (created, errors) = loaders::articles::load(store, &news.items, &mut ctx).await?;
        report.migrated.news_articles = created;
        report.errors.extend(errors);
    }

    tracing::info!(
        tags = report.migrated.tags,
        authors = report.migrated.authors,
        newsletters = report.migrated.newsletters,
        articles = report.migrated.news_articles,
        skipped = report.errors.len(),
        "import run finished"
    );
    Ok(report)
}
