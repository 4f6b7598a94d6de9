//! Article loader. Wholesale replace of the article aggregate: each entry
//! becomes an article row plus its positioned insights and resources and
//! its filtered tag links, written as one aggregate. An entry whose author
//! cannot be resolved under the configured policy is skipped and recorded
//! as a soft error; it is never created with a missing author.

use crate::entities::ArticleAggregate;
use crate::legacy::LegacyArticle;
use crate::migrate::context::MigrationContext;
use crate::store::{ImportStore, StoreError};

pub async fn load<S: ImportStore>(
    store: &mut S,
    items: &[LegacyArticle],
    ctx: &mut MigrationContext,
) -> Result<(u32, Vec<String>), StoreError> {
    store.delete_all_articles().await?;
    let mut created = 0u32;
    let mut errors = Vec::new();
    for item in items {
        let name = item
            .author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or_default();
        let Some(author_id) = ctx.authors.resolve(name, ctx.author_fallback) else {
            let title = item.title.as_deref().unwrap_or(crate::entities::UNTITLED);
            tracing::warn!(article = %title, "skipping article with unresolvable author");
            errors.push(format!("no author found for article: {title}"));
            continue;
        };
        let tag_ids = ctx.tags.resolve(store, &item.tags).await?;
        // Position by creation order so skipped entries leave no gaps.
        let aggregate = ArticleAggregate::from_legacy(item, created as i32, author_id, tag_ids);
        store.create_article(aggregate).await?;
        created += 1;
    }
    Ok((created, errors))
}
