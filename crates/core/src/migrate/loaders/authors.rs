//! Author loader. Scans article entries and creates one author row per
//! distinct name, filling the dedup index the article loader resolves
//! against later in the run. Existing authors are never updated or
//! deleted by an import.

use crate::entities::NewAuthor;
use crate::legacy::LegacyArticle;
use crate::migrate::context::MigrationContext;
use crate::store::{ImportStore, StoreError};

pub async fn load<S: ImportStore>(
    store: &mut S,
    items: &[LegacyArticle],
    ctx: &mut MigrationContext,
) -> Result<u32, StoreError> {
    let mut created = 0u32;
    for item in items {
        let Some(author) = &item.author else { continue };
        let Some(name) = author.name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        if ctx.authors.contains(name) {
            continue;
        }
        let id = store.insert_author(NewAuthor::from_legacy(author)).await?;
        ctx.authors.insert(name, id);
        created += 1;
    }
    Ok(created)
}
