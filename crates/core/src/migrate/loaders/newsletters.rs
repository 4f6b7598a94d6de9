//! Newsletter loader. Wholesale replace; tag connections are filtered to
//! names that exist in the tag table as of the tag migration earlier in
//! this run, and unknown names are dropped without an error.

use crate::entities::NewNewsletter;
use crate::legacy::LegacyNewsletter;
use crate::migrate::context::MigrationContext;
use crate::store::{ImportStore, StoreError};

pub async fn load<S: ImportStore>(
    store: &mut S,
    items: &[LegacyNewsletter],
    ctx: &mut MigrationContext,
) -> Result<(u32, Vec<String>), StoreError> {
    store.delete_all_newsletters().await?;
    let mut created = 0u32;
    for item in items {
        let tag_ids = ctx.tags.resolve(store, &item.tags).await?;
        store
            .create_newsletter(NewNewsletter::from_legacy(item), tag_ids)
            .await?;
        created += 1;
    }
    Ok((created, Vec::new()))
}
