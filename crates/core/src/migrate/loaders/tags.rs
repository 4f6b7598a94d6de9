//! Tag loader. Runs before anything that connects to tags so the batched
//! existence lookup later in the run sees the fresh rows.

use crate::entities::NewTag;
use crate::legacy::LegacyTag;
use crate::store::{ImportStore, StoreError};

pub async fn load<S: ImportStore>(
    store: &mut S,
    tags: &[LegacyTag],
) -> Result<u32, StoreError> {
    let rows = tags.iter().map(NewTag::from_legacy).collect();
    store.replace_tags(rows).await
}
