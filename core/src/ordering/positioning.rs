//! Positioning Operations
//!
//! Orders are dense: after any reorder every sibling gets `order = index`.
//! A slot is an insertion index 0..=n into the list as it was before the drag.

use futures::future::join_all;

use crate::domain::{DomainResult, Entity, Item, ItemPatch};
use crate::repository::{CollectionRepository, DocumentStore, Repository};

/// Order for a record appended to a sibling set of `sibling_count`
pub fn next_order(sibling_count: usize) -> i64 {
    sibling_count as i64
}

/// Move `id` to `slot` within its own list.
///
/// Returns `None` when `id` is not part of the list.
pub fn move_within(ids: &[String], id: &str, slot: usize) -> Option<Vec<String>> {
    let from = ids.iter().position(|x| x == id)?;
    let mut next = ids.to_vec();
    let moved = next.remove(from);
    let to = if slot > from { slot - 1 } else { slot };
    next.insert(to.min(next.len()), moved);
    Some(next)
}

/// Insert `id` into a foreign list at `slot` (any previous copy is dropped)
pub fn insert_at(ids: &[String], id: &str, slot: usize) -> Vec<String> {
    let mut next: Vec<String> = ids.iter().filter(|x| *x != id).cloned().collect();
    next.insert(slot.min(next.len()), id.to_string());
    next
}

/// Write `order = index` for every id, all updates in flight at once.
///
/// Every update is attempted. Failures are not rolled back: the first error
/// is returned once all writes have settled, and the successful writes stay.
pub async fn renumber<T, S>(store: &S, ids: &[String]) -> DomainResult<usize>
where
    T: Entity,
    S: DocumentStore + ?Sized,
{
    let repo = CollectionRepository::<S, T>::new(store);
    let repo = &repo;
    let writes = ids.iter().enumerate().map(|(index, id)| async move {
        let patch = T::order_patch(index as i64);
        repo.update(id, &patch).await.map_err(|e| (id, e))
    });

    let mut updated = 0;
    let mut first_error = None;
    for result in join_all(writes).await {
        match result {
            Ok(()) => updated += 1,
            Err((id, e)) => {
                log::warn!("Renumbering {}/{} failed: {}", T::COLLECTION, id, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => {
            log::info!("Renumbered {} {}", updated, T::COLLECTION);
            Ok(updated)
        }
    }
}

/// Move an item into another topic at `index`.
///
/// One write re-parents and repositions the item; then the source and the
/// destination lists (both given in their post-move visual order) are
/// renumbered independently.
pub async fn move_item<S: DocumentStore + ?Sized>(
    store: &S,
    item_id: &str,
    to_topic: &str,
    index: usize,
    source_ids: &[String],
    dest_ids: &[String],
) -> DomainResult<()> {
    CollectionRepository::<S, Item>::new(store)
        .update(item_id, &ItemPatch::move_to(to_topic, next_order(index)))
        .await?;
    log::info!("Moved item {} to topic {} at {}", item_id, to_topic, index);

    let (source, dest) = futures::join!(
        renumber::<Item, S>(store, source_ids),
        renumber::<Item, S>(store, dest_ids),
    );
    source?;
    dest?;
    Ok(())
}
