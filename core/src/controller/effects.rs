//! Store side of the controller

use crate::domain::{DomainResult, Entity, Item, ItemPatch, ParentFilter, Tab, TabPatch, Topic, TopicPatch};
use crate::ordering::{delete_tab_cascade, delete_topic_cascade, move_item, next_order, renumber};
use crate::repository::{items, tabs, topics, DocumentStore, Repository};
use crate::tree::{load_tab, load_tree};

use super::actions::{Action, Command, Completion};
use super::reducer::{complete, fail, update};
use super::state::Session;

/// Perform one command against the store
pub async fn execute<S: DocumentStore + ?Sized>(store: &S, command: Command) -> DomainResult<Completion> {
    log::debug!("Executing {:?}", command);

    let completion = match command {
        Command::LoadTree { preferred_tab } => {
            Completion::TreeLoaded(load_tree(store, preferred_tab.as_deref()).await?)
        }
        Command::LoadTab { tab_id } => {
            let topics = load_tab(store, &tab_id).await?;
            Completion::TabLoaded { tab_id, topics }
        }
        Command::CreateTab { name } => {
            let repo = tabs(store);
            let siblings = repo.list(&ParentFilter::All).await?;
            let tab = repo.create(&Tab::new(name, next_order(siblings.len()))).await?;
            log::info!("Created tab {}", tab.id);
            Completion::TabCreated(tab)
        }
        Command::RenameTab { id, name } => {
            tabs(store).update(&id, &TabPatch::rename(name)).await?;
            log::info!("Renamed tab {}", id);
            Completion::TabRenamed { id }
        }
        Command::DeleteTab { id } => {
            let report = delete_tab_cascade(store, &id).await?;
            Completion::TabDeleted { id, report }
        }
        Command::CreateTopic { tab_id, name } => {
            let repo = topics(store);
            let siblings = repo.list(&ParentFilter::tab(tab_id.as_str())).await?;
            let topic = repo
                .create(&Topic::new(tab_id, name, next_order(siblings.len())))
                .await?;
            log::info!("Created topic {}", topic.id);
            Completion::TopicCreated(topic)
        }
        Command::RenameTopic { id, name } => {
            topics(store).update(&id, &TopicPatch::rename(name)).await?;
            log::info!("Renamed topic {}", id);
            Completion::TopicRenamed { id }
        }
        Command::DeleteTopic { id } => {
            let report = delete_topic_cascade(store, &id).await?;
            Completion::TopicDeleted { id, report }
        }
        Command::CreateItem { tab_id, topic_id, draft } => {
            // Count stored siblings, not the local tree: earlier creates may still be in flight
            let repo = items(store);
            let siblings = repo
                .list(&ParentFilter::TabTopic { tab_id: tab_id.clone(), topic_id: topic_id.clone() })
                .await?;
            let item = repo
                .create(&Item::from_draft(tab_id, topic_id, draft, next_order(siblings.len())))
                .await?;
            log::info!("Created item {} in topic {}", item.id, item.topic_id);
            Completion::ItemCreated(item)
        }
        Command::UpdateItem { id, draft } => {
            items(store).update(&id, &ItemPatch::from_draft(&draft)).await?;
            log::info!("Updated item {}", id);
            Completion::ItemUpdated { id, draft }
        }
        Command::DeleteItem { id } => {
            items(store).delete(&id).await?;
            log::info!("Deleted item {}", id);
            Completion::ItemDeleted { id }
        }
        Command::RenumberTabs { ids } => Completion::Renumbered {
            collection: Tab::COLLECTION,
            count: renumber::<Tab, S>(store, &ids).await?,
        },
        Command::RenumberTopics { ids } => Completion::Renumbered {
            collection: Topic::COLLECTION,
            count: renumber::<Topic, S>(store, &ids).await?,
        },
        Command::RenumberItems { topic_id, ids } => {
            let count = renumber::<Item, S>(store, &ids).await?;
            log::debug!("Topic {} items renumbered", topic_id);
            Completion::Renumbered {
                collection: Item::COLLECTION,
                count,
            }
        }
        Command::MoveItem { item_id, to_topic, index, source_ids, dest_ids } => {
            move_item(store, &item_id, &to_topic, index, &source_ids, &dest_ids).await?;
            Completion::ItemMoved { item_id }
        }
    };

    Ok(completion)
}

/// Apply an action and drive every resulting command to completion.
///
/// On a store error the session records it and keeps its current picture.
pub async fn run<S: DocumentStore + ?Sized>(
    store: &S,
    session: &mut Session,
    action: Action,
) -> DomainResult<()> {
    let mut next = update(session, action);
    while let Some(command) = next.take() {
        match execute(store, command).await {
            Ok(completion) => next = complete(session, completion),
            Err(e) => {
                fail(session, &e);
                return Err(e);
            }
        }
    }
    Ok(())
}
