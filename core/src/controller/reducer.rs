//! Synchronous state transitions
//!
//! Optimistic where the view must move at once (renames, drops); everything
//! that needs a store-generated id waits for its completion.

use crate::domain::{ItemPatch, TabPatch, TopicPatch, DomainError};
use crate::ordering::{insert_at, move_within, next_order};
use crate::tree::TopicNode;

use super::actions::{Action, Command, Completion};
use super::state::{DeleteTarget, RenameTarget, Session};

pub const DEFAULT_TAB_NAME: &str = "New tab";
pub const DEFAULT_TOPIC_NAME: &str = "New topic";
pub const REQUIRED_FIELDS_ALERT: &str = "Please fill in at least the title and the link.";

pub fn update(session: &mut Session, action: Action) -> Option<Command> {
    let Session { tree, ui } = session;

    match action {
        Action::Load => {
            ui.loading = true;
            Some(Command::LoadTree {
                preferred_tab: ui.current_tab.clone(),
            })
        }

        Action::ClickTab(id) => {
            tree.tab(&id)?;
            if ui.current_tab.as_deref() == Some(id.as_str()) {
                ui.rename = Some(RenameTarget::Tab(id));
                return None;
            }
            ui.current_tab = Some(id.clone());
            ui.open_edit_forms.clear();
            ui.loading = true;
            Some(Command::LoadTab { tab_id: id })
        }

        Action::AddTab => Some(Command::CreateTab {
            name: DEFAULT_TAB_NAME.to_string(),
        }),

        Action::BeginRename(target) => {
            let exists = match &target {
                RenameTarget::Tab(id) => tree.tab(id).is_some(),
                RenameTarget::Topic(id) => tree.topic(id).is_some(),
            };
            if exists {
                ui.rename = Some(target);
            }
            None
        }

        Action::CommitRename { value } => {
            let target = ui.rename.take()?;
            let name = value.trim();
            match target {
                RenameTarget::Tab(id) => {
                    let tab = tree.tab_mut(&id)?;
                    if name.is_empty() || name == tab.name {
                        return None;
                    }
                    let patch = TabPatch::rename(name);
                    patch.apply_to(tab);
                    Some(Command::RenameTab { id, name: name.to_string() })
                }
                RenameTarget::Topic(id) => {
                    let node = tree.topic_mut(&id)?;
                    if name.is_empty() || name == node.topic.name {
                        return None;
                    }
                    TopicPatch::rename(name).apply_to(&mut node.topic);
                    Some(Command::RenameTopic { id, name: name.to_string() })
                }
            }
        }

        Action::AddTopic => {
            let tab_id = ui.current_tab.clone()?;
            Some(Command::CreateTopic {
                tab_id,
                name: DEFAULT_TOPIC_NAME.to_string(),
            })
        }

        Action::ToggleTopic(id) => {
            if !ui.expanded_topics.remove(&id) {
                ui.expanded_topics.insert(id);
            }
            None
        }

        Action::SubmitNewItem { topic_id, draft } => {
            let draft = match draft.validate() {
                Ok(draft) => draft,
                Err(_) => {
                    ui.alert = Some(REQUIRED_FIELDS_ALERT.to_string());
                    return None;
                }
            };
            let node = tree.topic(&topic_id)?;
            Some(Command::CreateItem {
                tab_id: node.topic.tab_id.clone(),
                topic_id,
                draft,
            })
        }

        Action::ToggleEditForm(item_id) => {
            if !ui.open_edit_forms.remove(&item_id) {
                ui.open_edit_forms.insert(item_id);
            }
            None
        }

        Action::SubmitEdit { item_id, draft } => {
            let draft = match draft.validate() {
                Ok(draft) => draft,
                Err(_) => {
                    ui.alert = Some(REQUIRED_FIELDS_ALERT.to_string());
                    return None;
                }
            };
            tree.item(&item_id)?;
            Some(Command::UpdateItem { id: item_id, draft })
        }

        Action::RequestDelete(target) => {
            ui.confirm = Some(target);
            None
        }

        Action::ConfirmDelete => match ui.confirm.take()? {
            DeleteTarget::Tab(id) => Some(Command::DeleteTab { id }),
            DeleteTarget::Topic(id) => Some(Command::DeleteTopic { id }),
            DeleteTarget::Item(id) => Some(Command::DeleteItem { id }),
        },

        Action::CancelDelete => {
            ui.confirm = None;
            None
        }

        Action::DropTab { tab_id, slot } => {
            let ids = move_within(&tree.tab_ids(), &tab_id, slot)?;
            tree.reorder_tabs(&ids);
            Some(Command::RenumberTabs { ids })
        }

        Action::DropTopic { topic_id, slot } => {
            let ids = move_within(&tree.topic_ids(), &topic_id, slot)?;
            tree.reorder_topics(&ids);
            Some(Command::RenumberTopics { ids })
        }

        Action::DropItem { item_id, topic_id, slot } => {
            let source = tree.topic_of_item(&item_id)?.topic.id.clone();
            let dest = tree.topic(&topic_id)?;

            if source == topic_id {
                let ids = move_within(&dest.item_ids(), &item_id, slot)?;
                tree.reorder_items(&topic_id, &ids);
                return Some(Command::RenumberItems { topic_id, ids });
            }

            let dest_ids = insert_at(&dest.item_ids(), &item_id, slot);
            let index = dest_ids.iter().position(|id| *id == item_id)?;
            let mut item = tree.remove_item(&item_id)?;
            ItemPatch::move_to(topic_id.as_str(), next_order(index)).apply_to(&mut item);

            let dest_node = tree.topic_mut(&topic_id)?;
            dest_node.items.insert(index, item);
            tree.reorder_items(&topic_id, &dest_ids);

            let source_ids = tree.topic(&source).map(TopicNode::item_ids).unwrap_or_default();
            tree.reorder_items(&source, &source_ids);

            Some(Command::MoveItem {
                item_id,
                to_topic: topic_id,
                index,
                source_ids,
                dest_ids,
            })
        }

        Action::DismissAlert => {
            ui.alert = None;
            None
        }

        Action::DismissError => {
            ui.error = None;
            None
        }
    }
}

pub fn complete(session: &mut Session, completion: Completion) -> Option<Command> {
    let Session { tree, ui } = session;

    match completion {
        Completion::TreeLoaded(loaded) => {
            ui.loading = false;
            ui.current_tab = loaded.loaded_tab.clone();
            *tree = loaded;
            ui.prune(tree);
            None
        }

        Completion::TabLoaded { tab_id, topics } => {
            // The user may have moved on to another tab meanwhile
            if ui.current_tab.as_deref() != Some(tab_id.as_str()) {
                log::debug!("Dropping stale load of tab {}", tab_id);
                return None;
            }
            ui.loading = false;
            tree.loaded_tab = Some(tab_id);
            tree.topics = topics;
            ui.prune(tree);
            None
        }

        Completion::TabCreated(tab) => {
            let id = tab.id.clone();
            tree.tabs.push(tab);
            ui.current_tab = Some(id.clone());
            ui.rename = Some(RenameTarget::Tab(id.clone()));
            ui.loading = true;
            Some(Command::LoadTab { tab_id: id })
        }

        Completion::TabRenamed { id } | Completion::TopicRenamed { id } => {
            log::debug!("Rename of {} stored", id);
            None
        }

        Completion::TabDeleted { id, report } => {
            log::debug!("Tab {} removed with {:?}", id, report);
            tree.tabs.retain(|t| t.id != id);
            if ui.current_tab.as_deref() != Some(id.as_str()) {
                ui.prune(tree);
                return None;
            }

            tree.loaded_tab = None;
            tree.topics.clear();
            ui.prune(tree);
            match tree.tabs.first() {
                Some(first) => {
                    let tab_id = first.id.clone();
                    ui.current_tab = Some(tab_id.clone());
                    ui.loading = true;
                    Some(Command::LoadTab { tab_id })
                }
                None => {
                    ui.current_tab = None;
                    None
                }
            }
        }

        Completion::TopicCreated(topic) => {
            if tree.loaded_tab.as_deref() != Some(topic.tab_id.as_str()) {
                return None;
            }
            ui.rename = Some(RenameTarget::Topic(topic.id.clone()));
            tree.topics.push(TopicNode::new(topic));
            None
        }

        Completion::TopicDeleted { id, report } => {
            log::debug!("Topic {} removed with {:?}", id, report);
            tree.topics.retain(|n| n.topic.id != id);
            ui.prune(tree);
            None
        }

        Completion::ItemCreated(item) => {
            let topic_id = item.topic_id.clone();
            let node = tree.topic_mut(&topic_id)?;
            node.items.push(item);
            *ui.form_generations.entry(topic_id).or_insert(0) += 1;
            None
        }

        Completion::ItemUpdated { id, draft } => {
            ui.open_edit_forms.remove(&id);
            let item = tree.item_mut(&id)?;
            ItemPatch::from_draft(&draft).apply_to(item);
            None
        }

        Completion::ItemDeleted { id } => {
            ui.open_edit_forms.remove(&id);
            tree.remove_item(&id);
            None
        }

        Completion::Renumbered { collection, count } => {
            log::debug!("{} {} renumbered", count, collection);
            None
        }

        Completion::ItemMoved { item_id } => {
            log::debug!("Move of item {} stored", item_id);
            None
        }
    }
}

/// Record a failed command; the session keeps whatever it showed before
pub fn fail(session: &mut Session, error: &DomainError) {
    log::error!("Store command failed: {}", error);
    session.ui.loading = false;
    session.ui.error = Some(error.to_string());
}
