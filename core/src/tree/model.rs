use crate::domain::{Item, Tab, Topic};

/// Loaded entities, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkTree {
    pub tabs: Vec<Tab>,
    /// Tab whose topics are held in `topics`
    pub loaded_tab: Option<String>,
    pub topics: Vec<TopicNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicNode {
    pub topic: Topic,
    pub items: Vec<Item>,
}

impl TopicNode {
    pub fn new(topic: Topic) -> Self {
        Self { topic, items: Vec::new() }
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|i| i.id.clone()).collect()
    }
}

impl BookmarkTree {
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    pub fn topic(&self, id: &str) -> Option<&TopicNode> {
        self.topics.iter().find(|n| n.topic.id == id)
    }

    pub fn topic_mut(&mut self, id: &str) -> Option<&mut TopicNode> {
        self.topics.iter_mut().find(|n| n.topic.id == id)
    }

    pub fn topic_ids(&self) -> Vec<String> {
        self.topics.iter().map(|n| n.topic.id.clone()).collect()
    }

    /// Topic currently holding the item
    pub fn topic_of_item(&self, item_id: &str) -> Option<&TopicNode> {
        self.topics.iter().find(|n| n.items.iter().any(|i| i.id == item_id))
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.topics.iter().flat_map(|n| n.items.iter()).find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.topics
            .iter_mut()
            .flat_map(|n| n.items.iter_mut())
            .find(|i| i.id == item_id)
    }

    pub fn remove_item(&mut self, item_id: &str) -> Option<Item> {
        for node in &mut self.topics {
            if let Some(pos) = node.items.iter().position(|i| i.id == item_id) {
                return Some(node.items.remove(pos));
            }
        }
        None
    }

    /// Rearrange tabs to `ids` and set `order = index`
    pub fn reorder_tabs(&mut self, ids: &[String]) {
        arrange(&mut self.tabs, ids, |t| &t.id);
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.order = Some(index as i64);
        }
    }

    pub fn reorder_topics(&mut self, ids: &[String]) {
        arrange(&mut self.topics, ids, |n| &n.topic.id);
        for (index, node) in self.topics.iter_mut().enumerate() {
            node.topic.order = Some(index as i64);
        }
    }

    pub fn reorder_items(&mut self, topic_id: &str, ids: &[String]) {
        if let Some(node) = self.topic_mut(topic_id) {
            arrange(&mut node.items, ids, |i| &i.id);
            for (index, item) in node.items.iter_mut().enumerate() {
                item.order = Some(index as i64);
            }
        }
    }
}

/// Stable rearrangement; records missing from `ids` keep their relative
/// order after the listed ones.
fn arrange<T>(records: &mut Vec<T>, ids: &[String], id_of: impl Fn(&T) -> &String) {
    let rank = |record: &T| {
        ids.iter()
            .position(|id| id == id_of(record))
            .unwrap_or(ids.len())
    };
    records.sort_by_key(|r| rank(r));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str) -> Tab {
        let mut tab = Tab::new(id.to_uppercase(), 0);
        tab.id = id.to_string();
        tab
    }

    #[test]
    fn test_reorder_tabs_sets_dense_orders() {
        let mut tree = BookmarkTree {
            tabs: vec![tab("a"), tab("b"), tab("c")],
            ..Default::default()
        };
        tree.reorder_tabs(&["c".into(), "a".into(), "b".into()]);

        assert_eq!(tree.tab_ids(), vec!["c", "a", "b"]);
        let orders: Vec<_> = tree.tabs.iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_unlisted_records_go_last() {
        let mut tree = BookmarkTree {
            tabs: vec![tab("a"), tab("b"), tab("c")],
            ..Default::default()
        };
        tree.reorder_tabs(&["c".into()]);
        assert_eq!(tree.tab_ids(), vec!["c", "a", "b"]);
    }
}
