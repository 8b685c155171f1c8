//! Repository Integration Tests
//!
//! Typed repositories and ordering operations against the in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Item, ItemDraft, ItemPatch, ParentFilter, Tab, TabPatch, Topic};
    use crate::ordering::{delete_tab_cascade, delete_topic_cascade, move_item, renumber};
    use crate::repository::{items, tabs, topics, DocumentStore, MemoryStore, Repository};
    use serde_json::json;

    fn setup_test_store() -> MemoryStore {
        MemoryStore::new()
    }

    fn ids<T: crate::domain::Entity>(records: &[T]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    async fn seed_item(store: &MemoryStore, tab: &str, topic: &str, title: &str, order: i64) -> Item {
        let draft = ItemDraft::new(title, format!("https://{}.dev", title), "", "")
            .validate()
            .unwrap();
        items(store)
            .create(&Item::from_draft(tab, topic, draft, order))
            .await
            .expect("Failed to create item")
    }

    #[tokio::test]
    async fn test_create_tab() {
        let store = setup_test_store();

        let created = tabs(&store).create(&Tab::new("Work", 0)).await.expect("Failed to create");

        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Work");
        assert_eq!(created.order, Some(0));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = setup_test_store();

        let created = tabs(&store).create(&Tab::new("Find me", 0)).await.unwrap();

        let found = tabs(&store).find_by_id(&created.id).await.expect("Find failed");
        assert_eq!(found.map(|t| t.name), Some("Find me".to_string()));
        assert_eq!(tabs(&store).find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_item_round_trips_through_list() {
        let store = setup_test_store();
        let draft = ItemDraft::new(
            "Rust book",
            "https://doc.rust-lang.org/book",
            "https://www.rust-lang.org/learn",
            "Chapter 8",
        )
        .validate()
        .unwrap();

        let created = items(&store)
            .create(&Item::from_draft("t1", "p1", draft, 3))
            .await
            .expect("Failed to create item");
        assert_eq!(created.fonte.as_deref(), Some("https://www.rust-lang.org/learn"));
        assert_eq!(created.description.as_deref(), Some("Chapter 8"));
        assert_eq!(created.order, Some(3));

        let filter = ParentFilter::TabTopic { tab_id: "t1".into(), topic_id: "p1".into() };
        let listed = items(&store).list(&filter).await.expect("List failed");
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_topic_round_trips_through_list() {
        let store = setup_test_store();

        let created = topics(&store)
            .create(&Topic::new("t1", "Reading", 4))
            .await
            .expect("Failed to create topic");

        let listed = topics(&store).list(&ParentFilter::tab("t1")).await.expect("List failed");
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_list_sorted_by_order() {
        let store = setup_test_store();

        let late = tabs(&store).create(&Tab::new("Late", 5)).await.unwrap();
        let early = tabs(&store).create(&Tab::new("Early", 1)).await.unwrap();

        let listed = tabs(&store).list(&ParentFilter::All).await.expect("List failed");
        assert_eq!(ids(&listed), vec![early.id, late.id]);
    }

    #[tokio::test]
    async fn test_tab_without_order_sorts_first() {
        let store = setup_test_store();

        tabs(&store).create(&Tab::new("Ordered", 1)).await.unwrap();
        store.insert_raw("tabs", "legacy", json!({ "name": "Legacy" })).await.unwrap();

        let listed = tabs(&store).list(&ParentFilter::All).await.unwrap();
        assert_eq!(listed[0].id, "legacy");
    }

    #[tokio::test]
    async fn test_item_without_order_sorts_last() {
        let store = setup_test_store();

        seed_item(&store, "t1", "p1", "Ordered", 500).await;
        store
            .insert_raw("items", "legacy", json!({ "tabId": "t1", "topicId": "p1", "title": "Old", "link": "l" }))
            .await
            .unwrap();

        let listed = items(&store).list(&ParentFilter::topic("p1")).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].id, "legacy");
        assert_eq!(listed[1].order, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_parent() {
        let store = setup_test_store();

        topics(&store).create(&Topic::new("t1", "Reading", 0)).await.unwrap();
        topics(&store).create(&Topic::new("t2", "Other", 0)).await.unwrap();
        seed_item(&store, "t1", "p1", "A", 0).await;
        seed_item(&store, "t1", "p2", "B", 0).await;

        let in_tab = topics(&store).list(&ParentFilter::tab("t1")).await.unwrap();
        assert_eq!(in_tab.len(), 1);
        assert_eq!(in_tab[0].name, "Reading");

        let filter = ParentFilter::TabTopic { tab_id: "t1".into(), topic_id: "p2".into() };
        let in_topic = items(&store).list(&filter).await.unwrap();
        assert_eq!(in_topic.len(), 1);
        assert_eq!(in_topic[0].title, "B");
    }

    #[tokio::test]
    async fn test_malformed_record_is_skipped() {
        let store = setup_test_store();

        tabs(&store).create(&Tab::new("Good", 0)).await.unwrap();
        store.insert_raw("tabs", "bad", json!({ "name": 42 })).await.unwrap();

        let listed = tabs(&store).list(&ParentFilter::All).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Good");
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = setup_test_store();

        let created = tabs(&store).create(&Tab::new("Original", 3)).await.unwrap();
        tabs(&store).update(&created.id, &TabPatch::rename("Renamed")).await.expect("Update failed");

        let found = tabs(&store).find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Renamed");
        assert_eq!(found.order, Some(3));
    }

    #[tokio::test]
    async fn test_update_clears_optional_item_fields() {
        let store = setup_test_store();

        let draft = ItemDraft::new("A", "https://a.dev", "https://src.dev", "notes").validate().unwrap();
        let created = items(&store).create(&Item::from_draft("t1", "p1", draft, 0)).await.unwrap();

        let cleared = ItemDraft::new("A", "https://a.dev", "", "").validate().unwrap();
        items(&store).update(&created.id, &ItemPatch::from_draft(&cleared)).await.unwrap();

        let raw = store.get("items", &created.id).await.unwrap().unwrap();
        assert!(raw.get("fonte").is_none());
        assert!(raw.get("description").is_none());
        assert_eq!(raw["order"], json!(0));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = setup_test_store();

        let created = tabs(&store).create(&Tab::new("To delete", 0)).await.unwrap();
        tabs(&store).delete(&created.id).await.expect("Delete failed");

        let found = tabs(&store).find_by_id(&created.id).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_renumber_makes_orders_contiguous() {
        let store = setup_test_store();

        let a = seed_item(&store, "t1", "p1", "A", 7).await;
        let b = seed_item(&store, "t1", "p1", "B", 2).await;
        let c = seed_item(&store, "t1", "p1", "C", 40).await;

        let visual = vec![c.id.clone(), a.id.clone(), b.id.clone()];
        let count = renumber::<Item, _>(&store, &visual).await.expect("Renumber failed");
        assert_eq!(count, 3);

        let listed = items(&store).list(&ParentFilter::topic("p1")).await.unwrap();
        assert_eq!(ids(&listed), visual);
        let orders: Vec<_> = listed.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![Some(0), Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_renumber_partial_failure_keeps_other_writes() {
        let store = setup_test_store();

        let a = tabs(&store).create(&Tab::new("A", 0)).await.unwrap();
        let b = tabs(&store).create(&Tab::new("B", 1)).await.unwrap();
        let c = tabs(&store).create(&Tab::new("C", 2)).await.unwrap();
        store.fail_writes_to(&b.id).await;

        let visual = vec![c.id.clone(), b.id.clone(), a.id.clone()];
        let err = renumber::<Tab, _>(&store, &visual).await.unwrap_err();
        assert!(matches!(err, DomainError::Unavailable(_)));

        let a = tabs(&store).find_by_id(&a.id).await.unwrap().unwrap();
        let b = tabs(&store).find_by_id(&b.id).await.unwrap().unwrap();
        let c = tabs(&store).find_by_id(&c.id).await.unwrap().unwrap();
        assert_eq!((c.order, b.order, a.order), (Some(0), Some(1), Some(2)));
    }

    #[tokio::test]
    async fn test_move_item_between_topics() {
        let store = setup_test_store();

        let a = seed_item(&store, "work", "reading", "A", 0).await;
        let b = seed_item(&store, "work", "reading", "B", 1).await;
        let c = seed_item(&store, "work", "later", "C", 0).await;

        // B dropped above C
        move_item(&store, &b.id, "later", 0, &[a.id.clone()], &[b.id.clone(), c.id.clone()])
            .await
            .expect("Move failed");

        let reading = items(&store).list(&ParentFilter::topic("reading")).await.unwrap();
        let later = items(&store).list(&ParentFilter::topic("later")).await.unwrap();
        assert_eq!(ids(&reading), vec![a.id.clone()]);
        assert_eq!(ids(&later), vec![b.id.clone(), c.id.clone()]);
        assert_eq!(later[0].topic_id, "later");
        assert_eq!(later[0].tab_id, "work");
        assert_eq!((later[0].order, later[1].order), (Some(0), Some(1)));
    }

    #[tokio::test]
    async fn test_delete_topic_keeps_other_topics_items() {
        let store = setup_test_store();

        let reading = topics(&store).create(&Topic::new("work", "Reading", 0)).await.unwrap();
        let later = topics(&store).create(&Topic::new("work", "Later", 1)).await.unwrap();
        seed_item(&store, "work", &reading.id, "A", 0).await;
        seed_item(&store, "work", &reading.id, "B", 1).await;
        let kept = seed_item(&store, "work", &later.id, "C", 0).await;

        let report = delete_topic_cascade(&store, &reading.id).await.expect("Cascade failed");
        assert_eq!(report.topics, vec![reading.id.clone()]);
        assert_eq!(report.items.len(), 2);

        let remaining = items(&store).list(&ParentFilter::All).await.unwrap();
        assert_eq!(ids(&remaining), vec![kept.id]);
        assert!(topics(&store).find_by_id(&reading.id).await.unwrap().is_none());
        assert!(topics(&store).find_by_id(&later.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_tab_removes_topics_and_items() {
        let store = setup_test_store();

        let work = tabs(&store).create(&Tab::new("Work", 0)).await.unwrap();
        let home = tabs(&store).create(&Tab::new("Home", 1)).await.unwrap();
        let reading = topics(&store).create(&Topic::new(&work.id, "Reading", 0)).await.unwrap();
        let chores = topics(&store).create(&Topic::new(&home.id, "Chores", 0)).await.unwrap();
        seed_item(&store, &work.id, &reading.id, "A", 0).await;
        // Stray item under the tab but outside any of its topics
        seed_item(&store, &work.id, "gone", "B", 0).await;
        let kept = seed_item(&store, &home.id, &chores.id, "C", 0).await;

        let report = delete_tab_cascade(&store, &work.id).await.expect("Cascade failed");
        assert_eq!(report.topics, vec![reading.id.clone()]);
        assert_eq!(report.items.len(), 2);

        let left_tabs = tabs(&store).list(&ParentFilter::All).await.unwrap();
        assert_eq!(ids(&left_tabs), vec![home.id.clone()]);
        let left_topics = topics(&store).list(&ParentFilter::All).await.unwrap();
        assert_eq!(ids(&left_topics), vec![chores.id]);
        let left_items = items(&store).list(&ParentFilter::All).await.unwrap();
        assert_eq!(ids(&left_items), vec![kept.id]);
    }

    #[tokio::test]
    async fn test_cascade_stops_at_first_failed_delete() {
        let store = setup_test_store();

        let a = seed_item(&store, "work", "reading", "A", 0).await;
        store.fail_writes_to(&a.id).await;

        let err = delete_topic_cascade(&store, "reading").await.unwrap_err();
        assert!(matches!(err, DomainError::Unavailable(_)));
        assert!(items(&store).find_by_id(&a.id).await.unwrap().is_some());

        store.heal().await;
        let report = delete_topic_cascade(&store, "reading").await.unwrap();
        assert_eq!(report.items, vec![a.id]);
    }
}
