//! Item operations against a scripted transport.

mod common;

use std::sync::Arc;

use common::{FakeTransport, Reply, orchestrator, seeded, ts, wait_for_calls};
use todosync_core::{
    Item, ItemId, ItemModel, ItemPatch, ItemStatus, ListId, Priority, RequestStatus, TodoList,
};
use todosync_runtime::SyncError;

fn l1() -> ListId {
    ListId::from("L1")
}

fn item_ids(orch: &todosync_runtime::SyncOrchestrator, list_id: &ListId) -> Vec<String> {
    orch.store()
        .items(list_id)
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.id.to_string())
        .collect()
}

#[tokio::test]
async fn test_fetch_items_drops_foreign_items() {
    let fake = Arc::new(
        FakeTransport::new()
            .with_list(TodoList::new("L1", "Work", 0, ts()))
            .with_items(
                "L1",
                vec![
                    Item::new("I1", "L1", "mine", ts()),
                    Item::new("X1", "L9", "stray", ts()),
                ],
            ),
    );
    let orch = orchestrator(fake.clone());
    orch.fetch_lists().await.unwrap();

    orch.fetch_items(&l1()).await.unwrap();

    assert_eq!(item_ids(&orch, &l1()), vec!["I1"]);
    assert_eq!(orch.store().app_status().status, RequestStatus::Succeeded);
}

#[tokio::test]
async fn test_fetch_items_for_unknown_list_fails() {
    let fake = Arc::new(FakeTransport::new());
    let orch = orchestrator(fake.clone());

    let err = orch.fetch_items(&l1()).await.unwrap_err();

    assert!(matches!(err, SyncError::Store(_)));
    assert_eq!(orch.store().app_status().status, RequestStatus::Failed);
}

#[tokio::test]
async fn test_fetch_items_rejected_read() {
    let (orch, fake) = seeded().await;
    fake.script(Reply::Reject(1, vec!["list not found".into()]));

    assert!(orch.fetch_items(&l1()).await.is_err());

    let app = orch.store().app_status();
    assert_eq!(app.error.as_deref(), Some("list not found"));
    assert_eq!(item_ids(&orch, &l1()), vec!["I1", "I2"]);
}

#[tokio::test]
async fn test_create_item_prepends() {
    let (orch, fake) = seeded().await;

    orch.create_item(&l1(), "Pay rent").await.unwrap();

    assert_eq!(item_ids(&orch, &l1()), vec!["T1", "I1", "I2"]);
    assert_eq!(fake.calls(), vec!["create_sub_item L1 Pay rent"]);
    assert_eq!(orch.store().app_status().status, RequestStatus::Succeeded);
}

#[tokio::test]
async fn test_create_item_rejected() {
    let (orch, fake) = seeded().await;
    fake.script(Reply::Reject(1, vec!["Title is required".into()]));

    assert!(orch.create_item(&l1(), "").await.is_err());

    assert_eq!(item_ids(&orch, &l1()), vec!["I1", "I2"]);
    let app = orch.store().app_status();
    assert_eq!(app.error.as_deref(), Some("Title is required"));
    assert_eq!(app.status, RequestStatus::Failed);
}

#[tokio::test]
async fn test_create_item_in_unloaded_list_is_reported() {
    let fake = Arc::new(FakeTransport::new());
    let orch = orchestrator(fake.clone());

    let err = orch.create_item(&l1(), "Orphan").await.unwrap_err();

    assert!(matches!(err, SyncError::Store(_)));
    let app = orch.store().app_status();
    assert_eq!(app.status, RequestStatus::Failed);
    assert!(app.error.unwrap().contains("L1"));
    assert!(orch.store().items(&l1()).is_none());
}

#[tokio::test]
async fn test_delete_item_success() {
    let (orch, _fake) = seeded().await;

    orch.delete_item(&l1(), &ItemId::from("I1")).await.unwrap();

    assert_eq!(item_ids(&orch, &l1()), vec!["I2"]);
    assert_eq!(orch.store().app_status().status, RequestStatus::Succeeded);
}

#[tokio::test]
async fn test_delete_item_failure_resets_entity() {
    let (orch, fake) = seeded().await;
    let i1 = ItemId::from("I1");
    fake.script(Reply::Fail("Network Error".into()));

    assert!(orch.delete_item(&l1(), &i1).await.is_err());

    let item = orch.store().item(&l1(), &i1).unwrap();
    assert_eq!(item.entity_status, RequestStatus::Idle);
    assert_eq!(orch.store().app_status().status, RequestStatus::Failed);
}

#[tokio::test]
async fn test_delete_item_rejected_resets_entity() {
    let (orch, fake) = seeded().await;
    let i1 = ItemId::from("I1");
    fake.script(Reply::Reject(1, vec![]));

    assert!(orch.delete_item(&l1(), &i1).await.is_err());

    assert_eq!(
        orch.store().item(&l1(), &i1).unwrap().entity_status,
        RequestStatus::Idle
    );
}

#[tokio::test]
async fn test_delete_item_marks_entity_loading_in_flight() {
    let (orch, fake) = seeded().await;
    let gate = fake.hold();

    let task = {
        let orch = orch.clone();
        tokio::spawn(async move { orch.delete_item(&l1(), &ItemId::from("I2")).await })
    };
    wait_for_calls(&fake, 1).await;

    let item = orch.store().item(&l1(), &ItemId::from("I2")).unwrap();
    assert_eq!(item.entity_status, RequestStatus::Loading);

    gate.notify_one();
    task.await.unwrap().unwrap();
    assert_eq!(item_ids(&orch, &l1()), vec!["I1"]);
}

#[tokio::test]
async fn test_update_item_sends_full_model_and_applies_patch() {
    let (orch, fake) = seeded().await;
    let i1 = ItemId::from("I1");

    orch.update_item(&l1(), &i1, ItemPatch::new().status(ItemStatus::Complete))
        .await
        .unwrap();

    assert_eq!(
        fake.updates(),
        vec![ItemModel {
            title: "Buy milk".into(),
            description: Some("2 litres".into()),
            status: ItemStatus::Complete,
            priority: Priority::Hi,
            start_date: None,
            deadline: None,
        }]
    );
    let item = orch.store().item(&l1(), &i1).unwrap();
    assert_eq!(item.status, ItemStatus::Complete);
    assert_eq!(item.title, "Buy milk");
    assert_eq!(item.description.as_deref(), Some("2 litres"));
    assert_eq!(item.entity_status, RequestStatus::Idle);
    assert_eq!(orch.store().app_status().status, RequestStatus::Succeeded);
}

#[tokio::test]
async fn test_title_update_keeps_in_progress_status_and_clears_deadline() {
    let deadline = "2024-05-01T10:00:00".parse().unwrap();
    let fake = Arc::new(
        FakeTransport::new()
            .with_list(TodoList::new("L1", "Work", 0, ts()))
            .with_items(
                "L1",
                vec![
                    Item::new("I1", "L1", "Draft spec", ts())
                        .with_status(ItemStatus::InProgress)
                        .with_deadline(deadline),
                ],
            ),
    );
    let orch = orchestrator(fake.clone());
    orch.fetch_all().await.unwrap();
    let i1 = ItemId::from("I1");

    orch.update_item(
        &l1(),
        &i1,
        ItemPatch::new().title("Final spec").clear_deadline(),
    )
    .await
    .unwrap();

    let sent = fake.updates();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Final spec");
    assert_eq!(sent[0].status, ItemStatus::InProgress);
    assert!(sent[0].deadline.is_none());
    let item = orch.store().item(&l1(), &i1).unwrap();
    assert_eq!(item.status, ItemStatus::InProgress);
    assert!(item.deadline.is_none());
}

#[tokio::test]
async fn test_update_item_marks_entity_loading_in_flight() {
    let (orch, fake) = seeded().await;
    let gate = fake.hold();

    let task = {
        let orch = orch.clone();
        tokio::spawn(async move {
            orch.update_item(&l1(), &ItemId::from("I1"), ItemPatch::new().title("Buy oat milk"))
                .await
        })
    };
    wait_for_calls(&fake, 1).await;

    let item = orch.store().item(&l1(), &ItemId::from("I1")).unwrap();
    assert_eq!(item.entity_status, RequestStatus::Loading);
    assert_eq!(item.title, "Buy milk");

    gate.notify_one();
    task.await.unwrap().unwrap();
    let item = orch.store().item(&l1(), &ItemId::from("I1")).unwrap();
    assert_eq!(item.title, "Buy oat milk");
    assert_eq!(item.entity_status, RequestStatus::Idle);
}

#[tokio::test]
async fn test_update_missing_item_makes_no_call() {
    let (orch, fake) = seeded().await;
    let before = orch.store().snapshot();

    let err = orch
        .update_item(&l1(), &ItemId::from("nope"), ItemPatch::new().title("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, SyncError::ItemNotFound { .. }));
    assert!(fake.calls().is_empty());
    assert_eq!(orch.store().snapshot(), before);
}

#[tokio::test]
async fn test_update_item_rejected_leaves_item() {
    let (orch, fake) = seeded().await;
    let i1 = ItemId::from("I1");
    fake.script(Reply::Reject(1, vec!["Priority out of range".into()]));

    assert!(
        orch.update_item(&l1(), &i1, ItemPatch::new().priority(Priority::Later))
            .await
            .is_err()
    );

    let item = orch.store().item(&l1(), &i1).unwrap();
    assert_eq!(item.priority, Priority::Hi);
    assert_eq!(item.entity_status, RequestStatus::Idle);
    let app = orch.store().app_status();
    assert_eq!(app.error.as_deref(), Some("Priority out of range"));
    assert_eq!(app.status, RequestStatus::Failed);
}

#[tokio::test]
async fn test_update_item_network_failure_resets_entity() {
    let (orch, fake) = seeded().await;
    let i2 = ItemId::from("I2");
    fake.script(Reply::Fail("timeout".into()));

    assert!(
        orch.update_item(&l1(), &i2, ItemPatch::new().status(ItemStatus::Incomplete))
            .await
            .is_err()
    );

    let item = orch.store().item(&l1(), &i2).unwrap();
    assert!(item.is_complete());
    assert_eq!(item.entity_status, RequestStatus::Idle);
    assert_eq!(orch.store().app_status().error.as_deref(), Some("timeout"));
}

#[tokio::test]
async fn test_reorder_item() {
    let (orch, fake) = seeded().await;
    let i1 = ItemId::from("I1");
    let i2 = ItemId::from("I2");

    orch.reorder_item(&l1(), &i1, Some(&i2)).await.unwrap();

    assert_eq!(item_ids(&orch, &l1()), vec!["I2", "I1"]);
    assert_eq!(orch.store().item(&l1(), &i1).unwrap().entity_status, RequestStatus::Idle);
    assert_eq!(fake.calls(), vec!["reorder_sub_item L1 I1 I2"]);
}

#[tokio::test]
async fn test_last_settled_operation_owns_global_status() {
    let (orch, fake) = seeded().await;
    let gate = fake.hold();
    fake.script(Reply::Fail("Network Error".into()));

    let slow = {
        let orch = orch.clone();
        tokio::spawn(async move { orch.delete_item(&l1(), &ItemId::from("I1")).await })
    };
    wait_for_calls(&fake, 1).await;
    fake.release();

    assert!(orch.rename_list(&ListId::from("L2"), "House").await.is_err());
    assert_eq!(orch.store().app_status().status, RequestStatus::Failed);

    gate.notify_one();
    assert!(slow.await.unwrap().is_ok());
    assert_eq!(orch.store().app_status().status, RequestStatus::Succeeded);
    assert_eq!(item_ids(&orch, &l1()), vec!["I2"]);
}
