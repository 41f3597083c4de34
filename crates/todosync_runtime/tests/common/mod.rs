//! Common test utilities: a scripted in-memory transport.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::Notify;
use todosync_client::{Empty, Envelope, Payload, Transport, TransportError};
use todosync_core::{Item, ItemId, ItemModel, ListId, Priority, Store, TodoList};
use todosync_runtime::SyncOrchestrator;

/// Outcome of the next scripted call. Unscripted calls succeed.
#[derive(Debug, Clone)]
pub enum Reply {
    Ok,
    Reject(i32, Vec<String>),
    Fail(String),
}

#[derive(Default)]
pub struct FakeTransport {
    lists: Mutex<Vec<TodoList>>,
    items: Mutex<HashMap<ListId, Vec<Item>>>,
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<String>>,
    updates: Mutex<Vec<ItemModel>>,
    gate: Mutex<Option<Arc<Notify>>>,
    next_id: AtomicUsize,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, list: TodoList) -> Self {
        self.lists.lock().unwrap().push(list);
        self
    }

    pub fn with_items(self, list_id: &str, items: Vec<Item>) -> Self {
        self.items
            .lock()
            .unwrap()
            .insert(ListId::from(list_id), items);
        self
    }

    /// Queue the outcome of the next call.
    pub fn script(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Make every following call wait until the returned handle is notified.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn release(&self) {
        *self.gate.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<ItemModel> {
        self.updates.lock().unwrap().clone()
    }

    async fn enter(&self, call: String) -> Reply {
        self.calls.lock().unwrap().push(call);
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.replies.lock().unwrap().pop_front().unwrap_or(Reply::Ok)
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn read<T>(reply: Reply, data: impl FnOnce() -> T) -> todosync_client::Result<T> {
    match reply {
        Reply::Ok => Ok(data()),
        Reply::Reject(_, messages) => Err(TransportError::Rejected(messages.join("; "))),
        Reply::Fail(message) => Err(TransportError::Other(message)),
    }
}

fn envelope<T>(reply: Reply, data: impl FnOnce() -> T) -> todosync_client::Result<Envelope<T>> {
    match reply {
        Reply::Ok => Ok(Envelope::success(data())),
        Reply::Reject(code, messages) => Ok(Envelope::rejected(code, messages)),
        Reply::Fail(message) => Err(TransportError::Other(message)),
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn list_resources(&self) -> todosync_client::Result<Vec<TodoList>> {
        let reply = self.enter("list_resources".into()).await;
        read(reply, || self.lists.lock().unwrap().clone())
    }

    async fn create_resource(
        &self,
        title: &str,
    ) -> todosync_client::Result<Envelope<Payload<TodoList>>> {
        let reply = self.enter(format!("create_resource {}", title)).await;
        envelope(reply, || Payload {
            item: TodoList::new(self.next_id("N"), title, 0, ts()),
        })
    }

    async fn delete_resource(&self, list_id: &ListId) -> todosync_client::Result<Envelope> {
        let reply = self.enter(format!("delete_resource {}", list_id)).await;
        envelope(reply, || Empty {})
    }

    async fn update_resource(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> todosync_client::Result<Envelope> {
        let reply = self
            .enter(format!("update_resource {} {}", list_id, title))
            .await;
        envelope(reply, || Empty {})
    }

    async fn reorder_resource(
        &self,
        list_id: &ListId,
        put_after: Option<&ListId>,
    ) -> todosync_client::Result<Envelope> {
        let after = put_after.map(ListId::as_str).unwrap_or("-");
        let reply = self
            .enter(format!("reorder_resource {} {}", list_id, after))
            .await;
        envelope(reply, || Empty {})
    }

    async fn list_sub_items(&self, list_id: &ListId) -> todosync_client::Result<Vec<Item>> {
        let reply = self.enter(format!("list_sub_items {}", list_id)).await;
        read(reply, || {
            self.items
                .lock()
                .unwrap()
                .get(list_id)
                .cloned()
                .unwrap_or_default()
        })
    }

    async fn create_sub_item(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> todosync_client::Result<Envelope<Payload<Item>>> {
        let reply = self
            .enter(format!("create_sub_item {} {}", list_id, title))
            .await;
        envelope(reply, || Payload {
            item: Item::new(self.next_id("T"), list_id.clone(), title, ts()),
        })
    }

    async fn delete_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
    ) -> todosync_client::Result<Envelope> {
        let reply = self
            .enter(format!("delete_sub_item {} {}", list_id, item_id))
            .await;
        envelope(reply, || Empty {})
    }

    async fn update_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        model: &ItemModel,
    ) -> todosync_client::Result<Envelope> {
        self.updates.lock().unwrap().push(model.clone());
        let reply = self
            .enter(format!("update_sub_item {} {}", list_id, item_id))
            .await;
        envelope(reply, || Empty {})
    }

    async fn reorder_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        put_after: Option<&ItemId>,
    ) -> todosync_client::Result<Envelope> {
        let after = put_after.map(ItemId::as_str).unwrap_or("-");
        let reply = self
            .enter(format!("reorder_sub_item {} {} {}", list_id, item_id, after))
            .await;
        envelope(reply, || Empty {})
    }
}

pub fn ts() -> NaiveDateTime {
    "2024-01-01T00:00:00".parse().unwrap()
}

/// Two lists; "L1" holds two items, "L2" none.
pub fn fixture() -> FakeTransport {
    FakeTransport::new()
        .with_list(TodoList::new("L1", "Work", 0, ts()))
        .with_list(TodoList::new("L2", "Home", 1, ts()))
        .with_items(
            "L1",
            vec![
                Item::new("I1", "L1", "Buy milk", ts())
                    .with_description("2 litres")
                    .with_priority(Priority::Hi),
                Item::new("I2", "L1", "Call mom", ts())
                    .with_status(todosync_core::ItemStatus::Complete),
            ],
        )
}

pub fn orchestrator(transport: Arc<FakeTransport>) -> SyncOrchestrator {
    SyncOrchestrator::new(Store::new(), transport)
}

/// Orchestrator whose store already holds the fixture, with the call log cleared.
pub async fn seeded() -> (SyncOrchestrator, Arc<FakeTransport>) {
    let fake = Arc::new(fixture());
    let orch = orchestrator(fake.clone());
    orch.fetch_all().await.expect("seeding fetch failed");
    fake.calls.lock().unwrap().clear();
    (orch, fake)
}

/// Yield until the transport has seen at least `n` calls.
pub async fn wait_for_calls(fake: &FakeTransport, n: usize) {
    while fake.calls().len() < n {
        tokio::task::yield_now().await;
    }
}
