//! [`Transport`] over the todo-lists REST API.
//!
//! Routes:
//! - `GET    /todo-lists`
//! - `POST   /todo-lists` `{title}`
//! - `DELETE /todo-lists/{id}`
//! - `PUT    /todo-lists/{id}` `{title}`
//! - `PUT    /todo-lists/{id}/reorder` `{putAfterItemId}`
//! - `GET    /todo-lists/{id}/tasks`
//! - `POST   /todo-lists/{id}/tasks` `{title}`
//! - `DELETE /todo-lists/{id}/tasks/{taskId}`
//! - `PUT    /todo-lists/{id}/tasks/{taskId}` full item model
//! - `PUT    /todo-lists/{id}/tasks/{taskId}/reorder` `{putAfterItemId}`

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use todosync_core::{Item, ItemId, ItemModel, ListId, TodoList};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope::{Envelope, Payload};
use crate::error::{Result, TransportError};
use crate::transport::Transport;

/// Body of `GET /todo-lists/{id}/tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemsPage {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
    base: Url,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            TransportError::Config(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(TransportError::Config(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| TransportError::Config(format!("invalid API key: {}", e)))?;
        headers.insert(HeaderName::from_static("api-key"), api_key);

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config,
            base,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL extended by `segments`, each percent-encoded as a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn lists_url(&self) -> Url {
        self.endpoint(&["todo-lists"])
    }

    fn list_url(&self, list_id: &ListId) -> Url {
        self.endpoint(&["todo-lists", list_id.as_str()])
    }

    fn list_reorder_url(&self, list_id: &ListId) -> Url {
        self.endpoint(&["todo-lists", list_id.as_str(), "reorder"])
    }

    fn items_url(&self, list_id: &ListId) -> Url {
        self.endpoint(&["todo-lists", list_id.as_str(), "tasks"])
    }

    fn item_url(&self, list_id: &ListId, item_id: &ItemId) -> Url {
        self.endpoint(&["todo-lists", list_id.as_str(), "tasks", item_id.as_str()])
    }

    fn item_reorder_url(&self, list_id: &ListId, item_id: &ItemId) -> Url {
        self.endpoint(&[
            "todo-lists",
            list_id.as_str(),
            "tasks",
            item_id.as_str(),
            "reorder",
        ])
    }

    /// Send a request and decode its body. Non-2xx statuses become [`TransportError::Http`].
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request rejected by server");
            return Err(TransportError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        debug!(%url, status = status.as_u16(), bytes = text.len(), "response received");
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn list_resources(&self) -> Result<Vec<TodoList>> {
        self.send(self.client.get(self.lists_url())).await
    }

    async fn create_resource(&self, title: &str) -> Result<Envelope<Payload<TodoList>>> {
        let body = json!({ "title": title });
        self.send(self.client.post(self.lists_url()).json(&body)).await
    }

    async fn delete_resource(&self, list_id: &ListId) -> Result<Envelope> {
        self.send(self.client.delete(self.list_url(list_id))).await
    }

    async fn update_resource(&self, list_id: &ListId, title: &str) -> Result<Envelope> {
        let body = json!({ "title": title });
        self.send(self.client.put(self.list_url(list_id)).json(&body))
            .await
    }

    async fn reorder_resource(
        &self,
        list_id: &ListId,
        put_after: Option<&ListId>,
    ) -> Result<Envelope> {
        let body = json!({ "putAfterItemId": put_after });
        self.send(self.client.put(self.list_reorder_url(list_id)).json(&body))
            .await
    }

    async fn list_sub_items(&self, list_id: &ListId) -> Result<Vec<Item>> {
        let page: ItemsPage = self.send(self.client.get(self.items_url(list_id))).await?;
        if let Some(error) = page.error.filter(|e| !e.is_empty()) {
            return Err(TransportError::Rejected(error));
        }
        debug!(%list_id, total = page.total_count, received = page.items.len(), "items page");
        Ok(page.items)
    }

    async fn create_sub_item(
        &self,
        list_id: &ListId,
        title: &str,
    ) -> Result<Envelope<Payload<Item>>> {
        let body = json!({ "title": title });
        self.send(self.client.post(self.items_url(list_id)).json(&body))
            .await
    }

    async fn delete_sub_item(&self, list_id: &ListId, item_id: &ItemId) -> Result<Envelope> {
        self.send(self.client.delete(self.item_url(list_id, item_id)))
            .await
    }

    async fn update_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        model: &ItemModel,
    ) -> Result<Envelope> {
        self.send(self.client.put(self.item_url(list_id, item_id)).json(model))
            .await
    }

    async fn reorder_sub_item(
        &self,
        list_id: &ListId,
        item_id: &ItemId,
        put_after: Option<&ItemId>,
    ) -> Result<Envelope> {
        let body = json!({ "putAfterItemId": put_after });
        self.send(
            self.client
                .put(self.item_reorder_url(list_id, item_id))
                .json(&body),
        )
        .await
    }
}
