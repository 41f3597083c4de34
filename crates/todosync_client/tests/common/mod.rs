//! Common test utilities for the HTTP transport tests.

use mockito::ServerGuard;
use todosync_client::{ClientConfig, HttpTransport};

pub const API_KEY: &str = "test-api-key";

/// Transport pointed at a mock server.
pub fn transport_for(server: &ServerGuard) -> HttpTransport {
    let config = ClientConfig::new(server.url(), API_KEY);
    HttpTransport::new(config).expect("Failed to create test transport")
}

pub fn list_json(id: &str, title: &str) -> String {
    format!(
        r#"{{"id":"{}","title":"{}","addedDate":"2024-03-01T08:00:00.123","order":0}}"#,
        id, title
    )
}

pub fn item_json(id: &str, list_id: &str, title: &str, status: u8) -> String {
    format!(
        r#"{{"id":"{}","todoListId":"{}","title":"{}","description":null,"status":{},"priority":1,"startDate":null,"deadline":null,"order":0,"addedDate":"2024-03-01T08:00:00"}}"#,
        id, list_id, title, status
    )
}
