//! In-memory listing backend serving the default endpoint layout

use std::collections::HashMap;
use std::sync::Mutex;

use listing::io::{HttpClient, HttpResponse};
use serde_json::Value;

pub const BASE_URL: &str = "http://backend.test";

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub listing: Mutex<Vec<Value>>,
    pub sc_details: Mutex<HashMap<String, Value>>,
    pub reject_deletes: Mutex<bool>,
    pub delete_requests: Mutex<Vec<String>>,
    pub sc_requests: Mutex<Vec<String>>,
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn response(status: u16, body: impl Into<String>) -> HttpResponse {
    HttpResponse {
        status,
        body: body.into(),
    }
}

#[async_trait::async_trait]
impl HttpClient for FakeBackend {
    async fn get(&self, url: &str) -> listing::Result<HttpResponse> {
        let path = url.strip_prefix(BASE_URL).unwrap_or(url);

        if path == "/api/listing" {
            let body = serde_json::to_string(&*self.listing.lock().unwrap())?;
            return Ok(response(200, body));
        }

        if let Some(id) = path.strip_prefix("/api/sc/items/") {
            self.sc_requests.lock().unwrap().push(id.to_string());
            return Ok(match self.sc_details.lock().unwrap().get(id) {
                Some(detail) => response(200, detail.to_string()),
                None => response(404, "stock count not found"),
            });
        }

        Ok(response(404, "not found"))
    }

    async fn delete(&self, url: &str) -> listing::Result<HttpResponse> {
        let path = url.strip_prefix(BASE_URL).unwrap_or(url).to_string();
        self.delete_requests.lock().unwrap().push(path.clone());

        if *self.reject_deletes.lock().unwrap() {
            return Ok(response(500, "delete failed"));
        }

        let mut parts = path.trim_start_matches("/api/").splitn(2, '/');
        let (Some(entry_type), Some(id)) = (parts.next(), parts.next()) else {
            return Ok(response(404, "not found"));
        };
        self.listing
            .lock()
            .unwrap()
            .retain(|e| !(scalar_text(&e["type"]) == entry_type && scalar_text(&e["id"]) == id));
        Ok(response(204, ""))
    }
}
