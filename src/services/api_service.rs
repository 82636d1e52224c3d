use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::errors::{FetchError, FetchResult};
use crate::models::{Task, User};
use tracing;

pub struct ApiService {
    client: Client,
    users_url: String,
    todos_url: String,
    timeout_seconds: u64,
}

impl ApiService {
    pub fn new(config: &ApiConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            users_url: config.users_url.clone(),
            todos_url: config.todos_url.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub async fn fetch_users(&self) -> FetchResult<Vec<User>> {
        let records = self.fetch_collection(&self.users_url).await?;
        let users = keep_valid_records::<User>(records, "user");
        tracing::info!("Fetched {} valid users from {}", users.len(), self.users_url);
        Ok(users)
    }

    pub async fn fetch_tasks(&self) -> FetchResult<Vec<Task>> {
        let records = self.fetch_collection(&self.todos_url).await?;
        let tasks = keep_valid_records::<Task>(records, "task");
        tracing::info!("Fetched {} valid tasks from {}", tasks.len(), self.todos_url);
        Ok(tasks)
    }

    // Fetch one collection as raw JSON values, checking the response before
    // touching the body. Timeouts and connection failures get their own error
    // variants so the caller can report them precisely.
    async fn fetch_collection(&self, url: &str) -> FetchResult<Vec<Value>> {
        tracing::debug!("Requesting {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout_seconds,
                }
            } else if e.is_connect() {
                FetchError::Connection {
                    url: url.to_string(),
                    source: e,
                }
            } else {
                FetchError::Http(e)
            }
        })?;

        validate_response(&response, url)?;

        response.json::<Vec<Value>>().await.map_err(|e| {
            tracing::error!("Failed to decode body from {}: {}", url, e);
            FetchError::InvalidResponse {
                url: url.to_string(),
                reason: format!("body is not a JSON list: {}", e),
            }
        })
    }
}

// Check for status 200 and application/json in Content-Type
fn validate_response(response: &Response, url: &str) -> FetchResult<()> {
    if response.status() != StatusCode::OK {
        return Err(FetchError::InvalidResponse {
            url: url.to_string(),
            reason: format!("status {}", response.status()),
        });
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if !content_type.contains("application/json") {
        return Err(FetchError::InvalidResponse {
            url: url.to_string(),
            reason: format!("Content-Type {:?} is not application/json", content_type),
        });
    }

    Ok(())
}

// Keep only the records that carry every required field with the right type.
// A bad record is the record's problem, not the run's: it is logged and dropped.
fn keep_valid_records<T: DeserializeOwned>(records: Vec<Value>, kind: &str) -> Vec<T> {
    let mut valid = Vec::with_capacity(records.len());

    for record in records {
        let record_id = record.get("id").cloned();
        match serde_json::from_value::<T>(record) {
            Ok(parsed) => valid.push(parsed),
            Err(e) => {
                tracing::warn!("Skipping invalid {} record (id: {:?}): {}", kind, record_id, e);
            }
        }
    }

    valid
}
