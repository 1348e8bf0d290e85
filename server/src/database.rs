//! # Redis
//!
//! RAM database holding per-user attempt history.
//!
//! ## Schema
//!
//! - One list per user under `attempts:{user}`
//! - Entries are JSON-encoded [`Attempt`] records
//! - `LPUSH` on write, so index 0 is always the newest attempt
//! - `LLEN` + `LRANGE` slice out one page at a time
//!
//! ## Sizing
//!
//! - An entry is a few hundred bytes of JSON
//! - A heavy user at 10,000 attempts is still only a couple of MB, so no
//!   eviction or trimming is needed
use std::time::Duration;

use chrono::{DateTime, Utc};
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Single,
    Range,
}

/// One persisted evaluation request and its outcome. `input_value` holds
/// the raw input as text, `"153"` or `"100-999"` depending on the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub user: String,
    pub input_value: String,
    pub input_type: InputType,
    pub result: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_armstrong: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub created_at: DateTime<Utc>,
}

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}

fn attempts_key(user: &str) -> String {
    format!("attempts:{user}")
}

pub async fn push_attempt(
    connection: &mut ConnectionManager,
    attempt: &Attempt,
) -> Result<(), AppError> {
    let entry = serde_json::to_string(attempt)?;
    let _: () = connection.lpush(attempts_key(&attempt.user), entry).await?;

    Ok(())
}

/// One page of attempts, newest first, plus the list length for paging.
pub async fn fetch_attempts(
    connection: &mut ConnectionManager,
    user: &str,
    start: isize,
    stop: isize,
) -> Result<(u64, Vec<Attempt>), AppError> {
    let key = attempts_key(user);

    let total: u64 = connection.llen(&key).await?;
    let entries: Vec<String> = connection.lrange(&key, start, stop).await?;

    let attempts = entries
        .iter()
        .map(|entry| serde_json::from_str(entry))
        .collect::<Result<Vec<Attempt>, _>>()?;

    Ok((total, attempts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_key() {
        assert_eq!(attempts_key("alice"), "attempts:alice");
    }

    #[test]
    fn test_attempt_record_shape() {
        let attempt = Attempt {
            user: "alice".to_string(),
            input_value: "153".to_string(),
            input_type: InputType::Single,
            result: serde_json::json!({ "is_armstrong": true }),
            is_armstrong: Some(true),
            count: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&attempt).unwrap();
        assert_eq!(value["input_type"], "single");
        assert_eq!(value["is_armstrong"], true);
        // absent optionals are skipped, not serialized as null
        assert!(value.get("count").is_none());

        let back: Attempt = serde_json::from_value(value).unwrap();
        assert_eq!(back.input_type, InputType::Single);
        assert_eq!(back.count, None);
        assert_eq!(back.created_at, attempt.created_at);
    }

    #[test]
    fn test_range_record_shape() {
        let attempt = Attempt {
            user: "alice".to_string(),
            input_value: "100-999".to_string(),
            input_type: InputType::Range,
            result: serde_json::json!({ "numbers": [153, 370, 371, 407] }),
            is_armstrong: None,
            count: Some(4),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&attempt).unwrap();
        assert_eq!(value["input_type"], "range");
        assert_eq!(value["count"], 4);
        assert!(value.get("is_armstrong").is_none());
    }
}
