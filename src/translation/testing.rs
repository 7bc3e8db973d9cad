//! Test doubles shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use super::transport::{HttpResponse, Transport};
use crate::config::Config;
use crate::error::Result;

/// In-memory transport that replays canned replies and records requests.
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpResponse>>>,
    pub calls: RefCell<Vec<(String, String, Value)>>,
}

impl FakeTransport {
    pub fn replying(replies: impl IntoIterator<Item = Result<HttpResponse>>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        api_key: &str,
        body: &B,
    ) -> Result<HttpResponse> {
        self.calls.borrow_mut().push((
            url.to_string(),
            api_key.to_string(),
            serde_json::to_value(body).unwrap_or(Value::Null),
        ));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {url}"))
    }
}

pub fn completion(content: &str) -> Result<HttpResponse> {
    Ok(HttpResponse {
        status: 200,
        body: json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string(),
    })
}

pub fn test_config() -> Config {
    Config::new("https://api.example.com/v1", "test-model", "sk-test")
}
