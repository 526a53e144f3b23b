//! In-memory HTTP adapter that records requests and replays canned bodies
//!
//! Useful for tests and for running a geocoder without network access.

use crate::geo::Params;
use crate::http::{HttpAdapter, HttpError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One request seen by a [`RecordingAdapter`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub params: Params,
}

/// Canned reply, consumed in FIFO order
#[derive(Debug, Clone)]
enum Reply {
    Body(Value),
    Failure(String),
}

/// Records every `get` and answers from a queue of replies
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON body
    pub fn respond_with(self, body: Value) -> Self {
        self.push(Reply::Body(body));
        self
    }

    /// Queue a transport failure
    pub fn fail_with(self, message: impl Into<String>) -> Self {
        self.push(Reply::Failure(message.into()));
        self
    }

    /// All requests received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn push(&self, reply: Reply) {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(reply);
    }
}

#[async_trait]
impl HttpAdapter for RecordingAdapter {
    async fn get(&self, url: &str, params: &Params) -> std::result::Result<Value, HttpError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                url: url.to_string(),
                params: params.clone(),
            });

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Failure(message)) => Err(message.into()),
            None => Err(format!("no reply queued for {}", url).into()),
        }
    }
}
