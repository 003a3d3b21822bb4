//! Scripted collaborators shared by hook and controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use serde_json::{Value, json};

use crate::error::ApiError;
use crate::net::{Endpoint, Method, RequestOptions, Transport};
use crate::notify::Notifier;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub options: RequestOptions,
}

/// Transport answering from per-route queues. The last queued answer for a
/// route repeats; unscripted routes fail with a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<HashMap<(Method, String), VecDeque<Result<Value, ApiError>>>>,
    calls: RefCell<Vec<RecordedCall>>,
    yield_before_reply: Cell<bool>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: Method, path: &str, response: Value) -> Self {
        self.push(method, path, Ok(response));
        self
    }

    pub fn fail(self, method: Method, path: &str, err: ApiError) -> Self {
        self.push(method, path, Err(err));
        self
    }

    /// Suspend once inside every `send`, so concurrent callers interleave.
    pub fn yielding(self) -> Self {
        self.yield_before_reply.set(true);
        self
    }

    fn push(&self, method: Method, path: &str, response: Result<Value, ApiError>) {
        self.responses
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.options.method == method && c.path == path)
            .count()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<Value, ApiError> {
        let key = (options.method, endpoint.path().to_owned());
        self.calls.borrow_mut().push(RecordedCall { path: endpoint.path().to_owned(), options });
        if self.yield_before_reply.get() {
            tokio::task::yield_now().await;
        }
        let missing = || Err(ApiError::status(404, Some(format!("no script for {} {}", key.0.as_str(), key.1))));
        let mut responses = self.responses.borrow_mut();
        match responses.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(missing),
            Some(queue) => queue.front().cloned().unwrap_or_else(missing),
            None => missing(),
        }
    }
}

/// Notifier that records dialogs and answers every confirmation the same way.
pub struct RecordingNotifier {
    answer: bool,
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn answering(answer: bool) -> Self {
        Self { answer, alerts: RefCell::new(Vec::new()), confirms: RefCell::new(Vec::new()) }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.answer
    }
}

pub fn store_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "openTime": "09:00",
        "closeTime": "22:00",
        "image": format!("https://final17-bucket.s3.ap-northeast-2.amazonaws.com/stores/{id}.jpg"),
        "storeLikeCount": id * 2,
    })
}

pub fn page(rows: Vec<Value>) -> Value {
    json!({ "data": { "content": rows } })
}

pub fn server_error() -> ApiError {
    ApiError::status(500, Some("internal error".to_owned()))
}

pub fn noon() -> time::Time {
    time::macros::time!(12:00)
}
