// Rust guideline compliant 2026-10-19

//! Scripted transport for exercising the client without a network.

use crate::client::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One scripted outcome.
#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    Failure(String),
}

/// Transport that replays queued replies per endpoint and records requests.
///
/// Replies are matched by the URL suffix they were registered under
/// (for example `issues/search`) and consumed in order. A request with no
/// remaining reply fails with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<Vec<(String, VecDeque<Reply>)>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    /// Creates a transport with no replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON reply for an endpoint.
    pub fn reply(&self, endpoint: &str, status: u16, body: impl Into<String>) -> &Self {
        self.push(
            endpoint,
            Reply::Response(HttpResponse {
                status,
                body: body.into(),
            }),
        );
        self
    }

    /// Queues a transport failure for an endpoint.
    pub fn fail(&self, endpoint: &str, message: impl Into<String>) -> &Self {
        self.push(endpoint, Reply::Failure(message.into()));
        self
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Returns the requests sent to one endpoint.
    pub fn requests_to(&self, endpoint: &str) -> Vec<HttpRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.url.ends_with(endpoint))
            .cloned()
            .collect()
    }

    fn push(&self, endpoint: &str, reply: Reply) {
        let mut replies = self.replies.borrow_mut();
        match replies.iter().position(|(name, _)| name == endpoint) {
            Some(index) => replies[index].1.push_back(reply),
            None => replies.push((endpoint.to_string(), VecDeque::from([reply]))),
        }
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());

        let reply = self
            .replies
            .borrow_mut()
            .iter_mut()
            .find(|(endpoint, _)| request.url.ends_with(endpoint.as_str()))
            .and_then(|(_, queue)| queue.pop_front());

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Failure(message)) => Err(Error::Transport(message)),
            None => Err(Error::Transport(format!("no scripted reply for {}", request.url))),
        }
    }
}
