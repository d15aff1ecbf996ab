//! In-process stand-in for the upstream LLM APIs, used by client tests.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

pub(crate) struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

struct StubState {
    status: StatusCode,
    reply: Value,
    captured: Mutex<Vec<CapturedRequest>>,
}

pub(crate) struct StubServer {
    pub url: String,
    state: Arc<StubState>,
}

impl StubServer {
    /// Take the only request the stub received.
    pub fn single_request(&self) -> CapturedRequest {
        let mut captured = self.state.captured.lock().unwrap();
        assert_eq!(captured.len(), 1, "expected exactly one upstream request");
        captured.remove(0)
    }
}

/// Serve `reply` with `status` for every POST to `/`.
pub(crate) async fn spawn_stub(status: StatusCode, reply: Value) -> StubServer {
    let state = Arc::new(StubState {
        status,
        reply,
        captured: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/", post(handle))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        url: format!("http://{addr}/"),
        state,
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .captured
        .lock()
        .unwrap()
        .push(CapturedRequest { headers, body });
    (state.status, Json(state.reply.clone()))
}
