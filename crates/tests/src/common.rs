//! In-process stand-in for the hospital backend.
//!
//! Each test spawns its own axum server on an ephemeral port with a list of
//! canned replies, points an [`ApiClient`] at it, and inspects the recorded
//! requests afterwards.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use client::ApiClient;
use serde_json::Value;

/// One canned reply, matched on method and raw (still percent-encoded) path.
#[derive(Clone)]
pub struct Stub {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub body: Value,
    pub delay: Duration,
}

impl Stub {
    pub fn get(path: &str, body: Value) -> Self {
        Self::new(Method::GET, path, StatusCode::OK, body)
    }

    pub fn post(path: &str, status: StatusCode, body: Value) -> Self {
        Self::new(Method::POST, path, status, body)
    }

    pub fn delete(path: &str, status: StatusCode, body: Value) -> Self {
        Self::new(Method::DELETE, path, status, body)
    }

    pub fn new(method: Method, path: &str, status: StatusCode, body: Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Hold the reply back, for ordering tests.
    pub fn delayed(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }
}

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct BackendState {
    stubs: Arc<Vec<Stub>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct FakeBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

/// Start a backend answering with `stubs`. Unmatched requests get a 404.
pub async fn spawn_backend(stubs: Vec<Stub>) -> FakeBackend {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        stubs: Arc::new(stubs),
        requests: requests.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test backend");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test backend crashed");
    });

    FakeBackend {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind a throwaway listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}")
}

async fn handle(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body: serde_json::from_slice(&body).ok(),
    });

    let stub = state
        .stubs
        .iter()
        .find(|s| s.method == method && s.path == path)
        .cloned();
    match stub {
        Some(stub) => {
            if !stub.delay.is_zero() {
                tokio::time::sleep(stub.delay).await;
            }
            (stub.status, Json(stub.body)).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no stub").into_response(),
    }
}

// --- Fixtures ---

pub fn doctor_json(id: i64, name: &str, specialty: &str, times: &[&str]) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "specialty": specialty,
        "email": format!("{}@hospital.test", name.to_lowercase().replace(' ', ".")),
        "phone": "5550000000",
        "availableTimes": times,
    })
}

pub fn patient_json(id: i64, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": "ana@patient.test",
        "phone": "5551112222",
        "address": "1 Main St",
    })
}
