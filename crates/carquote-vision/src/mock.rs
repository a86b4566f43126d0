//! In-process prediction endpoint for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;

/// What the mock saw on its most recent request.
#[derive(Debug, Clone)]
pub struct Captured {
    pub content_type: Option<String>,
    pub prediction_key: Option<String>,
    pub body_len: usize,
}

pub struct MockServer {
    pub url: String,
    hits: AtomicUsize,
    last: Mutex<Option<Captured>>,
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl MockServer {
    pub async fn start(status: u16, body: &str) -> Arc<Self> {
        Self::start_with_delay(status, body, None).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Option<Duration>) -> Arc<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Arc::new(Self {
            url: format!("http://{addr}/predict"),
            hits: AtomicUsize::new(0),
            last: Mutex::new(None),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            delay,
        });

        let app = Router::new()
            .route("/predict", post(predict))
            .layer(DefaultBodyLimit::disable())
            .with_state(Arc::clone(&server));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        server
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<Captured> {
        self.last.lock().unwrap().clone()
    }
}

async fn predict(
    State(server): State<Arc<MockServer>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    server.hits.fetch_add(1, Ordering::SeqCst);
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    *server.last.lock().unwrap() = Some(Captured {
        content_type: header("content-type"),
        prediction_key: header("prediction-key"),
        body_len: body.len(),
    });

    if let Some(delay) = server.delay {
        tokio::time::sleep(delay).await;
    }
    (server.status, server.body.clone())
}

/// Address with nothing listening on it.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/predict")
}
