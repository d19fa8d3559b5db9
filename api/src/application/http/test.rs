use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

use crate::{
    application::http::server::http_server::{router, state},
    args::Args,
};

pub fn canned_analysis() -> Value {
    json!({
        "food_name": "Salmon poke bowl",
        "calories": 640.0,
        "macros": { "protein": 38.0, "carbs": 71.0, "fat": 21.5 },
        "confidence": "medium",
        "explanation": "Rice base with raw salmon, avocado and edamame."
    })
}

/// Stand-in for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct StubGemini {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct StubState {
    healthy: bool,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn generate_content(State(stub): State<StubState>, Json(body): Json<Value>) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.requests.lock().unwrap().push(body);

    if !stub.healthy {
        return (StatusCode::SERVICE_UNAVAILABLE, "model overloaded").into_response();
    }

    Json(json!({
        "candidates": [
            { "content": { "parts": [ { "text": canned_analysis().to_string() } ] } }
        ]
    }))
    .into_response()
}

impl StubGemini {
    pub async fn spawn(healthy: bool) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/v1beta/models/{*model}", post(generate_content))
            .with_state(StubState {
                healthy,
                hits: hits.clone(),
                requests: requests.clone(),
            });

        let base_url = serve(app).await;
        Self {
            base_url,
            hits,
            requests,
        }
    }

    pub fn last_request(&self) -> Option<Value> {
        self.requests.lock().unwrap().last().cloned()
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

pub fn test_args(gemini_base_url: &str) -> Args {
    Args::parse_from([
        "snapmacro-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-model",
        "test-model",
        "--gemini-base-url",
        gemini_base_url,
    ])
}

fn test_router(gemini: &StubGemini) -> Router {
    router(state(Arc::new(test_args(&gemini.base_url)))).unwrap()
}

/// Relay served on a real socket, for clients that speak HTTP.
pub struct RunningRelay {
    pub base_url: String,
    pub gemini: StubGemini,
}

pub async fn spawn_relay(healthy: bool) -> RunningRelay {
    let gemini = StubGemini::spawn(healthy).await;
    let base_url = serve(test_router(&gemini)).await;
    RunningRelay { base_url, gemini }
}

pub struct HealthyRelay {
    pub server: TestServer,
    pub gemini: StubGemini,
}

impl AsyncTestContext for HealthyRelay {
    async fn setup() -> Self {
        let gemini = StubGemini::spawn(true).await;
        let server = TestServer::new(test_router(&gemini)).unwrap();
        Self { server, gemini }
    }
}

pub struct FailingRelay {
    pub server: TestServer,
    pub gemini: StubGemini,
}

impl AsyncTestContext for FailingRelay {
    async fn setup() -> Self {
        let gemini = StubGemini::spawn(false).await;
        let server = TestServer::new(test_router(&gemini)).unwrap();
        Self { server, gemini }
    }
}
