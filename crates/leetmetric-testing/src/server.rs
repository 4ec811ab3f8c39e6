//! Local stand-in for the statistics API, served by axum.
//!
//! The router runs on its own thread with a current-thread tokio runtime, so
//! synchronous CLI tests and `#[tokio::test]` functions can both talk to it.
//! Routes live in a shared map and may be changed while the server runs.

use std::collections::HashMap;
use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::sync::oneshot;

/// How the server answers a request for a given username
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Status plus a JSON (or arbitrary) body
    Body { status: u16, body: String },
    /// Sleep before answering, long enough for the client deadline to pass
    Stall(Duration),
}

impl MockReply {
    pub fn ok(body: impl Into<String>) -> Self {
        MockReply::Body {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        MockReply::Body {
            status,
            body: "{}".to_string(),
        }
    }
}

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    fn capture(method: &Method, uri: &Uri, headers: &HeaderMap) -> Self {
        Self {
            method: method.to_string(),
            path: uri.path().to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        value.to_str().unwrap_or_default().to_string(),
                    )
                })
                .collect(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<String, MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    fn record(&self, request: RecordedRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }

    fn reply_for(&self, username: &str) -> Option<MockReply> {
        self.routes
            .lock()
            .ok()
            .and_then(|routes| routes.get(username).cloned())
    }
}

/// Local statistics API double.
///
/// # Example
/// ```no_run
/// use leetmetric_testing::{MockReply, MockStatsServer, fixtures};
///
/// let server = MockStatsServer::start().unwrap();
/// server.route("abc", MockReply::ok(fixtures::profile_json(12, 8, 1)));
/// let endpoint = server.base_url();
/// ```
pub struct MockStatsServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockStatsServer {
    /// Bind an ephemeral localhost port and start serving.
    ///
    /// Usernames without a route (and any other path) answer 404.
    pub fn start() -> io::Result<Self> {
        let listener = StdTcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let state = Arc::new(MockState::default());
        let app = router(Arc::clone(&state));
        let (shutdown, signal) = oneshot::channel::<()>();

        thread::spawn(move || {
            runtime.block_on(async move {
                let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                    return;
                };
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = signal.await;
                    })
                    .await;
            });
        });

        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown),
        })
    }

    /// Answer requests for `/<username>` with `reply`
    pub fn route(&self, username: &str, reply: MockReply) {
        if let Ok(mut routes) = self.state.routes.lock() {
            routes.insert(username.to_string(), reply);
        }
    }

    /// Base URL to configure as the stats endpoint
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests received so far, unrouted ones included
    pub fn hits(&self) -> usize {
        self.state
            .requests
            .lock()
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockStatsServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/{username}", get(profile))
        .fallback(not_found)
        .with_state(state)
}

async fn profile(
    State(state): State<Arc<MockState>>,
    Path(username): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.record(RecordedRequest::capture(&method, &uri, &headers));

    match state.reply_for(&username) {
        Some(MockReply::Body { status, body }) => json_response(status, body),
        Some(MockReply::Stall(duration)) => {
            tokio::time::sleep(duration).await;
            StatusCode::GATEWAY_TIMEOUT.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn not_found(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> StatusCode {
    state.record(RecordedRequest::capture(&method, &uri, &headers));
    StatusCode::NOT_FOUND
}

fn json_response(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Address on localhost where nothing is listening
pub fn unreachable_base_url() -> io::Result<String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

/// Address on localhost that accepts connections, reads the request and
/// closes the socket without answering
pub fn hangup_base_url() -> io::Result<String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else {
                continue;
            };
            let mut buf = [0_u8; 1024];
            let _ = stream.read(&mut buf);
        }
    });

    Ok(format!("http://{}", addr))
}
