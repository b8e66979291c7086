//! An in-process stand-in for the hostel backend, and controllers wired up to it.

use crate::{
    config::BackendConfig, controller::ViewController, data::user::SessionUser,
    error::WardenResult, session_store::SessionStore,
};
use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use serde_json::Value;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

///Nothing listens on port 1, so connecting fails straight away.
pub const fn unreachable_backend() -> &'static str {
    "http://127.0.0.1:1"
}

///One request the mock backend received.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl Hit {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }
}

type Hits = Arc<Mutex<Vec<Hit>>>;

#[derive(Debug)]
pub struct MockBackend {
    pub base_url: String,
    hits: Hits,
}

impl MockBackend {
    ///Serves `router` on an ephemeral port, recording every request on the way in.
    pub async fn spawn(router: Router) -> Self {
        let hits = Hits::default();
        let app = router.layer(middleware::from_fn_with_state(hits.clone(), record));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn hits_for(&self, method: &str, path: &str) -> Vec<Hit> {
        self.hits()
            .into_iter()
            .filter(|hit| hit.method == method && hit.path == path)
            .collect()
    }
}

async fn record(State(hits): State<Hits>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    hits.lock().unwrap().push(Hit {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        body: serde_json::from_slice(&bytes).ok(),
        headers: parts
            .headers
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

///A router answering `GET path` with a fixed JSON value, for each pair.
pub fn json_routes(routes: &[(&'static str, Value)]) -> Router {
    routes
        .iter()
        .cloned()
        .fold(Router::new(), |router, (path, value)| {
            router.route(
                path,
                get(move || {
                    let value = value.clone();
                    async move { Json(value) }
                }),
            )
        })
}

///Shares its contents with every clone, so a test can keep one while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    user: Arc<Mutex<Option<SessionUser>>>,
}

impl MemorySessionStore {
    pub fn with_user(user: SessionUser) -> Self {
        Self {
            user: Arc::new(Mutex::new(Some(user))),
        }
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.user.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> WardenResult<Option<SessionUser>> {
        Ok(self.current())
    }

    fn save(&self, user: &SessionUser) -> WardenResult<()> {
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> WardenResult<()> {
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}

///Long enough that no toast expires mid-test.
const TEST_TOAST_TTL: Duration = Duration::from_secs(60);

pub fn controller_with_store(base_url: &str, store: MemorySessionStore) -> ViewController {
    ViewController::new(
        Arc::new(BackendConfig::with_base_url(base_url).toast_ttl(TEST_TOAST_TTL)),
        Box::new(store),
    )
    .unwrap()
}

pub fn controller_for(backend: &MockBackend) -> ViewController {
    controller_with_store(&backend.base_url, MemorySessionStore::default())
}

pub fn unreachable_controller() -> ViewController {
    controller_with_store(unreachable_backend(), MemorySessionStore::default())
}
