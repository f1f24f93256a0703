#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment across parallel tests.
///
/// `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

#[cfg(feature = "http-server")]
pub mod server {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use chrono::FixedOffset;
    use tower::ServiceExt;

    use janmasethu_tools::config::ServerConfig;
    use janmasethu_tools::http::{create_router, AppState};
    use janmasethu_tools::models::CalendarDate;
    use janmasethu_tools::services::FixedClock;

    pub fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    /// Router whose "today" is pinned to `today`.
    pub fn router_on(today: &str) -> Router {
        let today = CalendarDate::parse(today).unwrap();
        let clock = Arc::new(FixedClock::at_date(today));
        let state = AppState::with_embedded_tables(clock, ist()).unwrap();
        create_router(state, &ServerConfig::default())
    }

    /// Send one request and decode the JSON response body.
    pub async fn call(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn post(router: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        call(router, Method::POST, uri, Some(body)).await
    }

    pub async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        call(router, Method::GET, uri, None).await
    }
}
