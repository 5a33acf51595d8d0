use std::{
    path::Path,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio::routes::AppState;
use portfolio_contact::{Notifier, Submission};

#[derive(Clone, Default)]
pub struct SpyNotifier {
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Submission>>>,
    fail_with: Option<&'static str>,
}

#[allow(dead_code)]
impl SpyNotifier {
    pub fn failing(cause: &'static str) -> Self {
        Self {
            fail_with: Some(cause),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Submission> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for SpyNotifier {
    async fn notify(&self, submission: &Submission) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(submission.clone());

        match self.fail_with {
            Some(cause) => Err(anyhow::anyhow!(cause)),
            None => Ok(()),
        }
    }
}

pub fn create_test_app(notifier: SpyNotifier, static_dir: &Path) -> Router {
    portfolio::routes::router(AppState {
        contact_command: portfolio_contact::Command::new(notifier),
        static_dir: static_dir.to_path_buf(),
    })
}

#[allow(dead_code)]
pub fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}
