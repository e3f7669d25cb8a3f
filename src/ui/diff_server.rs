use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::time::timeout;
use warp::Filter;
use warp::http::StatusCode;
use crate::config::constants::{
    MAX_SESSION_ID_LENGTH, SERVER_SHUTDOWN_GRACE_PERIOD_MS, SESSION_POLL_INTERVAL_MS,
    sleep_duration_millis, timeout_duration,
};
use crate::enums::decision::Decision;
use crate::enums::session_status::SessionStatus;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::server_config::ServerConfig;
use crate::structs::merge_outcome::MergeOutcome;
use crate::ui::session_manager::SessionManager;

#[derive(Debug, Deserialize)]
struct DecideRequest {
    change_id: String,
    decision: Decision,
}

pub struct DiffServer {
    session_manager: Arc<SessionManager>,
    config: ServerConfig,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DiffServer {
    pub fn new(session_manager: SessionManager, config: ServerConfig) -> Self {
        Self {
            session_manager: Arc::new(session_manager),
            config,
            port: None,
            shutdown_tx: None,
        }
    }

    pub fn session_manager(&self) -> Arc<SessionManager> {
        Arc::clone(&self.session_manager)
    }

    pub fn review_url(&self, session_id: &str) -> Option<String> {
        self.port.map(|port| format!("http://127.0.0.1:{}/?session={}", port, session_id))
    }

    /// Binds to `preferred_port`, or the first free port in the configured
    /// range, and serves in the background.
    pub async fn start(&mut self, preferred_port: Option<u16>) -> ReviewResult<u16> {
        let port = match preferred_port {
            Some(port) => port,
            None => self.find_available_port().await?,
        };
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let review_page = warp::path::end()
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and_then(serve_review_page);

        let routes = review_page
            .or(create_api_routes(Arc::clone(&self.session_manager)))
            .with(warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]));

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ReviewError::system_error("bind review server", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Review server started on port {}", port);
        Ok(port)
    }

    /// Polls until the session is completed or cancelled. `Ok(None)` means
    /// the reviewer cancelled or the wait timed out.
    pub async fn wait_for_completion(&self, session_id: &str) -> ReviewResult<Option<MergeOutcome>> {
        let timeout_minutes = self.config.timeout_minutes;

        let result = timeout(timeout_duration(timeout_minutes), async {
            loop {
                let Some(session) = self.session_manager.get_session(session_id) else {
                    return Err(ReviewError::SessionNotFound { session_id: session_id.to_string() });
                };

                match session.status {
                    SessionStatus::Completed => return Ok(session.review.outcome().cloned()),
                    SessionStatus::Cancelled => return Ok(None),
                    SessionStatus::Active => {
                        tokio::time::sleep(sleep_duration_millis(SESSION_POLL_INTERVAL_MS)).await;
                    }
                }
            }
        }).await;

        match result {
            Ok(outcome) => outcome,
            Err(_) => {
                log::warn!("⏰ Review session timed out after {} minutes", timeout_minutes);
                Ok(None)
            }
        }
    }

    pub async fn shutdown(&mut self) -> ReviewResult<()> {
        log::info!("🛑 Shutting down review server...");

        self.session_manager.cleanup_finished_sessions();

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ReviewError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Review server shutdown complete");

        Ok(())
    }

    async fn find_available_port(&self) -> ReviewResult<u16> {
        for port in self.config.port_range_start..self.config.port_range_end {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(ReviewError::system_error(
            "find port",
            &format!("no free port in {}..{}", self.config.port_range_start, self.config.port_range_end),
        ))
    }
}

fn create_api_routes(
    session_manager: Arc<SessionManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let session_manager_filter = warp::any().map(move || Arc::clone(&session_manager));

    let get_session = warp::path!("api" / "session" / String)
        .and(warp::get())
        .and(session_manager_filter.clone())
        .and_then(get_session_handler);

    let decide = warp::path!("api" / "session" / String / "decide")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_manager_filter.clone())
        .and_then(decide_handler);

    let complete_session = warp::path!("api" / "session" / String / "complete")
        .and(warp::post())
        .and(session_manager_filter.clone())
        .and_then(complete_session_handler);

    let cancel_session = warp::path!("api" / "session" / String / "cancel")
        .and(warp::post())
        .and(session_manager_filter)
        .and_then(cancel_session_handler);

    get_session
        .or(decide)
        .or(complete_session)
        .or(cancel_session)
}

async fn serve_review_page(params: HashMap<String, String>) -> Result<impl warp::Reply, Infallible> {
    let session_id = params.get("session")
        .map(|s| sanitize_id(s))
        .unwrap_or_default();

    let html = include_str!("static/index.html")
        .replace("{{SESSION_ID}}", &session_id);

    Ok(warp::reply::html(html))
}

pub fn sanitize_id(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_SESSION_ID_LENGTH)
        .collect()
}

fn error_reply(error: &ReviewError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match error {
        ReviewError::SessionNotFound { .. } | ReviewError::ChangeNotFound { .. } => StatusCode::NOT_FOUND,
        ReviewError::ValidationError { .. }
        | ReviewError::StatusTransition { .. }
        | ReviewError::StageError { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": error.to_string(), "details": error })),
        status,
    )
}

fn invalid_id_reply(what: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": format!("Invalid {}", what) })),
        StatusCode::BAD_REQUEST,
    )
}

async fn get_session_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let sanitized_session_id = sanitize_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_id_reply("session ID"));
    }

    match session_manager.get_session(&sanitized_session_id) {
        Some(session) => Ok(warp::reply::with_status(warp::reply::json(&session.view()), StatusCode::OK)),
        None => Ok(error_reply(&ReviewError::SessionNotFound { session_id: sanitized_session_id })),
    }
}

async fn decide_handler(
    session_id: String,
    body: DecideRequest,
    session_manager: Arc<SessionManager>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let sanitized_session_id = sanitize_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_id_reply("session ID"));
    }

    let sanitized_change_id = sanitize_id(&body.change_id);
    if sanitized_change_id.is_empty() {
        return Ok(invalid_id_reply("change ID"));
    }

    match session_manager.decide(&sanitized_session_id, &sanitized_change_id, body.decision) {
        Ok(status) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({
                "success": true,
                "change_id": sanitized_change_id,
                "status": status,
            })),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn complete_session_handler(
    session_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let sanitized_session_id = sanitize_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_id_reply("session ID"));
    }

    match session_manager.complete_session(&sanitized_session_id) {
        Ok(outcome) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({
                "success": true,
                "final_text": outcome.text,
                "unapplied": outcome.unapplied,
                "message": "Review completed",
            })),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn cancel_session_handler(
    session_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let sanitized_session_id = sanitize_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_id_reply("session ID"));
    }

    match session_manager.cancel_session(&sanitized_session_id) {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "success": true, "message": "Review cancelled" })),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_unsafe_characters() {
        assert_eq!(sanitize_id("change-0<script>"), "change-0script");
        assert_eq!(sanitize_id(&"a".repeat(100)).len(), MAX_SESSION_ID_LENGTH);
    }

    #[tokio::test]
    async fn api_round_trip() {
        let manager = Arc::new(SessionManager::default());
        let id = manager.create_session("a", "A\nB\nC", "b", "A\nX\nC").unwrap();
        let api = create_api_routes(Arc::clone(&manager));

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/api/session/{}/complete", id))
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/api/session/{}/decide", id))
            .json(&json!({ "change_id": "change-0", "decision": "approve" }))
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/api/session/{}/complete", id))
            .reply(&api)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["final_text"], "A\nX\nC");
    }

    #[tokio::test]
    async fn review_page_embeds_session_and_renders_completion_locally() {
        let page = warp::path::end()
            .and(warp::query::<HashMap<String, String>>())
            .and_then(serve_review_page);

        let response = warp::test::request()
            .path("/?session=abc-123%3Cx%3E")
            .reply(&page)
            .await;
        let html = String::from_utf8(response.body().to_vec()).unwrap();

        assert!(html.contains(r#"const SESSION_ID = "abc-123x";"#));
        assert!(html.contains("showFinal(body.final_text)"));
    }

    #[tokio::test]
    async fn session_view_is_served() {
        let manager = Arc::new(SessionManager::default());
        let id = manager.create_session("a", "A", "b", "A\nB").unwrap();
        let api = create_api_routes(manager);

        let response = warp::test::request()
            .path(&format!("/api/session/{}", id))
            .reply(&api)
            .await;
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["stage"], "reviewing");
        assert_eq!(body["changes"][0]["type"], "addition");
        assert_eq!(body["summary"]["pending_count"], 1);
    }
}
