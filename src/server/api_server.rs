use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};

use crate::config::constants::MAX_REQUEST_BODY_BYTES;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::services::repository_analyzer::RepositoryAnalyzer;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::repo_ref::RepoRef;

pub struct ApiServer {
    analyzer: Arc<RepositoryAnalyzer>,
    local_addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    pub fn new(analyzer: Arc<RepositoryAnalyzer>) -> Self {
        Self {
            analyzer,
            local_addr: None,
            shutdown_tx: None,
        }
    }

    /// Binds `addr` and serves in a background task. Port 0 picks a free port;
    /// the bound address is returned.
    pub async fn start(&mut self, addr: SocketAddr) -> AnalyzerResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (bound, server) = warp::serve(routes(Arc::clone(&self.analyzer)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| AnalyzerError::unhandled("bind", &format!("{}: {}", addr, e)))?;

        tokio::spawn(server);

        self.local_addr = Some(bound);
        self.shutdown_tx = Some(shutdown_tx);

        log::info!("🌐 Analysis API listening on http://{}", bound);
        Ok(bound)
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    pub async fn shutdown(&mut self) -> AnalyzerResult<()> {
        log::info!("🛑 Shutting down analysis API...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                AnalyzerError::unhandled("shutdown", "Failed to send shutdown signal")
            )?;
        }

        self.local_addr = None;
        log::info!("✅ Analysis API shutdown complete");
        Ok(())
    }
}

/// All API routes, with rejections rendered as `{ "error": ... }` bodies.
pub fn routes(
    analyzer: Arc<RepositoryAnalyzer>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::json())
        .and(analyzer_filter.clone())
        .and_then(analyze_handler);

    let latest = warp::path!("api" / "analyze" / String / String)
        .and(warp::get())
        .and(analyzer_filter)
        .and_then(latest_report_handler);

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "ok" })));

    analyze
        .or(latest)
        .or(health)
        .with(warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST"]))
        .recover(handle_rejection)
        .with(warp::log("repolyzer::api"))
}

async fn analyze_handler(
    request: AnalyzeRequest,
    analyzer: Arc<RepositoryAnalyzer>,
) -> Result<WithStatus<Json>, Infallible> {
    match analyzer.analyze(&request).await {
        Ok(report) => Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn latest_report_handler(
    owner: String,
    repo: String,
    analyzer: Arc<RepositoryAnalyzer>,
) -> Result<WithStatus<Json>, Infallible> {
    let repo = RepoRef::new(&owner, &repo);

    match analyzer.latest_report(&repo) {
        Some(report) => Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)),
        None => Ok(warp::reply::with_status(
            warp::reply::json(&json!({
                "error": format!("No analysis recorded for {}.", repo)
            })),
            StatusCode::NOT_FOUND,
        )),
    }
}

fn error_reply(error: &AnalyzerError) -> WithStatus<Json> {
    let status = error.status_code();

    if status.is_server_error() {
        log::error!("❌ Error analyzing repository: {}", error);
    } else {
        log::warn!("⚠️ Analysis request rejected: {}", error);
    }

    warp::reply::with_status(
        warp::reply::json(&json!({ "error": error.user_message() })),
        status,
    )
}

async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.")
    } else if rejection.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (StatusCode::BAD_REQUEST, "Request body must be a JSON object with a repoUrl field.")
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large.")
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Request body must be JSON.")
    } else if rejection.find::<warp::filters::cors::CorsForbidden>().is_some() {
        (StatusCode::FORBIDDEN, "Cross-origin request not allowed.")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze repository. Please check the URL and try again.")
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        status,
    ))
}
