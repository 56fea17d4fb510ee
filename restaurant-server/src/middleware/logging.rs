//! 请求日志中间件
//!
//! 每个请求一个 `request` span（请求 ID、方法、路由），结束时按状态码记录一条完成日志

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;

/// Outcome label attached to the completion event
fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "ok"
    }
}

/// 请求日志中间件
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = tracing::info_span!("request", %request_id, method = %req.method(), %path);

    async move {
        let start = Instant::now();
        let response = next.run(req).await;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        match outcome(status) {
            "ok" => tracing::info!(status = status.as_u16(), latency_ms, "Request completed"),
            failure => tracing::warn!(status = status.as_u16(), latency_ms, outcome = failure, "Request completed"),
        }
        response
    }
    .instrument(span)
    .await
}
