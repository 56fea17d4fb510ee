//! 请求截止时间中间件
//!
//! 整个请求 (包括其中所有存储调用) 共享一个截止时间。超时后丢弃
//! 正在执行的 future，返回包装后的服务器错误。

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::utils::AppError;

pub async fn deadline_middleware(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let deadline_ms = state.config.request_timeout_ms;
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match tokio::time::timeout(Duration::from_millis(deadline_ms), next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(method = %method, path = %path, deadline_ms, "Request deadline exceeded");
            AppError::timeout(deadline_ms).into_response()
        }
    }
}
