//! 统一错误处理
//!
//! 错误类型和响应结构统一定义在 `shared` crate，这里只做 re-export
//! 和少量响应辅助函数。
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("menu"))
//!
//! // 返回成功响应
//! Ok(ok(menu))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// 成功响应
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
