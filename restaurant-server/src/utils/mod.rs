//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::response)
//! - 日志、校验、金额、分页等工具

pub mod error;
pub mod logger;
pub mod money;
pub mod time;
pub mod types;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use error::ok;
