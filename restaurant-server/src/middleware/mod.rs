//! HTTP 中间件
//!
//! - [`logging_middleware`] - 请求日志
//! - [`deadline_middleware`] - 单请求截止时间

pub mod deadline;
pub mod logging;

pub use deadline::deadline_middleware;
pub use logging::logging_middleware;
