//! 时间工具函数

use chrono::{DateTime, Duration, Utc};

pub use shared::util::now_utc;

/// Invoice payment due date: one day after creation
pub fn payment_due_from(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::days(1)
}
