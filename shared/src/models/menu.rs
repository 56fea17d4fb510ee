//! Menu Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    pub category: String,
    /// Active window start; written together with `end_date`
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Composite active window: both ends are always read and written together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl MenuWindow {
    /// A window is acceptable when it has not started yet and ends after it starts.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date > now && self.end_date > self.start_date
    }
}

/// Create menu payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    #[validate(required, length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, max = 200))]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Update menu payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_upcoming_window() {
        let now = Utc::now();
        let ok = MenuWindow {
            start_date: now + Duration::hours(1),
            end_date: now + Duration::days(2),
        };
        assert!(ok.is_upcoming(now));

        let started = MenuWindow {
            start_date: now - Duration::hours(1),
            end_date: now + Duration::days(2),
        };
        assert!(!started.is_upcoming(now));

        let inverted = MenuWindow {
            start_date: now + Duration::days(2),
            end_date: now + Duration::hours(1),
        };
        assert!(!inverted.is_upcoming(now));
    }
}
