//! Partial update builder
//!
//! A patch only ever writes fields the caller supplied with a non-empty
//! value, plus `updated_at`. The result of [`apply_patch`] is the exact
//! field set written.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use shared::ErrorCode;
use shared::models::MenuWindow;

use crate::db::Document;
use crate::db::repository::{Entity, Repository, decode};
use crate::utils::{AppError, AppResult};

pub const UPDATED_AT: &str = "updated_at";
pub const CREATED_AT: &str = "created_at";

/// Sparse field set under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    fields: Document,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text field; `None` and blank strings are skipped
    pub fn text(mut self, field: &str, value: Option<String>) -> Self {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.fields.insert(field.to_string(), Value::String(v));
        }
        self
    }

    /// Set any serializable field; `None` and null are skipped
    pub fn value<T: Serialize>(mut self, field: &str, value: Option<T>) -> AppResult<Self> {
        if let Some(v) = value {
            let v = serde_json::to_value(v)
                .map_err(|e| AppError::internal(format!("Failed to encode {field}: {e}")))?;
            if !v.is_null() {
                self.fields.insert(field.to_string(), v);
            }
        }
        Ok(self)
    }

    /// Set the composite active window.
    ///
    /// Both ends are written together; supplying only one is rejected.
    pub fn window(
        self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        match check_window(start_date, end_date, now)? {
            Some(window) => self
                .value("start_date", Some(window.start_date))?
                .value("end_date", Some(window.end_date)),
            None => Ok(self),
        }
    }

    /// True when no caller field has been set
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Document {
        &self.fields
    }

    /// Close the set, stamping `updated_at`
    pub fn finish(mut self, now: DateTime<Utc>) -> Document {
        self.fields
            .insert(UPDATED_AT.to_string(), Value::String(now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)));
        self.fields
    }
}

/// Validate an optional menu window.
///
/// Neither end supplied is no window; exactly one is a validation error; both
/// must describe a window that starts after `now` and ends after it starts.
pub fn check_window(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AppResult<Option<MenuWindow>> {
    match (start_date, end_date) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(AppError::invalid_field(
            "end_date",
            "end_date is required when start_date is supplied",
        )),
        (None, Some(_)) => Err(AppError::invalid_field(
            "start_date",
            "start_date is required when end_date is supplied",
        )),
        (Some(start_date), Some(end_date)) => {
            let window = MenuWindow {
                start_date,
                end_date,
            };
            if window.is_upcoming(now) {
                Ok(Some(window))
            } else {
                Err(AppError::new(ErrorCode::MenuInvalidWindow)
                    .with_detail("start_date", start_date.to_rfc3339())
                    .with_detail("end_date", end_date.to_rfc3339()))
            }
        }
    }
}

/// Apply a field set to the entity `id`.
///
/// Without `upsert` the target must exist (`NotFound` otherwise). With
/// `upsert` a missing target is created from the id, `created_at` and the
/// field set, which must then hold every required field of the entity.
pub async fn apply_patch<T: Entity>(
    repo: &Repository<T>,
    id: &str,
    set: UpdateSet,
    upsert: bool,
    now: DateTime<Utc>,
) -> AppResult<Document> {
    let exists = repo.find_by_id(id).await?.is_some();
    if !exists && !upsert {
        return Err(T::not_found());
    }

    let mut fields = set.finish(now);
    if !exists {
        seed_record::<T>(id, &mut fields, now)?;
    }

    let outcome = repo
        .update_fields(id, fields.clone(), upsert)
        .await
        .map_err(|e| AppError::store_write(e.to_string()))?;

    if outcome.matched == 0 && !outcome.upserted {
        // removed between the lookup and the write
        return Err(T::not_found());
    }

    tracing::info!(
        collection = T::COLLECTION,
        id,
        fields = fields.len(),
        upserted = outcome.upserted,
        "Patch applied"
    );
    Ok(fields)
}

/// Complete an upsert field set into a full record, rejecting it when the
/// result would not read back as a `T`.
fn seed_record<T: Entity>(id: &str, fields: &mut Document, now: DateTime<Utc>) -> AppResult<()> {
    fields.insert(T::ID_FIELD.to_string(), Value::String(id.to_string()));
    fields
        .entry(CREATED_AT)
        .or_insert_with(|| Value::String(now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)));

    decode::<T>(T::COLLECTION, fields.clone()).map(|_| ()).map_err(|e| {
        AppError::validation(format!("Cannot create {} {id} from a partial update: {e}", T::LABEL))
            .with_detail("id", id)
    })
}
