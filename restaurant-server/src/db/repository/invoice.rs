//! Invoice Repository

use shared::ErrorCode;
use shared::models::Invoice;

use super::Entity;
use crate::db::collections;

impl Entity for Invoice {
    const COLLECTION: &'static str = collections::INVOICE;
    const ID_FIELD: &'static str = "invoice_id";
    const LABEL: &'static str = "invoice";
    const NOT_FOUND: ErrorCode = ErrorCode::InvoiceNotFound;
}
