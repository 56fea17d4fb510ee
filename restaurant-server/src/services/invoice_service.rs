//! Invoice service

use std::sync::Arc;

use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView, Order};
use shared::util::surface_id;

use crate::aggregation::assemble_invoice_view;
use crate::consistency::{ReferenceChecker, UpdateSet, apply_patch, delete_checked};
use crate::core::ServerState;
use crate::db::repository::Repository;
use crate::db::{Document, DocumentStore};
use crate::utils::time::{now_utc, payment_due_from};
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct InvoiceService {
    store: Arc<dyn DocumentStore>,
    invoices: Repository<Invoice>,
    refs: ReferenceChecker,
    patch_upsert: bool,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn DocumentStore>, patch_upsert: bool) -> Self {
        Self {
            invoices: Repository::new(store.clone()),
            refs: ReferenceChecker::new(store.clone()),
            store,
            patch_upsert,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store(), state.config.patch_upsert)
    }

    pub async fn list(&self) -> AppResult<Vec<Invoice>> {
        self.invoices
            .find_all()
            .await
            .map_err(|e| AppError::store_read(format!("Error occurred while listing invoices: {e}")))
    }

    /// Assembled view: invoice metadata plus its order's details
    pub async fn view(&self, invoice_id: &str) -> AppResult<InvoiceView> {
        assemble_invoice_view(&self.store, invoice_id).await
    }

    /// Insert an invoice for an existing order, due one day from now
    pub async fn create(&self, payload: InvoiceCreate) -> AppResult<Invoice> {
        validate_payload(&payload)?;
        let order_id = payload.order_id.unwrap_or_default();
        self.refs.require::<Order>(&order_id).await?;

        let now = now_utc();
        let invoice = Invoice {
            invoice_id: surface_id(),
            order_id,
            payment_method: payload.payment_method,
            payment_status: payload.payment_status.unwrap_or_default(),
            payment_due_date: payment_due_from(now),
            created_at: now,
            updated_at: now,
        };
        self.invoices
            .insert(&invoice)
            .await
            .map_err(|e| AppError::store_write(format!("Invoice was not created: {e}")))?;

        tracing::info!(invoice_id = %invoice.invoice_id, order_id = %invoice.order_id, "Invoice created");
        Ok(invoice)
    }

    pub async fn update(&self, invoice_id: &str, payload: InvoiceUpdate) -> AppResult<Document> {
        validate_payload(&payload)?;
        let set = UpdateSet::new()
            .value("payment_method", payload.payment_method)?
            .value("payment_status", payload.payment_status)?;
        apply_patch(&self.invoices, invoice_id, set, self.patch_upsert, now_utc()).await
    }

    pub async fn delete(&self, invoice_id: &str) -> AppResult<Invoice> {
        delete_checked(&self.invoices, invoice_id).await
    }
}
