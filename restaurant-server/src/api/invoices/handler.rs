//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView};

use crate::core::ServerState;
use crate::db::Document;
use crate::services::InvoiceService;
use crate::utils::validation::parse_body;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /invoice - 获取所有发票
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Invoice>>>> {
    let invoices = InvoiceService::from_state(&state).list().await?;
    Ok(ok(invoices))
}

/// GET /invoice/:invoice_id - 发票视图 (发票 + 订单明细 + 应付金额)
pub async fn get_view(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
) -> AppResult<Json<ApiResponse<InvoiceView>>> {
    let view = InvoiceService::from_state(&state).view(&invoice_id).await?;
    Ok(ok(view))
}

/// POST /invoice - 创建发票
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<InvoiceCreate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Invoice>>> {
    let payload = parse_body(payload)?;
    let invoice = InvoiceService::from_state(&state).create(payload).await?;
    Ok(ok(invoice))
}

/// PATCH /invoice/:invoice_id - 更新支付方式 / 支付状态
pub async fn update(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
    payload: Result<Json<InvoiceUpdate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Document>>> {
    let payload = parse_body(payload)?;
    let applied = InvoiceService::from_state(&state).update(&invoice_id, payload).await?;
    Ok(ok(applied))
}

/// DELETE /invoice/:invoice_id - 删除发票
pub async fn delete(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
) -> AppResult<Json<ApiResponse<Invoice>>> {
    let invoice = InvoiceService::from_state(&state).delete(&invoice_id).await?;
    Ok(ok(invoice))
}
