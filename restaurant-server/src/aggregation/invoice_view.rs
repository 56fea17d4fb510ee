//! Order item summaries and invoice view assembly

use std::sync::Arc;

use serde_json::Value;
use shared::models::{
    Food, Invoice, InvoiceView, Order, OrderItem, OrderItemLine, OrderItemsSummary, Table,
};

use crate::db::repository::{Entity, Repository, decode};
use crate::db::{Accumulator, DocumentStore, Filter, GroupKey, Pipeline, collections};
use crate::utils::money::{line_amount, total};
use crate::utils::{AppError, AppResult};

/// Literal shown when an invoice has no payment method yet
pub const NO_PAYMENT_METHOD: &str = "null";

fn pipeline(order_id: &str) -> Pipeline {
    Pipeline::new()
        .matching(Filter::eq("order_id", order_id))
        .group(
            GroupKey::Field("order_id".into()),
            vec![
                ("item_count", Accumulator::Count),
                ("order_items", Accumulator::PushRoot),
            ],
        )
}

/// Summaries of an order's items, enriched with food names, line amounts,
/// the amount due and the table number. Zero or one entry.
pub async fn items_by_order(
    store: &Arc<dyn DocumentStore>,
    order_id: &str,
) -> AppResult<Vec<OrderItemsSummary>> {
    let groups = store
        .aggregate(collections::ORDER_ITEM, &pipeline(order_id))
        .await
        .map_err(|e| AppError::store_read(format!("Error occurred while listing order items: {e}")))?;

    let foods = Repository::<Food>::new(store.clone());
    let orders = Repository::<Order>::new(store.clone());
    let tables = Repository::<Table>::new(store.clone());

    let mut summaries = Vec::with_capacity(groups.len());
    for mut group in groups {
        let item_count = group.get("item_count").and_then(Value::as_u64).unwrap_or(0);
        let items: Vec<OrderItem> = match group.remove("order_items") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(doc) => Some(decode::<OrderItem>(OrderItem::COLLECTION, doc)),
                    _ => None,
                })
                .collect::<Result<_, _>>()?,
            _ => Vec::new(),
        };

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let food_name = foods
                .find_by_id(&item.food_id)
                .await?
                .map(|f| f.name)
                .unwrap_or_default();
            lines.push(OrderItemLine {
                amount: line_amount(item.quantity, item.unit_price)?,
                order_item_id: item.order_item_id,
                food_id: item.food_id,
                food_name,
                quantity: item.quantity,
                unit_price: item.unit_price,
            });
        }

        let table_id = orders.find_by_id(order_id).await?.and_then(|o| o.table_id);
        let table_number = match table_id {
            Some(table_id) => tables.find_by_id(&table_id).await?.map(|t| t.table_number),
            None => None,
        };

        summaries.push(OrderItemsSummary {
            order_id: order_id.to_string(),
            item_count,
            payment_due: total(lines.iter().map(|l| l.amount))?,
            table_number,
            order_items: lines,
        });
    }

    Ok(summaries)
}

/// Invoice metadata plus the first order summary of its order
pub async fn assemble_invoice_view(
    store: &Arc<dyn DocumentStore>,
    invoice_id: &str,
) -> AppResult<InvoiceView> {
    let invoice = Repository::<Invoice>::new(store.clone())
        .find_by_id(invoice_id)
        .await?
        .ok_or_else(Invoice::not_found)?;

    let summary = items_by_order(store, &invoice.order_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::no_order_details(&invoice.order_id))?;

    Ok(InvoiceView {
        invoice_id: invoice.invoice_id,
        order_id: invoice.order_id,
        payment_method: invoice
            .payment_method
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NO_PAYMENT_METHOD.to_string()),
        payment_status: invoice.payment_status.as_str().to_string(),
        payment_due_date: invoice.payment_due_date,
        payment_due: summary.payment_due,
        table_number: summary.table_number,
        order_details: summary.order_items,
    })
}
