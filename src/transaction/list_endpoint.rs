//! Defines the endpoint for listing transactions a page at a time.

use axum::{Json, extract::State};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    date_range::optional_date_range,
    extract::QueryParams,
    pagination::Page,
    transaction::{Transaction, TransactionFilter, TransactionState},
};

/// The query string accepted when listing transactions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    /// Only include transactions with exactly this category.
    pub category: Option<String>,
    /// The first day to include. Must be given with `end_date`.
    pub start_date: Option<Date>,
    /// The last day to include. Must be given with `start_date`.
    pub end_date: Option<Date>,
    /// Only include transactions recorded by this user.
    pub user_id: Option<String>,
    /// The page number, starting from 1.
    pub page: Option<u64>,
    /// The number of transactions per page.
    pub page_size: Option<u64>,
}

/// A route handler for listing one page of transactions, optionally
/// filtered by category, date range and user.
///
/// # Errors
/// Returns [Error::IncompleteDateRange] if only one of the dates is given,
/// [Error::InvalidPagination] for an out of range page, or the store error.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    QueryParams(query): QueryParams<ListTransactionsQuery>,
) -> Result<Json<Page<Transaction>>, Error> {
    let page_request = state
        .pagination_config
        .page_request(query.page, query.page_size)?;

    let filter = TransactionFilter {
        category: query.category,
        date_range: optional_date_range(query.start_date, query.end_date)?,
        transaction_type: None,
        user_id: query.user_id,
    };

    let (transactions, total) = state
        .transaction_store
        .list(&filter, page_request)
        .inspect_err(|error| tracing::error!("could not list transactions: {error}"))?;

    Ok(Json(Page::new(transactions, page_request, total)))
}
