//! Defines the endpoint for fetching a single transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::TransactionId,
    extract::PathParam,
    transaction::{Transaction, TransactionState},
};

/// A route handler for fetching a transaction by its ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no transaction with the ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_id): PathParam<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    state
        .transaction_store
        .get(transaction_id)?
        .map(Json)
        .ok_or(Error::NotFound)
}
