//! Defines the endpoint for deleting a transaction.

use axum::{extract::State, http::StatusCode};

use crate::{
    Error, database_id::TransactionId, extract::PathParam, transaction::TransactionState,
};

/// A route handler for deleting a transaction.
///
/// Deleting a transaction that does not exist still succeeds, so repeating
/// the request is safe.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_id): PathParam<TransactionId>,
) -> Result<StatusCode, Error> {
    state
        .transaction_store
        .delete(transaction_id)
        .inspect_err(|error| {
            tracing::error!("Could not delete transaction {transaction_id}: {error}")
        })?;

    Ok(StatusCode::NO_CONTENT)
}
