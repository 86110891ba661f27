//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    Error,
    extract::JsonBody,
    transaction::{NewTransaction, Transaction, TransactionState},
};

/// A route handler for creating a new transaction, responds with the stored
/// transaction and its new ID.
///
/// # Errors
/// Returns [Error::InvalidRequest] if the body is not a valid transaction,
/// [Error::InvalidAmount] if the amount is negative, not a number or too large,
/// or the store error if the transaction could not be saved.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonBody(new_transaction): JsonBody<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    new_transaction.validate()?;

    let transaction = state
        .transaction_store
        .insert(new_transaction)
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
