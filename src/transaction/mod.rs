//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - The `TransactionStore` trait and its SQLite implementation
//! - Route handlers for creating, fetching, listing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod sqlite;
mod state;
mod store;

pub use core::{MAX_AMOUNT, NewTransaction, ParseTransactionTypeError, Transaction, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::{ListTransactionsQuery, list_transactions_endpoint};
pub use sqlite::{SQLiteTransactionStore, create_transaction_table};
pub use state::TransactionState;
pub use store::{TransactionFilter, TransactionStore};

#[cfg(test)]
pub(crate) use state::get_test_state;
