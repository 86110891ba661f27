//! Defines the state shared by the transaction route handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{AppState, pagination::PaginationConfig, transaction::TransactionStore};

/// The state needed to create, fetch, list and delete transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store holding the transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
    /// The config that controls how to page transaction listings.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn get_test_state() -> TransactionState {
    use std::sync::Mutex;

    use rusqlite::Connection;

    use crate::{db::initialize, transaction::SQLiteTransactionStore};

    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();

    TransactionState {
        transaction_store: Arc::new(SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)))),
        pagination_config: PaginationConfig::default(),
    }
}
