//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    pagination::PaginationConfig,
    report::ReportEngine,
    transaction::{SQLiteTransactionStore, TransactionStore},
};

/// The state of the REST server.
///
/// The transaction store and the report engine share one store handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding the transactions.
    pub transaction_store: Arc<dyn TransactionStore>,

    /// Computes reports over `transaction_store`.
    pub report_engine: ReportEngine,

    /// The config that controls how to page transaction listings.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, pagination_config: PaginationConfig) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));
        let transaction_store = Arc::new(SQLiteTransactionStore::new(connection));

        Ok(Self::with_store(transaction_store, pagination_config))
    }

    /// Create a new [AppState] around an existing store.
    pub fn with_store(
        transaction_store: Arc<dyn TransactionStore>,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            report_engine: ReportEngine::new(transaction_store.clone()),
            transaction_store,
            pagination_config,
        }
    }
}
