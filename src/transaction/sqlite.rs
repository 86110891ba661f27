//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row, params_from_iter, types::Value};

use crate::{
    Error,
    database_id::TransactionId,
    pagination::PageRequest,
    transaction::{NewTransaction, Transaction, TransactionFilter, TransactionStore},
};

const SELECT_COLUMNS: &str =
    "SELECT id, user_id, category, amount, date, payment_mode, description, type FROM \"transaction\"";

/// Stores transactions in a SQLite database.
///
/// The connection is shared, so the same handle can be given to a
/// [ReportEngine](crate::report::ReportEngine) and the request handlers.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// The schema must already exist, see [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error,
    /// or [Error::DatabaseLockError] if the connection lock is poisoned.
    fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (user_id, category, amount, date, payment_mode, description, type)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING id, user_id, category, amount, date, payment_mode, description, type",
            )?
            .query_row(
                (
                    &new_transaction.user_id,
                    &new_transaction.category,
                    new_transaction.amount,
                    new_transaction.date,
                    &new_transaction.payment_mode,
                    &new_transaction.description,
                    new_transaction.transaction_type,
                ),
                map_transaction_row,
            )?;

        tracing::debug!("created transaction {}", transaction.id);

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        let transaction = self
            .lock()?
            .prepare(&format!("{SELECT_COLUMNS} WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_transaction_row)
            .optional()?;

        Ok(transaction)
    }

    /// Delete a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            tracing::debug!("tried to delete transaction {id} which is not in the database");
        }

        Ok(())
    }

    /// Query for a page of transactions in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn list(
        &self,
        filter: &TransactionFilter,
        page: PageRequest,
    ) -> Result<(Vec<Transaction>, u64), Error> {
        let (where_clause, mut query_parameters) = build_where_clause(filter);
        let connection = self.lock()?;

        let total: i64 = connection.query_row(
            &format!("SELECT COUNT(id) FROM \"transaction\" {where_clause}"),
            params_from_iter(query_parameters.iter()),
            |row| row.get(0),
        )?;
        let total = u64::try_from(total).unwrap_or_default();

        let limit_index = query_parameters.len() + 1;
        query_parameters.push(Value::Integer(to_sql_integer(page.page_size)));
        query_parameters.push(Value::Integer(to_sql_integer(page.offset())));

        let query_string = format!(
            "{SELECT_COLUMNS} {where_clause} ORDER BY id ASC LIMIT ?{} OFFSET ?{}",
            limit_index,
            limit_index + 1
        );

        let transactions = connection
            .prepare(&query_string)?
            .query_map(params_from_iter(query_parameters.iter()), map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((transactions, total))
    }

    /// Query for all transactions in the database that match `filter`.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        let (where_clause, query_parameters) = build_where_clause(filter);
        let query_string = format!("{SELECT_COLUMNS} {where_clause} ORDER BY id ASC");

        self.lock()?
            .prepare(&query_string)?
            .query_map(params_from_iter(query_parameters.iter()), map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }
}

/// Build the `WHERE` clause for `filter` and the positional parameters it refers to.
///
/// Returns an empty clause when no predicate is set.
fn build_where_clause(filter: &TransactionFilter) -> (String, Vec<Value>) {
    let mut where_clause_parts = vec![];
    let mut query_parameters = vec![];

    if let Some(ref category) = filter.category {
        query_parameters.push(Value::Text(category.clone()));
        where_clause_parts.push(format!("category = ?{}", query_parameters.len()));
    }

    if let Some(ref date_range) = filter.date_range {
        where_clause_parts.push(format!(
            "date BETWEEN ?{} AND ?{}",
            query_parameters.len() + 1,
            query_parameters.len() + 2,
        ));
        query_parameters.push(Value::Text(date_range.start().to_string()));
        query_parameters.push(Value::Text(date_range.end().to_string()));
    }

    if let Some(transaction_type) = filter.transaction_type {
        query_parameters.push(Value::Text(transaction_type.as_str().to_owned()));
        where_clause_parts.push(format!("type = ?{}", query_parameters.len()));
    }

    if let Some(ref user_id) = filter.user_id {
        query_parameters.push(Value::Text(user_id.clone()));
        where_clause_parts.push(format!("user_id = ?{}", query_parameters.len()));
    }

    if where_clause_parts.is_empty() {
        (String::new(), query_parameters)
    } else {
        (
            String::from("WHERE ") + &where_clause_parts.join(" AND "),
            query_parameters,
        )
    }
}

fn to_sql_integer(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            payment_mode TEXT NOT NULL,
            description TEXT,
            type TEXT NOT NULL CHECK (type IN ('INCOME', 'EXPENSE'))
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_type_date ON \"transaction\"(type, date);
        CREATE INDEX IF NOT EXISTS idx_transaction_category ON \"transaction\"(category);",
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
        payment_mode: row.get(5)?,
        description: row.get(6)?,
        transaction_type: row.get(7)?,
    })
}
