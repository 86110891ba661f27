//! Defines the transaction store trait.

use std::{fmt::Debug, ops::RangeInclusive};

use time::Date;

use crate::{
    Error,
    database_id::TransactionId,
    pagination::PageRequest,
    transaction::{NewTransaction, Transaction, TransactionType},
};

/// Handles the creation, retrieval and deletion of transactions.
///
/// Implementations do their own locking, so all methods take `&self` and a
/// store can be shared between request handlers.
pub trait TransactionStore: Debug + Send + Sync {
    /// Store a new transaction and return it with its assigned ID.
    fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve a transaction, or `None` if `id` is not in the store.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Remove a transaction. Removing an ID that is not in the store does nothing.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;

    /// Retrieve one page of the transactions matching `filter` in insertion
    /// order, along with the number of transactions that match `filter`
    /// across all pages.
    fn list(
        &self,
        filter: &TransactionFilter,
        page: PageRequest,
    ) -> Result<(Vec<Transaction>, u64), Error>;

    /// Retrieve every transaction matching `filter` in insertion order.
    fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error>;
}

/// Defines which transactions are selected by [TransactionStore::list] and
/// [TransactionStore::query].
///
/// Predicates that are set are combined with AND; an empty filter selects
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Only include transactions with exactly this category.
    pub category: Option<String>,
    /// Include transactions within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Only include income or only include expenses.
    pub transaction_type: Option<TransactionType>,
    /// Only include transactions recorded by this user.
    pub user_id: Option<String>,
}

impl TransactionFilter {
    /// A filter that selects only expenses.
    pub fn expenses() -> Self {
        Self {
            transaction_type: Some(TransactionType::Expense),
            ..Default::default()
        }
    }

    /// Restrict the filter to `date_range` (inclusive).
    pub fn within(mut self, date_range: RangeInclusive<Date>) -> Self {
        self.date_range = Some(date_range);
        self
    }
}
