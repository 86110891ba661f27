//! The read-only report engine.

use std::sync::Arc;

use time::Date;

use crate::{
    Error,
    date_range::{date_range, year_range},
    report::{
        aggregation,
        models::{CategorySummary, DailyTrend, IncomeVsExpense, MonthlyTrend, PaymentModeSummary},
    },
    transaction::{TransactionFilter, TransactionStore},
};

/// The number of categories returned by [ReportEngine::top_categories] when
/// the client does not ask for a specific number.
pub const DEFAULT_TOP_CATEGORIES_LIMIT: i64 = 5;

/// Computes summaries over the transactions in a store.
///
/// Each report reads the matching transactions from the store when it is
/// called and never writes, so reports are always current and may run
/// concurrently.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    transaction_store: Arc<dyn TransactionStore>,
}

impl ReportEngine {
    /// Create a report engine that reads from `transaction_store`.
    pub fn new(transaction_store: Arc<dyn TransactionStore>) -> Self {
        Self { transaction_store }
    }

    /// The total spent in each category.
    ///
    /// # Errors
    /// Returns the store error if the transactions could not be read, or
    /// [Error::TotalOutOfRange] if a total overflows.
    pub fn category_summary(&self) -> Result<Vec<CategorySummary>, Error> {
        let expenses = self.transaction_store.query(&TransactionFilter::expenses())?;

        aggregation::category_summary(&expenses)
    }

    /// The total spent with each payment mode.
    ///
    /// # Errors
    /// Returns the store error if the transactions could not be read.
    pub fn payment_mode_summary(&self) -> Result<Vec<PaymentModeSummary>, Error> {
        let expenses = self.transaction_store.query(&TransactionFilter::expenses())?;

        aggregation::payment_mode_summary(&expenses)
    }

    /// The total spent on each day from `start` to `end` inclusive.
    ///
    /// # Errors
    /// Returns [Error::InvalidDateRange] if `start` is after `end`, or the
    /// store error if the transactions could not be read.
    pub fn daily_trend(&self, start: Date, end: Date) -> Result<Vec<DailyTrend>, Error> {
        let date_range = date_range(start, end)?;
        let expenses = self
            .transaction_store
            .query(&TransactionFilter::expenses().within(date_range.clone()))?;

        aggregation::daily_trend(&expenses, &date_range)
    }

    /// The total spent in each month of `year`.
    ///
    /// # Errors
    /// Returns [Error::InvalidYear] if the year cannot be represented, or the
    /// store error if the transactions could not be read.
    pub fn monthly_trend(&self, year: i32) -> Result<Vec<MonthlyTrend>, Error> {
        let expenses = self
            .transaction_store
            .query(&TransactionFilter::expenses().within(year_range(year)?))?;

        aggregation::monthly_trend(&expenses, year)
    }

    /// The `limit` categories with the largest totals, largest first.
    ///
    /// A `limit` of zero or less gives an empty list without reading the store.
    ///
    /// # Errors
    /// Returns the store error if the transactions could not be read.
    pub fn top_categories(&self, limit: i64) -> Result<Vec<CategorySummary>, Error> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let expenses = self.transaction_store.query(&TransactionFilter::expenses())?;

        aggregation::top_categories(&expenses, limit)
    }

    /// The total income, total expenses and their difference over every transaction.
    ///
    /// # Errors
    /// Returns the store error if the transactions could not be read.
    pub fn income_vs_expense(&self) -> Result<IncomeVsExpense, Error> {
        let transactions = self.transaction_store.query(&TransactionFilter::default())?;

        aggregation::income_vs_expense(&transactions)
    }
}
