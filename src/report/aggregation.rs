//! Transaction grouping and summing for the reports.
//!
//! These functions are pure reductions over transactions so they can be
//! tested without a store. Every function other than [income_vs_expense]
//! ignores income, so that income never leaks into an expense breakdown even
//! if the caller passes unfiltered rows.
//!
//! Totals are checked after summing: a total that is not finite is reported
//! as [Error::TotalOutOfRange] instead of being sent to the client as `null`.

use std::{cmp::Ordering, collections::BTreeMap, ops::RangeInclusive};

use time::Date;

use crate::{
    Error,
    report::models::{
        CategorySummary, DailyTrend, IncomeVsExpense, MonthlyTrend, PaymentModeSummary,
    },
    transaction::{Transaction, TransactionType},
};

fn check_total(total: f64) -> Result<f64, Error> {
    if total.is_finite() {
        Ok(total)
    } else {
        tracing::error!("report total {total} is out of range");
        Err(Error::TotalOutOfRange)
    }
}

/// Sums expense amounts per key, ordered by key.
fn sum_expenses_by<'a, K, F>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    key: F,
) -> Result<BTreeMap<K, f64>, Error>
where
    K: Ord,
    F: Fn(&'a Transaction) -> K,
{
    let mut totals = BTreeMap::new();

    for transaction in transactions
        .into_iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Expense)
    {
        *totals.entry(key(transaction)).or_insert(0.0) += transaction.amount;
    }

    for total in totals.values() {
        check_total(*total)?;
    }

    Ok(totals)
}

/// Sums expenses by category.
///
/// # Returns
/// One entry per category, sorted by category name.
///
/// # Errors
/// Returns [Error::TotalOutOfRange] if a total overflows.
pub fn category_summary(transactions: &[Transaction]) -> Result<Vec<CategorySummary>, Error> {
    let totals = sum_expenses_by(transactions, |transaction| transaction.category.as_str())?;

    Ok(totals
        .into_iter()
        .map(|(category, total_amount)| CategorySummary {
            category: category.to_owned(),
            total_amount,
        })
        .collect())
}

/// Sums expenses by payment mode.
///
/// # Returns
/// One entry per payment mode, sorted by payment mode name.
///
/// # Errors
/// Returns [Error::TotalOutOfRange] if a total overflows.
pub fn payment_mode_summary(
    transactions: &[Transaction],
) -> Result<Vec<PaymentModeSummary>, Error> {
    let totals = sum_expenses_by(transactions, |transaction| transaction.payment_mode.as_str())?;

    Ok(totals
        .into_iter()
        .map(|(payment_mode, total_amount)| PaymentModeSummary {
            payment_mode: payment_mode.to_owned(),
            total_amount,
        })
        .collect())
}

/// Sums expenses by day within `date_range` (inclusive).
///
/// # Returns
/// One entry per day that has expenses, in ascending date order.
///
/// # Errors
/// Returns [Error::TotalOutOfRange] if a total overflows.
pub fn daily_trend(
    transactions: &[Transaction],
    date_range: &RangeInclusive<Date>,
) -> Result<Vec<DailyTrend>, Error> {
    let in_range = transactions
        .iter()
        .filter(|transaction| date_range.contains(&transaction.date));
    let totals = sum_expenses_by(in_range, |transaction| transaction.date)?;

    Ok(totals
        .into_iter()
        .map(|(date, total_amount)| DailyTrend { date, total_amount })
        .collect())
}

/// Sums expenses by calendar month for the months of `year`.
///
/// # Returns
/// One entry per month that has expenses, in ascending month order.
///
/// # Errors
/// Returns [Error::TotalOutOfRange] if a total overflows.
pub fn monthly_trend(transactions: &[Transaction], year: i32) -> Result<Vec<MonthlyTrend>, Error> {
    let in_year = transactions
        .iter()
        .filter(|transaction| transaction.date.year() == year);
    let totals = sum_expenses_by(in_year, |transaction| u8::from(transaction.date.month()))?;

    Ok(totals
        .into_iter()
        .map(|(month, total_amount)| MonthlyTrend {
            year,
            month,
            total_amount,
        })
        .collect())
}

/// Finds the categories with the largest expense totals.
///
/// Ties are broken by category name. A `limit` of zero or less gives no
/// categories.
///
/// # Returns
/// Up to `limit` entries, sorted by total in descending order.
///
/// # Errors
/// Returns [Error::TotalOutOfRange] if a total overflows.
pub fn top_categories(
    transactions: &[Transaction],
    limit: i64,
) -> Result<Vec<CategorySummary>, Error> {
    let Ok(limit) = usize::try_from(limit) else {
        return Ok(Vec::new());
    };

    let mut summaries = category_summary(transactions)?;
    summaries.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    summaries.truncate(limit);

    Ok(summaries)
}

/// Sums income and expenses separately and takes the difference.
///
/// Either side is zero when there are no transactions of that type.
///
/// # Errors
/// Returns [Error::TotalOutOfRange] if a total overflows.
pub fn income_vs_expense(transactions: &[Transaction]) -> Result<IncomeVsExpense, Error> {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => total_income += transaction.amount,
            TransactionType::Expense => total_expense += transaction.amount,
        }
    }

    let total_income = check_total(total_income)?;
    let total_expense = check_total(total_expense)?;

    Ok(IncomeVsExpense {
        total_income,
        total_expense,
        balance: check_total(total_income - total_expense)?,
    })
}
