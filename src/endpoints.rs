//! The API endpoints URIs.

/// The route to create and list transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to fetch or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// The route for the total spent per category.
pub const CATEGORY_REPORT: &str = "/api/reports/category";
/// The route for the total spent per payment mode.
pub const PAYMENT_MODE_REPORT: &str = "/api/reports/payment-mode";
/// The route for the total spent per day in a date range.
pub const DAILY_TREND_REPORT: &str = "/api/reports/daily-trend";
/// The route for the total spent per month of a year.
pub const MONTHLY_TREND_REPORT: &str = "/api/reports/monthly-trend";
/// The route for total income against total expenses.
pub const INCOME_VS_EXPENSE_REPORT: &str = "/api/reports/income-vs-expense";
/// The route for the categories with the largest totals.
pub const TOP_CATEGORIES_REPORT: &str = "/api/reports/top-categories";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// # Examples
/// ```
/// use expense_tracker::endpoints::{format_endpoint, TRANSACTION};
///
/// assert_eq!(format_endpoint(TRANSACTION, 42), "/api/transactions/42");
/// ```
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}
