//! Reports over the stored transactions.
//!
//! This module contains:
//! - The typed report results
//! - Pure aggregation functions that group and sum transactions
//! - The `ReportEngine` that reads from a transaction store and runs the aggregations
//! - Route handlers exposing each report

mod aggregation;
mod engine;
mod handlers;
mod models;

pub use engine::{DEFAULT_TOP_CATEGORIES_LIMIT, ReportEngine};
pub use handlers::{
    DailyTrendQuery, MonthlyTrendQuery, ReportState, TopCategoriesQuery, get_category_summary,
    get_daily_trend, get_income_vs_expense, get_monthly_trend, get_payment_mode_summary,
    get_top_categories,
};
pub use models::{CategorySummary, DailyTrend, IncomeVsExpense, MonthlyTrend, PaymentModeSummary};
