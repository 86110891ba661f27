//! Report HTTP handlers.
//!
//! Each handler maps one-to-one onto a [ReportEngine] operation and responds with JSON.

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    extract::QueryParams,
    report::{
        DEFAULT_TOP_CATEGORIES_LIMIT, ReportEngine,
        models::{CategorySummary, DailyTrend, IncomeVsExpense, MonthlyTrend, PaymentModeSummary},
    },
};

/// The state needed for the report handlers.
#[derive(Debug, Clone)]
pub struct ReportState {
    /// The engine that computes the reports.
    pub report_engine: ReportEngine,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            report_engine: state.report_engine.clone(),
        }
    }
}

/// The query string for the daily trend report. Both dates are required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendQuery {
    /// The first day to include.
    pub start_date: Option<Date>,
    /// The last day to include.
    pub end_date: Option<Date>,
}

/// The query string for the monthly trend report.
#[derive(Debug, Deserialize)]
pub struct MonthlyTrendQuery {
    /// The calendar year to report on.
    pub year: i32,
}

/// The query string for the top categories report.
#[derive(Debug, Default, Deserialize)]
pub struct TopCategoriesQuery {
    /// How many categories to return, defaults to [DEFAULT_TOP_CATEGORIES_LIMIT].
    pub limit: Option<i64>,
}

/// Get the total spent in each category.
pub async fn get_category_summary(
    State(state): State<ReportState>,
) -> Result<Json<Vec<CategorySummary>>, Error> {
    state.report_engine.category_summary().map(Json)
}

/// Get the total spent with each payment mode.
pub async fn get_payment_mode_summary(
    State(state): State<ReportState>,
) -> Result<Json<Vec<PaymentModeSummary>>, Error> {
    state.report_engine.payment_mode_summary().map(Json)
}

/// Get the total spent on each day in a date range.
///
/// # Errors
/// Returns [Error::IncompleteDateRange] unless both `startDate` and `endDate` are given.
pub async fn get_daily_trend(
    State(state): State<ReportState>,
    QueryParams(query): QueryParams<DailyTrendQuery>,
) -> Result<Json<Vec<DailyTrend>>, Error> {
    let (Some(start), Some(end)) = (query.start_date, query.end_date) else {
        return Err(Error::IncompleteDateRange);
    };

    state.report_engine.daily_trend(start, end).map(Json)
}

/// Get the total spent in each month of a year.
pub async fn get_monthly_trend(
    State(state): State<ReportState>,
    QueryParams(query): QueryParams<MonthlyTrendQuery>,
) -> Result<Json<Vec<MonthlyTrend>>, Error> {
    state.report_engine.monthly_trend(query.year).map(Json)
}

/// Get total income against total expenses.
pub async fn get_income_vs_expense(
    State(state): State<ReportState>,
) -> Result<Json<IncomeVsExpense>, Error> {
    state.report_engine.income_vs_expense().map(Json)
}

/// Get the categories with the largest totals.
pub async fn get_top_categories(
    State(state): State<ReportState>,
    QueryParams(query): QueryParams<TopCategoriesQuery>,
) -> Result<Json<Vec<CategorySummary>>, Error> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_CATEGORIES_LIMIT);

    state.report_engine.top_categories(limit).map(Json)
}
