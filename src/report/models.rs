//! The typed results produced by the report engine.

use serde::{Deserialize, Serialize};
use time::Date;

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// The category label, e.g. "Groceries".
    pub category: String,
    /// The sum of the expense amounts in the category.
    pub total_amount: f64,
}

/// The total spent with one payment mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModeSummary {
    /// The payment mode label, e.g. "Card".
    pub payment_mode: String,
    /// The sum of the expense amounts paid this way.
    pub total_amount: f64,
}

/// The total spent on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrend {
    /// The day.
    pub date: Date,
    /// The sum of the expense amounts on `date`.
    pub total_amount: f64,
}

/// The total spent in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// The calendar year.
    pub year: i32,
    /// The month of the year, from 1 (January) to 12 (December).
    pub month: u8,
    /// The sum of the expense amounts in the month.
    pub total_amount: f64,
}

/// Everything earned against everything spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeVsExpense {
    /// The sum of all income amounts, zero if there is no income.
    pub total_income: f64,
    /// The sum of all expense amounts, zero if there are no expenses.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
}
