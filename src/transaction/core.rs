//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::TransactionId};

/// The largest amount a single transaction may have.
///
/// Keeps report totals well within the range of `f64`.
pub const MAX_AMOUNT: f64 = 1e15;

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
///
/// Serialized as `"INCOME"` or `"EXPENSE"`. The lower-case and capitalised
/// spellings are accepted on input and normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    #[serde(rename = "INCOME", alias = "income", alias = "Income")]
    Income,
    /// Money that was spent.
    #[serde(rename = "EXPENSE", alias = "expense", alias = "Expense")]
    Expense,
}

impl TransactionType {
    /// The canonical text form, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when a string is neither `INCOME` nor `EXPENSE`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("\"{0}\" is not a transaction type, expected INCOME or EXPENSE")]
pub struct ParseTransactionTypeError(String);

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("INCOME") {
            Ok(TransactionType::Income)
        } else if s.eq_ignore_ascii_case("EXPENSE") {
            Ok(TransactionType::Expense)
        } else {
            Err(ParseTransactionTypeError(s.to_owned()))
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created from a [NewTransaction] by a
/// [TransactionStore](crate::transaction::TransactionStore), which assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The user that recorded the transaction.
    pub user_id: String,
    /// What the money was for, e.g. "Groceries".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// How the money moved, e.g. "Cash" or "Card".
    pub payment_mode: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(
        amount: f64,
        date: Date,
        category: &str,
        transaction_type: TransactionType,
    ) -> NewTransaction {
        NewTransaction {
            user_id: String::new(),
            category: category.to_owned(),
            amount,
            date,
            payment_mode: String::new(),
            description: None,
            transaction_type,
        }
    }
}

/// A transaction that has not been stored yet and so has no ID.
///
/// This is also the JSON payload accepted when creating a transaction.
///
/// # Examples
///
/// ```
/// use expense_tracker::transaction::{Transaction, TransactionType};
/// use time::macros::date;
///
/// let new_transaction = Transaction::build(
///         45.99,
///         date!(2025-01-15),
///         "Coffee",
///         TransactionType::Expense,
///     )
///     .payment_mode("Card")
///     .description(Some("Flat white and a muffin"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// The user that recorded the transaction.
    pub user_id: String,
    /// What the money was for, e.g. "Groceries".
    pub category: String,
    /// The amount of money spent or earned. Never negative, the sign comes
    /// from `transaction_type`.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// How the money moved, e.g. "Cash" or "Card".
    pub payment_mode: String,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl NewTransaction {
    /// Set the user ID for the transaction.
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_owned();
        self
    }

    /// Set the payment mode for the transaction.
    pub fn payment_mode(mut self, payment_mode: &str) -> Self {
        self.payment_mode = payment_mode.to_owned();
        self
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// Check the fields that the type system cannot.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is negative, NaN, infinite
    /// or larger than [MAX_AMOUNT].
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=MAX_AMOUNT).contains(&self.amount) {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(())
    }

    /// Attach the store-assigned `id`.
    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            category: self.category,
            amount: self.amount,
            date: self.date,
            payment_mode: self.payment_mode,
            description: self.description,
            transaction_type: self.transaction_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{MAX_AMOUNT, Transaction, TransactionType},
    };

    #[test]
    fn type_parses_case_insensitively() {
        assert_eq!("income".parse(), Ok(TransactionType::Income));
        assert_eq!("Expense".parse(), Ok(TransactionType::Expense));
        assert!("refund".parse::<TransactionType>().is_err());
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "userId": "u1",
            "category": "Food",
            "amount": 12.5,
            "date": "2024-01-05",
            "paymentMode": "Cash",
            "type": "expense"
        }"#;

        let got: crate::transaction::NewTransaction = serde_json::from_str(json).unwrap();

        let want = Transaction::build(12.5, date!(2024 - 01 - 05), "Food", TransactionType::Expense)
            .user_id("u1")
            .payment_mode("Cash");
        assert_eq!(want, got);
    }

    #[test]
    fn rejects_unknown_type() {
        let json = r#"{
            "userId": "u1",
            "category": "Food",
            "amount": 12.5,
            "date": "2024-01-05",
            "paymentMode": "Cash",
            "type": "TRANSFER"
        }"#;

        let got = serde_json::from_str::<crate::transaction::NewTransaction>(json);

        assert!(got.is_err());
    }

    #[test]
    fn serializes_type_and_date_canonically() {
        let transaction = Transaction::build(1.0, date!(2024 - 03 - 09), "Pay", TransactionType::Income)
            .into_transaction(7);

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["type"], "INCOME");
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["id"], 7);
        assert_eq!(json["paymentMode"], "");
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_amounts() {
        let build = |amount| Transaction::build(amount, date!(2024 - 01 - 01), "", TransactionType::Expense);

        assert_eq!(build(0.0).validate(), Ok(()));
        assert_eq!(build(-1.0).validate(), Err(Error::InvalidAmount(-1.0)));
        assert!(build(f64::NAN).validate().is_err());
        assert!(build(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn validate_rejects_amounts_over_the_maximum() {
        let build = |amount| Transaction::build(amount, date!(2024 - 01 - 01), "", TransactionType::Expense);

        assert_eq!(build(MAX_AMOUNT).validate(), Ok(()));
        assert_eq!(build(1e308).validate(), Err(Error::InvalidAmount(1e308)));
    }
}
