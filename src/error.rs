//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use time::Date;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A transaction amount was negative, NaN, infinite or larger than
    /// [MAX_AMOUNT](crate::transaction::MAX_AMOUNT).
    #[error(
        "{0} is not a valid amount, amounts must be between 0 and {max}",
        max = crate::transaction::MAX_AMOUNT
    )]
    InvalidAmount(f64),

    /// Only one of the start and end dates was given where both are required.
    #[error("both startDate and endDate must be given together")]
    IncompleteDateRange,

    /// The start date of a date range came after its end date.
    #[error("the start date {start} is after the end date {end}")]
    InvalidDateRange {
        /// The first day of the range.
        start: Date,
        /// The last day of the range.
        end: Date,
    },

    /// The year does not fit in the supported calendar range.
    #[error("{0} is not a supported year")]
    InvalidYear(i32),

    /// The page number or page size was out of bounds.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    /// The path, query string or body of a request could not be parsed.
    ///
    /// `status` is the status axum would have used for the rejection.
    #[error("{message}")]
    InvalidRequest {
        /// The client error status for the rejection.
        status: StatusCode,
        /// What was wrong with the request.
        message: String,
    },

    /// A report total grew too large to be represented.
    #[error("a report total is too large to represent")]
    TotalOutOfRange,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::InvalidAmount(_)
            | Error::IncompleteDateRange
            | Error::InvalidDateRange { .. }
            | Error::InvalidYear(_)
            | Error::InvalidPagination(_) => StatusCode::BAD_REQUEST,
            Error::InvalidRequest { status, .. } => *status,
            Error::TotalOutOfRange | Error::SqlError(_) | Error::DatabaseLockError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            // Store errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
