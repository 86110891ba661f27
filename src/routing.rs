//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, Error, endpoints,
    report::{
        get_category_summary, get_daily_trend, get_income_vs_expense, get_monthly_trend,
        get_payment_mode_summary, get_top_categories,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Cross-origin requests are allowed from any origin.
pub fn build_router(state: AppState) -> Router {
    let transaction_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint).get(list_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint).delete(delete_transaction_endpoint),
        );

    let report_routes = Router::new()
        .route(endpoints::CATEGORY_REPORT, get(get_category_summary))
        .route(endpoints::PAYMENT_MODE_REPORT, get(get_payment_mode_summary))
        .route(endpoints::DAILY_TREND_REPORT, get(get_daily_trend))
        .route(endpoints::MONTHLY_TREND_REPORT, get(get_monthly_trend))
        .route(endpoints::INCOME_VS_EXPENSE_REPORT, get(get_income_vs_expense))
        .route(endpoints::TOP_CATEGORIES_REPORT, get(get_top_categories));

    transaction_routes
        .merge(report_routes)
        .fallback(get_404_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::{TestResponse, TestServer};
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use time::macros::date;

    use crate::{
        AppState, build_router, endpoints,
        endpoints::format_endpoint,
        pagination::PaginationConfig,
        report::{CategorySummary, DailyTrend, IncomeVsExpense, MonthlyTrend},
        transaction::{Transaction, TransactionType},
    };

    fn get_test_state() -> AppState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        AppState::new(connection, PaginationConfig::default()).expect("Could not create app state")
    }

    fn get_test_server() -> TestServer {
        TestServer::new(build_router(get_test_state()))
    }

    fn assert_json_error(response: &TestResponse) {
        assert!(
            response.json::<Value>()["error"].is_string(),
            "expected a JSON error body, got {}",
            response.text()
        );
    }

    async fn create(server: &TestServer, body: Value) -> Transaction {
        let response = server.post(endpoints::TRANSACTIONS_API).json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Transaction>()
    }

    async fn seed_example(server: &TestServer) {
        create(
            server,
            json!({"userId": "u1", "category": "Food", "amount": 50, "date": "2024-01-05", "paymentMode": "Cash", "type": "EXPENSE"}),
        )
        .await;
        create(
            server,
            json!({"userId": "u1", "category": "Food", "amount": 30, "date": "2024-01-06", "paymentMode": "Card", "type": "EXPENSE"}),
        )
        .await;
        create(
            server,
            json!({"userId": "u1", "category": "Salary", "amount": 1000, "date": "2024-01-01", "paymentMode": "Bank", "type": "INCOME"}),
        )
        .await;
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let server = get_test_server();
        let created = create(
            &server,
            json!({
                "userId": "u1",
                "category": "Groceries",
                "amount": 42.5,
                "date": "2024-03-02",
                "paymentMode": "Card",
                "description": "Weekly shop",
                "type": "EXPENSE"
            }),
        )
        .await;

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, created.id))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Transaction>(), created);
        assert_eq!(created.description.as_deref(), Some("Weekly shop"));
    }

    #[tokio::test]
    async fn create_rejects_unknown_type() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"userId": "u1", "category": "Food", "amount": 1, "date": "2024-01-05", "paymentMode": "Cash", "type": "REFUND"}))
            .await;

        assert!(response.status_code().is_client_error());
        assert_json_error(&response);
    }

    #[tokio::test]
    async fn create_rejects_malformed_body_with_json_error() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .content_type("application/json")
            .bytes("{\"amount\": ".into())
            .await;

        response.assert_status_bad_request();
        assert_json_error(&response);
    }

    #[tokio::test]
    async fn create_rejects_amount_too_large_to_total() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"userId": "u1", "category": "Food", "amount": 1e308, "date": "2024-03-04", "paymentMode": "Card", "type": "EXPENSE"}))
            .await;

        response.assert_status_bad_request();
        assert_json_error(&response);
    }

    #[tokio::test]
    async fn overflowing_report_totals_are_errors_not_null() {
        let state = get_test_state();
        for _ in 0..2 {
            state
                .transaction_store
                .insert(Transaction::build(
                    1e308,
                    date!(2024 - 03 - 04),
                    "Food",
                    TransactionType::Expense,
                ))
                .expect("Could not insert transaction");
        }
        let server = TestServer::new(build_router(state));

        for endpoint in [
            endpoints::CATEGORY_REPORT,
            endpoints::INCOME_VS_EXPENSE_REPORT,
        ] {
            let response = server.get(endpoint).await;

            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            assert_json_error(&response);
            assert!(!response.text().contains("null"));
        }
    }

    #[tokio::test]
    async fn create_rejects_negative_amount() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"userId": "u1", "category": "Food", "amount": -1, "date": "2024-01-05", "paymentMode": "Cash", "type": "EXPENSE"}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_missing_is_404() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::TRANSACTION, 12345))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let server = get_test_server();
        let created = create(
            &server,
            json!({"userId": "u1", "category": "Food", "amount": 1, "date": "2024-01-05", "paymentMode": "Cash", "type": "EXPENSE"}),
        )
        .await;
        let path = format_endpoint(endpoints::TRANSACTION, created.id);

        server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
        server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);

        server.get(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn list_filters_and_pages() {
        let server = get_test_server();
        seed_example(&server).await;

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("category", "Food")
            .add_query_param("startDate", "2024-01-01")
            .add_query_param("endDate", "2024-01-05")
            .add_query_param("pageSize", 10)
            .await;

        response.assert_status_ok();
        let page = response.json::<Value>();
        assert_eq!(page["totalElements"], 1);
        assert_eq!(page["totalPages"], 1);
        assert_eq!(page["content"][0]["date"], "2024-01-05");
    }

    #[tokio::test]
    async fn list_without_filters_returns_everything() {
        let server = get_test_server();
        seed_example(&server).await;

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        let page: Value = response.json();
        assert_eq!(page["totalElements"], 3);
        assert_eq!(page["page"], 1);
        assert_eq!(page["pageSize"], 20);
    }

    #[tokio::test]
    async fn list_rejects_half_a_date_range() {
        let server = get_test_server();

        server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("endDate", "2024-01-05")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn list_rejects_page_zero() {
        let server = get_test_server();

        server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("page", 0)
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn example_scenario_reports() {
        let server = get_test_server();
        seed_example(&server).await;

        let categories = server.get(endpoints::CATEGORY_REPORT).await;
        categories.assert_status_ok();
        assert_eq!(
            categories.json::<Vec<CategorySummary>>(),
            vec![CategorySummary {
                category: "Food".to_owned(),
                total_amount: 80.0
            }]
        );

        let balance = server.get(endpoints::INCOME_VS_EXPENSE_REPORT).await;
        balance.assert_status_ok();
        assert_eq!(
            balance.json::<IncomeVsExpense>(),
            IncomeVsExpense {
                total_income: 1000.0,
                total_expense: 80.0,
                balance: 920.0
            }
        );

        let daily = server
            .get(endpoints::DAILY_TREND_REPORT)
            .add_query_param("startDate", "2024-01-01")
            .add_query_param("endDate", "2024-01-31")
            .await;
        daily.assert_status_ok();
        let daily = daily.json::<Vec<DailyTrend>>();
        assert_eq!(
            daily
                .iter()
                .map(|d| (d.date.to_string(), d.total_amount))
                .collect::<Vec<_>>(),
            vec![("2024-01-05".to_owned(), 50.0), ("2024-01-06".to_owned(), 30.0)]
        );
    }

    #[tokio::test]
    async fn report_json_uses_camel_case() {
        let server = get_test_server();
        seed_example(&server).await;

        let balance: Value = server.get(endpoints::INCOME_VS_EXPENSE_REPORT).await.json();
        let modes: Value = server.get(endpoints::PAYMENT_MODE_REPORT).await.json();

        assert_eq!(balance["totalIncome"], 1000.0);
        assert_eq!(modes[0]["paymentMode"], "Card");
        assert_eq!(modes[0]["totalAmount"], 30.0);
    }

    #[tokio::test]
    async fn monthly_trend_requires_year() {
        let server = get_test_server();
        seed_example(&server).await;

        let missing_year = server.get(endpoints::MONTHLY_TREND_REPORT).await;
        missing_year.assert_status_bad_request();
        assert_json_error(&missing_year);

        let bad_year = server
            .get(endpoints::MONTHLY_TREND_REPORT)
            .add_query_param("year", "last")
            .await;
        bad_year.assert_status_bad_request();
        assert_json_error(&bad_year);

        let response = server
            .get(endpoints::MONTHLY_TREND_REPORT)
            .add_query_param("year", 2024)
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Vec<MonthlyTrend>>(),
            vec![MonthlyTrend {
                year: 2024,
                month: 1,
                total_amount: 80.0
            }]
        );
    }

    #[tokio::test]
    async fn daily_trend_requires_both_dates() {
        let server = get_test_server();

        server
            .get(endpoints::DAILY_TREND_REPORT)
            .add_query_param("startDate", "2024-01-01")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn top_categories_rejects_non_numeric_limit() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TOP_CATEGORIES_REPORT)
            .add_query_param("limit", "many")
            .await;

        response.assert_status_bad_request();
        assert_json_error(&response);
    }

    #[tokio::test]
    async fn non_numeric_transaction_id_is_json_error() {
        let server = get_test_server();

        let response = server.get("/api/transactions/abc").await;

        response.assert_status_bad_request();
        assert_json_error(&response);
    }

    #[tokio::test]
    async fn top_categories_with_zero_limit_is_empty() {
        let server = get_test_server();
        seed_example(&server).await;

        let response = server
            .get(endpoints::TOP_CATEGORIES_REPORT)
            .add_query_param("limit", 0)
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<CategorySummary>>(), vec![]);
    }

    #[tokio::test]
    async fn empty_store_reports_are_empty_not_errors() {
        let server = get_test_server();

        for endpoint in [
            endpoints::CATEGORY_REPORT,
            endpoints::PAYMENT_MODE_REPORT,
            endpoints::TOP_CATEGORIES_REPORT,
        ] {
            let response = server.get(endpoint).await;
            response.assert_status_ok();
            assert_eq!(response.json::<Vec<Value>>(), Vec::<Value>::new());
        }

        let balance = server.get(endpoints::INCOME_VS_EXPENSE_REPORT).await;
        assert_eq!(
            balance.json::<IncomeVsExpense>(),
            IncomeVsExpense {
                total_income: 0.0,
                total_expense: 0.0,
                balance: 0.0
            }
        );
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let server = get_test_server();

        let response = server.get("/api/nothing-here").await;

        response.assert_status_not_found();
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn paged_listing_deserializes() {
        let server = get_test_server();
        seed_example(&server).await;

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_query_param("page", 2)
            .add_query_param("pageSize", 2)
            .await;

        let page: Value = response.json();
        let content: Vec<Transaction> = serde_json::from_value(page["content"].clone()).unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(page["totalPages"], 2);
    }
}
