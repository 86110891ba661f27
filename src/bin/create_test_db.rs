use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, macros::date};

use expense_tracker::{
    initialize_db,
    transaction::{SQLiteTransactionStore, Transaction, TransactionStore, TransactionType},
};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The user that the sample transactions belong to.
    #[arg(long, default_value = "test-user")]
    user_id: String,
}

const EXPENSES: [(&str, &str, f64); 6] = [
    ("Food", "Cash", 12.5),
    ("Groceries", "Card", 84.2),
    ("Transport", "Card", 6.4),
    ("Rent", "Bank", 450.0),
    ("Entertainment", "Card", 25.0),
    ("Food", "Card", 18.9),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));
    let start: Date = date!(2024 - 01 - 01);

    println!("Creating sample transactions...");

    for month in 0..3_i64 {
        let month_start = start + Duration::days(month * 30);

        store.insert(
            Transaction::build(3200.0, month_start, "Salary", TransactionType::Income)
                .user_id(&args.user_id)
                .payment_mode("Bank")
                .description(Some("Monthly pay")),
        )?;

        for (day, (category, payment_mode, amount)) in (0_i64..).zip(EXPENSES) {
            store.insert(
                Transaction::build(
                    amount,
                    month_start + Duration::days(day * 4 + 1),
                    category,
                    TransactionType::Expense,
                )
                .user_id(&args.user_id)
                .payment_mode(payment_mode),
            )?;
        }
    }

    println!("Success!");

    Ok(())
}
