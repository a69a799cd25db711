//! Database seeder for Tally development.
//!
//! Seeds placeholder customers, invoices and twelve months of revenue so the
//! dashboard has something to show. Safe to run repeatedly.
//!
//! Reads the same layered configuration as the server (`config/default.toml`,
//! `config/{RUN_MODE}.toml`, then `TALLY__*` variables), so it always seeds
//! the database the server reads.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tally_db::entities::{customers, invoices, revenue, sea_orm_active_enums::InvoiceStatus};
use tally_shared::{
    AppConfig,
    config::{ConfigError, DatabaseConfig},
};
use uuid::Uuid;

/// (name, email, avatar)
const CUSTOMERS: [(&str, &str, &str); 6] = [
    ("Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    ("Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    ("Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    ("Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    ("Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

/// (customer index, amount in cents, paid, date)
const INVOICES: [(usize, i32, bool, (i32, u32, u32)); 12] = [
    (0, 15_795, false, (2025, 12, 6)),
    (1, 20_348, false, (2025, 11, 14)),
    (4, 3_040, true, (2025, 10, 29)),
    (3, 44_800, true, (2025, 9, 10)),
    (5, 34_577, false, (2025, 8, 5)),
    (2, 54_246, false, (2025, 7, 16)),
    (0, 666, false, (2025, 6, 27)),
    (3, 32_545, true, (2025, 6, 9)),
    (4, 1_250, true, (2025, 6, 17)),
    (5, 8_546, true, (2025, 6, 7)),
    (1, 500, true, (2025, 8, 19)),
    (5, 8_945, true, (2025, 6, 3)),
];

/// (month, whole units)
const REVENUE: [(&str, i32); 12] = [
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

/// Stable ids so reruns find existing rows.
const fn customer_id(index: usize) -> Uuid {
    Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0001_0000 + index as u128)
}

const fn invoice_id(index: usize) -> Uuid {
    Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0002_0000 + index as u128)
}

fn database_config() -> Result<DatabaseConfig, ConfigError> {
    AppConfig::load().map(|config| config.database)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database = database_config().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = tally_db::connect_with(&database)
        .await
        .expect("Failed to connect to database");

    println!("Seeding customers...");
    seed_customers(&db).await;

    println!("Seeding invoices...");
    seed_invoices(&db).await;

    println!("Seeding revenue...");
    seed_revenue(&db).await;

    println!("Seeding complete!");
}

async fn seed_customers(db: &DatabaseConnection) {
    for (index, (name, email, image_url)) in CUSTOMERS.into_iter().enumerate() {
        let id = customer_id(index);
        if customers::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  {name} already exists, skipping...");
            continue;
        }

        let customer = customers::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            image_url: Set(image_url.to_string()),
        };

        if let Err(e) = customer.insert(db).await {
            eprintln!("Failed to insert customer {name}: {e}");
        } else {
            println!("  Created customer: {email}");
        }
    }
}

async fn seed_invoices(db: &DatabaseConnection) {
    let mut created = 0;
    for (index, (customer, amount, paid, (year, month, day))) in INVOICES.into_iter().enumerate() {
        let id = invoice_id(index);
        if invoices::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            continue;
        }

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            eprintln!("Skipping invoice {index}: invalid date");
            continue;
        };

        let invoice = invoices::ActiveModel {
            id: Set(id),
            customer_id: Set(customer_id(customer)),
            amount: Set(amount),
            status: Set(if paid {
                InvoiceStatus::Paid
            } else {
                InvoiceStatus::Pending
            }),
            date: Set(date),
        };

        match invoice.insert(db).await {
            Ok(_) => created += 1,
            Err(e) => eprintln!("Failed to insert invoice {index}: {e}"),
        }
    }
    println!("  Created {created} invoices");
}

async fn seed_revenue(db: &DatabaseConnection) {
    for (index, (month, amount)) in (1_i16..).zip(REVENUE) {
        if revenue::Entity::find_by_id(month.to_string())
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            continue;
        }

        let row = revenue::ActiveModel {
            month: Set(month.to_string()),
            month_index: Set(index),
            revenue: Set(amount),
        };

        if let Err(e) = row.insert(db).await {
            eprintln!("Failed to insert revenue for {month}: {e}");
        }
    }
    println!("  Revenue ready for {} months", REVENUE.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_follows_server_config() {
        temp_env::with_vars(
            [
                ("TALLY__DATABASE__URL", Some("postgres://db.internal/tally")),
                ("DATABASE_URL", Some("postgres://elsewhere/other")),
            ],
            || {
                let database = database_config().unwrap();
                assert_eq!(database.url, "postgres://db.internal/tally");
            },
        );
    }

    #[test]
    fn test_stable_ids_do_not_collide() {
        assert_ne!(customer_id(0), customer_id(1));
        assert_ne!(customer_id(0), invoice_id(0));
    }
}
