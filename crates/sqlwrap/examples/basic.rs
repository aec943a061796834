//! Statement builder tour for sqlwrap
//!
//! Run with: cargo run --example basic -p sqlwrap
//!
//! Pick the dialect with SQLWRAP_DIALECT (mysql, postgres, pgx, sqlite3, ...).
//! Defaults to postgres.

use sqlwrap::prelude::*;
use std::env;

#[derive(Debug, Record)]
struct Product {
    #[db("name")]
    name: String,
    #[db("price")]
    price: i32,
    #[db("category,omitempty")]
    category: Option<String>,
    #[db("in_stock")]
    in_stock: bool,
}

fn show(label: &str, stmt: &Statement) {
    println!("{label}:");
    println!("  sql:   {}", stmt.sql);
    println!("  binds: {:?}", stmt.binds);
}

fn main() -> Result<(), BuildError> {
    let dialect = env::var("SQLWRAP_DIALECT").unwrap_or_else(|_| "postgres".to_string());
    let builder = SqlBuilder::from_driver(&dialect)?;
    println!("=== dialect: {} ===", builder.dialect());

    // ============================================
    // INSERT
    // ============================================
    let pen = Product {
        name: "pen".into(),
        price: 3,
        category: None,
        in_stock: true,
    };
    let stmt = builder.wrap([table("products")]).to_insert(&pen)?;
    show("insert", &stmt);

    let products = vec![
        Product {
            name: "book".into(),
            price: 12,
            category: Some("paper".into()),
            in_stock: true,
        },
        Product {
            name: "lamp".into(),
            price: 40,
            category: Some("home".into()),
            in_stock: false,
        },
    ];
    let stmt = builder.wrap([table("products")]).to_batch_insert(&products)?;
    show("batch insert", &stmt);

    // ============================================
    // SELECT
    // ============================================
    let stmt = builder
        .wrap([
            table("products"),
            select(["name", "price"]),
            where_in("in_stock = ? AND category IN (?)", binds![true, vec!["paper", "home"]]),
            order_by(["price DESC"]),
            limit(10),
        ])
        .to_query()?;
    show("query", &stmt);

    let stmt = builder
        .wrap([
            table("products"),
            select(["name"]),
            where_clause("price < ?", [5]),
            union_all([builder.wrap([
                table("archived_products"),
                select(["name"]),
                where_clause("price < ?", [5]),
            ])]),
        ])
        .to_query()?;
    show("union all", &stmt);

    // ============================================
    // UPDATE / DELETE
    // ============================================
    let stmt = builder
        .wrap([table("products"), where_clause("name = ?", ["pen"])])
        .to_update(&row! {
            "price" => clause("price * ?", [2]),
            "in_stock" => false,
        })?;
    show("update", &stmt);

    let stmt = builder
        .wrap([table("products"), where_in("name IN (?)", [vec!["lamp", "book"]])])
        .to_delete()?;
    show("delete", &stmt);

    println!("truncate:\n  sql:   {}", builder.wrap([table("products")]).to_truncate());

    Ok(())
}
