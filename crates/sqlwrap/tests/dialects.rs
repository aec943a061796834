//! The same options must produce the same statement shape and binds in every
//! dialect; only placeholder syntax and `RETURNING id` differ.

use rstest::rstest;
use sqlwrap::prelude::*;

fn numbered(sql: &str) -> String {
    Dialect::Postgres.rebind(sql)
}

#[rstest]
#[case::mysql(SqlBuilder::mysql())]
#[case::postgres(SqlBuilder::postgres())]
#[case::sqlite(SqlBuilder::sqlite())]
fn query_shape_is_shared(#[case] builder: SqlBuilder) {
    let stmt = builder
        .wrap([
            table("orders AS o"),
            select(["o.id", "SUM(o.total) AS spent"]),
            join("user AS u", "u.id = o.user_id"),
            where_in("o.status = ? AND u.id IN (?)", binds!["paid", vec![1, 2]]),
            group_by(["o.id"]),
            having("SUM(o.total) > ?", [100]),
            order_by(["spent DESC"]),
            limit(10),
            offset(30),
        ])
        .to_query()
        .unwrap();

    let expected = "SELECT o.id, SUM(o.total) AS spent FROM orders AS o \
                    INNER JOIN user AS u ON u.id = o.user_id \
                    WHERE o.status = ? AND u.id IN (?, ?) \
                    GROUP BY o.id HAVING SUM(o.total) > ? \
                    ORDER BY spent DESC LIMIT ? OFFSET ?";

    match builder.dialect() {
        Dialect::Postgres => assert_eq!(stmt.sql, numbered(expected)),
        Dialect::MySql | Dialect::Sqlite => assert_eq!(stmt.sql, expected),
    }
    assert_eq!(
        stmt.binds,
        vec![
            Value::Text("paid".into()),
            Value::Int(1),
            Value::Int(2),
            Value::Int(100),
            Value::Int(10),
            Value::Int(30),
        ]
    );
}

#[rstest]
#[case::mysql("mysql", "INSERT INTO t (a, b) VALUES (?, ?)")]
#[case::postgres("postgres", "INSERT INTO t (a, b) VALUES ($1, $2) RETURNING id")]
#[case::pgx("pgx", "INSERT INTO t (a, b) VALUES ($1, $2) RETURNING id")]
#[case::sqlite3("sqlite3", "INSERT INTO t (a, b) VALUES (?, ?)")]
fn insert_per_driver(#[case] driver: &str, #[case] expected: &str) {
    let builder = SqlBuilder::from_driver(driver).unwrap();
    let stmt = builder
        .wrap([table("t")])
        .to_insert(&row! { "a" => 1, "b" => "x" })
        .unwrap();

    assert_eq!(stmt.sql, expected);
    assert_eq!(stmt.binds, vec![Value::Int(1), Value::Text("x".into())]);
}

#[rstest]
#[case::mysql(SqlBuilder::mysql())]
#[case::postgres(SqlBuilder::postgres())]
#[case::sqlite(SqlBuilder::sqlite())]
fn placeholders_count_matches_binds(#[case] builder: SqlBuilder) {
    let rows = vec![
        row! { "a" => 1, "b" => 2 },
        row! { "a" => 3, "b" => 4 },
        row! { "a" => 5, "b" => 6 },
    ];
    let batch = builder.wrap([table("t")]).to_batch_insert(&rows).unwrap();

    let update = builder
        .wrap([table("t"), where_in("id IN (?)", [vec![1, 2, 3]])])
        .to_update(&row! { "a" => clause("a + ?", [1]), "b" => 0 })
        .unwrap();

    for stmt in [batch, update] {
        let placeholders = match builder.dialect() {
            Dialect::Postgres => stmt.sql.matches('$').count(),
            Dialect::MySql | Dialect::Sqlite => stmt.sql.matches('?').count(),
        };
        assert_eq!(placeholders, stmt.binds.len(), "{}", stmt.sql);
    }
}

#[rstest]
#[case::mysql(SqlBuilder::mysql())]
#[case::postgres(SqlBuilder::postgres())]
#[case::sqlite(SqlBuilder::sqlite())]
fn quoted_question_marks_survive(#[case] builder: SqlBuilder) {
    let stmt = builder
        .wrap([
            table("faq"),
            where_in("title <> '?' AND id IN (?)", [vec![1, 2]]),
        ])
        .to_delete()
        .unwrap();

    match builder.dialect() {
        Dialect::Postgres => assert_eq!(
            stmt.sql,
            "DELETE FROM faq WHERE title <> '?' AND id IN ($1, $2)"
        ),
        Dialect::MySql | Dialect::Sqlite => assert_eq!(
            stmt.sql,
            "DELETE FROM faq WHERE title <> '?' AND id IN (?, ?)"
        ),
    }
}

#[rstest]
#[case("oracle")]
#[case("")]
fn unknown_driver_is_rejected(#[case] driver: &str) {
    let err = SqlBuilder::from_driver(driver).unwrap_err();
    assert_eq!(err, BuildError::UnknownDialect(driver.to_string()));
}
