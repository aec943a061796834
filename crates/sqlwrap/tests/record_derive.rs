//! `#[derive(Record)]` mapping rules, observed through built statements.

#![cfg(feature = "derive")]
#![allow(dead_code)]

use chrono::NaiveDate;
use sqlwrap::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Record)]
struct User {
    #[db("name")]
    username: String,
    #[db("age,omitempty")]
    age: i32,
    #[db(",omitempty")]
    email: Option<String>,
    #[db("-")]
    session: String,
    #[db(skip)]
    cache: Vec<u8>,
    #[db(column = "is_admin")]
    admin: bool,
    r#type: String,
}

fn user(name: &str, age: i32, email: Option<&str>) -> User {
    User {
        username: name.to_string(),
        age,
        email: email.map(str::to_string),
        session: "s".to_string(),
        cache: vec![1, 2, 3],
        admin: false,
        r#type: "member".to_string(),
    }
}

// ── Column mapping ──────────────────────────────────────────────────────────

#[test]
fn columns_follow_declaration_order() {
    let fields = user("a", 20, Some("a@x")).fields();
    let columns: Vec<&str> = fields.iter().map(|f| f.column).collect();
    assert_eq!(columns, vec!["name", "age", "email", "is_admin", "type"]);
}

#[test]
fn excluded_fields_never_appear() {
    let stmt = SqlBuilder::mysql()
        .wrap([table("user")])
        .to_insert(&user("a", 20, Some("a@x")))
        .unwrap();
    assert_eq!(
        stmt.sql,
        "INSERT INTO user (name, age, email, is_admin, type) VALUES (?, ?, ?, ?, ?)"
    );
    assert_eq!(
        stmt.binds,
        vec![
            Value::Text("a".into()),
            Value::Int(20),
            Value::Text("a@x".into()),
            Value::Bool(false),
            Value::Text("member".into()),
        ]
    );
}

// ── omitempty ───────────────────────────────────────────────────────────────

#[test]
fn omitempty_skips_zero_values() {
    let stmt = SqlBuilder::mysql()
        .wrap([table("user")])
        .to_insert(&user("a", 0, None))
        .unwrap();
    assert_eq!(stmt.sql, "INSERT INTO user (name, is_admin, type) VALUES (?, ?, ?)");
}

#[test]
fn fields_without_omitempty_keep_zero_values() {
    let stmt = SqlBuilder::mysql()
        .wrap([table("user")])
        .to_insert(&user("", 1, None))
        .unwrap();
    assert_eq!(stmt.sql, "INSERT INTO user (name, age, is_admin, type) VALUES (?, ?, ?, ?)");
    assert_eq!(stmt.binds[0], Value::Text(String::new()));
}

#[derive(Record)]
struct Counter {
    #[db("hits,omitempty")]
    hits: Option<i64>,
    #[db("label,omitempty")]
    label: Option<String>,
}

#[test]
fn present_option_is_never_zero() {
    let c = Counter {
        hits: Some(0),
        label: Some(String::new()),
    };
    let stmt = SqlBuilder::sqlite().wrap([table("c")]).to_insert(&c).unwrap();
    assert_eq!(stmt.sql, "INSERT INTO c (hits, label) VALUES (?, ?)");
    assert_eq!(stmt.binds, vec![Value::Int(0), Value::Text(String::new())]);
}

#[test]
fn all_fields_omitted_inserts_nothing() {
    let c = Counter {
        hits: None,
        label: None,
    };
    let stmt = SqlBuilder::sqlite().wrap([table("c")]).to_insert(&c).unwrap();
    assert_eq!(stmt.sql, "INSERT INTO c");
    assert!(stmt.binds.is_empty());
}

#[derive(Record)]
struct Event {
    #[db("id")]
    id: Uuid,
    #[db("day,omitempty")]
    day: NaiveDate,
    #[db("tags,omitempty")]
    tags: Vec<String>,
    #[db("payload,omitempty")]
    payload: serde_json::Value,
}

#[test]
fn typed_fields_map_to_values() {
    let id = Uuid::nil();
    let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let e = Event {
        id,
        day,
        tags: vec![],
        payload: serde_json::Value::Null,
    };

    let stmt = SqlBuilder::postgres().wrap([table("event")]).to_insert(&e).unwrap();
    assert_eq!(stmt.sql, "INSERT INTO event (id, day) VALUES ($1, $2) RETURNING id");
    assert_eq!(stmt.binds, vec![Value::Uuid(id), Value::Date(day)]);
}

// ── Batches ─────────────────────────────────────────────────────────────────

#[test]
fn batch_of_derived_records() {
    let users = vec![user("a", 1, None), user("b", 2, Some("b@x"))];
    let stmt = SqlBuilder::postgres()
        .wrap([table("user")])
        .to_batch_insert(&users)
        .unwrap();

    // the first user has no email, so nobody's email is bound
    assert_eq!(
        stmt.sql,
        "INSERT INTO user (name, age, is_admin, type) VALUES ($1, $2, $3, $4), ($5, $6, $7, $8)"
    );
    assert_eq!(stmt.binds.len(), 8);
    assert_eq!(stmt.binds[4], Value::Text("b".into()));
}

#[test]
fn batch_of_boxed_records() {
    let users: Vec<Box<dyn Record>> = vec![
        Box::new(user("a", 1, None)),
        Box::new(Counter {
            hits: Some(1),
            label: None,
        }),
    ];
    let err = SqlBuilder::mysql()
        .wrap([table("user")])
        .to_batch_insert(&users)
        .unwrap_err();
    assert!(err.is_invalid_batch());
}

#[test]
fn update_from_derived_record() {
    let stmt = SqlBuilder::mysql()
        .wrap([table("user"), where_clause("name = ?", ["a"])])
        .to_update(&user("a", 30, None))
        .unwrap();
    assert_eq!(
        stmt.sql,
        "UPDATE user SET name = ?, age = ?, is_admin = ?, type = ? WHERE name = ?"
    );
    assert_eq!(stmt.binds.len(), 5);
}

// ── Byte strings ────────────────────────────────────────────────────────────

#[derive(Record)]
struct Blob {
    #[db("name")]
    name: String,
    #[db("data")]
    data: Vec<u8>,
    #[db("digest,omitempty")]
    digest: Option<Vec<u8>>,
    #[db("tag")]
    tag: [u8; 2],
}

fn blob(data: &[u8]) -> Blob {
    Blob {
        name: "a".to_string(),
        data: data.to_vec(),
        digest: None,
        tag: [1, 2],
    }
}

#[test]
fn bytes_field_binds_as_one_value() {
    let stmt = SqlBuilder::postgres()
        .wrap([table("files")])
        .to_insert(&blob(&[0xde, 0xad]))
        .unwrap();
    assert_eq!(
        stmt.sql,
        "INSERT INTO files (name, data, tag) VALUES ($1, $2, $3) RETURNING id"
    );
    assert_eq!(
        stmt.binds,
        vec![
            Value::Text("a".into()),
            Value::Bytes(vec![0xde, 0xad]),
            Value::Bytes(vec![1, 2]),
        ]
    );
}

#[test]
fn optional_bytes_field() {
    let mut b = blob(&[]);
    b.digest = Some(vec![9, 9]);
    let fields = b.fields();
    assert_eq!(fields[2].value, Value::Bytes(vec![9, 9]));
    assert!(!fields[2].is_omitted());

    b.digest = None;
    assert!(b.fields()[2].is_omitted());
}

#[test]
fn bytes_field_survives_where_in_expansion() {
    let stmt = SqlBuilder::mysql()
        .wrap([table("files"), where_in("id IN (?)", [vec![7, 8]])])
        .to_update(&blob(&[1, 2, 3]))
        .unwrap();
    assert_eq!(
        stmt.sql,
        "UPDATE files SET name = ?, data = ?, tag = ? WHERE id IN (?, ?)"
    );
    assert_eq!(
        stmt.binds,
        vec![
            Value::Text("a".into()),
            Value::Bytes(vec![1, 2, 3]),
            Value::Bytes(vec![1, 2]),
            Value::Int(7),
            Value::Int(8),
        ]
    );
}

// ── Generics ────────────────────────────────────────────────────────────────

#[derive(Record)]
struct Tagged<T> {
    #[db("label")]
    label: String,
    #[db("value,omitempty")]
    value: T,
}

#[test]
fn generic_record() {
    let stmt = SqlBuilder::sqlite()
        .wrap([table("kv")])
        .to_insert(&Tagged {
            label: "n".to_string(),
            value: 5_i64,
        })
        .unwrap();
    assert_eq!(stmt.sql, "INSERT INTO kv (label, value) VALUES (?, ?)");
    assert_eq!(stmt.binds, vec![Value::Text("n".into()), Value::Int(5)]);

    let omitted = Tagged {
        label: "s".to_string(),
        value: String::new(),
    };
    let stmt = SqlBuilder::sqlite().wrap([table("kv")]).to_insert(&omitted).unwrap();
    assert_eq!(stmt.sql, "INSERT INTO kv (label) VALUES (?)");
}
