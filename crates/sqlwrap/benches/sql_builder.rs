use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlwrap::{
    Dialect, Row, SqlBuilder, Value, limit, order_by, rebind, select, table, where_clause,
    where_in,
};

/// `SELECT col0, col1, ... FROM t WHERE col0 = ? AND col1 = ? ...`
fn build_select(builder: SqlBuilder, n: usize) -> sqlwrap::SqlWrapper {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let cond = columns
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(" AND ");
    let binds: Vec<i64> = (0..n as i64).collect();

    builder.wrap([
        table("t"),
        select(columns),
        where_clause(cond, binds),
        order_by(["col0"]),
        limit(10),
    ])
}

fn bench_to_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_query");

    for n in [1, 5, 10, 50, 100] {
        let w = build_select(SqlBuilder::postgres(), n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &w, |b, w| {
            b.iter(|| black_box(w.to_query()));
        });
    }

    group.finish();
}

fn bench_rebind(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/rebind");

    for n in [1, 10, 100] {
        let sql = (0..n).map(|i| format!("c{i} = ?")).collect::<Vec<_>>().join(" AND ");
        group.bench_with_input(BenchmarkId::from_parameter(n), &sql, |b, sql| {
            b.iter(|| black_box(rebind::rebind(Dialect::Postgres, sql)));
        });
    }

    group.finish();
}

fn bench_where_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/where_in");

    for n in [5, 20, 100, 500] {
        let ids: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &ids, |b, ids| {
            b.iter(|| {
                let w = SqlBuilder::postgres().wrap([
                    table("t"),
                    where_in(
                        "status = ? AND id IN (?)",
                        [Value::from("on"), Value::from(ids.clone())],
                    ),
                ]);
                black_box(w.to_query())
            });
        });
    }

    group.finish();
}

fn bench_batch_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/batch_insert");

    for n in [10, 100, 1000] {
        let rows: Vec<Row> = (0..n)
            .map(|i| {
                Row::new()
                    .set("id", i)
                    .set("name", format!("name{i}"))
                    .set("active", i % 2 == 0)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            let w = SqlBuilder::mysql().wrap([table("t")]);
            b.iter(|| black_box(w.to_batch_insert(rows)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_query,
    bench_rebind,
    bench_where_in,
    bench_batch_insert
);
criterion_main!(benches);
