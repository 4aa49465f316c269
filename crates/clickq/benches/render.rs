//! Criterion benchmark suite for clickq rendering
//!
//! Benchmarks:
//! - Flat aggregation query, compact style
//! - The same query nested three levels deep, pretty style
//! - Time-series SimpleQuery assembly
//!
//! Usage:
//!   cargo bench -p clickq

use chrono::{TimeZone, Utc};
use clickq::query::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn aggregation() -> SelectBuilder {
    let avg_score = as_(avg(column("score")), alias("avg_score"));
    select([column("date"), avg_score.clone()])
        .from_table("tbl")
        .sample(0.1)
        .where_clause(and([
            greater_or_equal_than(column("date"), quoted("2025-01-01")),
            less_than(column("date"), quoted("2025-02-01")),
            in_(column("region"), Tuple::new(literals(["eu", "us", "apac"], true))),
        ]))
        .group_by([column("date")])
        .having(greater_than(avg_score.clone(), 60))
        .order_by([asc(column("date")), desc(avg_score)])
        .limit(100)
}

fn bench_compact(c: &mut Criterion) {
    let builder = aggregation();
    c.bench_function("render_compact", |b| {
        b.iter(|| black_box(builder.build_string().unwrap()))
    });
}

fn bench_nested_pretty(c: &mut Criterion) {
    let builder = select([count()])
        .from(select([count()]).from(aggregation()))
        .pretty_print(true);
    c.bench_function("render_nested_pretty", |b| {
        b.iter(|| black_box(builder.build().unwrap()))
    });
}

fn bench_simple_query(c: &mut Criterion) {
    let q = SimpleQuery {
        time_series: Some(TimeSeries {
            time_column: "ts".to_string(),
            granularity_function: "toStartOfDay".to_string(),
            start_time: Utc.timestamp_opt(1704038400, 0).single(),
            end_time: Utc.timestamp_opt(1706716800, 0).single(),
        }),
        select: vec![count()],
        from: "tbl".to_string(),
        group_by: vec![column("b")],
        ..Default::default()
    };
    c.bench_function("simple_query_time_series", |b| {
        b.iter(|| black_box(q.build_string().unwrap()))
    });
}

criterion_group!(benches, bench_compact, bench_nested_pretty, bench_simple_query);
criterion_main!(benches);
