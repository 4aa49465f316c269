//! Integration tests for the public query building API.

use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};
use clickq::query::*;
use clickq::{ClickqError, Value};

fn daily_scores() -> SelectBuilder {
    let day = as_(func("toDate", [column("ts")]), alias("day"));
    let avg_score = as_(avg(column("score")), alias("avg_score"));
    select([day.clone(), avg_score.clone()])
        .from_table("scores")
        .where_clause(and([
            in_(column("region"), Tuple::new(literals(["eu", "us"], true))),
            is_not_null(column("score")),
        ]))
        .group_by([day.clone()])
        .order_by([asc(day), desc(avg_score)])
}

#[test]
fn test_compact_query() {
    let query = daily_scores().limit(100).format(Format::JsonEachRow).build().unwrap();
    assert_eq!(
        query.as_str(),
        "SELECT toDate(ts) AS day, avg(score) AS avg_score FROM scores \
         WHERE ((region IN ('eu', 'us')) AND isNotNull(score)) \
         GROUP BY day ORDER BY day ASC, avg_score DESC LIMIT 100 FORMAT JSONEachRow"
    );
}

#[test]
fn test_sealed_query_is_shareable() {
    let query = Arc::new(daily_scores().build().unwrap());
    let expected = query.to_string();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let query = Arc::clone(&query);
            thread::spawn(move || query.as_str().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_sealed_query_as_from_source_follows_outer_style() {
    let inner = daily_scores().build().unwrap();
    let outer = select([max_of("avg_score")])
        .from(inner)
        .pretty_print(true)
        .build()
        .unwrap();
    assert_eq!(
        outer.as_str(),
        "SELECT\n\tmax(avg_score)\nFROM\n(\n\tSELECT\n\t\ttoDate(ts) AS day,\n\t\tavg(score) AS avg_score\n\tFROM\n\t\tscores\n\tWHERE\n\t\t((region IN ('eu', 'us')) AND isNotNull(score))\n\tGROUP BY\n\t\tday\n\tORDER BY\n\t\tday ASC,\n\t\tavg_score DESC\n)"
    );
}

fn max_of(name: &str) -> Expr {
    func("max", [alias(name)])
}

#[test]
fn test_time_series_request() {
    let q = SimpleQuery {
        time_series: Some(TimeSeries {
            time_column: "ts".to_string(),
            granularity_function: "toStartOfHour".to_string(),
            start_time: Utc.timestamp_opt(1_700_000_000, 0).single(),
            end_time: None,
        }),
        select: vec![count_if(equal(column("status"), 500))],
        from: "requests".to_string(),
        ..Default::default()
    };
    assert_eq!(
        q.build_string().unwrap(),
        "SELECT countIf((status = 500)), toStartOfHour(ts) FROM requests \
         WHERE (ts >= 1700000000) GROUP BY toStartOfHour(ts) ORDER BY toStartOfHour(ts)"
    );
}

#[test]
fn test_style_from_yaml_config() {
    let yaml = "indent: \"  \"\nclause_name_suffix: \"\\n\"\nargument_prefix: \"  \"\nargument_suffix: \"\\n\"\nargument_delimiter: \",\"\nclause_name_prefix: \"\"\n";
    let style: RenderStyle = serde_yaml::from_str(yaml).unwrap();
    let sql = select([column("a"), column("b")])
        .from_table("t")
        .style(style)
        .build_string()
        .unwrap();
    assert_eq!(sql, "SELECT\n  a,\n  b\nFROM\n  t");
}

#[test]
fn test_validation_errors_are_recoverable() {
    let result = SelectBuilder::new().sample(0.5).build();
    assert!(matches!(result, Err(ClickqError::Validation(_))));
}

#[test]
fn test_value_reads_result_cells() {
    let row: Vec<Value> = serde_json::from_str(r#"["2025-01-01", 61.5, 3]"#).unwrap();
    assert_eq!(row[0].as_string().unwrap(), "2025-01-01");
    assert_eq!(row[1].as_f64().unwrap(), 61.5);
    assert_eq!(row[2].as_i64().unwrap(), 3);
}
