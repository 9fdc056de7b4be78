use clap::Parser;
use prefix_search::{run, Args};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tempfile::tempdir;

const AIRPORTS: &str = "\
1,\"Los Angeles International Airport\",\"LAX\"
2,\"LaGuardia Airport\",\"LGA\"
3,\"John F Kennedy International Airport\",\"JFK\"

4,\"Short row\"
name,\"header\",\"HDR\"
";

fn args_for(dir: &Path, queries: &str, column: u32) -> Args {
    let data = dir.join("airports.csv");
    let input = dir.join("input.txt");
    fs::write(&data, AIRPORTS).unwrap();
    fs::write(&input, queries).unwrap();
    Args { data, indexed_column_id: column, input_file: input, output_file: dir.join("output.json") }
}

#[test]
fn writes_results_document() {
    let dir = tempdir().unwrap();
    let args = args_for(dir.path(), "L\nla\n\nJfK \nzz\n", 3);
    let report = run(&args, Instant::now()).unwrap();
    assert_eq!(report.result.len(), 4);

    let json: Value = serde_json::from_str(&fs::read_to_string(&args.output_file).unwrap()).unwrap();
    assert!(json["initTimeMs"].is_u64());
    let results = json["result"].as_array().unwrap();
    let searches: Vec<&str> = results.iter().map(|r| r["search"].as_str().unwrap()).collect();
    assert_eq!(searches, ["l", "la", "jfk", "zz"]);
    assert_eq!(results[0]["result"], serde_json::json!([1, 2]));
    assert_eq!(results[1]["result"], serde_json::json!([1]));
    assert_eq!(results[2]["result"], serde_json::json!([3]));
    assert_eq!(results[3]["result"], serde_json::json!([]));
    assert!(results.iter().all(|r| r["time"].as_f64().unwrap() >= 0.0));
}

#[test]
fn indexes_the_selected_column() {
    let dir = tempdir().unwrap();
    let args = args_for(dir.path(), "la\n", 2);
    let report = run(&args, Instant::now()).unwrap();
    // column 2 holds airport names: "LaGuardia" matches, "Los Angeles" does not
    assert_eq!(report.result[0].result, vec![2]);
}

#[test]
fn first_column_indexes_row_numbers() {
    let dir = tempdir().unwrap();
    let args = args_for(dir.path(), "1\n3\n", 1);
    let report = run(&args, Instant::now()).unwrap();
    assert_eq!(report.result[0].result, vec![1]);
    assert_eq!(report.result[1].result, vec![3]);
}

#[test]
fn missing_query_file_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut args = args_for(dir.path(), "la\n", 3);
    args.input_file = dir.path().join("missing.txt");
    let err = run(&args, Instant::now()).unwrap_err();
    assert!(err.to_string().contains("query file not found"));
    assert!(!args.output_file.exists());
}

#[test]
fn blank_query_file_is_rejected() {
    let dir = tempdir().unwrap();
    let args = args_for(dir.path(), "\n   \n", 3);
    let err = run(&args, Instant::now()).unwrap_err();
    assert!(format!("{err:#}").contains("query set is empty"));
    assert!(!args.output_file.exists());
}

#[test]
fn data_without_usable_rows_is_rejected() {
    let dir = tempdir().unwrap();
    let args = args_for(dir.path(), "la\n", 3);
    fs::write(&args.data, "\nfoo,bar,baz\n").unwrap();
    let err = run(&args, Instant::now()).unwrap_err();
    assert!(format!("{err:#}").contains("no indexable records"));
    assert!(!args.output_file.exists());
}

#[test]
fn parses_command_line() {
    let args = Args::try_parse_from([
        "prefix-search",
        "--data",
        "airports.csv",
        "--indexed-column-id",
        "2",
        "--input-file",
        "input.txt",
        "--output-file",
        "output.json",
    ])
    .unwrap();
    assert_eq!(args.indexed_column_id, 2);
    assert_eq!(args.output_file, Path::new("output.json"));
}

#[test]
fn column_zero_is_rejected_by_the_parser() {
    let res = Args::try_parse_from([
        "prefix-search",
        "--data",
        "a.csv",
        "--indexed-column-id",
        "0",
        "--input-file",
        "i.txt",
        "--output-file",
        "o.json",
    ]);
    assert!(res.is_err());
}
