use chrono::NaiveDate;
use job_normalizer::{convert_csv_to_json, ConvertConfig};
use serde_json::{json, Value};

const EXPORT: &str = "\
Job Title,Job URL,Job_Description_HTML,City,Date Posted,Salary,Tech Stack
Rust Engineer,https://jobs.example.com/1,\"<p>Great team &amp; culture</p>\",Zürich,2 days ago,\"$120,000 - $150,000 per year\",\"Rust, Tokio, rust\"
Rust Engineer (repost),HTTPS://JOBS.EXAMPLE.COM/1 ,<p>Same job</p>,Zürich,today,,
Data Analyst,,\"<div>Rate: £400 per day. Experience with SQL, dbt and Looker.</div>\",See job description,2024-02-29,Competitive,
";

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

async fn run(dir: &tempfile::TempDir, pretty: bool) -> (job_normalizer::ConversionSummary, Value) {
    let input = dir.path().join("jobs.csv");
    let output = dir.path().join("out/jobs.json");
    std::fs::write(&input, EXPORT).unwrap();

    let config = ConvertConfig::new(&input)
        .with_output_path(&output)
        .with_reference_date(reference())
        .with_pretty(pretty);
    let summary = convert_csv_to_json(&config).await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    (summary, serde_json::from_str(&written).unwrap())
}

#[tokio::test]
async fn converts_export_and_drops_duplicate_urls() {
    let dir = tempfile::tempdir().unwrap();
    let (summary, jobs) = run(&dir, true).await;

    assert_eq!(summary.rows_read, 3);
    assert_eq!(summary.records_written, 2);
    assert_eq!(summary.duplicates_skipped, 1);

    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 2);

    let first = &jobs[0];
    assert_eq!(first["job_title"], "Rust Engineer");
    assert_eq!(first["job_url"], "https://jobs.example.com/1");
    assert_eq!(first["posted_date"], "2024-03-08");
    assert_eq!(first["job_description"], "Great team culture");
    assert_eq!(first["location"], "Zürich");
    assert_eq!(
        first["salary"],
        json!({
            "display": "$120,000 - $150,000 per year",
            "min_amount": 120000,
            "max_amount": 150000,
            "currency_code": "USD",
            "currency_symbol": "$",
            "period": "Year",
        })
    );
    assert_eq!(first["tech_stack"], json!(["Rust", "Tokio"]));

    let second = &jobs[1];
    assert_eq!(second["job_title"], "Data Analyst");
    assert_eq!(second["job_url"], Value::Null);
    assert_eq!(second["posted_date"], "2024-02-29");
    assert_eq!(second["location"], Value::Null);
    assert_eq!(second["salary"]["min_amount"], 400);
    assert_eq!(second["salary"]["currency_code"], "GBP");
    assert_eq!(second["salary"]["period"], "Day");
    assert_eq!(second["tech_stack"], json!(["SQL", "dbt", "Looker"]));
}

#[tokio::test]
async fn keeps_original_rows_verbatim_and_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let (_, jobs) = run(&dir, false).await;

    assert_eq!(jobs[1]["original_row"]["City"], "See job description");
    assert_eq!(jobs[1]["original_row"]["Salary"], "Competitive");

    // Column order survives serialization
    let written = std::fs::read_to_string(dir.path().join("out/jobs.json")).unwrap();
    let expected = concat!(
        r#""original_row":{"Job Title":"Rust Engineer","Job URL":"https://jobs.example.com/1","#,
        r#""Job_Description_HTML":"<p>Great team &amp; culture</p>","City":"Zürich","#,
        r#""Date Posted":"2 days ago","Salary":"$120,000 - $150,000 per year","#,
        r#""Tech Stack":"Rust, Tokio, rust"}"#,
    );
    assert!(written.contains(expected));
}

#[tokio::test]
async fn writes_non_ascii_unescaped() {
    let dir = tempfile::tempdir().unwrap();
    run(&dir, true).await;

    let written = std::fs::read_to_string(dir.path().join("out/jobs.json")).unwrap();
    assert!(written.contains("Zürich"));
    assert!(written.starts_with("[\n  {"));
}

#[tokio::test]
async fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConvertConfig::new(dir.path().join("nope.csv"))
        .with_output_path(dir.path().join("jobs.json"));
    assert!(convert_csv_to_json(&config).await.is_err());
    assert!(!dir.path().join("jobs.json").exists());
}
