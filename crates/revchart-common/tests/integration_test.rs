//! Integration tests for revchart-common crate.

use revchart_common::{
    chart_file_name, format_currency, format_month_label, parse_calendar_date, ChartError,
    ChartRequest, DailyRevenueRecord, DAILY_REVENUE_SUFFIX,
};

#[test]
fn test_request_records_round_trip_through_json() {
    let json = r#"[
        {"date": "2024-10-01", "revenue": 100.0},
        {"date": "2024-10-03", "revenue": 50.0},
        {"date": "2024-10-02", "revenue": 75.0}
    ]"#;
    let records: Vec<DailyRevenueRecord> = serde_json::from_str(json).unwrap();
    let request = ChartRequest::new(records, "./out", "DATA1");

    assert_eq!(request.records.len(), 3);
    assert_eq!(request.records[1].date, "2024-10-03");
    assert_eq!(request.dataset_label, "DATA1");
}

#[test]
fn test_every_record_parses_with_its_index() {
    let records = vec![
        DailyRevenueRecord::new("2024-10-01", 1.0),
        DailyRevenueRecord::new("2024-10-02", 2.0),
        DailyRevenueRecord::new("2024/10/03", 3.0),
    ];

    let results: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(i, record)| record.parse(i))
        .collect();

    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(
        results[2],
        Err(ChartError::MalformedDate { index: 2, .. })
    ));
}

#[test]
fn test_axis_label_formatting() {
    let date = parse_calendar_date("2024-12-31").unwrap();
    assert_eq!(format_month_label(&date), "Dec 2024");
    assert_eq!(format_currency(12_500.0), "$12,500");
}

#[test]
fn test_file_name_lower_cases_label() {
    assert_eq!(
        chart_file_name("Data2", DAILY_REVENUE_SUFFIX),
        "data2_daily_revenue.png"
    );
}
