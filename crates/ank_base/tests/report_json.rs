//! Serialized shape of report values, as consumed by a presentation layer.

use ank_base::{DateParsing, ReportRequest, abracadabra, build_report, shadows_peaks_challenges};
use chrono::NaiveDate;
use serde_json::Value;

fn sample_report() -> Value {
    let req = ReportRequest {
        birth_date: "15.03.1990",
        name: Some("Alexander"),
        surname: Some("Pushkin"),
        target: NaiveDate::from_ymd_opt(2025, 10, 18),
        parsing: DateParsing::Lenient,
    };
    serde_json::to_value(build_report(&req).unwrap()).unwrap()
}

#[test]
fn report_top_level_keys() {
    let v = sample_report();
    for key in [
        "birth_date",
        "personal",
        "fractal",
        "tasks",
        "life_cycle",
        "individual",
        "square",
        "abracadabra",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["birth_date"]["day"], 15);
    assert_eq!(v["fractal"]["fractal"], "6311");
}

#[test]
fn open_ended_periods_serialize_as_null() {
    let v = sample_report();
    assert_eq!(v["tasks"]["period3"]["start"], 0);
    assert!(v["tasks"]["period3"]["end"].is_null());
    assert_eq!(v["tasks"]["period1"]["end"], 44);
}

#[test]
fn traced_values_carry_trace_text() {
    let v = sample_report();
    assert_eq!(v["individual"]["chig"]["value"], 9);
    assert_eq!(v["individual"]["chig"]["trace"], "15 + 3 + 2025 = 2043 → 9");
}

#[test]
fn life_cycle_json_lengths() {
    let t = shadows_peaks_challenges("15.03.1990").unwrap();
    let v = serde_json::to_value(&t).unwrap();
    assert_eq!(v["years"].as_array().unwrap().len(), 100);
    assert_eq!(v["periods"].as_array().unwrap().len(), t.periods.len());
    assert_eq!(v["sequence"].as_str().unwrap().split(' ').count(), 100);
}

#[test]
fn triangle_rows_serialize() {
    let t = abracadabra("Alexander", "Pushkin").unwrap();
    let v = serde_json::to_value(&t).unwrap();
    assert_eq!(v["letters"], "ALEXANDER");
    assert_eq!(v["rows"][0].as_array().unwrap().len(), 9);
    assert_eq!(v["rows"][8].as_array().unwrap().len(), 1);
}
