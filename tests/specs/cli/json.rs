//! JSON output specs

use crate::prelude::*;

#[test]
fn json_output_has_text_and_seconds() {
    let run = cli()
        .args(&["-o", "json", "6000000", "-604800000000000"])
        .passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "nanos": 6_000_000, "text": "6ms", "seconds": 0.006 },
            { "nanos": -604_800_000_000_000i64, "text": "-1w", "seconds": -604800 },
        ])
    );
}

#[test]
fn json_whole_seconds_are_integers() {
    cli()
        .args(&["-o", "json", "5000000000"])
        .passes()
        .stdout_has("\"seconds\": 5\n");
}

#[test]
fn json_text_follows_style() {
    let run = cli()
        .args(&["-o", "json", "-s", "e", "8"])
        .passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value[0]["text"], "8e-09");
}
