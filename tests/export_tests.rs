// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::config::Settings;
use finboard::session::Session;
use tempfile::tempdir;

fn with_purchases() -> Session {
    let mut s = Session::new(&Settings::default()).unwrap();
    for line in [
        "credit add --description Phone --total 300 --installments 3 --person Ana --date 2024-01-31",
        "credit add --description Hotel --total 100 --installments 1 --person Rui --date 2024-02-15",
        "credit pay 1",
    ] {
        s.execute(line).unwrap();
    }
    s
}

#[test]
fn export_schedule_as_json() {
    let mut s = with_purchases();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("schedule.json");
    let out_str = out_path.to_string_lossy().to_string();

    s.execute(&format!("export schedule --format json --out \"{}\"", out_str))
        .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = parsed.as_array().unwrap();
    let due: Vec<&str> = rows
        .iter()
        .map(|r| r["due_date"].as_str().unwrap())
        .collect();
    assert_eq!(due, vec!["2024-01-31", "2024-02-15", "2024-02-29", "2024-03-31"]);
    assert_eq!(rows[0]["is_paid"], true);
    assert_eq!(rows[1]["person_name"], "Rui");
    assert_eq!(rows[2]["installment_number"], 2);
}

#[test]
fn export_schedule_as_csv() {
    let mut s = with_purchases();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("schedule.csv");
    let out_str = out_path.to_string_lossy().to_string();

    s.execute(&format!("export schedule --format CSV --out \"{}\"", out_str))
        .unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "purchase_id",
            "description",
            "person_name",
            "installment_number",
            "value",
            "is_paid",
            "due_date"
        ]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[1][1], "Hotel");
    assert_eq!(&rows[3][6], "2024-03-31");
}

#[test]
fn export_summary_as_json() {
    let mut s = Session::new(&Settings::default()).unwrap();
    s.execute("income set 5000").unwrap();
    s.execute("expense add --name Rent --amount 1000 --category Housing")
        .unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("summary.json");
    let out_str = out_path.to_string_lossy().to_string();

    s.execute(&format!("export summary --format json --out \"{}\"", out_str))
        .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["health"], "healthy");
    assert_eq!(parsed[0]["available_balance"], "4000");
}

#[test]
fn export_rejects_unknown_format() {
    let mut s = with_purchases();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("schedule.xml");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(
        s.execute(&format!("export schedule --format xml --out \"{}\"", out_str))
            .is_err()
    );
    assert!(!out_path.exists());
}
