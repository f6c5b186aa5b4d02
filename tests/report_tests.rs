// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use studiobooks::{
    cli,
    commands::{dashboard, reports},
    db,
};

fn report_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["studiobooks", "report", "monthly"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("report", report_m)) = matches.subcommand() else {
        panic!("no report subcommand");
    };
    let Some(("monthly", monthly_m)) = report_m.subcommand() else {
        panic!("no monthly subcommand");
    };
    monthly_m.clone()
}

#[test]
fn monthly_report_for_explicit_scope() {
    let conn = db::open_in_memory().unwrap();
    db::seed_demo(&conn).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    let m = report_matches(&["--month", "5", "--year", "2024"]);
    let r = reports::monthly_report(&conn, &m, today).unwrap();
    assert_eq!(r.month, 4);
    assert_eq!(r.label, "Mei 2024");
    assert_eq!(r.stats.income, 7_000_000);
    assert_eq!(r.stats.expense, 5_850_000);
    assert_eq!(r.stats.net, 1_150_000);
    assert_eq!(r.stats.count, 7);

    let m = report_matches(&["--month", "6", "--year", "2024"]);
    let r = reports::monthly_report(&conn, &m, today).unwrap();
    assert_eq!(r.stats.count, 0);
    assert_eq!(r.stats.net, 0);
}

#[test]
fn monthly_report_defaults_to_today() {
    let conn = db::open_in_memory().unwrap();
    db::seed_demo(&conn).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
    let r = reports::monthly_report(&conn, &report_matches(&[]), today).unwrap();
    assert_eq!((r.month, r.year), (4, 2024));
    assert_eq!(r.stats.count, 7);
}

#[test]
fn monthly_report_rejects_month_out_of_range() {
    let conn = db::open_in_memory().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
    let m = report_matches(&["--month", "13"]);
    assert!(reports::monthly_report(&conn, &m, today).is_err());
}

#[test]
fn dashboard_bundles_totals_and_series() {
    let conn = db::open_in_memory().unwrap();
    db::seed_demo(&conn).unwrap();
    let dash = dashboard::build(&conn).unwrap();
    assert_eq!(dash.stats.total_balance, 1_150_000);
    assert_eq!(dash.by_month.len(), 1);
    assert_eq!(dash.by_month[0].label, "Mei");
    // newest first: Konsumsi was entered after Gaji Karyawan
    let labels: Vec<_> = dash.by_category.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Konsumsi", "Gaji Karyawan", "Internet", "Biaya Iklan"]
    );

    let json = serde_json::to_value(&dash).unwrap();
    assert_eq!(json["stats"]["total_income"], 7_000_000);
}
