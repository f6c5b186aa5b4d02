// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use studiobooks::models::{
    CategoryBucket, DashboardStats, MonthBucket, ReportStats, Transaction, TxType,
};
use studiobooks::stats::{
    bucket_by_category, bucket_by_month, dashboard_stats, filter_by_substring, report_stats,
};

const CATEGORIES: [&str; 6] = [
    "Pesanan Logo",
    "Percetakan",
    "Internet",
    "Konsumsi",
    "internet",
    "Biaya Iklan",
];

fn tx(id: i64, date: &str, amount: i64, category: &str, ty: TxType) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount,
        category: category.to_string(),
        description: format!("tx {}", id),
        r#type: ty,
    }
}

fn random_ledger(rng: &mut StdRng, len: usize) -> Vec<Transaction> {
    (0..len)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(
                rng.gen_range(2022..=2024),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .unwrap();
            Transaction {
                id: i as i64 + 1,
                date,
                amount: rng.gen_range(0..10_000_000),
                category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
                description: format!("Item {}", i),
                r#type: if rng.gen_bool(0.5) {
                    TxType::Income
                } else {
                    TxType::Expense
                },
            }
        })
        .collect()
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, "2024-05-01", 2_500_000, "Pesanan Logo", TxType::Income),
        tx(2, "2024-05-02", 500_000, "Biaya Iklan", TxType::Expense),
    ]
}

#[test]
fn dashboard_for_sample_ledger() {
    assert_eq!(
        dashboard_stats(&sample()),
        DashboardStats {
            total_balance: 2_000_000,
            total_income: 2_500_000,
            total_expense: 500_000,
        }
    );
}

#[test]
fn dashboard_of_nothing_is_zero() {
    assert_eq!(dashboard_stats(&[]), DashboardStats::default());
    assert_eq!(
        dashboard_stats(&[]),
        DashboardStats {
            total_balance: 0,
            total_income: 0,
            total_expense: 0
        }
    );
}

#[test]
fn balance_is_income_minus_expense_and_order_free() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [1, 2, 5, 20, 60] {
        let mut ledger = random_ledger(&mut rng, len);
        let stats = dashboard_stats(&ledger);
        assert_eq!(stats.total_balance, stats.total_income - stats.total_expense);

        for _ in 0..5 {
            ledger.shuffle(&mut rng);
            assert_eq!(dashboard_stats(&ledger), stats);
        }
    }
}

#[test]
fn report_for_may_and_june_2024() {
    let t = sample();
    assert_eq!(
        report_stats(&t, 4, 2024),
        ReportStats {
            income: 2_500_000,
            expense: 500_000,
            net: 2_000_000,
            count: 2,
        }
    );
    assert_eq!(report_stats(&t, 5, 2024), ReportStats::default());
}

#[test]
fn report_uses_calendar_month_and_year() {
    let t = vec![
        tx(1, "2024-05-31", 100, "A", TxType::Income),
        tx(2, "2024-06-01", 200, "A", TxType::Income),
        tx(3, "2023-05-15", 300, "A", TxType::Expense),
    ];
    let may_24 = report_stats(&t, 4, 2024);
    assert_eq!(may_24.count, 1);
    assert_eq!(may_24.income, 100);
    let may_23 = report_stats(&t, 4, 2023);
    assert_eq!(may_23.count, 1);
    assert_eq!(may_23.net, -300);
    assert_eq!(report_stats(&t, 12, 2024), ReportStats::default());
}

#[test]
fn report_count_and_net_hold_for_random_ledgers() {
    let mut rng = StdRng::seed_from_u64(42);
    let ledger = random_ledger(&mut rng, 200);
    for year in 2022..=2024 {
        for month in 0..12u32 {
            let r = report_stats(&ledger, month, year);
            let expected = ledger
                .iter()
                .filter(|t| t.date.month0() == month && t.date.year() == year)
                .count();
            assert_eq!(r.count, expected);
            assert_eq!(r.net, r.income - r.expense);
        }
    }
}

#[test]
fn category_buckets_merge_same_label() {
    let t = vec![
        tx(1, "2024-05-10", 350_000, "Internet", TxType::Expense),
        tx(2, "2024-06-10", 150_000, "Internet", TxType::Expense),
    ];
    assert_eq!(
        bucket_by_category(&t),
        vec![CategoryBucket {
            label: "Internet".into(),
            value: 500_000,
        }]
    );
}

#[test]
fn category_buckets_skip_income_and_keep_case() {
    let t = vec![
        tx(1, "2024-05-01", 9, "Pesanan Logo", TxType::Income),
        tx(2, "2024-05-02", 5, "internet", TxType::Expense),
        tx(3, "2024-05-03", 7, "Internet", TxType::Expense),
        tx(4, "2024-05-04", 1, "internet", TxType::Expense),
    ];
    let labels: Vec<_> = bucket_by_category(&t)
        .into_iter()
        .map(|b| (b.label, b.value))
        .collect();
    assert_eq!(
        labels,
        vec![("internet".to_string(), 6), ("Internet".to_string(), 7)]
    );
    assert!(bucket_by_category(&t[..1]).is_empty());
}

#[test]
fn category_bucket_sum_matches_total_expense() {
    let mut rng = StdRng::seed_from_u64(3);
    for len in [0, 3, 30, 120] {
        let ledger = random_ledger(&mut rng, len);
        let buckets = bucket_by_category(&ledger);
        let expense_labels: Vec<&str> = ledger
            .iter()
            .filter(|t| t.r#type == TxType::Expense)
            .map(|t| t.category.as_str())
            .collect();
        assert!(buckets.iter().all(|b| expense_labels.contains(&b.label.as_str())));
        let sum: i64 = buckets.iter().map(|b| b.value).sum();
        assert_eq!(sum, dashboard_stats(&ledger).total_expense);
    }
}

#[test]
fn month_buckets_merge_across_years_in_first_seen_order() {
    let t = vec![
        tx(1, "2024-06-03", 10, "A", TxType::Income),
        tx(2, "2024-05-01", 20, "A", TxType::Income),
        tx(3, "2023-06-20", 5, "B", TxType::Expense),
        tx(4, "2024-05-09", 7, "B", TxType::Expense),
    ];
    assert_eq!(
        bucket_by_month(&t),
        vec![
            MonthBucket {
                label: "Jun".into(),
                income: 10,
                expense: 5,
            },
            MonthBucket {
                label: "Mei".into(),
                income: 20,
                expense: 7,
            },
        ]
    );
    assert!(bucket_by_month(&[]).is_empty());
}

#[test]
fn month_bucket_totals_match_dashboard() {
    let mut rng = StdRng::seed_from_u64(11);
    let ledger = random_ledger(&mut rng, 150);
    let buckets = bucket_by_month(&ledger);
    assert!(buckets.len() <= 12);
    let stats = dashboard_stats(&ledger);
    assert_eq!(buckets.iter().map(|b| b.income).sum::<i64>(), stats.total_income);
    assert_eq!(buckets.iter().map(|b| b.expense).sum::<i64>(), stats.total_expense);
}

#[test]
fn empty_search_returns_everything_in_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let ledger = random_ledger(&mut rng, 25);
    assert_eq!(filter_by_substring(&ledger, ""), ledger);
}

#[test]
fn search_is_case_insensitive_on_description_or_category() {
    let mut t = sample();
    t[0].description = "Logo Project - Coffee Shop".into();
    t[1].description = "Instagram Ads Promo Lebaran".into();

    let hits = filter_by_substring(&t, "COFFEE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    let hits = filter_by_substring(&t, "biaya iklan");
    assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

    let hits = filter_by_substring(&t, "o");
    assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

    assert!(filter_by_substring(&t, "percetakan").is_empty());
}

#[test]
fn huge_amounts_saturate_instead_of_panicking() {
    let ledger = vec![
        tx(1, "2024-05-01", i64::MAX, "Pesanan Logo", TxType::Income),
        tx(2, "2024-05-02", i64::MAX, "Pesanan Logo", TxType::Income),
        tx(3, "2024-05-03", i64::MAX, "Internet", TxType::Expense),
        tx(4, "2024-05-04", i64::MAX, "Internet", TxType::Expense),
    ];

    let d = dashboard_stats(&ledger);
    assert_eq!(d.total_income, i64::MAX);
    assert_eq!(d.total_expense, i64::MAX);
    assert_eq!(d.total_balance, 0);

    let r = report_stats(&ledger, 4, 2024);
    assert_eq!(r.income, i64::MAX);
    assert_eq!(r.net, 0);
    assert_eq!(r.count, 4);

    let months = bucket_by_month(&ledger);
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].expense, i64::MAX);

    let cats = bucket_by_category(&ledger);
    assert_eq!(
        cats,
        vec![CategoryBucket {
            label: "Internet".into(),
            value: i64::MAX
        }]
    );
}
