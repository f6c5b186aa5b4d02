// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived statistics over a snapshot of transactions.
//!
//! Everything here is a pure function of its arguments: no I/O, no shared
//! state, and no error paths. Callers are expected to hand in transactions
//! that already satisfy the entry invariants (non-negative amounts, at most
//! [`MAX_AMOUNT`](crate::utils::MAX_AMOUNT)). Sums saturate at the `i64`
//! bounds instead of overflowing, which no ledger of capped amounts reaches.

use crate::models::{CategoryBucket, DashboardStats, MonthBucket, ReportStats, Transaction, TxType};
use crate::utils::month_label_short;
use chrono::Datelike;

/// Lifetime totals. `total_balance` is always `total_income - total_expense`.
pub fn dashboard_stats(transactions: &[Transaction]) -> DashboardStats {
    transactions
        .iter()
        .fold(DashboardStats::default(), |mut acc, t| {
            match t.r#type {
                TxType::Income => acc.total_income = acc.total_income.saturating_add(t.amount),
                TxType::Expense => acc.total_expense = acc.total_expense.saturating_add(t.amount),
            }
            acc.total_balance = acc.total_income.saturating_sub(acc.total_expense);
            acc
        })
}

/// Totals for one calendar month. `month` is zero-based (0 = January).
///
/// A month outside 0..=11 matches nothing and yields an all-zero report.
pub fn report_stats(transactions: &[Transaction], month: u32, year: i32) -> ReportStats {
    let mut report = ReportStats::default();
    for t in transactions
        .iter()
        .filter(|t| t.date.month0() == month && t.date.year() == year)
    {
        match t.r#type {
            TxType::Income => report.income = report.income.saturating_add(t.amount),
            TxType::Expense => report.expense = report.expense.saturating_add(t.amount),
        }
        report.count += 1;
    }
    report.net = report.income.saturating_sub(report.expense);
    report
}

/// Income/expense series keyed by short month label, in first-seen order.
///
/// The key is the label only, so May 2023 and May 2024 land in the same
/// "Mei" bucket.
pub fn bucket_by_month(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    for t in transactions {
        let label = month_label_short(t.date.month0());
        let idx = match buckets.iter().position(|b| b.label == label) {
            Some(idx) => idx,
            None => {
                buckets.push(MonthBucket {
                    label: label.to_string(),
                    income: 0,
                    expense: 0,
                });
                buckets.len() - 1
            }
        };
        let b = &mut buckets[idx];
        match t.r#type {
            TxType::Income => b.income = b.income.saturating_add(t.amount),
            TxType::Expense => b.expense = b.expense.saturating_add(t.amount),
        }
    }
    buckets
}

/// Expense totals per category label (exact, case-sensitive), first-seen order.
pub fn bucket_by_category(transactions: &[Transaction]) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = Vec::new();
    for t in transactions.iter().filter(|t| t.r#type == TxType::Expense) {
        match buckets.iter_mut().find(|b| b.label == t.category) {
            Some(b) => b.value = b.value.saturating_add(t.amount),
            None => buckets.push(CategoryBucket {
                label: t.category.clone(),
                value: t.amount,
            }),
        }
    }
    buckets
}

/// Case-insensitive substring search over description and category.
pub fn filter_by_substring(transactions: &[Transaction], term: &str) -> Vec<Transaction> {
    let needle = term.to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            t.description.to_lowercase().contains(&needle)
                || t.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
