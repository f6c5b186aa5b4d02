// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxType;
use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

const UA: &str = concat!("studiobooks/", env!("CARGO_PKG_VERSION"));

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const MONTHS_LONG: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parse a one-based month (1-12) into the zero-based value used by reports.
pub fn parse_month(s: &str) -> Result<u32> {
    let m: u32 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid month '{}', expected 1-12", s))?;
    if !(1..=12).contains(&m) {
        bail!("Invalid month '{}', expected 1-12", s);
    }
    Ok(m - 1)
}

/// Largest amount accepted for a single transaction: Rp 1.000.000.000.000.000.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Whole, non-negative Rupiah up to [`MAX_AMOUNT`]. Accepts `Rp` prefixes and
/// `.` thousands groups.
pub fn parse_amount(s: &str) -> Result<i64> {
    let raw = s.trim();
    let raw = raw.strip_prefix("Rp").unwrap_or(raw).trim();
    let digits = if raw.contains('.') {
        let mut groups = raw.split('.');
        let head = groups.next().unwrap_or_default();
        let grouped = !head.is_empty() && head.len() <= 3 && groups.all(|g| g.len() == 3);
        if !grouped {
            bail!("Invalid amount '{}', expected whole Rupiah", s);
        }
        raw.replace('.', "")
    } else {
        raw.to_string()
    };
    let amount: i64 = digits
        .parse()
        .with_context(|| format!("Invalid amount '{}', expected whole Rupiah", s))?;
    if amount < 0 {
        bail!("Amount must not be negative: '{}'", s);
    }
    if amount > MAX_AMOUNT {
        bail!("Amount too large: '{}', at most {}", s, fmt_rupiah(MAX_AMOUNT));
    }
    Ok(amount)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_tx_type(s: &str) -> Result<TxType> {
    s.parse::<TxType>()
}

pub fn month_label_short(month0: u32) -> &'static str {
    MONTHS_SHORT[month0 as usize % 12]
}

pub fn month_name(month0: u32) -> &'static str {
    MONTHS_LONG[month0 as usize % 12]
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// `Rp 2.500.000`, negatives as `Rp -500.000`.
pub fn fmt_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };
    format!("Rp {}{}", sign, group_thousands(&digits))
}

/// Decimal amounts are rounded to whole Rupiah for display.
pub fn fmt_rupiah_decimal(amount: &Decimal) -> String {
    let rounded = amount.round_dp(0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("Rp {}{}", sign, group_thousands(&digits))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()
        .with_context(|| format!("Read setting '{}'", key))?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn agency_name(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "agency_name")?.unwrap_or_else(|| "Studio Desain".to_string()))
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn required<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    required_as::<String>(m, name)
}

/// Like [`required`] for arguments with a typed value parser.
pub fn required_as<'a, T>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    m.get_one::<T>(name)
        .ok_or_else(|| anyhow!("Missing required argument --{}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_as_reports_missing_argument() {
        let cmd = clap::Command::new("t").arg(
            clap::Arg::new("id")
                .long("id")
                .value_parser(clap::value_parser!(i64)),
        );
        let m = cmd.clone().get_matches_from(["t"]);
        let err = required_as::<i64>(&m, "id").unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument --id");
        let m = cmd.get_matches_from(["t", "--id", "7"]);
        assert_eq!(*required_as::<i64>(&m, "id").unwrap(), 7);
    }

    #[test]
    fn rupiah_grouping() {
        assert_eq!(fmt_rupiah(0), "Rp 0");
        assert_eq!(fmt_rupiah(500), "Rp 500");
        assert_eq!(fmt_rupiah(2_500_000), "Rp 2.500.000");
        assert_eq!(fmt_rupiah(-500_000), "Rp -500.000");
        assert_eq!(fmt_rupiah_decimal(&Decimal::new(300000050, 2)), "Rp 3.000.000");
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("2500000").unwrap(), 2_500_000);
        assert_eq!(parse_amount(" Rp 2.500.000 ").unwrap(), 2_500_000);
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("12.5").is_err());
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_amount("1.000.000.000.000.000").unwrap(), MAX_AMOUNT);
        assert!(parse_amount("1000000000000001").is_err());
        assert!(parse_amount("9223372036854775807").is_err());
    }

    #[test]
    fn month_is_zero_based() {
        assert_eq!(parse_month("5").unwrap(), 4);
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
        assert_eq!(month_label_short(4), "Mei");
        assert_eq!(month_name(11), "Desember");
    }
}
