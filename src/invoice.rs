// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Invoice, InvoiceItem};
use crate::utils::{fmt_rupiah_decimal, get_setting, set_setting};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::fmt::{self, Write as _};

const WIDTH: usize = 64;

impl InvoiceItem {
    pub fn new(id: usize, description: &str, price: Decimal, quantity: Decimal) -> Self {
        Self {
            id,
            description: description.to_string(),
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * self.quantity
    }
}

impl Invoice {
    pub fn total(&self) -> Decimal {
        self.items.iter().map(InvoiceItem::line_total).sum()
    }
}

/// Parses `description=price` or `description=pricexqty`, e.g. `Logo=1500000x2`.
///
/// A missing, unparsable or non-positive quantity falls back to 1.
pub fn parse_item(id: usize, raw: &str) -> Result<InvoiceItem> {
    let (desc, rest) = raw
        .rsplit_once('=')
        .with_context(|| format!("Invalid item '{}', expected description=price[xqty]", raw))?;
    let description = desc.trim();
    if description.is_empty() {
        bail!("Invalid item '{}': description is empty", raw);
    }
    let (price_raw, qty_raw) = match rest.split_once(['x', 'X']) {
        Some((p, q)) => (p.trim(), Some(q.trim())),
        None => (rest.trim(), None),
    };
    if price_raw.is_empty() {
        bail!("Invalid item '{}': price is empty", raw);
    }
    let price = price_raw
        .parse::<Decimal>()
        .with_context(|| format!("Invalid price '{}' for {}", price_raw, description))?;
    let quantity = qty_raw
        .and_then(|q| q.parse::<Decimal>().ok())
        .filter(|q| *q > Decimal::ZERO)
        .unwrap_or(Decimal::ONE);
    Ok(InvoiceItem::new(id, description, price, quantity))
}

/// Hands out `INV-0001`, `INV-0002`, ... from the settings table.
pub fn next_invoice_number(conn: &Connection) -> Result<String> {
    let current: u64 = match get_setting(conn, "invoice_seq")? {
        Some(s) => s
            .parse()
            .with_context(|| format!("Invalid invoice counter '{}'", s))?,
        None => 0,
    };
    let next = current + 1;
    set_setting(conn, "invoice_seq", &next.to_string())?;
    Ok(format!("INV-{:04}", next))
}

fn rule(out: &mut String, ch: char) -> fmt::Result {
    let line: String = std::iter::repeat(ch).take(WIDTH).collect();
    writeln!(out, "{}", line)
}

fn fmt_qty(q: &Decimal) -> String {
    q.normalize().to_string()
}

/// Printable plain-text invoice, signed by `agency`.
pub fn render(invoice: &Invoice, agency: &str) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_invoice(&mut out, invoice, agency);
    out
}

fn write_invoice(out: &mut String, invoice: &Invoice, agency: &str) -> fmt::Result {
    rule(out, '=')?;
    writeln!(out, "{:<40}{:>24}", agency.to_uppercase(), "INVOICE")?;
    writeln!(out, "{:>64}", format!("#{}", invoice.number))?;
    rule(out, '=')?;
    writeln!(out, "Ditagihkan kepada:")?;
    writeln!(out, "  {}", invoice.client_name)?;
    for line in invoice.client_address.lines().filter(|l| !l.trim().is_empty()) {
        writeln!(out, "  {}", line.trim())?;
    }
    writeln!(out)?;
    writeln!(out, "Tanggal      : {}", invoice.date.format("%d/%m/%Y"))?;
    if let Some(due) = invoice.due_date {
        writeln!(out, "Jatuh tempo  : {}", due.format("%d/%m/%Y"))?;
    }
    rule(out, '-')?;
    writeln!(
        out,
        "{:<26}{:>6}{:>16}{:>16}",
        "Deskripsi", "Qty", "Harga", "Total"
    )?;
    rule(out, '-')?;
    if invoice.items.is_empty() {
        writeln!(out, "  (belum ada item)")?;
    }
    for item in &invoice.items {
        let mut desc = item.description.clone();
        if desc.chars().count() > 25 {
            desc = desc.chars().take(24).collect::<String>() + "…";
        }
        writeln!(
            out,
            "{:<26}{:>6}{:>16}{:>16}",
            desc,
            fmt_qty(&item.quantity),
            fmt_rupiah_decimal(&item.price),
            fmt_rupiah_decimal(&item.line_total())
        )?;
    }
    rule(out, '-')?;
    writeln!(
        out,
        "{:>48}{:>16}",
        "Total",
        fmt_rupiah_decimal(&invoice.total())
    )?;
    rule(out, '=')?;
    if let Some(notes) = invoice.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        writeln!(out, "Catatan: {}", notes.trim())?;
        writeln!(out)?;
    }
    writeln!(out, "Terima kasih atas kepercayaan Anda.")?;
    writeln!(out)?;
    writeln!(out, "{:>64}", "Hormat kami,")?;
    writeln!(out)?;
    writeln!(out, "{:>64}", agency)
}
