//! Text and JSON rendering of calculation results

use std::fmt::Write;

use core_kernel::{format_inr, format_percentage, Money};
use domain_settlement::{CalculationResult, CalculatorSession, Catalog};

use crate::error::CliError;

const NO_RESULT_TITLE: &str = "No calculation results yet";
const NO_RESULT_HINT: &str =
    "Enter an amount and select at least one payment method to see the calculation";

/// Renders the session's current state as a summary block and method table
pub fn render_table(session: &CalculatorSession) -> String {
    let mut out = String::new();

    if let Some(warning) = session.distribution_warning() {
        let _ = writeln!(out, "Warning: {warning}");
        out.push('\n');
    }

    match session.result() {
        Some(result) => {
            out.push_str(&render_summary(result));
            if result.per_method_results.len() > 1 {
                out.push('\n');
                out.push_str(&render_method_table(result));
            }
        }
        None => {
            let _ = writeln!(out, "{NO_RESULT_TITLE}");
            let _ = writeln!(out, "{NO_RESULT_HINT}");
        }
    }

    out
}

/// Renders the session's current result as pretty JSON, or `null` when there is none
pub fn render_json(session: &CalculatorSession) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&session.result())?)
}

/// Summary block titled by the calculation mode
pub fn render_summary(result: &CalculationResult) -> String {
    let total = &result.total_summary;
    let mut rows: Vec<(&str, Money)> = vec![
        (result.mode.amount_label(), result.amount),
        ("PG Charges", total.pg_charges),
        ("GST on PG Charges", total.tax_on_charges),
    ];
    if result.has_instant_settlement_fee() {
        rows.push(("Instant Settlement Fee", total.instant_settlement_fee));
        rows.push(("GST on Instant Settlement", total.tax_on_instant_settlement));
    }
    rows.push(("Total Deductions", total.total_deductions));
    rows.push(("Final Settlement", total.final_settlement));

    let formatted: Vec<(&str, String)> = rows
        .into_iter()
        .map(|(label, value)| (label, format_inr(value)))
        .collect();
    let label_width = formatted.iter().map(|(l, _)| width(l)).max().unwrap_or(0);
    let value_width = formatted.iter().map(|(_, v)| width(v)).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", result.mode.summary_title());
    for (label, value) in formatted {
        let _ = writeln!(
            out,
            "  {}  {}",
            pad_right(label, label_width),
            pad_left(&value, value_width)
        );
    }
    out
}

/// One row per method plus a total row
pub fn render_method_table(result: &CalculationResult) -> String {
    let with_settlement = result.has_instant_settlement_fee();

    let mut header = vec!["Payment Method", "Share", "Amount", "Rate", "PG Charges", "GST"];
    if with_settlement {
        header.extend(["Settlement Fee", "GST on Fee"]);
    }
    header.push("Final Settlement");

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(result.per_method_results.len() + 1);
    for charges in &result.per_method_results {
        let b = &charges.breakdown;
        let mut row = vec![
            charges.method.name.clone(),
            charges
                .method
                .distribution
                .map(format_percentage)
                .unwrap_or_default(),
            format_inr(b.amount),
            format_percentage(charges.effective_rate.as_decimal()),
            format_inr(b.pg_charges),
            format_inr(b.tax_on_charges),
        ];
        if with_settlement {
            row.push(format_inr(b.instant_settlement_fee));
            row.push(format_inr(b.tax_on_instant_settlement));
        }
        row.push(format_inr(b.final_settlement));
        rows.push(row);
    }

    let t = &result.total_summary;
    let mut total = vec![
        "Total".to_string(),
        String::new(),
        format_inr(t.amount),
        String::new(),
        format_inr(t.pg_charges),
        format_inr(t.tax_on_charges),
    ];
    if with_settlement {
        total.push(format_inr(t.instant_settlement_fee));
        total.push(format_inr(t.tax_on_instant_settlement));
    }
    total.push(format_inr(t.final_settlement));

    let header: Vec<String> = header.into_iter().map(String::from).collect();
    let mut widths: Vec<usize> = header.iter().map(|h| width(h)).collect();
    for row in rows.iter().chain(std::iter::once(&total)) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell));
        }
    }

    let mut out = String::new();
    write_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut out, &rule, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    write_row(&mut out, &rule, &widths);
    write_row(&mut out, &total, &widths);
    out
}

/// Catalog listing with default rates
pub fn render_methods(catalog: &Catalog) -> String {
    let id_width = catalog.entries().iter().map(|e| width(e.id().as_str())).max().unwrap_or(0);
    let name_width = catalog.entries().iter().map(|e| width(e.name())).max().unwrap_or(0);

    let mut out = String::new();
    for entry in catalog.entries() {
        let marker = if entry.is_selected_by_default() { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {}  {}  {}",
            pad_right(entry.id().as_str(), id_width),
            pad_right(entry.name(), name_width),
            pad_left(&format_percentage(entry.default_rate().as_decimal()), 6)
        );
    }
    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, w))| if i == 0 { pad_right(cell, *w) } else { pad_left(cell, *w) })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

// ₹ is one column but three bytes
fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_right(s: &str, w: usize) -> String {
    format!("{s}{}", " ".repeat(w.saturating_sub(width(s))))
}

fn pad_left(s: &str, w: usize) -> String {
    format!("{}{s}", " ".repeat(w.saturating_sub(width(s))))
}
