// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::summary::Summary;
use crate::utils::{fmt_pct, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    let summary = s.ledger.summary();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        return Ok(());
    }
    println!("{}", pretty_table(&["Figure", "Value"], rows(s, &summary)));
    println!(
        "{} of the salary committed: {}",
        fmt_pct(&summary.expense_percentage),
        summary.health.message()
    );
    Ok(())
}

pub(crate) fn rows(s: &Session, summary: &Summary) -> Vec<Vec<String>> {
    let money = |label: &str, v: &rust_decimal::Decimal| vec![label.to_string(), s.money(v)];
    vec![
        money("Salary", &summary.monthly_income),
        money("Extra income", &summary.total_extra_income),
        money("Sporadic expenses", &summary.total_sporadic_expenses),
        money("Total income", &summary.total_income),
        money("Fixed expenses", &summary.total_fixed_expenses),
        money("Debt installments", &summary.monthly_debt_payments),
        money("Available balance", &summary.available_balance),
        vec![
            "Investment share".to_string(),
            fmt_pct(&summary.investment_percentage),
        ],
        money("Suggested investment", &summary.suggested_investment),
        money("Final balance", &summary.final_balance),
        money("To receive", &summary.pending_receivables),
        money("Outstanding debt", &summary.total_outstanding_debt),
    ]
}
