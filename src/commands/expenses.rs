// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, decimal, id, opt_decimal, opt_string, required};
use crate::models::{ExpenseCategory, FixedExpensePatch, NewFixedExpense};
use crate::session::Session;
use crate::summary::{expenses_by_category, total_fixed_expenses};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use serde::Serialize;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let new = NewFixedExpense {
                name: required(sub, "name")?.to_string(),
                amount: decimal(sub, "amount")?,
                category: category(required(sub, "category")?)?,
            };
            let ccy = s.currency.clone();
            let e = s.ledger.add_fixed_expense(new)?;
            println!(
                "Added fixed expense #{} '{}' ({}) {}/month",
                e.id,
                e.name,
                e.category,
                crate::utils::fmt_money(&e.amount, &ccy)
            );
        }
        Some(("list", sub)) => list(s, sub)?,
        Some(("by-category", sub)) => by_category(s, sub)?,
        Some(("edit", sub)) => {
            let patch = FixedExpensePatch {
                name: opt_string(sub, "name"),
                amount: opt_decimal(sub, "amount")?,
                category: arg(sub, "category").map(category).transpose()?,
            };
            let e = s.ledger.update_fixed_expense(id(sub, "id")?, patch)?;
            println!("Updated fixed expense #{} '{}'", e.id, e.name);
        }
        Some(("rm", sub)) => {
            let expense_id = id(sub, "id")?;
            match s.ledger.delete_fixed_expense(expense_id) {
                Some(e) => println!("Removed fixed expense '{}'", e.name),
                None => println!("No fixed expense #{}", expense_id),
            }
        }
        _ => {}
    }
    Ok(())
}

fn category(raw: &str) -> Result<ExpenseCategory> {
    raw.parse::<ExpenseCategory>().map_err(|e| anyhow!(e))
}

fn list(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let expenses = s.ledger.fixed_expenses();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &expenses)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.name.clone(),
                e.category.to_string(),
                s.money(&e.amount),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Category", "Monthly"], rows));
    println!("Total: {}", s.money(&total_fixed_expenses(expenses)));
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    category: ExpenseCategory,
    total: rust_decimal::Decimal,
}

fn by_category(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let totals: Vec<CategoryRow> = expenses_by_category(s.ledger.fixed_expenses())
        .into_iter()
        .map(|(category, total)| CategoryRow { category, total })
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        return Ok(());
    }
    let rows = totals
        .iter()
        .map(|r| vec![r.category.to_string(), s.money(&r.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Monthly"], rows));
    Ok(())
}
