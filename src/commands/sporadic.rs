// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{date_or_today, decimal, id, opt_date, opt_decimal, opt_string, required};
use crate::models::{NewSporadicExpense, SporadicExpensePatch};
use crate::session::Session;
use crate::summary::total_sporadic_expenses;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let new = NewSporadicExpense {
                name: required(sub, "name")?.to_string(),
                amount: decimal(sub, "amount")?,
                date: date_or_today(sub, "date")?,
            };
            let e = s.ledger.add_sporadic_expense(new)?;
            println!("Added sporadic expense #{} '{}' on {}", e.id, e.name, e.date);
        }
        Some(("list", sub)) => {
            let expenses = s.ledger.sporadic_expenses();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &expenses)? {
                let rows: Vec<Vec<String>> = expenses
                    .iter()
                    .map(|e| {
                        vec![
                            e.id.to_string(),
                            e.date.to_string(),
                            e.name.clone(),
                            s.money(&e.amount),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Date", "Name", "Amount"], rows));
                println!("Total: {}", s.money(&total_sporadic_expenses(expenses)));
            }
        }
        Some(("edit", sub)) => {
            let patch = SporadicExpensePatch {
                name: opt_string(sub, "name"),
                amount: opt_decimal(sub, "amount")?,
                date: opt_date(sub, "date")?,
            };
            let e = s.ledger.update_sporadic_expense(id(sub, "id")?, patch)?;
            println!("Updated sporadic expense #{} '{}'", e.id, e.name);
        }
        Some(("rm", sub)) => {
            let expense_id = id(sub, "id")?;
            match s.ledger.delete_sporadic_expense(expense_id) {
                Some(e) => println!("Removed sporadic expense '{}'", e.name),
                None => println!("No sporadic expense #{}", expense_id),
            }
        }
        _ => {}
    }
    Ok(())
}
