// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{decimal, id, opt_decimal, opt_string, required};
use crate::models::{ExtraIncomePatch, NewExtraIncome};
use crate::session::Session;
use crate::summary::total_extra_income;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = decimal(sub, "amount")?;
            s.ledger.set_monthly_income(amount)?;
            println!("Monthly income set to {}", s.money(&amount));
        }
        Some(("extra", sub)) => extra(s, sub)?,
        _ => {}
    }
    Ok(())
}

fn extra(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let new = NewExtraIncome {
                name: required(sub, "name")?.to_string(),
                amount: decimal(sub, "amount")?,
            };
            let i = s.ledger.add_extra_income(new)?;
            println!("Added extra income #{} '{}'", i.id, i.name);
        }
        Some(("list", sub)) => {
            let incomes = s.ledger.extra_incomes();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &incomes)? {
                let rows: Vec<Vec<String>> = incomes
                    .iter()
                    .map(|i| vec![i.id.to_string(), i.name.clone(), s.money(&i.amount)])
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Amount"], rows));
                println!(
                    "Salary {} + extras {}",
                    s.money(&s.ledger.monthly_income()),
                    s.money(&total_extra_income(incomes))
                );
            }
        }
        Some(("edit", sub)) => {
            let patch = ExtraIncomePatch {
                name: opt_string(sub, "name"),
                amount: opt_decimal(sub, "amount")?,
            };
            let i = s.ledger.update_extra_income(id(sub, "id")?, patch)?;
            println!("Updated extra income #{} '{}'", i.id, i.name);
        }
        Some(("rm", sub)) => {
            let income_id = id(sub, "id")?;
            match s.ledger.delete_extra_income(income_id) {
                Some(i) => println!("Removed extra income '{}'", i.name),
                None => println!("No extra income #{}", income_id),
            }
        }
        _ => {}
    }
    Ok(())
}
