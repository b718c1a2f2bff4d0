// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{count, decimal, id, opt_count, opt_decimal, opt_string, required};
use crate::models::{Debt, DebtPatch, NewDebt};
use crate::session::Session;
use crate::utils::{fmt_pct, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(s, sub)?,
        Some(("list", sub)) => list(s, sub)?,
        Some(("pay", sub)) => {
            let d = s.ledger.pay_debt_installment(id(sub, "id")?)?.clone();
            report(s, "Paid", &d);
        }
        Some(("unpay", sub)) => {
            let d = s.ledger.unpay_debt_installment(id(sub, "id")?)?.clone();
            report(s, "Reverted", &d);
        }
        Some(("edit", sub)) => edit(s, sub)?,
        Some(("rm", sub)) => {
            let debt_id = id(sub, "id")?;
            match s.ledger.delete_debt(debt_id) {
                Some(d) => println!("Removed debt '{}'", d.name),
                None => println!("No debt #{}", debt_id),
            }
        }
        _ => {}
    }
    Ok(())
}

fn report(s: &Session, verb: &str, d: &Debt) {
    println!(
        "{} installment of '{}': {}/{} paid, {} left{}",
        verb,
        d.name,
        d.paid_installments,
        d.installments,
        s.money(&d.remaining()),
        if d.is_paid { " (settled)" } else { "" }
    );
}

fn add(s: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let new = NewDebt {
        name: required(sub, "name")?.to_string(),
        total_value: decimal(sub, "total")?,
        installments: count(sub, "installments")?,
        installment_value: decimal(sub, "installment-value")?,
        paid_installments: count(sub, "paid")?,
    };
    let d = s.ledger.add_debt(new)?;
    println!(
        "Added debt #{} '{}' ({} x {})",
        d.id, d.name, d.installments, d.installment_value
    );
    Ok(())
}

fn edit(s: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let patch = DebtPatch {
        name: opt_string(sub, "name"),
        total_value: opt_decimal(sub, "total")?,
        installments: opt_count(sub, "installments")?,
        installment_value: opt_decimal(sub, "installment-value")?,
        paid_installments: opt_count(sub, "paid")?,
    };
    let d = s.ledger.update_debt(id(sub, "id")?, patch)?;
    println!("Updated debt #{} '{}'", d.id, d.name);
    Ok(())
}

fn list(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let debts = s.ledger.debts();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &debts)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = debts
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.name.clone(),
                s.money(&d.total_value),
                s.money(&d.installment_value),
                format!("{}/{}", d.paid_installments, d.installments),
                fmt_pct(&d.progress_percentage()),
                s.money(&d.remaining()),
                if d.is_paid { "settled".into() } else { "paying".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Total", "Installment", "Paid", "Progress", "Remaining", "Status"],
            rows
        )
    );
    Ok(())
}
