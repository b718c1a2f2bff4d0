// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{count, date_or_today, decimal, id, opt_count, opt_date, opt_string, paid_badge, required};
use crate::models::{CreditPurchasePatch, NewCreditPurchase};
use crate::schedule::{installment_schedule, schedule_totals};
use crate::session::Session;
use crate::summary::pending_receivables;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(s, sub)?,
        Some(("list", sub)) => list(s, sub)?,
        Some(("pay", sub)) => {
            let p = s.ledger.pay_credit_installment(id(sub, "id")?)?.clone();
            println!(
                "{} repaid installment {}/{} of '{}'{}",
                p.person_name,
                p.paid_installments,
                p.installments,
                p.description,
                if p.is_paid { " (fully repaid)" } else { "" }
            );
        }
        Some(("edit", sub)) => {
            let patch = CreditPurchasePatch {
                description: opt_string(sub, "description"),
                person_name: opt_string(sub, "person"),
                date: opt_date(sub, "date")?,
                paid_installments: opt_count(sub, "paid")?,
            };
            let p = s.ledger.update_credit_purchase(id(sub, "id")?, patch)?;
            println!("Updated purchase #{} '{}'", p.id, p.description);
        }
        Some(("rm", sub)) => {
            let purchase_id = id(sub, "id")?;
            match s.ledger.delete_credit_purchase(purchase_id) {
                Some(p) => println!("Removed purchase '{}'", p.description),
                None => println!("No purchase #{}", purchase_id),
            }
        }
        Some(("schedule", sub)) => schedule(s, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(s: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let new = NewCreditPurchase {
        description: required(sub, "description")?.to_string(),
        total_amount: decimal(sub, "total")?,
        installments: count(sub, "installments")?,
        person_name: required(sub, "person")?.to_string(),
        date: date_or_today(sub, "date")?,
    };
    let ccy = s.currency.clone();
    let p = s.ledger.add_credit_purchase(new)?;
    println!(
        "Added purchase #{} '{}' for {}: {} x {}",
        p.id,
        p.description,
        p.person_name,
        p.installments,
        crate::utils::fmt_money(&p.installment_value, &ccy)
    );
    Ok(())
}

fn list(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let purchases = s.ledger.credit_purchases();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &purchases)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = purchases
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.date.to_string(),
                p.description.clone(),
                p.person_name.clone(),
                s.money(&p.total_amount),
                s.money(&p.installment_value),
                format!("{}/{}", p.paid_installments, p.installments),
                paid_badge(p.is_paid),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Description", "Person", "Total", "Installment", "Paid", "Status"],
            rows
        )
    );
    println!(
        "Pending receivables: {}",
        s.money(&pending_receivables(purchases))
    );
    Ok(())
}

fn schedule(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let mut entries = installment_schedule(s.ledger.credit_purchases());
    let totals = schedule_totals(&entries);
    if sub.get_flag("pending") {
        entries.retain(|e| !e.is_paid);
    }
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.due_date.to_string(),
                e.description.clone(),
                e.person_name.clone(),
                e.installment_number.to_string(),
                s.money(&e.value),
                paid_badge(e.is_paid),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Due", "Description", "Person", "#", "Value", "Status"], rows)
    );
    println!(
        "{} pending installment(s), {} to receive",
        totals.pending_count,
        s.money(&totals.pending_value)
    );
    Ok(())
}
