// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::decimal;
use crate::ledger::INVESTMENT_PRESETS;
use crate::session::Session;
use crate::summary::suggested_investment;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let pct = decimal(sub, "percentage")?;
            s.ledger.set_investment_percentage(pct)?;
            let summary = s.ledger.summary();
            println!(
                "Investing {}% of {} available: {}",
                pct,
                s.money(&summary.available_balance),
                s.money(&summary.suggested_investment)
            );
            if summary.available_balance <= Decimal::ZERO {
                println!("No balance available to invest; review expenses and debts.");
            }
        }
        Some(("presets", _)) => {
            let available = s.ledger.summary().available_balance;
            let current = s.ledger.investment_percentage();
            let rows = INVESTMENT_PRESETS
                .iter()
                .map(|p| {
                    let pct = Decimal::from(*p);
                    vec![
                        format!("{}%{}", p, if pct == current { " *" } else { "" }),
                        s.money(&suggested_investment(available, pct)),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Preset", "Suggested"], rows));
        }
        _ => {}
    }
    Ok(())
}
