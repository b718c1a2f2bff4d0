// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required;
use crate::schedule::installment_schedule;
use crate::session::Session;
use anyhow::{Context, Result, bail};
use serde::Serialize;

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("schedule", sub)) => {
            let entries = installment_schedule(s.ledger.credit_purchases());
            write_report(sub, &entries)?;
            println!("Exported {} installment(s)", entries.len());
        }
        Some(("summary", sub)) => {
            let summary = s.ledger.summary();
            write_report(sub, std::slice::from_ref(&summary))?;
            println!("Exported summary");
        }
        _ => {}
    }
    Ok(())
}

fn write_report<T: Serialize>(sub: &clap::ArgMatches, rows: &[T]) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Wrote {}", out);
    Ok(())
}
