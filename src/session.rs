// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One interactive session: an in-memory ledger fed by command lines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};
use clap::error::ErrorKind;
use tracing::{info, warn};

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::{cli, commands, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub ledger: Ledger,
    pub currency: String,
}

impl Session {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut ledger = Ledger::new();
        if let Some(income) = settings.income {
            ledger
                .set_monthly_income(income)
                .context("Invalid --income")?;
        }
        ledger
            .set_investment_percentage(settings.investment_percentage)
            .context("Invalid --invest")?;
        Ok(Session {
            ledger,
            currency: settings.currency.clone(),
        })
    }

    pub fn money(&self, d: &rust_decimal::Decimal) -> String {
        utils::fmt_money(d, &self.currency)
    }

    /// Runs a single command line. Blank lines and `#` comments are ignored.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }
        let matches = match cli::build_cli().try_get_matches_from(utils::tokenize(line)) {
            Ok(m) => m,
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                        | ErrorKind::DisplayVersion
                ) =>
            {
                print!("{}", e.render());
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(anyhow!("{}", e.render().to_string().trim_end())),
        };

        match matches.subcommand() {
            Some(("income", sub)) => commands::income::handle(self, sub)?,
            Some(("debt", sub)) => commands::debts::handle(self, sub)?,
            Some(("credit", sub)) => commands::credit::handle(self, sub)?,
            Some(("expense", sub)) => commands::expenses::handle(self, sub)?,
            Some(("sporadic", sub)) => commands::sporadic::handle(self, sub)?,
            Some(("shop", sub)) => commands::shopping::handle(self, sub)?,
            Some(("invest", sub)) => commands::invest::handle(self, sub)?,
            Some(("summary", sub)) => commands::summary::handle(self, sub)?,
            Some(("export", sub)) => commands::exporter::handle(self, sub)?,
            Some(("quit", _)) => return Ok(Flow::Quit),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// Reads commands until EOF or `quit`. A failing command is reported and the
    /// session carries on with the ledger unchanged.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        info!("session started");
        let mut lines = input.lines();
        loop {
            if prompt {
                print!("finboard> ");
                std::io::stdout().flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.context("Failed to read command")?;
            match self.execute(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(command = %line.trim(), "command rejected");
                    eprintln!("error: {:#}", e);
                }
            }
        }
        info!("session ended");
        Ok(())
    }
}
