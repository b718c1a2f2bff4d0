// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use crate::ledger::DEFAULT_INVESTMENT_PERCENTAGE;
use crate::utils::parse_decimal;

fn decimal_arg(s: &str) -> Result<Decimal, String> {
    parse_decimal(s).map_err(|e| format!("{:#}", e))
}

/// Process flags. Everything recorded during the session lives in memory only.
#[derive(Debug, Clone, Parser)]
#[command(name = "finboard", version, about = "Personal finance dashboard session")]
pub struct Settings {
    /// Net monthly salary to start with
    #[arg(long, value_parser = decimal_arg)]
    pub income: Option<Decimal>,

    /// Share of the available balance suggested for investing (0-100)
    #[arg(long = "invest", value_parser = decimal_arg, default_value_t = DEFAULT_INVESTMENT_PERCENTAGE)]
    pub investment_percentage: Decimal,

    /// Currency label used when printing amounts
    #[arg(long, default_value = "R$")]
    pub currency: String,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Do not print the interactive prompt
    #[arg(long, short)]
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            income: None,
            investment_percentage: DEFAULT_INVESTMENT_PERCENTAGE,
            currency: "R$".to_string(),
            script: None,
            quiet: false,
        }
    }
}
