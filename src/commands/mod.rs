// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod credit;
pub mod debts;
pub mod expenses;
pub mod exporter;
pub mod income;
pub mod invest;
pub mod shopping;
pub mod sporadic;
pub mod summary;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::RecordId;
use crate::utils::{parse_count, parse_date, parse_decimal, parse_id, today};

pub(crate) fn arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Option<&'a str> {
    m.get_one::<String>(name).map(|s| s.trim())
}

pub(crate) fn required<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    arg(m, name).with_context(|| format!("Missing '{}'", name))
}

pub(crate) fn id(m: &clap::ArgMatches, name: &str) -> Result<RecordId> {
    parse_id(required(m, name)?)
}

pub(crate) fn decimal(m: &clap::ArgMatches, name: &str) -> Result<Decimal> {
    parse_decimal(required(m, name)?)
}

pub(crate) fn count(m: &clap::ArgMatches, name: &str) -> Result<u32> {
    parse_count(required(m, name)?)
}

pub(crate) fn opt_decimal(m: &clap::ArgMatches, name: &str) -> Result<Option<Decimal>> {
    arg(m, name).map(parse_decimal).transpose()
}

pub(crate) fn opt_count(m: &clap::ArgMatches, name: &str) -> Result<Option<u32>> {
    arg(m, name).map(parse_count).transpose()
}

pub(crate) fn opt_date(m: &clap::ArgMatches, name: &str) -> Result<Option<NaiveDate>> {
    arg(m, name).map(parse_date).transpose()
}

pub(crate) fn date_or_today(m: &clap::ArgMatches, name: &str) -> Result<NaiveDate> {
    Ok(opt_date(m, name)?.unwrap_or_else(today))
}

pub(crate) fn opt_string(m: &clap::ArgMatches, name: &str) -> Option<String> {
    arg(m, name).map(|s| s.to_string())
}

pub(crate) fn paid_badge(paid: bool) -> String {
    if paid { "paid".into() } else { "pending".into() }
}
