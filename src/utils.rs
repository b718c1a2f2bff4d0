// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::RecordId;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token pattern is valid")
});

/// Splits a command line into arguments, honouring single and double quotes.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN
        .captures_iter(line)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Accepts `1234.56` as well as a decimal comma (`1234,56`).
pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let s = s.trim();
    let normalized = if s.contains(',') && !s.contains('.') {
        s.replace(',', ".")
    } else {
        s.to_string()
    };
    normalized
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_count(s: &str) -> Result<u32> {
    s.trim()
        .parse::<u32>()
        .with_context(|| format!("Invalid count '{}'", s))
}

pub fn parse_id(s: &str) -> Result<RecordId> {
    let s = s.trim().trim_start_matches('#');
    s.parse::<RecordId>()
        .map_err(|_| anyhow!("Invalid id '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {:.2}", ccy, d.round_dp(2))
}

pub fn fmt_pct(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_quoted_phrases() {
        assert_eq!(
            tokenize(r#"debt add --name "Car loan" --total 1200"#),
            vec!["debt", "add", "--name", "Car loan", "--total", "1200"]
        );
        assert_eq!(tokenize("shop new 'Feira de sábado'"), vec!["shop", "new", "Feira de sábado"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(parse_decimal(" 5,50 ").unwrap(), Decimal::new(550, 2));
        assert_eq!(parse_decimal("1200").unwrap(), Decimal::new(1200, 0));
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn ids_accept_hash_prefix() {
        assert_eq!(parse_id("#12").unwrap(), 12);
        assert!(parse_id("x").is_err());
    }

    #[test]
    fn money_has_two_places() {
        assert_eq!(fmt_money(&Decimal::new(32, 0), "R$"), "R$ 32.00");
        assert_eq!(fmt_money(&Decimal::new(33333, 3), "R$"), "R$ 33.33");
    }
}
