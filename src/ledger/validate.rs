// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

/// Largest amount accepted for any single money field.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

fn within_cap(field: &'static str, value: Decimal) -> LedgerResult<()> {
    if value > MAX_AMOUNT {
        return Err(LedgerError::invalid(
            field,
            format!("must not exceed {}, got {}", MAX_AMOUNT, value),
        ));
    }
    Ok(())
}

pub(super) fn required(field: &'static str, value: &str) -> LedgerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid(field, "must not be blank"));
    }
    Ok(trimmed.to_string())
}

pub(super) fn positive(field: &'static str, value: Decimal) -> LedgerResult<()> {
    if value <= Decimal::ZERO {
        return Err(LedgerError::invalid(
            field,
            format!("must be greater than zero, got {}", value),
        ));
    }
    within_cap(field, value)
}

pub(super) fn non_negative(field: &'static str, value: Decimal) -> LedgerResult<()> {
    if value < Decimal::ZERO {
        return Err(LedgerError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    within_cap(field, value)
}

pub(super) fn count(field: &'static str, value: u32) -> LedgerResult<()> {
    if value == 0 {
        return Err(LedgerError::invalid(field, "must be at least 1"));
    }
    Ok(())
}

pub(super) fn paid_within(paid: u32, installments: u32) -> LedgerResult<()> {
    if paid > installments {
        return Err(LedgerError::invalid(
            "paid installments",
            format!("{} exceeds {} installments", paid, installments),
        ));
    }
    Ok(())
}
