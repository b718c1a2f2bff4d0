// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Payment calendar for third-party credit purchases.
//!
//! Each purchase expands into one entry per installment, due one calendar month apart,
//! starting on the purchase date. When the start day does not exist in a later month the
//! due date clamps to that month's last day (Jan 31 -> Feb 29 -> Mar 31), which is what
//! `chrono`'s `checked_add_months` does. Offsets are always taken from the start date, so a
//! short month never drags later due dates back.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CreditPurchase, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallmentEntry {
    pub purchase_id: RecordId,
    pub description: String,
    pub person_name: String,
    pub installment_number: u32,
    pub value: Decimal,
    pub is_paid: bool,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScheduleTotals {
    pub pending_count: usize,
    pub pending_value: Decimal,
}

/// Due date of the installment `offset` months after `start`; `None` past chrono's range.
pub fn due_date(start: NaiveDate, offset: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(offset))
}

fn expand(purchase: &CreditPurchase) -> impl Iterator<Item = InstallmentEntry> + '_ {
    (0..purchase.installments).map_while(move |k| {
        Some(InstallmentEntry {
            purchase_id: purchase.id,
            description: purchase.description.clone(),
            person_name: purchase.person_name.clone(),
            installment_number: k + 1,
            value: purchase.installment_value,
            is_paid: k + 1 <= purchase.paid_installments,
            due_date: due_date(purchase.date, k)?,
        })
    })
}

/// Every installment of every purchase, ascending by due date.
///
/// The sort is stable, so entries due on the same day stay in purchase order and then in
/// installment order.
pub fn installment_schedule(purchases: &[CreditPurchase]) -> Vec<InstallmentEntry> {
    let mut entries: Vec<InstallmentEntry> = purchases.iter().flat_map(expand).collect();
    entries.sort_by_key(|e| e.due_date);
    entries
}

pub fn schedule_totals(entries: &[InstallmentEntry]) -> ScheduleTotals {
    entries
        .iter()
        .filter(|e| !e.is_paid)
        .fold(ScheduleTotals::default(), |mut acc, e| {
            acc.pending_count += 1;
            acc.pending_value += e.value;
            acc
        })
}
