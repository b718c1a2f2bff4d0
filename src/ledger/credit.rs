// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::debug;

use super::{Ledger, append, position, remove, validate};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CreditPurchase, CreditPurchasePatch, NewCreditPurchase, RecordId};
use crate::schedule::due_date;

fn check(p: &CreditPurchase) -> LedgerResult<()> {
    validate::paid_within(p.paid_installments, p.installments)?;
    // the last installment must still be a representable date
    if due_date(p.date, p.installments - 1).is_none() {
        return Err(LedgerError::invalid(
            "date",
            format!("{} installments from {} overflow the calendar", p.installments, p.date),
        ));
    }
    Ok(())
}

impl Ledger {
    /// Records a purchase made on the user's card on behalf of someone else.
    ///
    /// The installment value is `total_amount / installments`, computed once here and never
    /// touched again by later updates.
    pub fn add_credit_purchase(&mut self, new: NewCreditPurchase) -> LedgerResult<&CreditPurchase> {
        let description = validate::required("description", &new.description)?;
        let person_name = validate::required("person name", &new.person_name)?;
        validate::positive("total amount", new.total_amount)?;
        validate::count("installments", new.installments)?;

        let mut purchase = CreditPurchase {
            id: 0,
            description,
            total_amount: new.total_amount,
            installments: new.installments,
            installment_value: new.total_amount / Decimal::from(new.installments),
            paid_installments: 0,
            person_name,
            date: new.date,
            is_paid: false,
        };
        check(&purchase)?;
        purchase.id = self.allocate_id();
        debug!(id = purchase.id, person = %purchase.person_name, "credit purchase added");
        Ok(append(&mut self.credit_purchases, purchase))
    }

    pub fn update_credit_purchase(
        &mut self,
        id: RecordId,
        patch: CreditPurchasePatch,
    ) -> LedgerResult<&CreditPurchase> {
        let idx = position(&self.credit_purchases, id)?;
        let mut next = self.credit_purchases[idx].clone();
        if let Some(d) = patch.description {
            next.description = validate::required("description", &d)?;
        }
        if let Some(p) = patch.person_name {
            next.person_name = validate::required("person name", &p)?;
        }
        if let Some(date) = patch.date {
            next.date = date;
        }
        if let Some(paid) = patch.paid_installments {
            next.paid_installments = paid;
        }
        check(&next)?;
        next.is_paid = next.paid_installments == next.installments;
        debug!(id, "credit purchase updated");
        self.credit_purchases[idx] = next;
        Ok(&self.credit_purchases[idx])
    }

    /// Registers one more repaid installment. Purchases have no decrement counterpart.
    pub fn pay_credit_installment(&mut self, id: RecordId) -> LedgerResult<&CreditPurchase> {
        let idx = position(&self.credit_purchases, id)?;
        let p = &mut self.credit_purchases[idx];
        p.paid_installments = p.paid_installments.saturating_add(1).min(p.installments);
        p.is_paid = p.paid_installments == p.installments;
        debug!(id, paid = p.paid_installments, "credit installment received");
        Ok(&self.credit_purchases[idx])
    }

    pub fn delete_credit_purchase(&mut self, id: RecordId) -> Option<CreditPurchase> {
        remove(&mut self.credit_purchases, id)
    }
}
