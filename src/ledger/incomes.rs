// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use super::{Ledger, append, position, remove, validate};
use crate::error::LedgerResult;
use crate::models::{ExtraIncome, ExtraIncomePatch, NewExtraIncome, RecordId};

impl Ledger {
    pub fn add_extra_income(&mut self, new: NewExtraIncome) -> LedgerResult<&ExtraIncome> {
        let name = validate::required("name", &new.name)?;
        validate::positive("amount", new.amount)?;
        let income = ExtraIncome {
            id: self.allocate_id(),
            name,
            amount: new.amount,
        };
        debug!(id = income.id, "extra income added");
        Ok(append(&mut self.extra_incomes, income))
    }

    pub fn update_extra_income(
        &mut self,
        id: RecordId,
        patch: ExtraIncomePatch,
    ) -> LedgerResult<&ExtraIncome> {
        let idx = position(&self.extra_incomes, id)?;
        let mut next = self.extra_incomes[idx].clone();
        if let Some(name) = patch.name {
            next.name = validate::required("name", &name)?;
        }
        if let Some(amount) = patch.amount {
            validate::positive("amount", amount)?;
            next.amount = amount;
        }
        debug!(id, "extra income updated");
        self.extra_incomes[idx] = next;
        Ok(&self.extra_incomes[idx])
    }

    pub fn delete_extra_income(&mut self, id: RecordId) -> Option<ExtraIncome> {
        remove(&mut self.extra_incomes, id)
    }
}
