// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use super::{Ledger, append, position, remove, validate};
use crate::error::LedgerResult;
use crate::models::{
    FixedExpense, FixedExpensePatch, NewFixedExpense, NewSporadicExpense, RecordId,
    SporadicExpense, SporadicExpensePatch,
};

impl Ledger {
    pub fn add_fixed_expense(&mut self, new: NewFixedExpense) -> LedgerResult<&FixedExpense> {
        let name = validate::required("name", &new.name)?;
        validate::positive("amount", new.amount)?;
        let expense = FixedExpense {
            id: self.allocate_id(),
            name,
            amount: new.amount,
            category: new.category,
        };
        debug!(id = expense.id, category = %expense.category, "fixed expense added");
        Ok(append(&mut self.fixed_expenses, expense))
    }

    pub fn update_fixed_expense(
        &mut self,
        id: RecordId,
        patch: FixedExpensePatch,
    ) -> LedgerResult<&FixedExpense> {
        let idx = position(&self.fixed_expenses, id)?;
        let mut next = self.fixed_expenses[idx].clone();
        if let Some(name) = patch.name {
            next.name = validate::required("name", &name)?;
        }
        if let Some(amount) = patch.amount {
            validate::positive("amount", amount)?;
            next.amount = amount;
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        debug!(id, "fixed expense updated");
        self.fixed_expenses[idx] = next;
        Ok(&self.fixed_expenses[idx])
    }

    pub fn delete_fixed_expense(&mut self, id: RecordId) -> Option<FixedExpense> {
        remove(&mut self.fixed_expenses, id)
    }

    pub fn add_sporadic_expense(
        &mut self,
        new: NewSporadicExpense,
    ) -> LedgerResult<&SporadicExpense> {
        let name = validate::required("name", &new.name)?;
        validate::positive("amount", new.amount)?;
        let expense = SporadicExpense {
            id: self.allocate_id(),
            name,
            amount: new.amount,
            date: new.date,
        };
        debug!(id = expense.id, date = %expense.date, "sporadic expense added");
        Ok(append(&mut self.sporadic_expenses, expense))
    }

    pub fn update_sporadic_expense(
        &mut self,
        id: RecordId,
        patch: SporadicExpensePatch,
    ) -> LedgerResult<&SporadicExpense> {
        let idx = position(&self.sporadic_expenses, id)?;
        let mut next = self.sporadic_expenses[idx].clone();
        if let Some(name) = patch.name {
            next.name = validate::required("name", &name)?;
        }
        if let Some(amount) = patch.amount {
            validate::positive("amount", amount)?;
            next.amount = amount;
        }
        if let Some(date) = patch.date {
            next.date = date;
        }
        debug!(id, "sporadic expense updated");
        self.sporadic_expenses[idx] = next;
        Ok(&self.sporadic_expenses[idx])
    }

    pub fn delete_sporadic_expense(&mut self, id: RecordId) -> Option<SporadicExpense> {
        remove(&mut self.sporadic_expenses, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use rust_decimal::Decimal;

    #[test]
    fn fixed_expense_patch_validates_amount() {
        let mut l = Ledger::new();
        let id = l
            .add_fixed_expense(NewFixedExpense {
                name: "Rent".into(),
                amount: Decimal::new(1000, 0),
                category: ExpenseCategory::Housing,
            })
            .unwrap()
            .id;
        let err = l
            .update_fixed_expense(
                id,
                FixedExpensePatch {
                    amount: Some(Decimal::ZERO),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        let e = l
            .update_fixed_expense(
                id,
                FixedExpensePatch {
                    category: Some(ExpenseCategory::Services),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(e.category, ExpenseCategory::Services);
        assert_eq!(e.amount, Decimal::new(1000, 0));
    }
}
