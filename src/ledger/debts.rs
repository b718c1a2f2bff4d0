// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use super::{Ledger, append, position, remove, validate};
use crate::error::LedgerResult;
use crate::models::{Debt, DebtPatch, NewDebt, RecordId};

fn check(debt: &Debt) -> LedgerResult<()> {
    validate::positive("total value", debt.total_value)?;
    validate::count("installments", debt.installments)?;
    validate::positive("installment value", debt.installment_value)?;
    validate::paid_within(debt.paid_installments, debt.installments)
}

impl Ledger {
    pub fn add_debt(&mut self, new: NewDebt) -> LedgerResult<&Debt> {
        let mut debt = Debt {
            id: 0,
            name: validate::required("name", &new.name)?,
            total_value: new.total_value,
            installments: new.installments,
            installment_value: new.installment_value,
            paid_installments: new.paid_installments,
            is_paid: false,
        };
        check(&debt)?;
        debt.is_paid = debt.paid_installments == debt.installments;
        debt.id = self.allocate_id();
        debug!(id = debt.id, name = %debt.name, "debt added");
        Ok(append(&mut self.debts, debt))
    }

    pub fn update_debt(&mut self, id: RecordId, patch: DebtPatch) -> LedgerResult<&Debt> {
        let idx = position(&self.debts, id)?;
        let mut next = self.debts[idx].clone();
        if let Some(name) = patch.name {
            next.name = validate::required("name", &name)?;
        }
        if let Some(v) = patch.total_value {
            next.total_value = v;
        }
        if let Some(n) = patch.installments {
            next.installments = n;
        }
        if let Some(v) = patch.installment_value {
            next.installment_value = v;
        }
        if let Some(p) = patch.paid_installments {
            next.paid_installments = p;
        }
        check(&next)?;
        next.is_paid = next.paid_installments == next.installments;
        debug!(id, "debt updated");
        self.debts[idx] = next;
        Ok(&self.debts[idx])
    }

    /// Marks one more installment as paid, saturating at the installment count.
    pub fn pay_debt_installment(&mut self, id: RecordId) -> LedgerResult<&Debt> {
        let idx = position(&self.debts, id)?;
        let debt = &mut self.debts[idx];
        debt.paid_installments = debt.paid_installments.saturating_add(1).min(debt.installments);
        debt.is_paid = debt.paid_installments == debt.installments;
        debug!(id, paid = debt.paid_installments, "debt installment paid");
        Ok(&self.debts[idx])
    }

    /// Reverts one paid installment, saturating at zero.
    pub fn unpay_debt_installment(&mut self, id: RecordId) -> LedgerResult<&Debt> {
        let idx = position(&self.debts, id)?;
        let debt = &mut self.debts[idx];
        debt.paid_installments = debt.paid_installments.saturating_sub(1);
        debt.is_paid = debt.paid_installments == debt.installments;
        debug!(id, paid = debt.paid_installments, "debt installment reverted");
        Ok(&self.debts[idx])
    }

    pub fn delete_debt(&mut self, id: RecordId) -> Option<Debt> {
        remove(&mut self.debts, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn car(paid: u32) -> NewDebt {
        NewDebt {
            name: "Car".into(),
            total_value: Decimal::new(1200, 0),
            installments: 4,
            installment_value: Decimal::new(300, 0),
            paid_installments: paid,
        }
    }

    #[test]
    fn update_recomputes_paid_flag() {
        let mut l = Ledger::new();
        let id = l.add_debt(car(1)).unwrap().id;
        let d = l
            .update_debt(
                id,
                DebtPatch {
                    paid_installments: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(d.is_paid);
        let d = l
            .update_debt(
                id,
                DebtPatch {
                    installments: Some(6),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!d.is_paid);
    }

    #[test]
    fn rejected_update_leaves_record_untouched() {
        let mut l = Ledger::new();
        let id = l.add_debt(car(2)).unwrap().id;
        let err = l
            .update_debt(
                id,
                DebtPatch {
                    name: Some("Bike".into()),
                    installments: Some(1),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        let d = l.debt(id).unwrap();
        assert_eq!(d.name, "Car");
        assert_eq!(d.installments, 4);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut l = Ledger::new();
        assert!(l.pay_debt_installment(42).unwrap_err().is_not_found());
        assert!(l.update_debt(42, DebtPatch::default()).unwrap_err().is_not_found());
        assert!(l.delete_debt(42).is_none());
    }
}
