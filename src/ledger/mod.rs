// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ledger engine: one owned container for every collection of the dashboard.
//!
//! Every mutating method validates its input against a scratch copy of the affected record
//! before touching the collection, so a rejected call leaves the ledger exactly as it was.
//! Derived fields (`is_paid`, `installment_value`, `total`, `total_amount`) are recomputed
//! eagerly on each mutation and never cached elsewhere.

mod credit;
mod debts;
mod expenses;
mod incomes;
mod shopping;
mod validate;

pub use shopping::ListOrder;
pub use validate::MAX_AMOUNT;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    CreditPurchase, Debt, ExtraIncome, FixedExpense, Record, RecordId, ShoppingList,
    SporadicExpense,
};

pub const DEFAULT_INVESTMENT_PERCENTAGE: Decimal = Decimal::TEN;

/// Quick picks offered next to the investment percentage input.
pub const INVESTMENT_PRESETS: [u32; 5] = [5, 10, 15, 20, 30];

#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    monthly_income: Decimal,
    investment_percentage: Decimal,
    debts: Vec<Debt>,
    credit_purchases: Vec<CreditPurchase>,
    fixed_expenses: Vec<FixedExpense>,
    extra_incomes: Vec<ExtraIncome>,
    sporadic_expenses: Vec<SporadicExpense>,
    shopping_lists: Vec<ShoppingList>,
    #[serde(skip)]
    next_id: RecordId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            monthly_income: Decimal::ZERO,
            investment_percentage: DEFAULT_INVESTMENT_PERCENTAGE,
            debts: Vec::new(),
            credit_purchases: Vec::new(),
            fixed_expenses: Vec::new(),
            extra_incomes: Vec::new(),
            sporadic_expenses: Vec::new(),
            shopping_lists: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn monthly_income(&self) -> Decimal {
        self.monthly_income
    }

    /// Net monthly salary. Zero is allowed, negative is not.
    pub fn set_monthly_income(&mut self, income: Decimal) -> LedgerResult<()> {
        validate::non_negative("monthly income", income)?;
        self.monthly_income = income;
        debug!(%income, "monthly income updated");
        Ok(())
    }

    pub fn investment_percentage(&self) -> Decimal {
        self.investment_percentage
    }

    pub fn set_investment_percentage(&mut self, pct: Decimal) -> LedgerResult<()> {
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(LedgerError::invalid(
                "investment percentage",
                format!("{} is outside 0..=100", pct),
            ));
        }
        self.investment_percentage = pct;
        debug!(%pct, "investment percentage updated");
        Ok(())
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn debt(&self, id: RecordId) -> Option<&Debt> {
        find(&self.debts, id)
    }

    pub fn credit_purchases(&self) -> &[CreditPurchase] {
        &self.credit_purchases
    }

    pub fn credit_purchase(&self, id: RecordId) -> Option<&CreditPurchase> {
        find(&self.credit_purchases, id)
    }

    pub fn fixed_expenses(&self) -> &[FixedExpense] {
        &self.fixed_expenses
    }

    pub fn fixed_expense(&self, id: RecordId) -> Option<&FixedExpense> {
        find(&self.fixed_expenses, id)
    }

    pub fn extra_incomes(&self) -> &[ExtraIncome] {
        &self.extra_incomes
    }

    pub fn extra_income(&self, id: RecordId) -> Option<&ExtraIncome> {
        find(&self.extra_incomes, id)
    }

    pub fn sporadic_expenses(&self) -> &[SporadicExpense] {
        &self.sporadic_expenses
    }

    pub fn sporadic_expense(&self, id: RecordId) -> Option<&SporadicExpense> {
        find(&self.sporadic_expenses, id)
    }

    pub fn shopping_lists(&self) -> &[ShoppingList] {
        &self.shopping_lists
    }

    pub fn shopping_list(&self, id: RecordId) -> Option<&ShoppingList> {
        find(&self.shopping_lists, id)
    }
}

fn find<T: Record>(items: &[T], id: RecordId) -> Option<&T> {
    items.iter().find(|r| r.id() == id)
}

fn position<T: Record>(items: &[T], id: RecordId) -> LedgerResult<usize> {
    items
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| LedgerError::not_found(T::KIND, id))
}

fn append<T>(items: &mut Vec<T>, record: T) -> &T {
    let idx = items.len();
    items.push(record);
    &items[idx]
}

/// Removes the record with `id`; absent ids are a silent no-op.
fn remove<T: Record>(items: &mut Vec<T>, id: RecordId) -> Option<T> {
    let idx = items.iter().position(|r| r.id() == id)?;
    let removed = items.remove(idx);
    debug!(kind = T::KIND, id, "record deleted");
    Some(removed)
}
