// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard figures derived from the ledger. Nothing here is cached: every call reduces the
//! current collections from scratch.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::{CreditPurchase, Debt, ExpenseCategory, ExtraIncome, FixedExpense, SporadicExpense};

/// Sum that saturates at the `Decimal` bounds instead of panicking.
fn total(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

pub fn total_fixed_expenses(expenses: &[FixedExpense]) -> Decimal {
    total(expenses.iter().map(|e| e.amount))
}

/// Installments due this month. A fully paid debt contributes nothing.
pub fn monthly_debt_payments(debts: &[Debt]) -> Decimal {
    total(debts.iter().filter(|d| !d.is_paid).map(|d| d.installment_value))
}

pub fn total_extra_income(incomes: &[ExtraIncome]) -> Decimal {
    total(incomes.iter().map(|i| i.amount))
}

pub fn total_sporadic_expenses(expenses: &[SporadicExpense]) -> Decimal {
    total(expenses.iter().map(|e| e.amount))
}

pub fn pending_receivables(purchases: &[CreditPurchase]) -> Decimal {
    total(
        purchases
            .iter()
            .filter(|p| !p.is_paid)
            .map(|p| p.outstanding_amount()),
    )
}

pub fn total_outstanding_debt(debts: &[Debt]) -> Decimal {
    total(debts.iter().map(|d| d.remaining()))
}

pub fn suggested_investment(available_balance: Decimal, percentage: Decimal) -> Decimal {
    if available_balance > Decimal::ZERO {
        available_balance.saturating_mul(percentage) / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Share of the salary committed to fixed expenses and debt installments. A ratio too large
/// to represent saturates at `Decimal::MAX`.
pub fn expense_percentage(monthly_income: Decimal, committed: Decimal) -> Decimal {
    if monthly_income > Decimal::ZERO {
        committed
            .checked_div(monthly_income)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}

/// Totals per category, in the order each category first appears.
pub fn expenses_by_category(expenses: &[FixedExpense]) -> Vec<(ExpenseCategory, Decimal)> {
    let mut out: Vec<(ExpenseCategory, Decimal)> = Vec::new();
    for e in expenses {
        match out.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, total)) => *total += e.amount,
            None => out.push((e.category, e.amount)),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Healthy,
    Attention,
    Critical,
}

impl Health {
    pub fn from_expense_percentage(pct: Decimal) -> Self {
        if pct <= Decimal::from(70) {
            Health::Healthy
        } else if pct <= Decimal::from(85) {
            Health::Attention
        } else {
            Health::Critical
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Health::Healthy => "healthy finances",
            Health::Attention => "watch your spending",
            Health::Critical => "spending is eating the budget",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub monthly_income: Decimal,
    pub total_extra_income: Decimal,
    pub total_sporadic_expenses: Decimal,
    pub total_income: Decimal,
    pub total_fixed_expenses: Decimal,
    pub monthly_debt_payments: Decimal,
    pub available_balance: Decimal,
    pub investment_percentage: Decimal,
    pub suggested_investment: Decimal,
    pub final_balance: Decimal,
    pub pending_receivables: Decimal,
    pub total_outstanding_debt: Decimal,
    pub expense_percentage: Decimal,
    pub health: Health,
}

impl Summary {
    pub fn compute(ledger: &Ledger) -> Self {
        let monthly_income = ledger.monthly_income();
        let total_fixed = total_fixed_expenses(ledger.fixed_expenses());
        let debt_payments = monthly_debt_payments(ledger.debts());
        let extra = total_extra_income(ledger.extra_incomes());
        let sporadic = total_sporadic_expenses(ledger.sporadic_expenses());

        let total_income = monthly_income.saturating_add(extra).saturating_sub(sporadic);
        let available = total_income
            .saturating_sub(total_fixed)
            .saturating_sub(debt_payments);
        let pct = ledger.investment_percentage();
        let invest = suggested_investment(available, pct);
        let expense_pct = expense_percentage(monthly_income, total_fixed.saturating_add(debt_payments));

        Summary {
            monthly_income,
            total_extra_income: extra,
            total_sporadic_expenses: sporadic,
            total_income,
            total_fixed_expenses: total_fixed,
            monthly_debt_payments: debt_payments,
            available_balance: available,
            investment_percentage: pct,
            suggested_investment: invest,
            final_balance: available.saturating_sub(invest),
            pending_receivables: pending_receivables(ledger.credit_purchases()),
            total_outstanding_debt: total_outstanding_debt(ledger.debts()),
            expense_percentage: expense_pct,
            health: Health::from_expense_percentage(expense_pct),
        }
    }
}

impl Ledger {
    pub fn summary(&self) -> Summary {
        Summary::compute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_thresholds_are_inclusive() {
        assert_eq!(Health::from_expense_percentage(Decimal::from(70)), Health::Healthy);
        assert_eq!(Health::from_expense_percentage(Decimal::new(701, 1)), Health::Attention);
        assert_eq!(Health::from_expense_percentage(Decimal::from(85)), Health::Attention);
        assert_eq!(Health::from_expense_percentage(Decimal::new(851, 1)), Health::Critical);
    }

    #[test]
    fn no_investment_without_positive_balance() {
        assert_eq!(suggested_investment(Decimal::ZERO, Decimal::TEN), Decimal::ZERO);
        assert_eq!(suggested_investment(Decimal::from(-50), Decimal::TEN), Decimal::ZERO);
        assert_eq!(suggested_investment(Decimal::from(3200), Decimal::TEN), Decimal::from(320));
    }

    #[test]
    fn expense_percentage_guards_zero_income() {
        assert_eq!(expense_percentage(Decimal::ZERO, Decimal::from(100)), Decimal::ZERO);
        assert_eq!(expense_percentage(Decimal::from(5000), Decimal::from(1800)), Decimal::from(36));
    }

    #[test]
    fn expense_percentage_saturates_on_tiny_income() {
        let pct = expense_percentage(Decimal::new(1, 28), Decimal::from(1_000_000_000_000u64));
        assert_eq!(pct, Decimal::MAX);
        assert_eq!(Health::from_expense_percentage(pct), Health::Critical);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        assert_eq!(total([Decimal::MAX, Decimal::MAX].into_iter()), Decimal::MAX);
    }
}
