// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

pub type RecordId = u64;

/// Anything stored in one of the ledger's collections.
pub trait Record {
    const KIND: &'static str;

    fn id(&self) -> RecordId;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: RecordId,
    pub name: String,
    pub total_value: Decimal,
    pub installments: u32,
    pub installment_value: Decimal,
    pub paid_installments: u32,
    pub is_paid: bool,
}

impl Debt {
    /// What is still owed: total minus the installments already paid.
    pub fn remaining(&self) -> Decimal {
        self.total_value
            .saturating_sub(Decimal::from(self.paid_installments).saturating_mul(self.installment_value))
    }

    pub fn progress_percentage(&self) -> Decimal {
        if self.installments == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.paid_installments) / Decimal::from(self.installments)
            * Decimal::ONE_HUNDRED
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPurchase {
    pub id: RecordId,
    pub description: String,
    pub total_amount: Decimal,
    pub installments: u32,
    pub installment_value: Decimal, // fixed at creation
    pub paid_installments: u32,
    pub person_name: String,
    pub date: NaiveDate, // due date of the first installment
    pub is_paid: bool,
}

impl CreditPurchase {
    pub fn outstanding_installments(&self) -> u32 {
        self.installments.saturating_sub(self.paid_installments)
    }

    pub fn outstanding_amount(&self) -> Decimal {
        Decimal::from(self.outstanding_installments()).saturating_mul(self.installment_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transport,
    Health,
    Education,
    Entertainment,
    Services,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Services,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Services => "Services",
            ExpenseCategory::Other => "Other",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "moradia",
            ExpenseCategory::Food => "alimentação",
            ExpenseCategory::Transport => "transporte",
            ExpenseCategory::Health => "saúde",
            ExpenseCategory::Education => "educação",
            ExpenseCategory::Entertainment => "entretenimento",
            ExpenseCategory::Services => "serviços",
            ExpenseCategory::Other => "outros",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == needle || c.alias() == needle)
            .ok_or_else(|| {
                let labels: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
                format!("unknown category '{}' (expected one of {})", s.trim(), labels.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: RecordId,
    pub name: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraIncome {
    pub id: RecordId,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SporadicExpense {
    pub id: RecordId,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub total: Decimal, // quantity * price
    pub checked: bool,
}

impl ShoppingItem {
    pub(crate) fn recompute_total(&mut self) -> LedgerResult<()> {
        self.total = Decimal::from(self.quantity)
            .checked_mul(self.price)
            .ok_or_else(|| LedgerError::invalid("price", "quantity times price is out of range"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: RecordId,
    pub name: String,
    pub date: NaiveDate,
    pub items: Vec<ShoppingItem>,
    pub total_amount: Decimal,
    pub completed: bool,
}

impl ShoppingList {
    pub(crate) fn recompute_total(&mut self) -> LedgerResult<()> {
        self.total_amount = self
            .items
            .iter()
            .try_fold(Decimal::ZERO, |acc, i| acc.checked_add(i.total))
            .ok_or_else(|| LedgerError::invalid("shopping list", "total is out of range"))?;
        Ok(())
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    pub fn item(&self, id: RecordId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

macro_rules! impl_record {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Record for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> RecordId {
                    self.id
                }
            }
        )*
    };
}

impl_record! {
    Debt => "debt",
    CreditPurchase => "credit purchase",
    FixedExpense => "fixed expense",
    ExtraIncome => "extra income",
    SporadicExpense => "sporadic expense",
    ShoppingItem => "shopping item",
    ShoppingList => "shopping list",
}

// Inputs for `add`: everything but the id and the derived fields.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDebt {
    pub name: String,
    pub total_value: Decimal,
    pub installments: u32,
    pub installment_value: Decimal,
    pub paid_installments: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCreditPurchase {
    pub description: String,
    pub total_amount: Decimal,
    pub installments: u32,
    pub person_name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFixedExpense {
    pub name: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExtraIncome {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSporadicExpense {
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

// Partial updates. `None` leaves the field untouched.

#[derive(Debug, Clone, Default)]
pub struct DebtPatch {
    pub name: Option<String>,
    pub total_value: Option<Decimal>,
    pub installments: Option<u32>,
    pub installment_value: Option<Decimal>,
    pub paid_installments: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct CreditPurchasePatch {
    pub description: Option<String>,
    pub person_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub paid_installments: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct FixedExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<ExpenseCategory>,
}

#[derive(Debug, Clone, Default)]
pub struct ExtraIncomePatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default)]
pub struct SporadicExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingItemPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<Decimal>,
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingListPatch {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub completed: Option<bool>,
}
