// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::ledger::Ledger;
use finboard::models::{
    CreditPurchasePatch, ExtraIncomePatch, NewCreditPurchase, NewExtraIncome,
    NewSporadicExpense, SporadicExpensePatch,
};
use finboard::schedule::installment_schedule;
use rust_decimal::Decimal;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn with_income() -> Ledger {
    let mut l = Ledger::new();
    l.set_monthly_income(Decimal::from(3000)).unwrap();
    l
}

#[test]
fn extra_income_update_and_delete() {
    let mut l = with_income();
    let bonus = l
        .add_extra_income(NewExtraIncome {
            name: "Bonus".into(),
            amount: Decimal::from(500),
        })
        .unwrap()
        .id;
    let rent = l
        .add_extra_income(NewExtraIncome {
            name: "Room rent".into(),
            amount: Decimal::from(700),
        })
        .unwrap()
        .id;
    assert_eq!(l.summary().total_income, Decimal::from(4200));

    let before = l.extra_income(bonus).unwrap().clone();
    let zero = ExtraIncomePatch {
        name: Some("Renamed".into()),
        amount: Some(Decimal::ZERO),
    };
    assert!(l.update_extra_income(bonus, zero).unwrap_err().is_validation());
    assert_eq!(l.extra_income(bonus).unwrap(), &before);

    let i = l
        .update_extra_income(
            bonus,
            ExtraIncomePatch {
                amount: Some(Decimal::from(650)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(i.name, "Bonus");
    assert_eq!(l.summary().total_extra_income, Decimal::from(1350));

    assert_eq!(l.delete_extra_income(rent).unwrap().name, "Room rent");
    assert!(l.delete_extra_income(rent).is_none());
    let s = l.summary();
    assert_eq!(s.total_extra_income, Decimal::from(650));
    assert_eq!(s.total_income, Decimal::from(3650));

    assert!(
        l.update_extra_income(rent, ExtraIncomePatch::default())
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn sporadic_expense_update_and_delete() {
    let mut l = with_income();
    let gift = l
        .add_sporadic_expense(NewSporadicExpense {
            name: "Gift".into(),
            amount: Decimal::from(120),
            date: ymd(2024, 6, 1),
        })
        .unwrap()
        .id;
    let repair = l
        .add_sporadic_expense(NewSporadicExpense {
            name: "Repair".into(),
            amount: Decimal::from(380),
            date: ymd(2024, 6, 9),
        })
        .unwrap()
        .id;
    assert_eq!(l.summary().total_income, Decimal::from(2500));

    let before = l.sporadic_expense(gift).unwrap().clone();
    let bad = SporadicExpensePatch {
        amount: Some(Decimal::ZERO),
        date: Some(ymd(2024, 7, 1)),
        ..Default::default()
    };
    assert!(l.update_sporadic_expense(gift, bad).unwrap_err().is_validation());
    let blank = SporadicExpensePatch {
        name: Some("   ".into()),
        ..Default::default()
    };
    assert!(l.update_sporadic_expense(gift, blank).is_err());
    assert_eq!(l.sporadic_expense(gift).unwrap(), &before);

    let e = l
        .update_sporadic_expense(
            gift,
            SporadicExpensePatch {
                amount: Some(Decimal::from(150)),
                date: Some(ymd(2024, 6, 2)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(e.date, ymd(2024, 6, 2));
    assert_eq!(l.summary().total_sporadic_expenses, Decimal::from(530));

    l.delete_sporadic_expense(repair).unwrap();
    assert!(l.delete_sporadic_expense(repair).is_none());
    let s = l.summary();
    assert_eq!(s.total_sporadic_expenses, Decimal::from(150));
    assert_eq!(s.total_income, Decimal::from(2850));
    assert_eq!(s.available_balance, Decimal::from(2850));
}

#[test]
fn schedule_follows_a_patched_purchase_date() {
    let mut l = Ledger::new();
    let id = l
        .add_credit_purchase(NewCreditPurchase {
            description: "Sofa".into(),
            total_amount: Decimal::from(900),
            installments: 3,
            person_name: "Ana".into(),
            date: ymd(2024, 1, 15),
        })
        .unwrap()
        .id;
    l.pay_credit_installment(id).unwrap();

    let p = l
        .update_credit_purchase(
            id,
            CreditPurchasePatch {
                date: Some(ymd(2024, 3, 31)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(p.installment_value, Decimal::from(300));
    assert_eq!(p.paid_installments, 1);

    let entries = installment_schedule(l.credit_purchases());
    let due: Vec<NaiveDate> = entries.iter().map(|e| e.due_date).collect();
    assert_eq!(due, vec![ymd(2024, 3, 31), ymd(2024, 4, 30), ymd(2024, 5, 31)]);
    assert!(entries[0].is_paid);
    assert!(!entries[1].is_paid);

    let over = CreditPurchasePatch {
        paid_installments: Some(4),
        ..Default::default()
    };
    assert!(l.update_credit_purchase(id, over).unwrap_err().is_validation());
    assert_eq!(l.credit_purchase(id).unwrap().date, ymd(2024, 3, 31));
}
