// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::ledger::Ledger;
use finboard::models::{NewShoppingItem, RecordId, ShoppingListPatch};
use rust_decimal::Decimal;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 3).unwrap()
}

fn item(name: &str, quantity: u32, cents: i64) -> NewShoppingItem {
    NewShoppingItem {
        name: name.into(),
        quantity,
        price: Decimal::new(cents, 2),
    }
}

fn stocked(l: &mut Ledger) -> (RecordId, Vec<RecordId>) {
    let list = l.create_shopping_list("Saturday market", day()).unwrap().id;
    let ids = vec![
        l.add_shopping_item(list, item("Rice", 2, 550)).unwrap().id,
        l.add_shopping_item(list, item("Beans", 1, 899)).unwrap().id,
        l.add_shopping_item(list, item("Coffee", 3, 1500)).unwrap().id,
    ];
    (list, ids)
}

#[test]
fn deleting_an_item_drops_its_total() {
    let mut l = Ledger::new();
    let (list, ids) = stocked(&mut l);
    assert_eq!(l.shopping_list(list).unwrap().total_amount, Decimal::new(6499, 2));

    let removed = l.delete_shopping_item(list, ids[2]).unwrap().unwrap();
    assert_eq!(removed.total, Decimal::new(4500, 2));
    let after = l.shopping_list(list).unwrap();
    assert_eq!(after.total_amount, Decimal::new(1999, 2));
    assert_eq!(after.items.len(), 2);
    assert_eq!(after.items[0].id, ids[0]);
    assert_eq!(after.items[1].id, ids[1]);
}

#[test]
fn deleting_unknown_ids_is_a_no_op() {
    let mut l = Ledger::new();
    let (list, _) = stocked(&mut l);
    assert!(l.delete_shopping_item(list, 999).unwrap().is_none());
    assert!(l.delete_shopping_item(999, 1).unwrap().is_none());
    assert!(l.delete_shopping_list(999).is_none());
    assert_eq!(l.shopping_list(list).unwrap().items.len(), 3);
}

#[test]
fn checking_items_does_not_change_totals() {
    let mut l = Ledger::new();
    let (list, ids) = stocked(&mut l);
    l.set_item_checked(list, ids[0], true).unwrap();
    l.set_item_checked(list, ids[1], true).unwrap();
    l.set_item_checked(list, ids[1], false).unwrap();
    let s = l.shopping_list(list).unwrap();
    assert_eq!(s.checked_count(), 1);
    assert_eq!(s.total_amount, Decimal::new(6499, 2));
    assert!(
        l.set_item_checked(list, 12345, true)
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn import_copies_selected_items_with_fresh_ids() {
    let mut l = Ledger::new();
    let (source, ids) = stocked(&mut l);
    l.set_item_checked(source, ids[0], true).unwrap();
    let target = l.create_shopping_list("Next week", day()).unwrap().id;

    let t = l
        .import_shopping_items(target, source, &[ids[0], ids[2]])
        .unwrap();
    assert_eq!(t.items.len(), 2);
    assert_eq!(t.items[0].name, "Rice");
    assert_eq!(t.items[1].name, "Coffee");
    assert!(t.items.iter().all(|i| !i.checked));
    assert!(t.items.iter().all(|i| !ids.contains(&i.id)));
    assert_eq!(t.total_amount, Decimal::new(5600, 2));

    // source untouched
    assert_eq!(l.shopping_list(source).unwrap().items.len(), 3);
}

#[test]
fn import_rejects_empty_or_unknown_selection() {
    let mut l = Ledger::new();
    let (source, ids) = stocked(&mut l);
    let target = l.create_shopping_list("Next week", day()).unwrap().id;

    assert!(
        l.import_shopping_items(target, source, &[])
            .unwrap_err()
            .is_validation()
    );
    assert!(
        l.import_shopping_items(target, source, &[ids[0], 4242])
            .unwrap_err()
            .is_not_found()
    );
    assert!(l.shopping_list(target).unwrap().items.is_empty());
}

#[test]
fn list_patch_and_blank_names() {
    let mut l = Ledger::new();
    assert!(l.create_shopping_list("  ", day()).unwrap_err().is_validation());
    let (list, _) = stocked(&mut l);
    let updated = l
        .update_shopping_list(
            list,
            ShoppingListPatch {
                name: Some("Sunday market".into()),
                completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Sunday market");
    assert!(updated.completed);
    assert!(
        l.add_shopping_item(list, item("Milk", 1, 499))
            .unwrap_err()
            .is_validation()
    );
}

#[test]
fn oversized_price_is_rejected_and_list_kept() {
    let mut l = Ledger::new();
    let (list, ids) = stocked(&mut l);
    let before = l.shopping_list(list).unwrap().clone();

    let huge = NewShoppingItem {
        name: "Caviar".into(),
        quantity: 2,
        price: Decimal::MAX,
    };
    assert!(l.add_shopping_item(list, huge).unwrap_err().is_validation());

    let patch = finboard::models::ShoppingItemPatch {
        price: Some(Decimal::MAX),
        ..Default::default()
    };
    assert!(
        l.update_shopping_item(list, ids[0], patch)
            .unwrap_err()
            .is_validation()
    );
    assert_eq!(l.shopping_list(list).unwrap(), &before);
}

#[test]
fn largest_accepted_price_times_quantity_fits() {
    let mut l = Ledger::new();
    let list = l.create_shopping_list("Fleet", day()).unwrap().id;
    let item = NewShoppingItem {
        name: "Aircraft".into(),
        quantity: u32::MAX,
        price: finboard::ledger::MAX_AMOUNT,
    };
    let total = l.add_shopping_item(list, item).unwrap().total;
    assert_eq!(total, Decimal::from(u32::MAX) * finboard::ledger::MAX_AMOUNT);
    assert_eq!(l.shopping_list(list).unwrap().total_amount, total);
}

#[test]
fn repeated_import_ids_copy_the_item_once() {
    let mut l = Ledger::new();
    let (source, ids) = stocked(&mut l);
    let target = l.create_shopping_list("Next week", day()).unwrap().id;

    let t = l
        .import_shopping_items(target, source, &[ids[1], ids[1]])
        .unwrap();
    assert_eq!(t.items.len(), 1);
    assert_eq!(t.items[0].name, "Beans");
    assert_eq!(t.total_amount, Decimal::new(899, 2));
}
