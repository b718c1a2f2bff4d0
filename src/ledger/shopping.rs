// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Shopping lists and their items.
//!
//! A list's `total_amount` is recomputed from its items after every item mutation. Once a
//! list is marked completed its items are frozen until the list is reopened.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::{Ledger, append, position, remove, validate};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    NewShoppingItem, RecordId, ShoppingItem, ShoppingItemPatch, ShoppingList, ShoppingListPatch,
};

/// Orderings offered by the list history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Newest first.
    #[default]
    Date,
    Name,
    /// Largest total first.
    Total,
}

impl FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(ListOrder::Date),
            "name" => Ok(ListOrder::Name),
            "total" => Ok(ListOrder::Total),
            other => Err(format!("unknown sort '{}' (use date|name|total)", other)),
        }
    }
}

fn check_item(item: &ShoppingItem) -> LedgerResult<()> {
    validate::count("quantity", item.quantity)?;
    validate::non_negative("price", item.price)
}

fn ensure_open(list: &ShoppingList) -> LedgerResult<()> {
    if list.completed {
        return Err(LedgerError::invalid(
            "shopping list",
            format!("'{}' is completed; reopen it to change its items", list.name),
        ));
    }
    Ok(())
}

impl Ledger {
    pub fn create_shopping_list(&mut self, name: &str, date: NaiveDate) -> LedgerResult<&ShoppingList> {
        let name = validate::required("name", name)?;
        let list = ShoppingList {
            id: self.allocate_id(),
            name,
            date,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            completed: false,
        };
        debug!(id = list.id, "shopping list created");
        Ok(append(&mut self.shopping_lists, list))
    }

    pub fn update_shopping_list(
        &mut self,
        id: RecordId,
        patch: ShoppingListPatch,
    ) -> LedgerResult<&ShoppingList> {
        let idx = position(&self.shopping_lists, id)?;
        let name = match patch.name {
            Some(n) => Some(validate::required("name", &n)?),
            None => None,
        };
        let list = &mut self.shopping_lists[idx];
        if let Some(n) = name {
            list.name = n;
        }
        if let Some(date) = patch.date {
            list.date = date;
        }
        if let Some(completed) = patch.completed {
            list.completed = completed;
        }
        debug!(id, "shopping list updated");
        Ok(&self.shopping_lists[idx])
    }

    pub fn toggle_list_completion(&mut self, id: RecordId) -> LedgerResult<&ShoppingList> {
        let idx = position(&self.shopping_lists, id)?;
        let list = &mut self.shopping_lists[idx];
        list.completed = !list.completed;
        debug!(id, completed = list.completed, "shopping list toggled");
        Ok(&self.shopping_lists[idx])
    }

    pub fn delete_shopping_list(&mut self, id: RecordId) -> Option<ShoppingList> {
        remove(&mut self.shopping_lists, id)
    }

    pub fn add_shopping_item(
        &mut self,
        list_id: RecordId,
        new: NewShoppingItem,
    ) -> LedgerResult<&ShoppingItem> {
        let idx = position(&self.shopping_lists, list_id)?;
        ensure_open(&self.shopping_lists[idx])?;
        let mut item = ShoppingItem {
            id: 0,
            name: validate::required("name", &new.name)?,
            quantity: new.quantity,
            price: new.price,
            total: Decimal::ZERO,
            checked: false,
        };
        check_item(&item)?;
        item.recompute_total()?;

        let mut next = self.shopping_lists[idx].clone();
        let item_idx = next.items.len();
        next.items.push(item);
        next.recompute_total()?;
        next.items[item_idx].id = self.allocate_id();
        debug!(list_id, id = next.items[item_idx].id, "shopping item added");
        self.shopping_lists[idx] = next;
        Ok(&self.shopping_lists[idx].items[item_idx])
    }

    pub fn update_shopping_item(
        &mut self,
        list_id: RecordId,
        item_id: RecordId,
        patch: ShoppingItemPatch,
    ) -> LedgerResult<&ShoppingItem> {
        let idx = position(&self.shopping_lists, list_id)?;
        let list = &self.shopping_lists[idx];
        ensure_open(list)?;
        let item_idx = position(&list.items, item_id)?;
        let mut next = list.items[item_idx].clone();
        if let Some(name) = patch.name {
            next.name = validate::required("name", &name)?;
        }
        if let Some(q) = patch.quantity {
            next.quantity = q;
        }
        if let Some(p) = patch.price {
            next.price = p;
        }
        if let Some(c) = patch.checked {
            next.checked = c;
        }
        check_item(&next)?;
        next.recompute_total()?;
        let mut next_list = list.clone();
        next_list.items[item_idx] = next;
        next_list.recompute_total()?;
        debug!(list_id, item_id, total = %next_list.total_amount, "shopping item updated");
        self.shopping_lists[idx] = next_list;
        Ok(&self.shopping_lists[idx].items[item_idx])
    }

    pub fn set_item_checked(
        &mut self,
        list_id: RecordId,
        item_id: RecordId,
        checked: bool,
    ) -> LedgerResult<&ShoppingItem> {
        self.update_shopping_item(
            list_id,
            item_id,
            ShoppingItemPatch {
                checked: Some(checked),
                ..Default::default()
            },
        )
    }

    /// Removes an item. Unknown list or item ids are a no-op; a completed list is an error.
    pub fn delete_shopping_item(
        &mut self,
        list_id: RecordId,
        item_id: RecordId,
    ) -> LedgerResult<Option<ShoppingItem>> {
        let Some(list) = self.shopping_lists.iter_mut().find(|l| l.id == list_id) else {
            return Ok(None);
        };
        ensure_open(list)?;
        let mut next = list.clone();
        let Some(removed) = remove(&mut next.items, item_id) else {
            return Ok(None);
        };
        next.recompute_total()?;
        *list = next;
        Ok(Some(removed))
    }

    /// Copies the selected items of `source` into `target` as fresh, unchecked items.
    pub fn import_shopping_items(
        &mut self,
        target: RecordId,
        source: RecordId,
        item_ids: &[RecordId],
    ) -> LedgerResult<&ShoppingList> {
        if item_ids.is_empty() {
            return Err(LedgerError::invalid("items", "select at least one item to import"));
        }
        let target_idx = position(&self.shopping_lists, target)?;
        ensure_open(&self.shopping_lists[target_idx])?;
        let source_idx = position(&self.shopping_lists, source)?;

        let source_list = &self.shopping_lists[source_idx];
        let mut picked = Vec::with_capacity(item_ids.len());
        for item in &source_list.items {
            if item_ids.contains(&item.id) {
                picked.push(item.clone());
            }
        }
        if let Some(missing) = item_ids.iter().find(|id| source_list.item(**id).is_none()) {
            return Err(LedgerError::not_found("shopping item", *missing));
        }

        let mut next = self.shopping_lists[target_idx].clone();
        let start = next.items.len();
        next.items.extend(picked);
        next.recompute_total()?;
        for item in &mut next.items[start..] {
            item.id = self.allocate_id();
            item.checked = false;
        }
        debug!(target, source, count = next.items.len() - start, "shopping items imported");
        self.shopping_lists[target_idx] = next;
        Ok(&self.shopping_lists[target_idx])
    }

    /// Lists in history order. Ties keep insertion order.
    pub fn sorted_shopping_lists(&self, order: ListOrder) -> Vec<&ShoppingList> {
        let mut lists: Vec<&ShoppingList> = self.shopping_lists.iter().collect();
        match order {
            ListOrder::Date => lists.sort_by(|a, b| b.date.cmp(&a.date)),
            ListOrder::Name => lists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            ListOrder::Total => lists.sort_by(|a, b| b.total_amount.cmp(&a.total_amount)),
        }
        lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn rice() -> NewShoppingItem {
        NewShoppingItem {
            name: "Rice".into(),
            quantity: 2,
            price: Decimal::new(550, 2),
        }
    }

    #[test]
    fn item_total_follows_quantity_and_price() {
        let mut l = Ledger::new();
        let list = l.create_shopping_list("Weekly", day(1)).unwrap().id;
        let item = l.add_shopping_item(list, rice()).unwrap().id;
        assert_eq!(l.shopping_list(list).unwrap().total_amount, Decimal::new(1100, 2));

        let updated = l
            .update_shopping_item(
                list,
                item,
                ShoppingItemPatch {
                    quantity: Some(3),
                    price: Some(Decimal::new(4, 0)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.total, Decimal::new(12, 0));
        assert_eq!(l.shopping_list(list).unwrap().total_amount, Decimal::new(12, 0));
    }

    #[test]
    fn zero_quantity_and_negative_price_are_rejected() {
        let mut l = Ledger::new();
        let list = l.create_shopping_list("Weekly", day(1)).unwrap().id;
        let mut bad = rice();
        bad.quantity = 0;
        assert!(l.add_shopping_item(list, bad).is_err());
        let mut bad = rice();
        bad.price = Decimal::new(-1, 0);
        assert!(l.add_shopping_item(list, bad).is_err());
        let mut free = rice();
        free.price = Decimal::ZERO;
        assert!(l.add_shopping_item(list, free).is_ok());
    }

    #[test]
    fn completed_list_freezes_items() {
        let mut l = Ledger::new();
        let list = l.create_shopping_list("Weekly", day(1)).unwrap().id;
        let item = l.add_shopping_item(list, rice()).unwrap().id;
        assert!(l.toggle_list_completion(list).unwrap().completed);

        assert!(l.add_shopping_item(list, rice()).unwrap_err().is_validation());
        assert!(l.set_item_checked(list, item, true).unwrap_err().is_validation());
        assert!(l.delete_shopping_item(list, item).is_err());

        assert!(!l.toggle_list_completion(list).unwrap().completed);
        assert!(l.set_item_checked(list, item, true).unwrap().checked);
    }

    #[test]
    fn history_orderings() {
        let mut l = Ledger::new();
        let a = l.create_shopping_list("beta", day(1)).unwrap().id;
        let b = l.create_shopping_list("Alpha", day(3)).unwrap().id;
        let c = l.create_shopping_list("gamma", day(2)).unwrap().id;
        l.add_shopping_item(c, rice()).unwrap();

        let ids = |order| -> Vec<RecordId> {
            l.sorted_shopping_lists(order).iter().map(|s| s.id).collect()
        };
        assert_eq!(ids(ListOrder::Date), vec![b, c, a]);
        assert_eq!(ids(ListOrder::Name), vec![b, a, c]);
        assert_eq!(ids(ListOrder::Total), vec![c, a, b]);
    }

    #[test]
    fn list_order_parses() {
        assert_eq!("Total".parse::<ListOrder>(), Ok(ListOrder::Total));
        assert!("price".parse::<ListOrder>().is_err());
    }
}
