// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{count, date_or_today, decimal, id, opt_count, opt_date, opt_decimal, opt_string, required};
use crate::ledger::ListOrder;
use crate::models::{NewShoppingItem, RecordId, ShoppingItemPatch, ShoppingListPatch};
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_id, pretty_table};
use anyhow::{Context, Result, anyhow};

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("new", sub)) => {
            let date = date_or_today(sub, "date")?;
            let l = s.ledger.create_shopping_list(required(sub, "name")?, date)?;
            println!("Created list #{} '{}' ({})", l.id, l.name, l.date);
        }
        Some(("lists", sub)) => lists(s, sub)?,
        Some(("show", sub)) => show(s, sub)?,
        Some(("edit", sub)) => {
            let patch = ShoppingListPatch {
                name: opt_string(sub, "name"),
                date: opt_date(sub, "date")?,
                completed: None,
            };
            let l = s.ledger.update_shopping_list(id(sub, "list")?, patch)?;
            println!("Updated list #{} '{}'", l.id, l.name);
        }
        Some(("add", sub)) => {
            let list_id = id(sub, "list")?;
            let new = NewShoppingItem {
                name: required(sub, "name")?.to_string(),
                quantity: count(sub, "quantity")?,
                price: decimal(sub, "price")?,
            };
            let item = s.ledger.add_shopping_item(list_id, new)?;
            println!("Added item #{} '{}' x{}", item.id, item.name, item.quantity);
            print_total(s, list_id);
        }
        Some(("check", sub)) => set_checked(s, sub, true)?,
        Some(("uncheck", sub)) => set_checked(s, sub, false)?,
        Some(("edit-item", sub)) => {
            let list_id = id(sub, "list")?;
            let patch = ShoppingItemPatch {
                name: opt_string(sub, "name"),
                quantity: opt_count(sub, "quantity")?,
                price: opt_decimal(sub, "price")?,
                checked: None,
            };
            let item = s.ledger.update_shopping_item(list_id, id(sub, "item")?, patch)?;
            println!("Updated item #{} '{}'", item.id, item.name);
            print_total(s, list_id);
        }
        Some(("rm-item", sub)) => {
            let list_id = id(sub, "list")?;
            let item_id = id(sub, "item")?;
            match s.ledger.delete_shopping_item(list_id, item_id)? {
                Some(item) => {
                    println!("Removed item '{}'", item.name);
                    print_total(s, list_id);
                }
                None => println!("No item #{} in list #{}", item_id, list_id),
            }
        }
        Some(("done", sub)) => {
            let l = s.ledger.toggle_list_completion(id(sub, "list")?)?;
            if l.completed {
                println!("List '{}' finished", l.name);
            } else {
                println!("List '{}' reopened", l.name);
            }
        }
        Some(("import", sub)) => import(s, sub)?,
        Some(("rm", sub)) => {
            let list_id = id(sub, "list")?;
            match s.ledger.delete_shopping_list(list_id) {
                Some(l) => println!("Removed list '{}'", l.name),
                None => println!("No list #{}", list_id),
            }
        }
        _ => {}
    }
    Ok(())
}

fn print_total(s: &Session, list_id: RecordId) {
    if let Some(l) = s.ledger.shopping_list(list_id) {
        println!("List '{}' total: {}", l.name, s.money(&l.total_amount));
    }
}

fn set_checked(s: &mut Session, sub: &clap::ArgMatches, checked: bool) -> Result<()> {
    let list_id = id(sub, "list")?;
    s.ledger
        .set_item_checked(list_id, id(sub, "item")?, checked)?;
    if let Some(l) = s.ledger.shopping_list(list_id) {
        println!("{}/{} items collected", l.checked_count(), l.items.len());
    }
    Ok(())
}

fn import(s: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let target = id(sub, "target")?;
    let source = id(sub, "source")?;
    let item_ids: Vec<RecordId> = if sub.get_flag("all") {
        s.ledger
            .shopping_list(source)
            .with_context(|| format!("No list #{}", source))?
            .items
            .iter()
            .map(|i| i.id)
            .collect()
    } else {
        sub.get_many::<String>("items")
            .map(|vals| vals.map(|v| parse_id(v)).collect::<Result<Vec<_>>>())
            .transpose()?
            .unwrap_or_default()
    };
    if item_ids.is_empty() {
        return Err(anyhow!("Nothing to import: name item ids or pass --all"));
    }
    let before = s.ledger.shopping_list(target).map_or(0, |l| l.items.len());
    let l = s.ledger.import_shopping_items(target, source, &item_ids)?;
    println!(
        "Imported {} item(s) into '{}' ({} items now)",
        l.items.len() - before,
        l.name,
        l.items.len()
    );
    Ok(())
}

fn lists(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let order = required(sub, "sort")?.parse::<ListOrder>().map_err(|e: String| anyhow!(e))?;
    let lists = s.ledger.sorted_shopping_lists(order);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &lists)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = lists
        .iter()
        .map(|l| {
            vec![
                l.id.to_string(),
                l.date.to_string(),
                l.name.clone(),
                if l.items.is_empty() {
                    "0".into()
                } else {
                    format!("{}/{}", l.checked_count(), l.items.len())
                },
                s.money(&l.total_amount),
                if l.completed { "finished".into() } else { "open".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Name", "Items", "Total", "Status"], rows)
    );
    Ok(())
}

fn show(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let list_id = id(sub, "list")?;
    let l = s
        .ledger
        .shopping_list(list_id)
        .with_context(|| format!("No list #{}", list_id))?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), l)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = l
        .items
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                if i.checked { "[x]".into() } else { "[ ]".into() },
                i.name.clone(),
                i.quantity.to_string(),
                s.money(&i.price),
                s.money(&i.total),
            ]
        })
        .collect();
    println!(
        "{} ({}) {}/{} items collected",
        l.name,
        l.date,
        l.checked_count(),
        l.items.len()
    );
    println!(
        "{}",
        pretty_table(&["ID", "", "Item", "Qty", "Price", "Total"], rows)
    );
    println!("Total: {}", s.money(&l.total_amount));
    Ok(())
}
