// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Grammar of the commands typed inside a session, one per line.

use clap::{Arg, ArgAction, Command};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn id_arg(name: &'static str) -> Arg {
    Arg::new(name).required(true).help("Record id as shown by list")
}

fn opt(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

fn req(name: &'static str) -> Arg {
    Arg::new(name).long(name).required(true)
}

fn income_cmd() -> Command {
    Command::new("income")
        .about("Monthly salary and extra incomes")
        .subcommand_required(true)
        .subcommand(
            Command::new("set")
                .about("Set the net monthly salary")
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(
            Command::new("extra")
                .about("Extra incomes for the month")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(output_flags(Command::new("list")))
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg("id"))
                        .arg(opt("name"))
                        .arg(opt("amount")),
                )
                .subcommand(Command::new("rm").arg(id_arg("id"))),
        )
}

fn debt_cmd() -> Command {
    Command::new("debt")
        .about("Debts paid in installments")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(req("total"))
                .arg(req("installments"))
                .arg(req("installment-value"))
                .arg(opt("paid").default_value("0")),
        )
        .subcommand(output_flags(Command::new("list")))
        .subcommand(
            Command::new("pay")
                .about("Mark one more installment as paid")
                .arg(id_arg("id")),
        )
        .subcommand(
            Command::new("unpay")
                .about("Revert the last paid installment")
                .arg(id_arg("id")),
        )
        .subcommand(
            Command::new("edit")
                .arg(id_arg("id"))
                .arg(opt("name"))
                .arg(opt("total"))
                .arg(opt("installments"))
                .arg(opt("installment-value"))
                .arg(opt("paid")),
        )
        .subcommand(Command::new("rm").arg(id_arg("id")))
}

fn credit_cmd() -> Command {
    Command::new("credit")
        .about("Card purchases made for someone else")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("description"))
                .arg(req("total"))
                .arg(req("installments"))
                .arg(req("person"))
                .arg(opt("date").help("First installment due date (YYYY-MM-DD), default today")),
        )
        .subcommand(output_flags(Command::new("list")))
        .subcommand(
            Command::new("pay")
                .about("Register one repaid installment")
                .arg(id_arg("id")),
        )
        .subcommand(
            Command::new("edit")
                .arg(id_arg("id"))
                .arg(opt("description"))
                .arg(opt("person"))
                .arg(opt("date"))
                .arg(opt("paid")),
        )
        .subcommand(Command::new("rm").arg(id_arg("id")))
        .subcommand(output_flags(
            Command::new("schedule")
                .about("Installment calendar across all purchases")
                .arg(
                    Arg::new("pending")
                        .long("pending")
                        .action(ArgAction::SetTrue)
                        .help("Only installments not yet received"),
                ),
        ))
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Fixed monthly expenses")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(req("amount"))
                .arg(req("category").help(
                    "Housing|Food|Transport|Health|Education|Entertainment|Services|Other",
                )),
        )
        .subcommand(output_flags(Command::new("list")))
        .subcommand(output_flags(Command::new("by-category")))
        .subcommand(
            Command::new("edit")
                .arg(id_arg("id"))
                .arg(opt("name"))
                .arg(opt("amount"))
                .arg(opt("category")),
        )
        .subcommand(Command::new("rm").arg(id_arg("id")))
}

fn sporadic_cmd() -> Command {
    Command::new("sporadic")
        .about("One-off expenses")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(req("amount"))
                .arg(opt("date")),
        )
        .subcommand(output_flags(Command::new("list")))
        .subcommand(
            Command::new("edit")
                .arg(id_arg("id"))
                .arg(opt("name"))
                .arg(opt("amount"))
                .arg(opt("date")),
        )
        .subcommand(Command::new("rm").arg(id_arg("id")))
}

fn shop_cmd() -> Command {
    Command::new("shop")
        .about("Shopping lists")
        .subcommand_required(true)
        .subcommand(
            Command::new("new")
                .arg(Arg::new("name").required(true))
                .arg(opt("date")),
        )
        .subcommand(output_flags(
            Command::new("lists").arg(
                opt("sort")
                    .default_value("date")
                    .help("date|name|total"),
            ),
        ))
        .subcommand(output_flags(Command::new("show").arg(id_arg("list"))))
        .subcommand(
            Command::new("edit")
                .arg(id_arg("list"))
                .arg(opt("name"))
                .arg(opt("date")),
        )
        .subcommand(
            Command::new("add")
                .arg(id_arg("list"))
                .arg(req("name"))
                .arg(opt("quantity").default_value("1"))
                .arg(req("price")),
        )
        .subcommand(Command::new("check").arg(id_arg("list")).arg(id_arg("item")))
        .subcommand(Command::new("uncheck").arg(id_arg("list")).arg(id_arg("item")))
        .subcommand(
            Command::new("edit-item")
                .arg(id_arg("list"))
                .arg(id_arg("item"))
                .arg(opt("name"))
                .arg(opt("quantity"))
                .arg(opt("price")),
        )
        .subcommand(Command::new("rm-item").arg(id_arg("list")).arg(id_arg("item")))
        .subcommand(
            Command::new("done")
                .about("Finish the list, or reopen it if already finished")
                .arg(id_arg("list")),
        )
        .subcommand(
            Command::new("import")
                .about("Copy items from another list")
                .arg(id_arg("target"))
                .arg(id_arg("source"))
                .arg(Arg::new("items").num_args(1..))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("items"),
                ),
        )
        .subcommand(Command::new("rm").arg(id_arg("list")))
}

fn invest_cmd() -> Command {
    Command::new("invest")
        .about("Suggested monthly investment")
        .subcommand_required(true)
        .subcommand(Command::new("set").arg(Arg::new("percentage").required(true)))
        .subcommand(Command::new("presets"))
}

fn export_cmd() -> Command {
    let target = |name: &'static str| {
        Command::new(name)
            .arg(req("format").help("csv|json"))
            .arg(req("out"))
    };
    Command::new("export")
        .about("Write a report file")
        .subcommand_required(true)
        .subcommand(target("schedule"))
        .subcommand(target("summary"))
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_version_flag(true)
        .subcommand(income_cmd())
        .subcommand(debt_cmd())
        .subcommand(credit_cmd())
        .subcommand(expense_cmd())
        .subcommand(sporadic_cmd())
        .subcommand(shop_cmd())
        .subcommand(invest_cmd())
        .subcommand(output_flags(
            Command::new("summary").about("Monthly dashboard figures"),
        ))
        .subcommand(export_cmd())
        .subcommand(
            Command::new("quit")
                .visible_alias("exit")
                .about("End the session"),
        )
}
