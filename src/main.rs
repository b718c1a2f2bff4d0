// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;

use finboard::{config::Settings, logging, session::Session};

fn main() -> Result<()> {
    let settings = Settings::parse();
    logging::init();

    let mut session = Session::new(&settings)?;

    match &settings.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Open script {}", path.display()))?;
            session.run(BufReader::new(file), false)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = !settings.quiet && stdin.is_terminal();
            session.run(stdin.lock(), prompt)?;
        }
    }
    Ok(())
}
