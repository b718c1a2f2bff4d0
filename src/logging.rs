// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber. Filter comes from `FINBOARD_LOG`, then `RUST_LOG`,
/// then defaults to `warn`. Logs go to stderr so tables and JSON on stdout stay clean.
///
/// Calling it again is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env("FINBOARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
