// SPDX-License-Identifier: GPL-3.0-only

use tracing_subscriber::{EnvFilter, fmt};

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "waitdisc=warn,waitdisc_udisks=warn,warn",
        1 => "waitdisc=info,waitdisc_udisks=info,warn",
        2 => "waitdisc=debug,waitdisc_udisks=debug,warn",
        _ => "waitdisc=trace,waitdisc_udisks=trace,info",
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
pub(crate) fn init(verbose: u8) {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
