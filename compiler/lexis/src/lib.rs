//! lexis command-line front end.
//!
//! The binary in `main.rs` only parses arguments; the work lives in
//! [`commands`] so it can be driven from tests and benchmarks.
//!
//! Logging is off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=lexis_core=trace lexis lex file.c`. Set `LEXIS_LOG_TREE=1` for
//! indented span trees instead of flat lines.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("LEXIS_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
