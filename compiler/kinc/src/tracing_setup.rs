//! Tracing subscriber installation for the CLI.
//!
//! Nothing is installed unless `KIN_LOG` holds a filter directive
//! (`KIN_LOG=kin_eval=debug`). With `KIN_LOG_TREE` also set, spans render as
//! an indented call tree instead of flat lines.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

pub const LOG_ENV: &str = "KIN_LOG";
pub const LOG_TREE_ENV: &str = "KIN_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
            return;
        };
        if std::env::var_os(LOG_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
