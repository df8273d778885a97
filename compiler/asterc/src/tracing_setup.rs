//! Subscriber installation for the `aster` binary.
//!
//! Library crates only emit events; this is the one place a subscriber is
//! installed. Enable with e.g. `RUST_LOG=aster_lower=debug` or
//! `RUST_LOG=aster_eval=trace`.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install the hierarchical stderr subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(tree)
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
