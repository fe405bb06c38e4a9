//! Subscriber setup for the jsgen binary.
//!
//! `JSGEN_LOG` (falling back to `RUST_LOG`) holds the filter directives;
//! without either, no subscriber is installed. `JSGEN_LOG_FORMAT` picks
//! `text` (default), `tree` or `json`. Output always goes to stderr, since
//! stdout carries the generated source.
//!
//! ```bash
//! JSGEN_LOG=jsgen_emitter=trace JSGEN_LOG_FORMAT=tree jsgen ast.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Anything unrecognized is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

fn filter_from_env() -> Option<EnvFilter> {
    let directives = std::env::var("JSGEN_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()?;
    Some(EnvFilter::builder().parse_lossy(directives))
}

pub fn init_tracing() {
    let Some(filter) = filter_from_env() else {
        return;
    };
    let format = LogFormat::parse(&std::env::var("JSGEN_LOG_FORMAT").unwrap_or_default());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Tree => registry
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
