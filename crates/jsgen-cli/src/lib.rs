//! Command-line front end: reads an ESTree JSON document, renders it with
//! `jsgen_emitter`, and writes the source text.

pub mod args;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
