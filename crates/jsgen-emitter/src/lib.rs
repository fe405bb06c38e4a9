//! Precedence-aware JavaScript printer.
//!
//! `generate` renders a statement-class `jsgen_ast::Node` back into source
//! text, inserting only the parentheses needed to keep the tree's grouping:
//!
//! - `precedence`: operator table and the parenthesization rule
//! - `emitter`: the `Printer` with one renderer per node kind
//! - `source_writer`: the output buffer
//! - `options`: generator configuration (no options recognized yet)
//! - `error`: fail-fast generation errors

pub mod error;
pub use error::{GenerateError, NodePosition};

pub mod limits;

pub mod options;
pub use options::GeneratorOptions;

pub mod precedence;
pub use precedence::{Associativity, OperatorInfo, Precedence};

pub mod source_writer;

pub mod emitter;
pub use emitter::{Printer, generate, generate_with_options};
