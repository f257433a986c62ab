// Main library entry point for AST Lens.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use config::DecodeConfig;
pub use domain::{decode, decode_reader, decode_str, DecodeError, LookupError, NodeKind, NodeRef, ParsedUnit};
