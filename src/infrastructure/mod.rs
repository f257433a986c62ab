// Infrastructure adapters for AST Lens: dump sources and the batch pool.

pub mod concurrency;
pub mod dump_source;

pub use concurrency::{decode_batch, decode_batch_in};
pub use dump_source::{JsonFileSource, JsonTextSource};
