// Domain model for AST Lens: the decoded tree, its query engine and the
// per-kind derived views.

pub mod decode;
pub mod error;
pub mod kind;
pub mod location;
pub mod node;
pub mod registry;
pub mod traverse;
pub mod tree;
pub mod unit;
pub mod views;
pub mod width;

pub use decode::{decode, decode_reader, decode_str};
pub use error::{DecodeError, LookupError};
pub use kind::NodeKind;
pub use node::NodeRef;
pub use tree::{AstTree, NodeId};
pub use unit::ParsedUnit;
