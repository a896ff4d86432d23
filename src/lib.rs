pub use crate::ast::{Node, NodeKind, NodeType, Visibility};
pub use crate::errors::LowerError;
pub use crate::lower::lower;
pub use crate::meta::{Loc, LowerOptions, Position, Range};
pub use crate::visit::{traverse, CallbackTable, Flow};

pub mod ast;
pub mod cst;
pub mod errors;
pub mod lower;
pub mod meta;
pub mod visit;
