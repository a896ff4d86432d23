//! Lowering errors.
//!
//! Only two failures can surface from this crate, and both mean the CST
//! handed to the lowering engine violates the paired grammar's contract.
//! Syntax errors belong to the upstream parser and never reach here;
//! traversal callback errors are the caller's own type and are propagated
//! untouched.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LowerError {
    /// A dispatched shape matched no rule in its builder's classification
    /// table. Fatal and non-retriable: the grammar and the lowering tables
    /// disagree.
    #[error("no lowering rule matches a {kind} node with {child_count} children")]
    #[diagnostic(
        code(solast::lower::unrecognized_shape),
        help("the CST was not produced by the paired grammar; this is a parser pairing bug, not a source-code error")
    )]
    UnrecognizedShape {
        kind: &'static str,
        child_count: usize,
    },

    /// A child the grammar guarantees was absent from the CST.
    #[error("malformed {kind} node: missing {element}")]
    #[diagnostic(code(solast::lower::missing_child))]
    MissingChild {
        kind: &'static str,
        element: &'static str,
    },
}
