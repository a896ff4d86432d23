//! Position metadata attacher.
//!
//! Computes the optional `loc`/`range` envelope for lowered nodes from a
//! CST node's first and last token positions. Each field is attached only
//! when requested; the default options attach nothing.

use crate::cst::CstNode;
use serde::{Deserialize, Serialize};

/// Options recognized by the lowering entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LowerOptions {
    /// Attach line/column envelopes (`loc`) to every node.
    pub loc: bool,
    /// Attach character-offset envelopes (`range`) to every node.
    pub range: bool,
}

/// A line/column pair: line 1-based, column 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Line/column envelope of a node's first and last tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loc {
    pub start: Position,
    pub end: Position,
}

/// Character-offset envelope: start offset of the first token, stop offset
/// of the last. Serialized as a two-element array.
pub type Range = (usize, usize);

/// Computes the requested envelope fields for one CST node.
///
/// Always succeeds; the CST is assumed position-valid by contract.
pub(crate) fn envelope(ctx: &CstNode, options: &LowerOptions) -> (Option<Loc>, Option<Range>) {
    let loc = options.loc.then(|| Loc {
        start: Position {
            line: ctx.start.line,
            column: ctx.start.column,
        },
        end: Position {
            line: ctx.stop.line,
            column: ctx.stop.column,
        },
    });
    let range = options.range.then(|| (ctx.start.start, ctx.stop.stop));
    (loc, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::{CstChild, CstNode, Token, TokenPos};

    fn sample() -> CstNode {
        let first = Token::new(
            "contract",
            TokenPos {
                line: 1,
                column: 0,
                start: 0,
                stop: 7,
            },
        );
        let last = Token::new(
            "}",
            TokenPos {
                line: 3,
                column: 2,
                start: 24,
                stop: 24,
            },
        );
        CstNode::new(
            "ContractDefinitionContext",
            vec![CstChild::Token(first), CstChild::Token(last)],
        )
    }

    #[test]
    fn test_default_options_attach_nothing() {
        let (loc, range) = envelope(&sample(), &LowerOptions::default());
        assert_eq!(loc, None);
        assert_eq!(range, None);
    }

    #[test]
    fn test_loc_and_range_are_independent() {
        let ctx = sample();
        let (loc, range) = envelope(
            &ctx,
            &LowerOptions {
                loc: true,
                range: false,
            },
        );
        assert_eq!(
            loc,
            Some(Loc {
                start: Position { line: 1, column: 0 },
                end: Position { line: 3, column: 2 },
            })
        );
        assert_eq!(range, None);

        let (loc, range) = envelope(
            &ctx,
            &LowerOptions {
                loc: false,
                range: true,
            },
        );
        assert_eq!(loc, None);
        assert_eq!(range, Some((0, 24)));
    }
}
