//! Shared CST construction helpers for integration tests.
//!
//! The upstream parser is out of scope, so tests hand-build the CST
//! shapes it would emit: `*Context`-suffixed kind names, keyword and
//! punctuation tokens interleaved with rule nodes, positions derived
//! from the leaves.

#![allow(dead_code)]

use solast::cst::{CstChild, CstNode, Token, TokenPos};
use solast::{lower, LowerOptions, Node};

pub fn tok(text: &str) -> CstChild {
    CstChild::Token(Token::new(text, TokenPos::default()))
}

/// A token at an explicit position; `stop` is derived from the text
/// length the way a lexer would set it.
pub fn tok_at(text: &str, line: u32, column: u32, start: usize) -> CstChild {
    CstChild::Token(Token::new(
        text,
        TokenPos {
            line,
            column,
            start,
            stop: start + text.len().saturating_sub(1),
        },
    ))
}

pub fn rule(kind: &str, children: Vec<CstChild>) -> CstNode {
    CstNode::new(kind, children)
}

pub fn node(kind: &str, children: Vec<CstChild>) -> CstChild {
    CstChild::Node(rule(kind, children))
}

// ---
// Common grammar shapes
// ---

pub fn identifier(name: &str) -> CstChild {
    node("IdentifierContext", vec![tok(name)])
}

pub fn elementary(name: &str) -> CstChild {
    node("ElementaryTypeNameContext", vec![tok(name)])
}

pub fn type_name(inner: CstChild) -> CstChild {
    node("TypeNameContext", vec![inner])
}

pub fn expr(inner: CstChild) -> CstChild {
    node("ExpressionContext", vec![inner])
}

pub fn primary(inner: CstChild) -> CstChild {
    node("PrimaryExpressionContext", vec![inner])
}

/// `ExpressionContext > PrimaryExpressionContext > IdentifierContext`,
/// the shape every bare name reaches the expression builder in.
pub fn identifier_expr(name: &str) -> CstChild {
    expr(primary(identifier(name)))
}

pub fn number_expr(number: &str) -> CstChild {
    expr(primary(node("NumberLiteralContext", vec![tok(number)])))
}

/// A statement wrapping a single expression.
pub fn expression_statement(inner: CstChild) -> CstChild {
    node(
        "StatementContext",
        vec![node("ExpressionStatementContext", vec![inner, tok(";")])],
    )
}

pub fn block(statements: Vec<CstChild>) -> CstChild {
    let mut children = vec![tok("{")];
    children.extend(statements);
    children.push(tok("}"));
    node("BlockContext", children)
}

pub fn empty_modifier_list() -> CstChild {
    node("ModifierListContext", vec![])
}

pub fn empty_parameter_list() -> CstChild {
    node("ParameterListContext", vec![tok("("), tok(")")])
}

/// Wraps a contract part the way the grammar does between a contract
/// definition and its members.
pub fn contract_part(inner: CstChild) -> CstChild {
    node("ContractPartContext", vec![inner])
}

pub fn contract(name: &str, parts: Vec<CstChild>) -> CstNode {
    let mut children = vec![tok("contract"), identifier(name), tok("{")];
    children.extend(parts.into_iter().map(contract_part));
    children.push(tok("}"));
    rule("ContractDefinitionContext", children)
}

// ---
// Lowering shortcuts
// ---

pub fn lowered(root: &CstNode) -> Node {
    lower(root, LowerOptions::default()).expect("lowering failed")
}

pub fn lowered_json(root: &CstNode) -> serde_json::Value {
    serde_json::to_value(lowered(root)).expect("serialization failed")
}
