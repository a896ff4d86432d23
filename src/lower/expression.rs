//! Builders for expressions.
//!
//! The grammar folds every operator form into one left-recursive
//! `Expression` rule, so the CST does not say which construct a node is.
//! [`expression`] recovers it from child count plus token text alone,
//! first match wins; a shape outside the table is a grammar/lowering
//! pairing bug and fails loudly.

use super::{node_at, required, Built, Lowering, Scope};
use crate::ast::NodeKind;
use crate::cst::{CstChild, CstKind, CstNode};
use crate::errors::LowerError;

const BINARY_OPERATORS: [&str; 30] = [
    "+", "-", "*", "/", "**", "%", "<<", ">>", "&&", "||", "&", "|", "^", "<", ">", "<=", ">=",
    "==", "!=", "=", "|=", "^=", "&=", "<<=", ">>=", "+=", "-=", "*=", "/=", "%=",
];

const PREFIX_OPERATORS: [&str; 8] = ["+", "-", "++", "--", "!", "~", "after", "delete"];

pub(super) fn expression(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    match ctx.children.len() {
        // Payload wrapper around a primary expression.
        1 => return super::forward_first(lw, ctx, scope),

        2 => {
            if ctx.token_text(0) == Some("new") {
                return Ok(Built::Fields(NodeKind::NewExpression {
                    type_name: lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?,
                }));
            }
            if let Some(op) = ctx.token_text(0) {
                if PREFIX_OPERATORS.contains(&op) {
                    return Ok(Built::Fields(NodeKind::UnaryOperation {
                        sub_expression: lw.lower_boxed(node_at(ctx, 1, "operand")?, scope)?,
                        is_prefix: true,
                    }));
                }
            }
            if matches!(ctx.token_text(1), Some("++" | "--")) {
                return Ok(Built::Fields(NodeKind::UnaryOperation {
                    sub_expression: lw.lower_boxed(node_at(ctx, 0, "operand")?, scope)?,
                    is_prefix: false,
                }));
            }
        }

        3 => {
            // A parenthesized expression stays visible as a one-element
            // tuple rather than collapsing away.
            if ctx.token_text(0) == Some("(") && ctx.token_text(2) == Some(")") {
                return Ok(Built::Fields(NodeKind::TupleExpression {
                    elements: vec![lw.lower_node(node_at(ctx, 1, "grouped expression")?, scope)?],
                    is_array: false,
                }));
            }

            if let Some(op) = ctx.child_text(1) {
                if op == "," {
                    return Ok(Built::Fields(NodeKind::TupleExpression {
                        elements: vec![
                            lw.lower_node(node_at(ctx, 0, "tuple element")?, scope)?,
                            lw.lower_node(node_at(ctx, 2, "tuple element")?, scope)?,
                        ],
                        is_array: false,
                    }));
                }
                if op == "." {
                    return Ok(Built::Fields(NodeKind::MemberAccess {
                        expression: lw.lower_boxed(node_at(ctx, 0, "accessed expression")?, scope)?,
                        member_name: ctx
                            .child_text(2)
                            .ok_or_else(|| super::missing(ctx, "member name"))?,
                    }));
                }
                if BINARY_OPERATORS.contains(&op.as_str()) {
                    return Ok(Built::Fields(NodeKind::BinaryOperation {
                        operator: op,
                        left: lw.lower_boxed(node_at(ctx, 0, "left operand")?, scope)?,
                        right: lw.lower_boxed(node_at(ctx, 2, "right operand")?, scope)?,
                    }));
                }
            }
        }

        4 => {
            if ctx.token_text(1) == Some("(") && ctx.token_text(3) == Some(")") {
                return function_call(lw, ctx, scope);
            }
            if ctx.token_text(1) == Some("[") && ctx.token_text(3) == Some("]") {
                return Ok(Built::Fields(NodeKind::IndexAccess {
                    base: lw.lower_boxed(node_at(ctx, 0, "indexed expression")?, scope)?,
                    index: lw.lower_boxed(node_at(ctx, 2, "index expression")?, scope)?,
                }));
            }
        }

        5 => {
            if ctx.token_text(1) == Some("?") && ctx.token_text(3) == Some(":") {
                return Ok(Built::Fields(NodeKind::Conditional {
                    condition: lw.lower_boxed(node_at(ctx, 0, "condition")?, scope)?,
                    true_expression: lw.lower_boxed(node_at(ctx, 2, "true branch")?, scope)?,
                    false_expression: lw.lower_boxed(node_at(ctx, 4, "false branch")?, scope)?,
                }));
            }
        }

        _ => {}
    }

    Err(LowerError::UnrecognizedShape {
        kind: "Expression",
        child_count: ctx.children.len(),
    })
}

fn function_call(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    let args_ctx = required(ctx, CstKind::FunctionCallArguments)?;
    let mut arguments = Vec::new();
    let mut names = Vec::new();

    if let Some(list) = args_ctx.first_of(CstKind::ExpressionList) {
        arguments = lw.lower_all(list.nodes_of(CstKind::Expression), scope)?;
    } else if let Some(list) = args_ctx.first_of(CstKind::NameValueList) {
        // `f({gas: g, value: v})`: arguments and names stay parallel.
        for name_value in list.nodes_of(CstKind::NameValue) {
            arguments.push(lw.lower_node(required(name_value, CstKind::Expression)?, scope)?);
            names.push(required(name_value, CstKind::Identifier)?.text());
        }
    }

    Ok(Built::Fields(NodeKind::FunctionCall {
        expression: lw.lower_boxed(node_at(ctx, 0, "called expression")?, scope)?,
        arguments,
        names,
    }))
}

/// Literals the lexer hands over as bare tokens are classified by text;
/// everything else forwards to its dedicated rule node.
pub(super) fn primary_expression(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    if let Some(token) = ctx.children.first().and_then(CstChild::as_token) {
        if token.text == "true" || token.text == "false" {
            return Ok(Built::Fields(NodeKind::BooleanLiteral {
                value: token.text == "true",
            }));
        }
        if token.text.starts_with("0x") || token.text.starts_with("0X") {
            return Ok(Built::Fields(NodeKind::NumberLiteral {
                number: token.text.clone(),
                subdenomination: None,
            }));
        }
        if token.is_string_literal() {
            return Ok(Built::Fields(NodeKind::StringLiteral {
                value: super::strip_quotes(&ctx.text()),
            }));
        }
    }
    super::forward_first(lw, ctx, scope)
}

pub(super) fn number_literal(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::NumberLiteral {
        number: ctx
            .child_text(0)
            .ok_or_else(|| super::missing(ctx, "number token"))?,
        subdenomination: if ctx.children.len() == 2 {
            ctx.child_text(1)
        } else {
            None
        },
    }))
}

pub(super) fn identifier(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::Identifier { name: ctx.text() }))
}

pub(super) fn tuple_expression(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::TupleExpression {
        elements: lw.lower_all(ctx.nodes_of(CstKind::Expression), scope)?,
        is_array: ctx.child_text(0).as_deref() == Some("["),
    }))
}

pub(super) fn elementary_type_name_expression(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::ElementaryTypeNameExpression {
        type_name: lw.lower_boxed(required(ctx, CstKind::ElementaryTypeName)?, scope)?,
    }))
}
