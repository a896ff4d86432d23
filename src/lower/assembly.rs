//! Builders for inline-assembly constructs.

use super::{identifier_text, missing, node_at, required, Built, Lowering, Scope};
use crate::ast::{Node, NodeKind};
use crate::cst::{CstChild, CstKind, CstNode};
use crate::errors::LowerError;

pub(super) fn assembly_block(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::AssemblyBlock {
        operations: lw.lower_all(ctx.nodes_of(CstKind::AssemblyItem), scope)?,
    }))
}

/// Items carrying a bare literal or loop-control token classify by text;
/// everything else forwards to its dedicated rule node.
pub(super) fn assembly_item(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    if let Some(token) = ctx.children.first().and_then(CstChild::as_token) {
        if token.text.starts_with("0x") || token.text.starts_with("0X") {
            return Ok(Built::Fields(NodeKind::NumberLiteral {
                number: token.text.clone(),
                subdenomination: None,
            }));
        }
        if token.is_string_literal() {
            return Ok(Built::Fields(NodeKind::StringLiteral {
                value: super::strip_quotes(&token.text),
            }));
        }
        if token.text == "break" {
            return Ok(Built::Fields(NodeKind::Break {}));
        }
        if token.text == "continue" {
            return Ok(Built::Fields(NodeKind::Continue {}));
        }
    }
    super::forward_first(lw, ctx, scope)
}

pub(super) fn assembly_call(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    // Opcode names arrive as keywords, user functions as identifiers;
    // both read off the first child verbatim.
    Ok(Built::Fields(NodeKind::AssemblyCall {
        function_name: ctx
            .child_text(0)
            .ok_or_else(|| missing(ctx, "called name"))?,
        arguments: lw.lower_all(ctx.nodes_of(CstKind::AssemblyExpression), scope)?,
    }))
}

pub(super) fn assembly_literal(ctx: &CstNode) -> Result<Built, LowerError> {
    let token = ctx
        .children
        .first()
        .and_then(CstChild::as_token)
        .ok_or_else(|| missing(ctx, "literal token"))?;

    if token.is_string_literal() {
        return Ok(Built::Fields(NodeKind::StringLiteral {
            value: super::strip_quotes(&token.text),
        }));
    }
    if token.text.starts_with("0x")
        || token.text.starts_with("0X")
        || token.text.starts_with("hex")
    {
        return Ok(Built::Fields(NodeKind::HexNumber {
            value: token.text.clone(),
        }));
    }
    Ok(Built::Fields(NodeKind::DecimalNumber {
        value: token.text.clone(),
    }))
}

pub(super) fn assembly_local_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::AssemblyLocalDefinition {
        names: declared_names(lw, ctx, scope)?,
        expression: lw.lower_opt(ctx.first_of(CstKind::AssemblyExpression), scope)?,
    }))
}

pub(super) fn assembly_assignment(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::AssemblyAssignment {
        names: declared_names(lw, ctx, scope)?,
        expression: lw.lower_opt(ctx.first_of(CstKind::AssemblyExpression), scope)?,
    }))
}

pub(super) fn assembly_stack_assignment(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::AssemblyStackAssignment {
        name: identifier_text(ctx)?,
    }))
}

pub(super) fn assembly_switch(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::AssemblySwitch {
        expression: lw.lower_boxed(required(ctx, CstKind::AssemblyExpression)?, scope)?,
        cases: lw.lower_all(ctx.nodes_of(CstKind::AssemblyCase), scope)?,
    }))
}

pub(super) fn assembly_case(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    let value = if ctx.child_text(0).as_deref() == Some("case") {
        Some(lw.lower_boxed(required(ctx, CstKind::AssemblyLiteral)?, scope)?)
    } else {
        None
    };
    Ok(Built::Fields(NodeKind::AssemblyCase {
        is_default: value.is_none(),
        value,
        block: lw.lower_boxed(required(ctx, CstKind::AssemblyBlock)?, scope)?,
    }))
}

pub(super) fn assembly_function_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    let arguments = match ctx.first_of(CstKind::AssemblyIdentifierList) {
        Some(list) => lw.lower_all(list.nodes_of(CstKind::Identifier), scope)?,
        None => Vec::new(),
    };
    let return_arguments = match ctx
        .first_of(CstKind::AssemblyFunctionReturns)
        .and_then(|returns| returns.first_of(CstKind::AssemblyIdentifierList))
    {
        Some(list) => lw.lower_all(list.nodes_of(CstKind::Identifier), scope)?,
        None => Vec::new(),
    };
    Ok(Built::Fields(NodeKind::AssemblyFunctionDefinition {
        name: identifier_text(ctx)?,
        arguments,
        return_arguments,
    }))
}

pub(super) fn assembly_for(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    // Fixed shape: `for` pre condition post body.
    Ok(Built::Fields(NodeKind::AssemblyFor {
        pre: lw.lower_boxed(node_at(ctx, 1, "init block")?, scope)?,
        condition: lw.lower_boxed(node_at(ctx, 2, "condition")?, scope)?,
        post: lw.lower_boxed(node_at(ctx, 3, "post block")?, scope)?,
        body: lw.lower_boxed(node_at(ctx, 4, "body")?, scope)?,
    }))
}

pub(super) fn assembly_label(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::AssemblyLabel {
        name: identifier_text(ctx)?,
    }))
}

/// `let x` binds one identifier; `let (x, y)` binds a parenthesized list.
fn declared_names(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Vec<Node>, LowerError> {
    let holder = required(ctx, CstKind::AssemblyIdentifierOrList)?;
    if let Some(identifier) = holder.first_of(CstKind::Identifier) {
        return Ok(vec![lw.lower_node(identifier, scope)?]);
    }
    match holder.first_of(CstKind::AssemblyIdentifierList) {
        Some(list) => lw.lower_all(list.nodes_of(CstKind::Identifier), scope),
        None => Err(missing(holder, "declared name")),
    }
}
