//! Builders for statements.

use super::{missing, required, required_nth, Built, Lowering, Scope};
use crate::ast::NodeKind;
use crate::cst::{CstKind, CstNode};
use crate::errors::LowerError;

pub(super) fn block(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::Block {
        statements: lw.lower_all(ctx.nodes_of(CstKind::Statement), scope)?,
    }))
}

pub(super) fn expression_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::ExpressionStatement {
        expression: Some(lw.lower_boxed(required(ctx, CstKind::Expression)?, scope)?),
    }))
}

pub(super) fn if_statement(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::IfStatement {
        condition: lw.lower_boxed(required(ctx, CstKind::Expression)?, scope)?,
        true_body: lw.lower_boxed(required_nth(ctx, CstKind::Statement, 0)?, scope)?,
        false_body: lw.lower_opt(ctx.nth_of(CstKind::Statement, 1), scope)?,
    }))
}

pub(super) fn while_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::WhileStatement {
        condition: lw.lower_boxed(required(ctx, CstKind::Expression)?, scope)?,
        body: lw.lower_boxed(required(ctx, CstKind::Statement)?, scope)?,
    }))
}

pub(super) fn do_while_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::DoWhileStatement {
        condition: lw.lower_boxed(required(ctx, CstKind::Expression)?, scope)?,
        body: lw.lower_boxed(required(ctx, CstKind::Statement)?, scope)?,
    }))
}

pub(super) fn for_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    // The loop clause always lowers to an ExpressionStatement wrapper,
    // with an empty expression for `for (;;)`-style loops.
    let loop_clause = ctx.nth_of(CstKind::Expression, 1);
    let loop_expression = Box::new(lw.make(
        NodeKind::ExpressionStatement {
            expression: lw.lower_opt(loop_clause, scope)?,
        },
        loop_clause.unwrap_or(ctx),
    ));

    Ok(Built::Fields(NodeKind::ForStatement {
        init_expression: lw.lower_opt(ctx.first_of(CstKind::SimpleStatement), scope)?,
        condition_expression: lw.lower_opt(ctx.nth_of(CstKind::Expression, 0), scope)?,
        loop_expression,
        body: lw.lower_boxed(required(ctx, CstKind::Statement)?, scope)?,
    }))
}

pub(super) fn inline_assembly_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::InlineAssemblyStatement {
        language: ctx.first_string_token().map(super::strip_quotes),
        body: lw.lower_boxed(required(ctx, CstKind::AssemblyBlock)?, scope)?,
    }))
}

pub(super) fn return_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::ReturnStatement {
        expression: lw.lower_opt(ctx.first_of(CstKind::Expression), scope)?,
    }))
}

pub(super) fn variable_declaration_statement(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    let variables = if let Some(declaration) = ctx.first_of(CstKind::VariableDeclaration) {
        vec![lw.lower_node(declaration, scope)?]
    } else if let Some(list) = ctx.first_of(CstKind::IdentifierList) {
        // `var (a, b)` names carry no type; each still gets its own
        // position envelope.
        list.nodes_of(CstKind::Identifier)
            .map(|identifier| {
                lw.make(
                    NodeKind::VariableDeclaration {
                        type_name: None,
                        name: Some(identifier.text()),
                        expression: None,
                        visibility: None,
                        storage_location: None,
                        is_state_var: false,
                        is_declared_const: None,
                        is_indexed: false,
                    },
                    identifier,
                )
            })
            .collect()
    } else {
        return Err(missing(ctx, "declared variable"));
    };

    Ok(Built::Fields(NodeKind::VariableDeclarationStatement {
        variables,
        initial_value: lw.lower_opt(ctx.first_of(CstKind::Expression), scope)?,
    }))
}

/// Local declarations and struct members share this rule. State variables
/// never reach it; they have their own builder.
pub(super) fn variable_declaration(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::VariableDeclaration {
        type_name: Some(lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?),
        name: Some(super::identifier_text(ctx)?),
        expression: None,
        visibility: None,
        storage_location: Some(ctx.first_of(CstKind::StorageLocation).map(CstNode::text)),
        is_state_var: false,
        is_declared_const: None,
        is_indexed: false,
    }))
}
