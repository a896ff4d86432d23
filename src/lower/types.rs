//! Builders for type-name shapes.

use super::{node_at, required, Built, Lowering, Scope};
use crate::ast::{NodeKind, Visibility};
use crate::cst::{CstKind, CstNode};
use crate::errors::LowerError;

/// A `TypeName` wrapper either denotes a sized array or forwards its
/// single payload child. The unsized `T[]` spelling carries no length
/// expression and forwards like any other wrapper.
pub(super) fn type_name(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    if ctx.children.len() == 4
        && ctx.token_text(1) == Some("[")
        && ctx.token_text(3) == Some("]")
    {
        return Ok(Built::Fields(NodeKind::ArrayTypeName {
            base_type_name: lw.lower_boxed(node_at(ctx, 0, "element type")?, scope)?,
            length: Some(lw.lower_boxed(node_at(ctx, 2, "array length")?, scope)?),
        }));
    }
    super::forward_first(lw, ctx, scope)
}

pub(super) fn elementary_type_name(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::ElementaryTypeName { name: ctx.text() }))
}

pub(super) fn user_defined_type_name(ctx: &CstNode) -> Result<Built, LowerError> {
    // Dotted paths stay verbatim; resolution is not this crate's job.
    Ok(Built::Fields(NodeKind::UserDefinedTypeName {
        name_path: ctx.text(),
    }))
}

pub(super) fn mapping(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::Mapping {
        key_type: lw.lower_boxed(required(ctx, CstKind::ElementaryTypeName)?, scope)?,
        value_type: lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?,
    }))
}

pub(super) fn function_type_name(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    let parameter_types = lw.lower_all(
        required(ctx, CstKind::TypeNameList)?.nodes_of(CstKind::UnnamedParameter),
        scope,
    )?;
    let return_types = match ctx.nth_of(CstKind::TypeNameList, 1) {
        Some(list) => lw.lower_all(list.nodes_of(CstKind::TypeName), scope)?,
        None => Vec::new(),
    };

    let visibility = if ctx.has_token("internal") {
        Visibility::Internal
    } else if ctx.has_token("external") {
        Visibility::External
    } else {
        Visibility::Default
    };

    Ok(Built::Fields(NodeKind::FunctionTypeName {
        parameter_types,
        return_types,
        visibility,
        is_declared_const: ctx.has_token("constant"),
        is_payable: ctx.has_token("payable"),
    }))
}
