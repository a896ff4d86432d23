//! Builders for source-unit and contract-level declarations.

use super::{identifier_text, missing, required, required_nth, Built, Lowering, Scope};
use crate::ast::{NodeKind, Visibility};
use crate::cst::{CstChild, CstKind, CstNode};
use crate::errors::LowerError;

pub(super) fn source_unit(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    // The grammar's trailing EOF is a token, so node children are exactly
    // the top-level declarations.
    Ok(Built::Fields(NodeKind::SourceUnit {
        children: lw.lower_all(ctx.nodes(), scope)?,
    }))
}

pub(super) fn pragma_directive(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::PragmaDirective {
        name: required(ctx, CstKind::PragmaName)?.text(),
        value: required(ctx, CstKind::PragmaValue)?.text(),
    }))
}

pub(super) fn import_directive(ctx: &CstNode) -> Result<Built, LowerError> {
    let path = ctx
        .first_string_token()
        .map(super::strip_quotes)
        .ok_or_else(|| missing(ctx, "path string literal"))?;

    let declarations: Vec<&CstNode> = ctx.nodes_of(CstKind::ImportDeclaration).collect();
    let mut unit_alias = None;
    let mut symbol_aliases = None;

    if !declarations.is_empty() {
        // import { a as b, c } from "path";
        let mut aliases = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            let symbol = required_nth(declaration, CstKind::Identifier, 0)?.text();
            let alias = declaration.nth_of(CstKind::Identifier, 1).map(CstNode::text);
            aliases.push((symbol, alias));
        }
        symbol_aliases = Some(aliases);
    } else if matches!(ctx.children.len(), 5 | 7) {
        // import "path" as x;  (5 children)
        // import * as x from "path";  (7 children)
        // Both carry the alias at child position 3.
        unit_alias = ctx.child_text(3);
    }

    Ok(Built::Fields(NodeKind::ImportDirective {
        path,
        unit_alias,
        symbol_aliases,
    }))
}

pub(super) fn contract_definition(lw: &Lowering, ctx: &CstNode) -> Result<Built, LowerError> {
    let name = identifier_text(ctx)?;
    let kind = ctx
        .token_text(0)
        .ok_or_else(|| missing(ctx, "contract keyword"))?
        .to_string();
    // The contract name becomes the enclosing scope for everything below.
    let scope = Some(name.as_str());
    let base_contracts = lw.lower_all(ctx.nodes_of(CstKind::InheritanceSpecifier), scope)?;
    let sub_nodes = lw.lower_all(ctx.nodes_of(CstKind::ContractPart), scope)?;
    Ok(Built::Fields(NodeKind::ContractDefinition {
        name,
        base_contracts,
        sub_nodes,
        kind,
    }))
}

pub(super) fn inheritance_specifier(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::InheritanceSpecifier {
        base_name: lw.lower_boxed(required(ctx, CstKind::UserDefinedTypeName)?, scope)?,
        arguments: lw.lower_all(ctx.nodes_of(CstKind::Expression), scope)?,
    }))
}

pub(super) fn state_variable_declaration(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    let type_name = lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?;
    let name = identifier_text(ctx)?;
    let initial_value = lw.lower_opt(ctx.first_of(CstKind::Expression), scope)?;

    let visibility = if ctx.has_token("internal") {
        Visibility::Internal
    } else if ctx.has_token("public") {
        Visibility::Public
    } else if ctx.has_token("private") {
        Visibility::Private
    } else {
        Visibility::Default
    };

    let declaration = lw.make(
        NodeKind::VariableDeclaration {
            type_name: Some(type_name),
            name: Some(name),
            expression: Some(initial_value.clone()),
            visibility: Some(visibility),
            storage_location: None,
            is_state_var: true,
            is_declared_const: Some(ctx.has_token("constant")),
            is_indexed: false,
        },
        ctx,
    );

    Ok(Built::Fields(NodeKind::StateVariableDeclaration {
        variables: vec![declaration],
        initial_value,
    }))
}

pub(super) fn using_for_declaration(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    // using Library for *;  |  using Library for Type;
    let type_name = match ctx.child(3) {
        Some(CstChild::Token(token)) if token.text == "*" => None,
        Some(CstChild::Node(node)) => Some(lw.lower_boxed(node, scope)?),
        _ => return Err(missing(ctx, "target type")),
    };
    Ok(Built::Fields(NodeKind::UsingForDeclaration {
        type_name,
        library_name: identifier_text(ctx)?,
    }))
}

pub(super) fn struct_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::StructDefinition {
        name: identifier_text(ctx)?,
        members: lw.lower_all(ctx.nodes_of(CstKind::VariableDeclaration), scope)?,
    }))
}

pub(super) fn modifier_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::ModifierDefinition {
        name: identifier_text(ctx)?,
        parameters: lw.lower_opt(ctx.first_of(CstKind::ParameterList), scope)?,
        body: lw.lower_boxed(required(ctx, CstKind::Block)?, scope)?,
    }))
}

pub(super) fn modifier_invocation(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    let arguments = match ctx.first_of(CstKind::ExpressionList) {
        Some(list) => lw.lower_all(list.nodes_of(CstKind::Expression), scope)?,
        None => Vec::new(),
    };
    Ok(Built::Fields(NodeKind::ModifierInvocation {
        name: identifier_text(ctx)?,
        arguments,
    }))
}

pub(super) fn function_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    // Fallback functions have no name.
    let name = ctx
        .first_of(CstKind::Identifier)
        .map(CstNode::text)
        .unwrap_or_default();
    let parameters = lw.lower_boxed(required(ctx, CstKind::ParameterList)?, scope)?;
    let modifier_list = required(ctx, CstKind::ModifierList)?;
    let modifiers = lw.lower_all(modifier_list.nodes_of(CstKind::ModifierInvocation), scope)?;

    let visibility = if modifier_list.has_token("external") {
        Visibility::External
    } else if modifier_list.has_token("internal") {
        Visibility::Internal
    } else if modifier_list.has_token("public") {
        Visibility::Public
    } else if modifier_list.has_token("private") {
        Visibility::Private
    } else {
        Visibility::Default
    };

    // A function is its contract's constructor when it carries the
    // contract's own name (pre-`constructor`-keyword grammar convention).
    let is_constructor = !name.is_empty() && scope == Some(name.as_str());

    Ok(Built::Fields(NodeKind::FunctionDefinition {
        name,
        parameters,
        body: lw.lower_opt(ctx.first_of(CstKind::Block), scope)?,
        visibility,
        modifiers,
        is_constructor,
        is_declared_const: modifier_list.has_token("constant"),
        is_payable: modifier_list.has_token("payable"),
    }))
}

pub(super) fn event_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::EventDefinition {
        name: identifier_text(ctx)?,
        parameters: lw.lower_boxed(required(ctx, CstKind::IndexedParameterList)?, scope)?,
        is_anonymous: ctx.has_token("anonymous"),
    }))
}

pub(super) fn enum_definition(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::EnumDefinition {
        name: identifier_text(ctx)?,
        members: lw.lower_all(ctx.nodes_of(CstKind::EnumValue), scope)?,
    }))
}

pub(super) fn enum_value(ctx: &CstNode) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::EnumValue {
        name: identifier_text(ctx)?,
    }))
}

// ----------------------------------------------------------------------------
// Parameter shapes
// ----------------------------------------------------------------------------

pub(super) fn indexed_parameter_list(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    // Event parameters become VariableDeclaration nodes without a storage
    // location slot.
    let mut parameters = Vec::new();
    for param in ctx.nodes_of(CstKind::IndexedParameter) {
        let type_name = lw.lower_boxed(required(param, CstKind::TypeName)?, scope)?;
        parameters.push(lw.make(
            NodeKind::VariableDeclaration {
                type_name: Some(type_name),
                name: param.first_of(CstKind::Identifier).map(CstNode::text),
                expression: None,
                visibility: None,
                storage_location: None,
                is_state_var: false,
                is_declared_const: None,
                is_indexed: param.has_token("indexed"),
            },
            param,
        ));
    }
    Ok(Built::Fields(NodeKind::ParameterList { parameters }))
}

pub(super) fn indexed_parameter(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::VariableDeclaration {
        type_name: Some(lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?),
        name: Some(identifier_text(ctx)?),
        expression: None,
        visibility: None,
        storage_location: Some(ctx.first_of(CstKind::StorageLocation).map(CstNode::text)),
        is_state_var: false,
        is_declared_const: None,
        is_indexed: ctx.has_token("indexed"),
    }))
}

pub(super) fn parameter_list(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::ParameterList {
        parameters: lw.lower_all(ctx.nodes_of(CstKind::Parameter), scope)?,
    }))
}

pub(super) fn parameter(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::Parameter {
        type_name: lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?,
        name: ctx.first_of(CstKind::Identifier).map(CstNode::text),
        storage_location: ctx.first_of(CstKind::StorageLocation).map(CstNode::text),
        is_state_var: false,
        is_indexed: false,
    }))
}

pub(super) fn unnamed_parameter(
    lw: &Lowering,
    ctx: &CstNode,
    scope: Scope,
) -> Result<Built, LowerError> {
    Ok(Built::Fields(NodeKind::VariableDeclaration {
        type_name: Some(lw.lower_boxed(required(ctx, CstKind::TypeName)?, scope)?),
        name: None,
        expression: None,
        visibility: None,
        storage_location: Some(ctx.first_of(CstKind::StorageLocation).map(CstNode::text)),
        is_state_var: false,
        is_declared_const: None,
        is_indexed: false,
    }))
}
