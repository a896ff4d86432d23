//! CST-to-AST lowering engine.
//!
//! The driver walks a CST recursively: it canonicalizes each node's kind
//! name, dispatches to that kind's builder for the semantic fields, then
//! attaches the position envelope uniformly, whether or not a dedicated
//! builder ran. Kinds outside the registered inventory lower to visible
//! passthrough nodes.
//!
//! Builders are pure and total over well-formed CST shapes; the only
//! failure modes are the contract violations in [`LowerError`]. The
//! enclosing contract name is threaded through the recursion as an
//! explicit parameter, so every call is reentrant and state-free.

mod assembly;
mod declarations;
mod expression;
mod statements;
mod types;

use crate::ast::{Node, NodeKind};
use crate::cst::{CstKind, CstNode};
use crate::errors::LowerError;
use crate::meta::{self, LowerOptions};

/// Lowers a CST produced by the paired grammar into an AST.
///
/// For a whole-file parse the root kind is `SourceUnit` and the result is
/// a `SourceUnit` node whose `children` are the top-level declarations in
/// source order, but any registered kind lowers the same way.
///
/// ```
/// use solast::cst::CstNode;
/// use solast::{lower, LowerOptions, NodeKind};
///
/// let empty = CstNode::new("SourceUnitContext", vec![]);
/// let ast = lower(&empty, LowerOptions::default()).unwrap();
/// assert_eq!(ast.kind, NodeKind::SourceUnit { children: vec![] });
/// ```
pub fn lower(root: &CstNode, options: LowerOptions) -> Result<Node, LowerError> {
    Lowering { options }.lower_node(root, None)
}

/// Name of the enclosing contract, threaded explicitly while lowering a
/// contract's sub-nodes.
pub(crate) type Scope<'a> = Option<&'a str>;

/// What a builder produced: either this kind's semantic fields, or, for
/// pure wrapper kinds, an already-lowered payload node to forward.
pub(crate) enum Built {
    Fields(NodeKind),
    Forward(Node),
}

pub(crate) struct Lowering {
    options: LowerOptions,
}

impl Lowering {
    pub(crate) fn lower_node(&self, ctx: &CstNode, scope: Scope) -> Result<Node, LowerError> {
        let built = match ctx.cst_kind() {
            Some(kind) => self.build(kind, ctx, scope)?,
            // Unregistered kind (grammar growth, tolerant-mode error
            // markers): keep only the stripped kind name.
            None => Built::Fields(NodeKind::Unknown {
                type_name: ctx.canonical_kind().to_string(),
            }),
        };
        // The envelope is attached here for every node; on a forwarded
        // payload the outermost wrapper's envelope wins.
        let (loc, range) = meta::envelope(ctx, &self.options);
        let mut node = match built {
            Built::Fields(kind) => Node::new(kind),
            Built::Forward(node) => node,
        };
        node.loc = loc;
        node.range = range;
        Ok(node)
    }

    pub(crate) fn lower_boxed(&self, ctx: &CstNode, scope: Scope) -> Result<Box<Node>, LowerError> {
        self.lower_node(ctx, scope).map(Box::new)
    }

    /// An absent optional child lowers to nothing.
    pub(crate) fn lower_opt(
        &self,
        ctx: Option<&CstNode>,
        scope: Scope,
    ) -> Result<Option<Box<Node>>, LowerError> {
        ctx.map(|c| self.lower_boxed(c, scope)).transpose()
    }

    /// A child sequence lowers in order, length preserved.
    pub(crate) fn lower_all<'c>(
        &self,
        items: impl Iterator<Item = &'c CstNode>,
        scope: Scope,
    ) -> Result<Vec<Node>, LowerError> {
        items.map(|c| self.lower_node(c, scope)).collect()
    }

    /// Builds a node with semantic fields from one builder and the
    /// envelope of `ctx`, for nodes synthesized inside builders.
    pub(crate) fn make(&self, kind: NodeKind, ctx: &CstNode) -> Node {
        let (loc, range) = meta::envelope(ctx, &self.options);
        let mut node = Node::new(kind);
        node.loc = loc;
        node.range = range;
        node
    }

    fn build(&self, kind: CstKind, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
        match kind {
            CstKind::SourceUnit => declarations::source_unit(self, ctx, scope),
            CstKind::PragmaDirective => declarations::pragma_directive(ctx),
            CstKind::ImportDirective => declarations::import_directive(ctx),
            CstKind::ContractDefinition => declarations::contract_definition(self, ctx),
            CstKind::InheritanceSpecifier => declarations::inheritance_specifier(self, ctx, scope),
            CstKind::ContractPart => forward_first(self, ctx, scope),
            CstKind::StateVariableDeclaration => {
                declarations::state_variable_declaration(self, ctx, scope)
            }
            CstKind::UsingForDeclaration => declarations::using_for_declaration(self, ctx, scope),
            CstKind::StructDefinition => declarations::struct_definition(self, ctx, scope),
            CstKind::ModifierDefinition => declarations::modifier_definition(self, ctx, scope),
            CstKind::ModifierInvocation => declarations::modifier_invocation(self, ctx, scope),
            CstKind::FunctionDefinition => declarations::function_definition(self, ctx, scope),
            CstKind::EventDefinition => declarations::event_definition(self, ctx, scope),
            CstKind::EnumDefinition => declarations::enum_definition(self, ctx, scope),
            CstKind::EnumValue => declarations::enum_value(ctx),
            CstKind::IndexedParameterList => declarations::indexed_parameter_list(self, ctx, scope),
            CstKind::IndexedParameter => declarations::indexed_parameter(self, ctx, scope),
            CstKind::ParameterList => declarations::parameter_list(self, ctx, scope),
            CstKind::Parameter => declarations::parameter(self, ctx, scope),
            CstKind::UnnamedParameter => declarations::unnamed_parameter(self, ctx, scope),

            CstKind::TypeName => types::type_name(self, ctx, scope),
            CstKind::ElementaryTypeName => types::elementary_type_name(ctx),
            CstKind::UserDefinedTypeName => types::user_defined_type_name(ctx),
            CstKind::Mapping => types::mapping(self, ctx, scope),
            CstKind::FunctionTypeName => types::function_type_name(self, ctx, scope),

            CstKind::Block => statements::block(self, ctx, scope),
            CstKind::Statement | CstKind::SimpleStatement => forward_first(self, ctx, scope),
            CstKind::ExpressionStatement => statements::expression_statement(self, ctx, scope),
            CstKind::IfStatement => statements::if_statement(self, ctx, scope),
            CstKind::WhileStatement => statements::while_statement(self, ctx, scope),
            CstKind::DoWhileStatement => statements::do_while_statement(self, ctx, scope),
            CstKind::ForStatement => statements::for_statement(self, ctx, scope),
            CstKind::InlineAssemblyStatement => {
                statements::inline_assembly_statement(self, ctx, scope)
            }
            CstKind::ContinueStatement => Ok(Built::Fields(NodeKind::ContinueStatement {})),
            CstKind::BreakStatement => Ok(Built::Fields(NodeKind::BreakStatement {})),
            CstKind::ReturnStatement => statements::return_statement(self, ctx, scope),
            CstKind::ThrowStatement => Ok(Built::Fields(NodeKind::ThrowStatement {})),
            CstKind::VariableDeclarationStatement => {
                statements::variable_declaration_statement(self, ctx, scope)
            }
            CstKind::VariableDeclaration => statements::variable_declaration(self, ctx, scope),

            CstKind::Expression => expression::expression(self, ctx, scope),
            CstKind::PrimaryExpression => expression::primary_expression(self, ctx, scope),
            CstKind::NumberLiteral => expression::number_literal(ctx),
            CstKind::Identifier => expression::identifier(ctx),
            CstKind::TupleExpression => expression::tuple_expression(self, ctx, scope),
            CstKind::ElementaryTypeNameExpression => {
                expression::elementary_type_name_expression(self, ctx, scope)
            }

            CstKind::AssemblyBlock => assembly::assembly_block(self, ctx, scope),
            CstKind::AssemblyItem => assembly::assembly_item(self, ctx, scope),
            CstKind::AssemblyExpression => forward_first(self, ctx, scope),
            CstKind::AssemblyCall => assembly::assembly_call(self, ctx, scope),
            CstKind::AssemblyLiteral => assembly::assembly_literal(ctx),
            CstKind::AssemblyLocalDefinition => {
                assembly::assembly_local_definition(self, ctx, scope)
            }
            CstKind::AssemblyAssignment => assembly::assembly_assignment(self, ctx, scope),
            CstKind::AssemblyStackAssignment => assembly::assembly_stack_assignment(ctx),
            CstKind::AssemblySwitch => assembly::assembly_switch(self, ctx, scope),
            CstKind::AssemblyCase => assembly::assembly_case(self, ctx, scope),
            CstKind::AssemblyFunctionDefinition => {
                assembly::assembly_function_definition(self, ctx, scope)
            }
            CstKind::AssemblyFor => assembly::assembly_for(self, ctx, scope),
            CstKind::AssemblyLabel => assembly::assembly_label(ctx),

            // Structural list/wrapper kinds the builders above consume in
            // place. Lowered directly they keep only their kind name, the
            // same visible default as an unregistered kind.
            CstKind::PragmaName
            | CstKind::PragmaValue
            | CstKind::ImportDeclaration
            | CstKind::ModifierList
            | CstKind::ReturnParameters
            | CstKind::TypeNameList
            | CstKind::StorageLocation
            | CstKind::IdentifierList
            | CstKind::ExpressionList
            | CstKind::NameValueList
            | CstKind::NameValue
            | CstKind::FunctionCallArguments
            | CstKind::AssemblyIdentifierOrList
            | CstKind::AssemblyIdentifierList
            | CstKind::AssemblyFunctionReturns => Ok(Built::Fields(NodeKind::Unknown {
                type_name: kind.name().to_string(),
            })),
        }
    }
}

// ============================================================================
// SHARED CHILD-ACCESS HELPERS
// ============================================================================

/// Wrapper kinds lower to their single payload child; the driver then
/// re-attaches the wrapper's envelope.
fn forward_first(lw: &Lowering, ctx: &CstNode, scope: Scope) -> Result<Built, LowerError> {
    let child = ctx
        .nodes()
        .next()
        .ok_or_else(|| missing(ctx, "payload child"))?;
    Ok(Built::Forward(lw.lower_node(child, scope)?))
}

pub(crate) fn parent_name(ctx: &CstNode) -> &'static str {
    ctx.cst_kind().map(CstKind::name).unwrap_or("unregistered")
}

pub(crate) fn missing(ctx: &CstNode, element: &'static str) -> LowerError {
    LowerError::MissingChild {
        kind: parent_name(ctx),
        element,
    }
}

/// A child the grammar guarantees for this kind.
pub(crate) fn required<'c>(ctx: &'c CstNode, kind: CstKind) -> Result<&'c CstNode, LowerError> {
    ctx.first_of(kind).ok_or_else(|| missing(ctx, kind.name()))
}

pub(crate) fn required_nth<'c>(
    ctx: &'c CstNode,
    kind: CstKind,
    n: usize,
) -> Result<&'c CstNode, LowerError> {
    ctx.nth_of(kind, n).ok_or_else(|| missing(ctx, kind.name()))
}

/// The node at a fixed child position, for shapes addressed positionally.
pub(crate) fn node_at<'c>(
    ctx: &'c CstNode,
    index: usize,
    element: &'static str,
) -> Result<&'c CstNode, LowerError> {
    ctx.node_child(index).ok_or_else(|| missing(ctx, element))
}

pub(crate) fn identifier_text(ctx: &CstNode) -> Result<String, LowerError> {
    required(ctx, CstKind::Identifier).map(CstNode::text)
}

/// Drops the surrounding quote characters of a string-literal token.
pub(crate) fn strip_quotes(text: &str) -> String {
    if text.len() >= 2 {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}
