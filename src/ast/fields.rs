//! Kind enumeration and the per-kind child-field registry.
//!
//! Traversal descends through each node's child-bearing fields in the
//! fixed order they are declared on [`NodeKind`]. Adding a variant to the
//! node definitions means adding it to both matches here; the compiler's
//! exhaustiveness check is the lockstep guarantee.

use super::{Node, NodeKind};

/// Fieldless enumeration of AST node kinds, used to key traversal
/// callbacks so unknown kind names are impossible at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    SourceUnit,
    PragmaDirective,
    ImportDirective,
    ContractDefinition,
    InheritanceSpecifier,
    StateVariableDeclaration,
    UsingForDeclaration,
    StructDefinition,
    ModifierDefinition,
    ModifierInvocation,
    FunctionDefinition,
    EventDefinition,
    EnumDefinition,
    EnumValue,
    ParameterList,
    Parameter,
    VariableDeclaration,
    ElementaryTypeName,
    UserDefinedTypeName,
    Mapping,
    ArrayTypeName,
    FunctionTypeName,
    Block,
    ExpressionStatement,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    InlineAssemblyStatement,
    ReturnStatement,
    ThrowStatement,
    BreakStatement,
    ContinueStatement,
    VariableDeclarationStatement,
    NewExpression,
    UnaryOperation,
    BinaryOperation,
    Conditional,
    MemberAccess,
    IndexAccess,
    FunctionCall,
    TupleExpression,
    ElementaryTypeNameExpression,
    BooleanLiteral,
    NumberLiteral,
    StringLiteral,
    Identifier,
    DecimalNumber,
    HexNumber,
    AssemblyBlock,
    AssemblyCall,
    AssemblyLocalDefinition,
    AssemblyAssignment,
    AssemblyStackAssignment,
    AssemblyFunctionDefinition,
    AssemblyFor,
    AssemblySwitch,
    AssemblyCase,
    AssemblyLabel,
    Break,
    Continue,
    Unknown,
}

impl NodeType {
    /// The wire discriminator for this kind (passthrough nodes carry
    /// their own dynamic name instead).
    pub const fn name(self) -> &'static str {
        match self {
            NodeType::SourceUnit => "SourceUnit",
            NodeType::PragmaDirective => "PragmaDirective",
            NodeType::ImportDirective => "ImportDirective",
            NodeType::ContractDefinition => "ContractDefinition",
            NodeType::InheritanceSpecifier => "InheritanceSpecifier",
            NodeType::StateVariableDeclaration => "StateVariableDeclaration",
            NodeType::UsingForDeclaration => "UsingForDeclaration",
            NodeType::StructDefinition => "StructDefinition",
            NodeType::ModifierDefinition => "ModifierDefinition",
            NodeType::ModifierInvocation => "ModifierInvocation",
            NodeType::FunctionDefinition => "FunctionDefinition",
            NodeType::EventDefinition => "EventDefinition",
            NodeType::EnumDefinition => "EnumDefinition",
            NodeType::EnumValue => "EnumValue",
            NodeType::ParameterList => "ParameterList",
            NodeType::Parameter => "Parameter",
            NodeType::VariableDeclaration => "VariableDeclaration",
            NodeType::ElementaryTypeName => "ElementaryTypeName",
            NodeType::UserDefinedTypeName => "UserDefinedTypeName",
            NodeType::Mapping => "Mapping",
            NodeType::ArrayTypeName => "ArrayTypeName",
            NodeType::FunctionTypeName => "FunctionTypeName",
            NodeType::Block => "Block",
            NodeType::ExpressionStatement => "ExpressionStatement",
            NodeType::IfStatement => "IfStatement",
            NodeType::WhileStatement => "WhileStatement",
            NodeType::DoWhileStatement => "DoWhileStatement",
            NodeType::ForStatement => "ForStatement",
            NodeType::InlineAssemblyStatement => "InlineAssemblyStatement",
            NodeType::ReturnStatement => "ReturnStatement",
            NodeType::ThrowStatement => "ThrowStatement",
            NodeType::BreakStatement => "BreakStatement",
            NodeType::ContinueStatement => "ContinueStatement",
            NodeType::VariableDeclarationStatement => "VariableDeclarationStatement",
            NodeType::NewExpression => "NewExpression",
            NodeType::UnaryOperation => "UnaryOperation",
            NodeType::BinaryOperation => "BinaryOperation",
            NodeType::Conditional => "Conditional",
            NodeType::MemberAccess => "MemberAccess",
            NodeType::IndexAccess => "IndexAccess",
            NodeType::FunctionCall => "FunctionCall",
            NodeType::TupleExpression => "TupleExpression",
            NodeType::ElementaryTypeNameExpression => "ElementaryTypeNameExpression",
            NodeType::BooleanLiteral => "BooleanLiteral",
            NodeType::NumberLiteral => "NumberLiteral",
            NodeType::StringLiteral => "StringLiteral",
            NodeType::Identifier => "Identifier",
            NodeType::DecimalNumber => "DecimalNumber",
            NodeType::HexNumber => "HexNumber",
            NodeType::AssemblyBlock => "AssemblyBlock",
            NodeType::AssemblyCall => "AssemblyCall",
            NodeType::AssemblyLocalDefinition => "AssemblyLocalDefinition",
            NodeType::AssemblyAssignment => "AssemblyAssignment",
            NodeType::AssemblyStackAssignment => "AssemblyStackAssignment",
            NodeType::AssemblyFunctionDefinition => "AssemblyFunctionDefinition",
            NodeType::AssemblyFor => "AssemblyFor",
            NodeType::AssemblySwitch => "AssemblySwitch",
            NodeType::AssemblyCase => "AssemblyCase",
            NodeType::AssemblyLabel => "AssemblyLabel",
            NodeType::Break => "Break",
            NodeType::Continue => "Continue",
            NodeType::Unknown => "Unknown",
        }
    }
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::SourceUnit { .. } => NodeType::SourceUnit,
            NodeKind::PragmaDirective { .. } => NodeType::PragmaDirective,
            NodeKind::ImportDirective { .. } => NodeType::ImportDirective,
            NodeKind::ContractDefinition { .. } => NodeType::ContractDefinition,
            NodeKind::InheritanceSpecifier { .. } => NodeType::InheritanceSpecifier,
            NodeKind::StateVariableDeclaration { .. } => NodeType::StateVariableDeclaration,
            NodeKind::UsingForDeclaration { .. } => NodeType::UsingForDeclaration,
            NodeKind::StructDefinition { .. } => NodeType::StructDefinition,
            NodeKind::ModifierDefinition { .. } => NodeType::ModifierDefinition,
            NodeKind::ModifierInvocation { .. } => NodeType::ModifierInvocation,
            NodeKind::FunctionDefinition { .. } => NodeType::FunctionDefinition,
            NodeKind::EventDefinition { .. } => NodeType::EventDefinition,
            NodeKind::EnumDefinition { .. } => NodeType::EnumDefinition,
            NodeKind::EnumValue { .. } => NodeType::EnumValue,
            NodeKind::ParameterList { .. } => NodeType::ParameterList,
            NodeKind::Parameter { .. } => NodeType::Parameter,
            NodeKind::VariableDeclaration { .. } => NodeType::VariableDeclaration,
            NodeKind::ElementaryTypeName { .. } => NodeType::ElementaryTypeName,
            NodeKind::UserDefinedTypeName { .. } => NodeType::UserDefinedTypeName,
            NodeKind::Mapping { .. } => NodeType::Mapping,
            NodeKind::ArrayTypeName { .. } => NodeType::ArrayTypeName,
            NodeKind::FunctionTypeName { .. } => NodeType::FunctionTypeName,
            NodeKind::Block { .. } => NodeType::Block,
            NodeKind::ExpressionStatement { .. } => NodeType::ExpressionStatement,
            NodeKind::IfStatement { .. } => NodeType::IfStatement,
            NodeKind::WhileStatement { .. } => NodeType::WhileStatement,
            NodeKind::DoWhileStatement { .. } => NodeType::DoWhileStatement,
            NodeKind::ForStatement { .. } => NodeType::ForStatement,
            NodeKind::InlineAssemblyStatement { .. } => NodeType::InlineAssemblyStatement,
            NodeKind::ReturnStatement { .. } => NodeType::ReturnStatement,
            NodeKind::ThrowStatement {} => NodeType::ThrowStatement,
            NodeKind::BreakStatement {} => NodeType::BreakStatement,
            NodeKind::ContinueStatement {} => NodeType::ContinueStatement,
            NodeKind::VariableDeclarationStatement { .. } => NodeType::VariableDeclarationStatement,
            NodeKind::NewExpression { .. } => NodeType::NewExpression,
            NodeKind::UnaryOperation { .. } => NodeType::UnaryOperation,
            NodeKind::BinaryOperation { .. } => NodeType::BinaryOperation,
            NodeKind::Conditional { .. } => NodeType::Conditional,
            NodeKind::MemberAccess { .. } => NodeType::MemberAccess,
            NodeKind::IndexAccess { .. } => NodeType::IndexAccess,
            NodeKind::FunctionCall { .. } => NodeType::FunctionCall,
            NodeKind::TupleExpression { .. } => NodeType::TupleExpression,
            NodeKind::ElementaryTypeNameExpression { .. } => NodeType::ElementaryTypeNameExpression,
            NodeKind::BooleanLiteral { .. } => NodeType::BooleanLiteral,
            NodeKind::NumberLiteral { .. } => NodeType::NumberLiteral,
            NodeKind::StringLiteral { .. } => NodeType::StringLiteral,
            NodeKind::Identifier { .. } => NodeType::Identifier,
            NodeKind::DecimalNumber { .. } => NodeType::DecimalNumber,
            NodeKind::HexNumber { .. } => NodeType::HexNumber,
            NodeKind::AssemblyBlock { .. } => NodeType::AssemblyBlock,
            NodeKind::AssemblyCall { .. } => NodeType::AssemblyCall,
            NodeKind::AssemblyLocalDefinition { .. } => NodeType::AssemblyLocalDefinition,
            NodeKind::AssemblyAssignment { .. } => NodeType::AssemblyAssignment,
            NodeKind::AssemblyStackAssignment { .. } => NodeType::AssemblyStackAssignment,
            NodeKind::AssemblyFunctionDefinition { .. } => NodeType::AssemblyFunctionDefinition,
            NodeKind::AssemblyFor { .. } => NodeType::AssemblyFor,
            NodeKind::AssemblySwitch { .. } => NodeType::AssemblySwitch,
            NodeKind::AssemblyCase { .. } => NodeType::AssemblyCase,
            NodeKind::AssemblyLabel { .. } => NodeType::AssemblyLabel,
            NodeKind::Break {} => NodeType::Break,
            NodeKind::Continue {} => NodeType::Continue,
            NodeKind::Unknown { .. } => NodeType::Unknown,
        }
    }
}

impl Node {
    /// Child-bearing fields in kind-specific declaration order.
    ///
    /// Absent optionals and empty sequences contribute nothing.
    pub fn children(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        collect(&self.kind, &mut out);
        out
    }
}

fn collect<'n>(kind: &'n NodeKind, out: &mut Vec<&'n Node>) {
    match kind {
        NodeKind::SourceUnit { children } => out.extend(children),
        NodeKind::PragmaDirective { .. } => {}
        NodeKind::ImportDirective { .. } => {}
        NodeKind::ContractDefinition {
            base_contracts,
            sub_nodes,
            ..
        } => {
            out.extend(base_contracts);
            out.extend(sub_nodes);
        }
        NodeKind::InheritanceSpecifier {
            base_name,
            arguments,
        } => {
            out.push(base_name);
            out.extend(arguments);
        }
        NodeKind::StateVariableDeclaration {
            variables,
            initial_value,
        } => {
            out.extend(variables);
            out.extend(initial_value.as_deref());
        }
        NodeKind::UsingForDeclaration { type_name, .. } => out.extend(type_name.as_deref()),
        NodeKind::StructDefinition { members, .. } => out.extend(members),
        NodeKind::ModifierDefinition {
            parameters, body, ..
        } => {
            out.extend(parameters.as_deref());
            out.push(body);
        }
        NodeKind::ModifierInvocation { arguments, .. } => out.extend(arguments),
        NodeKind::FunctionDefinition {
            parameters,
            body,
            modifiers,
            ..
        } => {
            out.push(parameters);
            out.extend(body.as_deref());
            out.extend(modifiers);
        }
        NodeKind::EventDefinition { parameters, .. } => out.push(parameters),
        NodeKind::EnumDefinition { members, .. } => out.extend(members),
        NodeKind::EnumValue { .. } => {}
        NodeKind::ParameterList { parameters } => out.extend(parameters),
        NodeKind::Parameter { type_name, .. } => out.push(type_name),
        NodeKind::VariableDeclaration {
            type_name,
            expression,
            ..
        } => {
            out.extend(type_name.as_deref());
            if let Some(Some(expression)) = expression {
                out.push(expression);
            }
        }
        NodeKind::ElementaryTypeName { .. } => {}
        NodeKind::UserDefinedTypeName { .. } => {}
        NodeKind::Mapping {
            key_type,
            value_type,
        } => {
            out.push(key_type);
            out.push(value_type);
        }
        NodeKind::ArrayTypeName {
            base_type_name,
            length,
        } => {
            out.push(base_type_name);
            out.extend(length.as_deref());
        }
        NodeKind::FunctionTypeName {
            parameter_types,
            return_types,
            ..
        } => {
            out.extend(parameter_types);
            out.extend(return_types);
        }
        NodeKind::Block { statements } => out.extend(statements),
        NodeKind::ExpressionStatement { expression } => out.extend(expression.as_deref()),
        NodeKind::IfStatement {
            condition,
            true_body,
            false_body,
        } => {
            out.push(condition);
            out.push(true_body);
            out.extend(false_body.as_deref());
        }
        NodeKind::WhileStatement { condition, body }
        | NodeKind::DoWhileStatement { condition, body } => {
            out.push(condition);
            out.push(body);
        }
        NodeKind::ForStatement {
            init_expression,
            condition_expression,
            loop_expression,
            body,
        } => {
            out.extend(init_expression.as_deref());
            out.extend(condition_expression.as_deref());
            out.push(loop_expression);
            out.push(body);
        }
        NodeKind::InlineAssemblyStatement { body, .. } => out.push(body),
        NodeKind::ReturnStatement { expression } => out.extend(expression.as_deref()),
        NodeKind::ThrowStatement {} => {}
        NodeKind::BreakStatement {} => {}
        NodeKind::ContinueStatement {} => {}
        NodeKind::VariableDeclarationStatement {
            variables,
            initial_value,
        } => {
            out.extend(variables);
            out.extend(initial_value.as_deref());
        }
        NodeKind::NewExpression { type_name } => out.push(type_name),
        NodeKind::UnaryOperation { sub_expression, .. } => out.push(sub_expression),
        NodeKind::BinaryOperation { left, right, .. } => {
            out.push(left);
            out.push(right);
        }
        NodeKind::Conditional {
            condition,
            true_expression,
            false_expression,
        } => {
            out.push(condition);
            out.push(true_expression);
            out.push(false_expression);
        }
        NodeKind::MemberAccess { expression, .. } => out.push(expression),
        NodeKind::IndexAccess { base, index } => {
            out.push(base);
            out.push(index);
        }
        NodeKind::FunctionCall {
            expression,
            arguments,
            ..
        } => {
            out.push(expression);
            out.extend(arguments);
        }
        NodeKind::TupleExpression { elements, .. } => out.extend(elements),
        NodeKind::ElementaryTypeNameExpression { type_name } => out.push(type_name),
        NodeKind::BooleanLiteral { .. } => {}
        NodeKind::NumberLiteral { .. } => {}
        NodeKind::StringLiteral { .. } => {}
        NodeKind::Identifier { .. } => {}
        NodeKind::DecimalNumber { .. } => {}
        NodeKind::HexNumber { .. } => {}
        NodeKind::AssemblyBlock { operations } => out.extend(operations),
        NodeKind::AssemblyCall { arguments, .. } => out.extend(arguments),
        NodeKind::AssemblyLocalDefinition { names, expression }
        | NodeKind::AssemblyAssignment { names, expression } => {
            out.extend(names);
            out.extend(expression.as_deref());
        }
        NodeKind::AssemblyStackAssignment { .. } => {}
        NodeKind::AssemblyFunctionDefinition {
            arguments,
            return_arguments,
            ..
        } => {
            out.extend(arguments);
            out.extend(return_arguments);
        }
        NodeKind::AssemblyFor {
            pre,
            condition,
            post,
            body,
        } => {
            out.push(pre);
            out.push(condition);
            out.push(post);
            out.push(body);
        }
        NodeKind::AssemblySwitch { expression, cases } => {
            out.push(expression);
            out.extend(cases);
        }
        NodeKind::AssemblyCase { value, block, .. } => {
            out.extend(value.as_deref());
            out.push(block);
        }
        NodeKind::AssemblyLabel { .. } => {}
        NodeKind::Break {} => {}
        NodeKind::Continue {} => {}
        NodeKind::Unknown { .. } => {}
    }
}
