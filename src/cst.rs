//! Concrete syntax tree data model.
//!
//! The CST is produced by an upstream grammar-driven parser and consumed
//! here read-only. A node carries the grammar's rule-kind name, an ordered
//! mix of child nodes and tokens, and the positions of its first and last
//! tokens. The lowering engine never mutates a CST and never retains one
//! past a single [`lower`](crate::lower::lower) call.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Position of a single token: 1-based line, 0-based column, and the
/// inclusive character offsets of its first and last characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenPos {
    pub line: u32,
    pub column: u32,
    pub start: usize,
    pub stop: usize,
}

/// A terminal token with its verbatim source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: TokenPos,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: TokenPos) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }

    /// String-literal tokens keep their quotes in the CST.
    pub fn is_string_literal(&self) -> bool {
        self.text.starts_with('"') || self.text.starts_with('\'')
    }
}

/// One ordered child of a CST node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CstChild {
    Node(CstNode),
    Token(Token),
}

impl CstChild {
    pub fn as_node(&self) -> Option<&CstNode> {
        match self {
            CstChild::Node(n) => Some(n),
            CstChild::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            CstChild::Node(_) => None,
            CstChild::Token(t) => Some(t),
        }
    }

    fn start(&self) -> TokenPos {
        match self {
            CstChild::Node(n) => n.start,
            CstChild::Token(t) => t.pos,
        }
    }

    fn stop(&self) -> TokenPos {
        match self {
            CstChild::Node(n) => n.stop,
            CstChild::Token(t) => t.pos,
        }
    }
}

/// A grammar-shaped parse node.
///
/// `kind` is the grammar's own name for the rule and may carry a
/// grammar-specific suffix (ANTLR emits `PragmaDirectiveContext`);
/// [`CstNode::canonical_kind`] strips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstNode {
    pub kind: String,
    pub children: Vec<CstChild>,
    pub start: TokenPos,
    pub stop: TokenPos,
}

impl CstNode {
    /// Builds a node, deriving its start/stop positions from its children.
    pub fn new(kind: impl Into<String>, children: Vec<CstChild>) -> Self {
        let start = children.first().map(CstChild::start).unwrap_or_default();
        let stop = children.last().map(CstChild::stop).unwrap_or_default();
        Self {
            kind: kind.into(),
            children,
            start,
            stop,
        }
    }

    /// Builds a node with explicit start/stop token positions.
    pub fn with_pos(
        kind: impl Into<String>,
        children: Vec<CstChild>,
        start: TokenPos,
        stop: TokenPos,
    ) -> Self {
        Self {
            kind: kind.into(),
            children,
            start,
            stop,
        }
    }

    /// Kind name with any grammar-specific `Context` suffix stripped.
    pub fn canonical_kind(&self) -> &str {
        self.kind.strip_suffix("Context").unwrap_or(&self.kind)
    }

    /// The registered kind for this node, if the paired grammar knows it.
    pub fn cst_kind(&self) -> Option<CstKind> {
        CstKind::from_name(self.canonical_kind())
    }

    /// Verbatim concatenation of all token text under this node.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                CstChild::Node(n) => n.collect_text(out),
                CstChild::Token(t) => out.push_str(&t.text),
            }
        }
    }

    pub fn child(&self, index: usize) -> Option<&CstChild> {
        self.children.get(index)
    }

    pub fn node_child(&self, index: usize) -> Option<&CstNode> {
        self.children.get(index).and_then(CstChild::as_node)
    }

    /// Text of the child at `index` only if it is a token.
    pub fn token_text(&self, index: usize) -> Option<&str> {
        self.children
            .get(index)
            .and_then(CstChild::as_token)
            .map(|t| t.text.as_str())
    }

    /// Text of the child at `index`, token or node.
    pub fn child_text(&self, index: usize) -> Option<String> {
        match self.children.get(index)? {
            CstChild::Node(n) => Some(n.text()),
            CstChild::Token(t) => Some(t.text.clone()),
        }
    }

    /// Direct node children, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter_map(CstChild::as_node)
    }

    /// Direct node children of one registered kind, in order.
    pub fn nodes_of(&self, kind: CstKind) -> impl Iterator<Item = &CstNode> {
        self.nodes().filter(move |n| n.cst_kind() == Some(kind))
    }

    pub fn first_of(&self, kind: CstKind) -> Option<&CstNode> {
        self.nodes_of(kind).next()
    }

    pub fn nth_of(&self, kind: CstKind, n: usize) -> Option<&CstNode> {
        self.nodes_of(kind).nth(n)
    }

    /// Whether a direct token child has exactly this text (keyword probes).
    pub fn has_token(&self, text: &str) -> bool {
        self.children
            .iter()
            .filter_map(CstChild::as_token)
            .any(|t| t.text == text)
    }

    /// First direct string-literal token, quotes included.
    pub fn first_string_token(&self) -> Option<&str> {
        self.children
            .iter()
            .filter_map(CstChild::as_token)
            .find(|t| t.is_string_literal())
            .map(|t| t.text.as_str())
    }
}

// ============================================================================
// KIND INVENTORY
// ============================================================================

/// The closed inventory of CST kinds the paired Solidity grammar produces.
///
/// Canonical names (post suffix-strip) map onto these variants through an
/// immutable registry built once per process. Kinds the grammar may grow
/// that are absent here lower to a passthrough AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CstKind {
    SourceUnit,
    PragmaDirective,
    PragmaName,
    PragmaValue,
    ImportDirective,
    ImportDeclaration,
    ContractDefinition,
    InheritanceSpecifier,
    ContractPart,
    StateVariableDeclaration,
    UsingForDeclaration,
    StructDefinition,
    ModifierDefinition,
    ModifierInvocation,
    ModifierList,
    FunctionDefinition,
    ReturnParameters,
    EventDefinition,
    EnumDefinition,
    EnumValue,
    IndexedParameterList,
    IndexedParameter,
    ParameterList,
    Parameter,
    UnnamedParameter,
    TypeNameList,
    TypeName,
    ElementaryTypeName,
    UserDefinedTypeName,
    Mapping,
    FunctionTypeName,
    StorageLocation,
    Block,
    Statement,
    SimpleStatement,
    ExpressionStatement,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    InlineAssemblyStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    ThrowStatement,
    VariableDeclarationStatement,
    IdentifierList,
    VariableDeclaration,
    Expression,
    PrimaryExpression,
    ExpressionList,
    NameValueList,
    NameValue,
    FunctionCallArguments,
    ElementaryTypeNameExpression,
    NumberLiteral,
    Identifier,
    TupleExpression,
    AssemblyBlock,
    AssemblyItem,
    AssemblyExpression,
    AssemblyCall,
    AssemblyLiteral,
    AssemblyLocalDefinition,
    AssemblyAssignment,
    AssemblyIdentifierOrList,
    AssemblyIdentifierList,
    AssemblyStackAssignment,
    AssemblySwitch,
    AssemblyCase,
    AssemblyFunctionDefinition,
    AssemblyFunctionReturns,
    AssemblyFor,
    AssemblyLabel,
}

impl CstKind {
    pub const ALL: [CstKind; 74] = [
        CstKind::SourceUnit,
        CstKind::PragmaDirective,
        CstKind::PragmaName,
        CstKind::PragmaValue,
        CstKind::ImportDirective,
        CstKind::ImportDeclaration,
        CstKind::ContractDefinition,
        CstKind::InheritanceSpecifier,
        CstKind::ContractPart,
        CstKind::StateVariableDeclaration,
        CstKind::UsingForDeclaration,
        CstKind::StructDefinition,
        CstKind::ModifierDefinition,
        CstKind::ModifierInvocation,
        CstKind::ModifierList,
        CstKind::FunctionDefinition,
        CstKind::ReturnParameters,
        CstKind::EventDefinition,
        CstKind::EnumDefinition,
        CstKind::EnumValue,
        CstKind::IndexedParameterList,
        CstKind::IndexedParameter,
        CstKind::ParameterList,
        CstKind::Parameter,
        CstKind::UnnamedParameter,
        CstKind::TypeNameList,
        CstKind::TypeName,
        CstKind::ElementaryTypeName,
        CstKind::UserDefinedTypeName,
        CstKind::Mapping,
        CstKind::FunctionTypeName,
        CstKind::StorageLocation,
        CstKind::Block,
        CstKind::Statement,
        CstKind::SimpleStatement,
        CstKind::ExpressionStatement,
        CstKind::IfStatement,
        CstKind::WhileStatement,
        CstKind::DoWhileStatement,
        CstKind::ForStatement,
        CstKind::InlineAssemblyStatement,
        CstKind::ContinueStatement,
        CstKind::BreakStatement,
        CstKind::ReturnStatement,
        CstKind::ThrowStatement,
        CstKind::VariableDeclarationStatement,
        CstKind::IdentifierList,
        CstKind::VariableDeclaration,
        CstKind::Expression,
        CstKind::PrimaryExpression,
        CstKind::ExpressionList,
        CstKind::NameValueList,
        CstKind::NameValue,
        CstKind::FunctionCallArguments,
        CstKind::ElementaryTypeNameExpression,
        CstKind::NumberLiteral,
        CstKind::Identifier,
        CstKind::TupleExpression,
        CstKind::AssemblyBlock,
        CstKind::AssemblyItem,
        CstKind::AssemblyExpression,
        CstKind::AssemblyCall,
        CstKind::AssemblyLiteral,
        CstKind::AssemblyLocalDefinition,
        CstKind::AssemblyAssignment,
        CstKind::AssemblyIdentifierOrList,
        CstKind::AssemblyIdentifierList,
        CstKind::AssemblyStackAssignment,
        CstKind::AssemblySwitch,
        CstKind::AssemblyCase,
        CstKind::AssemblyFunctionDefinition,
        CstKind::AssemblyFunctionReturns,
        CstKind::AssemblyFor,
        CstKind::AssemblyLabel,
    ];

    /// Canonical kind name, identical to the grammar's rule name.
    pub const fn name(self) -> &'static str {
        match self {
            CstKind::SourceUnit => "SourceUnit",
            CstKind::PragmaDirective => "PragmaDirective",
            CstKind::PragmaName => "PragmaName",
            CstKind::PragmaValue => "PragmaValue",
            CstKind::ImportDirective => "ImportDirective",
            CstKind::ImportDeclaration => "ImportDeclaration",
            CstKind::ContractDefinition => "ContractDefinition",
            CstKind::InheritanceSpecifier => "InheritanceSpecifier",
            CstKind::ContractPart => "ContractPart",
            CstKind::StateVariableDeclaration => "StateVariableDeclaration",
            CstKind::UsingForDeclaration => "UsingForDeclaration",
            CstKind::StructDefinition => "StructDefinition",
            CstKind::ModifierDefinition => "ModifierDefinition",
            CstKind::ModifierInvocation => "ModifierInvocation",
            CstKind::ModifierList => "ModifierList",
            CstKind::FunctionDefinition => "FunctionDefinition",
            CstKind::ReturnParameters => "ReturnParameters",
            CstKind::EventDefinition => "EventDefinition",
            CstKind::EnumDefinition => "EnumDefinition",
            CstKind::EnumValue => "EnumValue",
            CstKind::IndexedParameterList => "IndexedParameterList",
            CstKind::IndexedParameter => "IndexedParameter",
            CstKind::ParameterList => "ParameterList",
            CstKind::Parameter => "Parameter",
            CstKind::UnnamedParameter => "UnnamedParameter",
            CstKind::TypeNameList => "TypeNameList",
            CstKind::TypeName => "TypeName",
            CstKind::ElementaryTypeName => "ElementaryTypeName",
            CstKind::UserDefinedTypeName => "UserDefinedTypeName",
            CstKind::Mapping => "Mapping",
            CstKind::FunctionTypeName => "FunctionTypeName",
            CstKind::StorageLocation => "StorageLocation",
            CstKind::Block => "Block",
            CstKind::Statement => "Statement",
            CstKind::SimpleStatement => "SimpleStatement",
            CstKind::ExpressionStatement => "ExpressionStatement",
            CstKind::IfStatement => "IfStatement",
            CstKind::WhileStatement => "WhileStatement",
            CstKind::DoWhileStatement => "DoWhileStatement",
            CstKind::ForStatement => "ForStatement",
            CstKind::InlineAssemblyStatement => "InlineAssemblyStatement",
            CstKind::ContinueStatement => "ContinueStatement",
            CstKind::BreakStatement => "BreakStatement",
            CstKind::ReturnStatement => "ReturnStatement",
            CstKind::ThrowStatement => "ThrowStatement",
            CstKind::VariableDeclarationStatement => "VariableDeclarationStatement",
            CstKind::IdentifierList => "IdentifierList",
            CstKind::VariableDeclaration => "VariableDeclaration",
            CstKind::Expression => "Expression",
            CstKind::PrimaryExpression => "PrimaryExpression",
            CstKind::ExpressionList => "ExpressionList",
            CstKind::NameValueList => "NameValueList",
            CstKind::NameValue => "NameValue",
            CstKind::FunctionCallArguments => "FunctionCallArguments",
            CstKind::ElementaryTypeNameExpression => "ElementaryTypeNameExpression",
            CstKind::NumberLiteral => "NumberLiteral",
            CstKind::Identifier => "Identifier",
            CstKind::TupleExpression => "TupleExpression",
            CstKind::AssemblyBlock => "AssemblyBlock",
            CstKind::AssemblyItem => "AssemblyItem",
            CstKind::AssemblyExpression => "AssemblyExpression",
            CstKind::AssemblyCall => "AssemblyCall",
            CstKind::AssemblyLiteral => "AssemblyLiteral",
            CstKind::AssemblyLocalDefinition => "AssemblyLocalDefinition",
            CstKind::AssemblyAssignment => "AssemblyAssignment",
            CstKind::AssemblyIdentifierOrList => "AssemblyIdentifierOrList",
            CstKind::AssemblyIdentifierList => "AssemblyIdentifierList",
            CstKind::AssemblyStackAssignment => "AssemblyStackAssignment",
            CstKind::AssemblySwitch => "AssemblySwitch",
            CstKind::AssemblyCase => "AssemblyCase",
            CstKind::AssemblyFunctionDefinition => "AssemblyFunctionDefinition",
            CstKind::AssemblyFunctionReturns => "AssemblyFunctionReturns",
            CstKind::AssemblyFor => "AssemblyFor",
            CstKind::AssemblyLabel => "AssemblyLabel",
        }
    }

    /// Looks up a canonical kind name in the registry.
    pub fn from_name(name: &str) -> Option<CstKind> {
        KIND_BY_NAME.get(name).copied()
    }
}

// The only process-wide state: built once, never mutated.
static KIND_BY_NAME: Lazy<HashMap<&'static str, CstKind>> =
    Lazy::new(|| CstKind::ALL.iter().map(|k| (k.name(), *k)).collect());
