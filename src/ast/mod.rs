//! AST node definitions.
//!
//! The AST is a closed tagged union over every node kind the lowering
//! engine can produce: declarations, statements, expressions, type names,
//! and inline-assembly constructs. Each node is a [`NodeKind`] plus an
//! optional position envelope, attached uniformly by the engine and absent
//! unless requested.
//!
//! ## Wire shape
//!
//! Nodes serialize to plain records: a `type` string discriminator, the
//! kind's semantic fields in camelCase, and `loc`/`range` only when they
//! were computed. Literal values (numbers, hex strings, pragma versions)
//! stay verbatim source text so arbitrary-width values never lose
//! precision.

use crate::meta::{Loc, Range};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

mod fields;

pub use fields::NodeType;

// ============================================================================
// NODE
// ============================================================================

/// One AST node: a tagged kind plus its optional position envelope.
///
/// Immutable once built; lowering constructs a node exactly once and never
/// touches it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub loc: Option<Loc>,
    pub range: Option<Range>,
}

impl Node {
    /// A node with no position envelope.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            loc: None,
            range: None,
        }
    }

    /// The wire `type` discriminator for this node.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            NodeKind::Unknown { type_name } => type_name,
            kind => kind.node_type().name(),
        }
    }

    /// The kind enumeration value, used to key traversal callbacks.
    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        Node::new(kind)
    }
}

// The envelope rides next to the tagged fields, and passthrough nodes
// carry their dynamic kind name as the discriminator, so serialization
// goes through a value buffer instead of a plain derive.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut value = serde_json::to_value(&self.kind).map_err(S::Error::custom)?;
        if let serde_json::Value::Object(map) = &mut value {
            if let NodeKind::Unknown { type_name } = &self.kind {
                map.insert(
                    "type".to_string(),
                    serde_json::Value::String(type_name.clone()),
                );
            }
            if let Some(loc) = &self.loc {
                map.insert(
                    "loc".to_string(),
                    serde_json::to_value(loc).map_err(S::Error::custom)?,
                );
            }
            if let Some((start, end)) = &self.range {
                map.insert("range".to_string(), serde_json::json!([start, end]));
            }
        }
        value.serialize(serializer)
    }
}

// ============================================================================
// KINDS
// ============================================================================

/// Declaration visibility, `default` when no keyword is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Default,
    External,
    Internal,
    Public,
    Private,
}

/// The closed set of AST node kinds.
///
/// Field conventions:
/// - `Option<Box<Node>>` / `Option<String>` fields without a serde
///   attribute are part of the kind's fixed record and serialize as
///   `null` when absent.
/// - fields marked `skip_serializing_if` exist only in some lowering
///   contexts and are omitted entirely elsewhere; the double-`Option`
///   ones are nullable where present (a state variable's initializer,
///   a local declaration's storage location).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NodeKind {
    // ------------------------------------------------------------------
    // Source-unit level
    // ------------------------------------------------------------------
    SourceUnit {
        children: Vec<Node>,
    },
    PragmaDirective {
        name: String,
        value: String,
    },
    ImportDirective {
        path: String,
        unit_alias: Option<String>,
        symbol_aliases: Option<Vec<(String, Option<String>)>>,
    },
    ContractDefinition {
        name: String,
        base_contracts: Vec<Node>,
        sub_nodes: Vec<Node>,
        kind: String,
    },
    InheritanceSpecifier {
        base_name: Box<Node>,
        arguments: Vec<Node>,
    },

    // ------------------------------------------------------------------
    // Contract parts
    // ------------------------------------------------------------------
    StateVariableDeclaration {
        variables: Vec<Node>,
        initial_value: Option<Box<Node>>,
    },
    UsingForDeclaration {
        type_name: Option<Box<Node>>,
        library_name: String,
    },
    StructDefinition {
        name: String,
        members: Vec<Node>,
    },
    ModifierDefinition {
        name: String,
        #[serde(serialize_with = "params_or_empty")]
        parameters: Option<Box<Node>>,
        body: Box<Node>,
    },
    ModifierInvocation {
        name: String,
        arguments: Vec<Node>,
    },
    FunctionDefinition {
        name: String,
        parameters: Box<Node>,
        body: Option<Box<Node>>,
        visibility: Visibility,
        modifiers: Vec<Node>,
        is_constructor: bool,
        is_declared_const: bool,
        is_payable: bool,
    },
    EventDefinition {
        name: String,
        parameters: Box<Node>,
        is_anonymous: bool,
    },
    EnumDefinition {
        name: String,
        members: Vec<Node>,
    },
    EnumValue {
        name: String,
    },

    // ------------------------------------------------------------------
    // Parameters and variables
    // ------------------------------------------------------------------
    ParameterList {
        parameters: Vec<Node>,
    },
    Parameter {
        type_name: Box<Node>,
        name: Option<String>,
        storage_location: Option<String>,
        is_state_var: bool,
        is_indexed: bool,
    },
    VariableDeclaration {
        #[serde(skip_serializing_if = "Option::is_none")]
        type_name: Option<Box<Node>>,
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expression: Option<Option<Box<Node>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        visibility: Option<Visibility>,
        #[serde(skip_serializing_if = "Option::is_none")]
        storage_location: Option<Option<String>>,
        is_state_var: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_declared_const: Option<bool>,
        is_indexed: bool,
    },

    // ------------------------------------------------------------------
    // Type names
    // ------------------------------------------------------------------
    ElementaryTypeName {
        name: String,
    },
    UserDefinedTypeName {
        name_path: String,
    },
    Mapping {
        key_type: Box<Node>,
        value_type: Box<Node>,
    },
    ArrayTypeName {
        base_type_name: Box<Node>,
        length: Option<Box<Node>>,
    },
    FunctionTypeName {
        parameter_types: Vec<Node>,
        return_types: Vec<Node>,
        visibility: Visibility,
        is_declared_const: bool,
        is_payable: bool,
    },

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------
    Block {
        statements: Vec<Node>,
    },
    ExpressionStatement {
        expression: Option<Box<Node>>,
    },
    IfStatement {
        condition: Box<Node>,
        true_body: Box<Node>,
        false_body: Option<Box<Node>>,
    },
    WhileStatement {
        condition: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        condition: Box<Node>,
        body: Box<Node>,
    },
    ForStatement {
        init_expression: Option<Box<Node>>,
        condition_expression: Option<Box<Node>>,
        loop_expression: Box<Node>,
        body: Box<Node>,
    },
    InlineAssemblyStatement {
        language: Option<String>,
        body: Box<Node>,
    },
    ReturnStatement {
        expression: Option<Box<Node>>,
    },
    ThrowStatement {},
    BreakStatement {},
    ContinueStatement {},
    VariableDeclarationStatement {
        variables: Vec<Node>,
        initial_value: Option<Box<Node>>,
    },

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------
    NewExpression {
        type_name: Box<Node>,
    },
    UnaryOperation {
        sub_expression: Box<Node>,
        is_prefix: bool,
    },
    BinaryOperation {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    Conditional {
        condition: Box<Node>,
        true_expression: Box<Node>,
        false_expression: Box<Node>,
    },
    MemberAccess {
        expression: Box<Node>,
        member_name: String,
    },
    IndexAccess {
        base: Box<Node>,
        index: Box<Node>,
    },
    FunctionCall {
        expression: Box<Node>,
        arguments: Vec<Node>,
        names: Vec<String>,
    },
    TupleExpression {
        elements: Vec<Node>,
        is_array: bool,
    },
    ElementaryTypeNameExpression {
        type_name: Box<Node>,
    },
    BooleanLiteral {
        value: bool,
    },
    NumberLiteral {
        number: String,
        subdenomination: Option<String>,
    },
    StringLiteral {
        value: String,
    },
    Identifier {
        name: String,
    },
    DecimalNumber {
        value: String,
    },
    HexNumber {
        value: String,
    },

    // ------------------------------------------------------------------
    // Inline assembly
    // ------------------------------------------------------------------
    AssemblyBlock {
        operations: Vec<Node>,
    },
    AssemblyCall {
        function_name: String,
        arguments: Vec<Node>,
    },
    AssemblyLocalDefinition {
        names: Vec<Node>,
        expression: Option<Box<Node>>,
    },
    AssemblyAssignment {
        names: Vec<Node>,
        expression: Option<Box<Node>>,
    },
    AssemblyStackAssignment {
        name: String,
    },
    AssemblyFunctionDefinition {
        name: String,
        arguments: Vec<Node>,
        return_arguments: Vec<Node>,
    },
    AssemblyFor {
        pre: Box<Node>,
        condition: Box<Node>,
        post: Box<Node>,
        body: Box<Node>,
    },
    AssemblySwitch {
        expression: Box<Node>,
        cases: Vec<Node>,
    },
    AssemblyCase {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<Box<Node>>,
        block: Box<Node>,
        #[serde(rename = "default", skip_serializing_if = "is_false")]
        is_default: bool,
    },
    AssemblyLabel {
        name: String,
    },
    Break {},
    Continue {},

    // ------------------------------------------------------------------
    // Passthrough
    // ------------------------------------------------------------------
    /// A CST kind with no dedicated builder: the node keeps only its
    /// stripped kind name as the discriminator. Visible by design, so
    /// grammar growth without matching builder coverage degrades
    /// observably instead of silently.
    Unknown {
        #[serde(skip)]
        type_name: String,
    },
}

// ============================================================================
// SERIALIZATION HELPERS
// ============================================================================

fn is_false(value: &bool) -> bool {
    !*value
}

// A modifier without a parameter list serializes its parameters as an
// empty array rather than null.
fn params_or_empty<S: Serializer>(
    value: &Option<Box<Node>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(node) => node.serialize(serializer),
        None => serializer.collect_seq(std::iter::empty::<&Node>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape_has_type_discriminator() {
        let node = Node::new(NodeKind::PragmaDirective {
            name: "solidity".into(),
            value: "^0.4.0".into(),
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "PragmaDirective",
                "name": "solidity",
                "value": "^0.4.0",
            })
        );
    }

    #[test]
    fn test_unknown_kind_serializes_its_own_name() {
        let node = Node::new(NodeKind::Unknown {
            type_name: "ThrowStatementish".into(),
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "type": "ThrowStatementish" })
        );
    }

    #[test]
    fn test_envelope_absent_by_default() {
        let node = Node::new(NodeKind::EnumValue { name: "A".into() });
        let value = serde_json::to_value(&node).unwrap();
        let map = value.as_object().unwrap();
        assert!(!map.contains_key("loc"));
        assert!(!map.contains_key("range"));
    }

    #[test]
    fn test_range_serializes_as_offset_pair() {
        let mut node = Node::new(NodeKind::EnumValue { name: "A".into() });
        node.range = Some((3, 9));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["range"], json!([3, 9]));
    }

    #[test]
    fn test_contextual_fields_are_omitted_when_absent() {
        // An event parameter: no storage location, no initializer slot.
        let node = Node::new(NodeKind::VariableDeclaration {
            type_name: Some(Box::new(Node::new(NodeKind::ElementaryTypeName {
                name: "uint".into(),
            }))),
            name: Some("a".into()),
            expression: None,
            visibility: None,
            storage_location: None,
            is_state_var: false,
            is_declared_const: None,
            is_indexed: true,
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "VariableDeclaration",
                "typeName": { "type": "ElementaryTypeName", "name": "uint" },
                "name": "a",
                "isStateVar": false,
                "isIndexed": true,
            })
        );
    }

    #[test]
    fn test_present_null_fields_serialize_as_null() {
        // A local declaration: storage location slot present but empty.
        let node = Node::new(NodeKind::VariableDeclaration {
            type_name: Some(Box::new(Node::new(NodeKind::ElementaryTypeName {
                name: "uint".into(),
            }))),
            name: Some("a".into()),
            expression: None,
            visibility: None,
            storage_location: Some(None),
            is_state_var: false,
            is_declared_const: None,
            is_indexed: false,
        });
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["storageLocation"], serde_json::Value::Null);
    }
}
