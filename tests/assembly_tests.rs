// tests/assembly_tests.rs

mod common;

use common::*;
use serde_json::json;
use solast::cst::CstChild;

fn assembly_expr(inner: CstChild) -> CstChild {
    node("AssemblyExpressionContext", vec![inner])
}

fn assembly_call(name: &str, arguments: Vec<CstChild>) -> CstChild {
    let mut children = vec![identifier(name), tok("(")];
    let mut first = true;
    for argument in arguments {
        if !first {
            children.push(tok(","));
        }
        children.push(argument);
        first = false;
    }
    children.push(tok(")"));
    node("AssemblyCallContext", children)
}

fn decimal(value: &str) -> CstChild {
    node("AssemblyLiteralContext", vec![tok(value)])
}

fn names_holder(inner: CstChild) -> CstChild {
    node("AssemblyIdentifierOrListContext", vec![inner])
}

#[test]
fn test_assembly_block_operations_in_order() {
    let item = |inner| node("AssemblyItemContext", vec![inner]);
    let root = rule(
        "AssemblyBlockContext",
        vec![
            tok("{"),
            item(assembly_call("mstore", vec![
                assembly_expr(decimal("0")),
                assembly_expr(decimal("1")),
            ])),
            item(tok("break")),
            item(tok("continue")),
            tok("}"),
        ],
    );
    assert_eq!(
        lowered_json(&root),
        json!({
            "type": "AssemblyBlock",
            "operations": [
                {
                    "type": "AssemblyCall",
                    "functionName": "mstore",
                    "arguments": [
                        { "type": "DecimalNumber", "value": "0" },
                        { "type": "DecimalNumber", "value": "1" },
                    ],
                },
                { "type": "Break" },
                { "type": "Continue" },
            ],
        })
    );
}

#[test]
fn test_assembly_literals_classified_by_text() {
    assert_eq!(
        lowered_json(&rule("AssemblyLiteralContext", vec![tok("42")])),
        json!({ "type": "DecimalNumber", "value": "42" })
    );
    assert_eq!(
        lowered_json(&rule("AssemblyLiteralContext", vec![tok("0xFF")])),
        json!({ "type": "HexNumber", "value": "0xFF" })
    );
    assert_eq!(
        lowered_json(&rule("AssemblyLiteralContext", vec![tok("\"lit\"")])),
        json!({ "type": "StringLiteral", "value": "lit" })
    );
}

#[test]
fn test_assembly_local_definition() {
    // let x := call()
    let root = rule(
        "AssemblyLocalDefinitionContext",
        vec![
            tok("let"),
            names_holder(identifier("x")),
            tok(":="),
            assembly_expr(assembly_call("call", vec![])),
        ],
    );
    assert_eq!(
        lowered_json(&root),
        json!({
            "type": "AssemblyLocalDefinition",
            "names": [{ "type": "Identifier", "name": "x" }],
            "expression": {
                "type": "AssemblyCall",
                "functionName": "call",
                "arguments": [],
            },
        })
    );

    // let x  (no initializer)
    let root = rule(
        "AssemblyLocalDefinitionContext",
        vec![tok("let"), names_holder(identifier("x"))],
    );
    assert_eq!(lowered_json(&root)["expression"], json!(null));
}

#[test]
fn test_assembly_assignment_with_name_list() {
    let list = node(
        "AssemblyIdentifierListContext",
        vec![
            tok("("),
            identifier("a"),
            tok(","),
            identifier("b"),
            tok(")"),
        ],
    );
    let root = rule(
        "AssemblyAssignmentContext",
        vec![
            names_holder(list),
            tok(":="),
            assembly_expr(assembly_call("f", vec![])),
        ],
    );
    assert_eq!(
        lowered_json(&root)["names"],
        json!([
            { "type": "Identifier", "name": "a" },
            { "type": "Identifier", "name": "b" },
        ])
    );
}

#[test]
fn test_assembly_stack_assignment_and_label() {
    let root = rule(
        "AssemblyStackAssignmentContext",
        vec![tok("=:"), identifier("x")],
    );
    assert_eq!(
        lowered_json(&root),
        json!({ "type": "AssemblyStackAssignment", "name": "x" })
    );

    let root = rule("AssemblyLabelContext", vec![identifier("loop"), tok(":")]);
    assert_eq!(
        lowered_json(&root),
        json!({ "type": "AssemblyLabel", "name": "loop" })
    );
}

#[test]
fn test_assembly_switch_with_default() {
    let empty_block = || node("AssemblyBlockContext", vec![tok("{"), tok("}")]);
    let case = node(
        "AssemblyCaseContext",
        vec![tok("case"), decimal("0"), empty_block()],
    );
    let default = node(
        "AssemblyCaseContext",
        vec![tok("default"), empty_block()],
    );
    let root = rule(
        "AssemblySwitchContext",
        vec![
            tok("switch"),
            assembly_expr(assembly_call("shr", vec![])),
            case,
            default,
        ],
    );
    assert_eq!(
        lowered_json(&root)["cases"],
        json!([
            {
                "type": "AssemblyCase",
                "value": { "type": "DecimalNumber", "value": "0" },
                "block": { "type": "AssemblyBlock", "operations": [] },
            },
            {
                "type": "AssemblyCase",
                "block": { "type": "AssemblyBlock", "operations": [] },
                "default": true,
            },
        ])
    );
}

#[test]
fn test_assembly_function_definition() {
    let arguments = node(
        "AssemblyIdentifierListContext",
        vec![identifier("a"), tok(","), identifier("b")],
    );
    let returns = node(
        "AssemblyFunctionReturnsContext",
        vec![
            tok("->"),
            node("AssemblyIdentifierListContext", vec![identifier("r")]),
        ],
    );
    let root = rule(
        "AssemblyFunctionDefinitionContext",
        vec![
            tok("function"),
            identifier("f"),
            tok("("),
            arguments,
            tok(")"),
            returns,
            node("AssemblyBlockContext", vec![tok("{"), tok("}")]),
        ],
    );
    let value = lowered_json(&root);
    assert_eq!(value["name"], json!("f"));
    assert_eq!(
        value["arguments"],
        json!([
            { "type": "Identifier", "name": "a" },
            { "type": "Identifier", "name": "b" },
        ])
    );
    assert_eq!(
        value["returnArguments"],
        json!([{ "type": "Identifier", "name": "r" }])
    );
}

#[test]
fn test_assembly_function_definition_without_lists() {
    let root = rule(
        "AssemblyFunctionDefinitionContext",
        vec![
            tok("function"),
            identifier("f"),
            tok("("),
            tok(")"),
            node("AssemblyBlockContext", vec![tok("{"), tok("}")]),
        ],
    );
    let value = lowered_json(&root);
    assert_eq!(value["arguments"], json!([]));
    assert_eq!(value["returnArguments"], json!([]));
}

#[test]
fn test_assembly_for() {
    let empty_block = || node("AssemblyBlockContext", vec![tok("{"), tok("}")]);
    let root = rule(
        "AssemblyForContext",
        vec![
            tok("for"),
            empty_block(),
            assembly_expr(assembly_call("lt", vec![])),
            empty_block(),
            empty_block(),
        ],
    );
    let value = lowered_json(&root);
    assert_eq!(value["pre"], json!({ "type": "AssemblyBlock", "operations": [] }));
    assert_eq!(
        value["condition"],
        json!({ "type": "AssemblyCall", "functionName": "lt", "arguments": [] })
    );
    assert_eq!(value["post"]["type"], json!("AssemblyBlock"));
    assert_eq!(value["body"]["type"], json!("AssemblyBlock"));
}
