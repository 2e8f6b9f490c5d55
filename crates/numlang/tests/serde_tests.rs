//! JSON decoding of expression trees

use numlang::*;
use pretty_assertions::assert_eq;

#[test]
fn test_decode_program() {
    let json = r#"
        {"block": [
            {"function_declaration": {
                "name": "add",
                "params": ["i", "j"],
                "body": {"arithmetic": {"op": "plus", "left": {"variable": "i"}, "right": {"variable": "j"}}}
            }},
            {"function_invocation": {"name": "add", "args": [{"literal": 100.0}, {"literal": 200.0}]}}
        ]}
    "#;

    let expr: Expr = serde_json::from_str(json).unwrap();
    assert_eq!(to_text(&expr), "{(def add (i j) (plus i j)); add(100.0, 200.0)}");
    assert_eq!(evaluate_fresh(&expr), Ok(300.0));
}

#[test]
fn test_unary_omits_right() {
    let expr = Expr::unary("sub", Expr::literal(1));
    let json = serde_json::to_string(&expr).unwrap();
    assert_eq!(json, r#"{"arithmetic":{"op":"sub","left":{"literal":1.0}}}"#);

    let decoded: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, expr);
}

#[test]
fn test_empty_block_rejected() {
    let result = serde_json::from_str::<Expr>(r#"{"block": []}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("at least one expression"));
}

#[test]
fn test_duplicate_params_rejected() {
    let json = r#"{"function_declaration": {"name": "f", "params": ["a", "a"], "body": {"literal": 0.0}}}"#;
    let err = serde_json::from_str::<Expr>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate parameter 'a'"));
}

#[test]
fn test_if_else_shape() {
    let json = r#"
        {"if_else": {
            "test": {"op": "lt", "left": {"variable": "r"}, "right": {"literal": 100.0}},
            "then_branch": {"literal": -1.0},
            "else_branch": {"literal": 1.0}
        }}
    "#;
    let expr: Expr = serde_json::from_str(json).unwrap();

    let mut ctx = EvalContext::new();
    ctx.variables.define("r", 50.0);
    assert_eq!(evaluate(&expr, &mut ctx), Ok(-1.0));
}
