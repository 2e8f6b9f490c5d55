//! Conditions and branching

use numlang::*;

fn branch_on_r() -> Expr {
    // if r lt 100 then -1 else 1
    Expr::if_else(
        Condition::new("lt", Expr::var("r"), Expr::literal(100)),
        Expr::literal(-1),
        Expr::literal(1),
    )
}

#[test]
fn test_branch_follows_shared_context() {
    let mut ctx = EvalContext::new();
    let expr = branch_on_r();

    evaluate(&Expr::assign("r", Expr::literal(99)), &mut ctx).unwrap();
    assert_eq!(evaluate(&expr, &mut ctx), Ok(-1.0));

    evaluate(&Expr::assign("r", Expr::literal(101)), &mut ctx).unwrap();
    assert_eq!(evaluate(&expr, &mut ctx), Ok(1.0));
}

#[test]
fn test_then_branch_only() {
    let mut ctx = EvalContext::new();
    let expr = Expr::if_else(
        Condition::new("lt", Expr::literal(1), Expr::literal(2)),
        Expr::assign("hit", Expr::literal(1)),
        Expr::assign("hit", Expr::literal(2)),
    );

    assert_eq!(evaluate(&expr, &mut ctx), Ok(1.0));
    assert_eq!(ctx.variable("hit"), Some(1.0));
}

#[test]
fn test_untaken_branch_calls_nothing() {
    let mut ctx = EvalContext::new();
    let expr = Expr::if_else(
        Condition::new("eq", Expr::literal(0), Expr::literal(0)),
        Expr::literal(5),
        Expr::invoke("undeclared", vec![]),
    );
    assert_eq!(evaluate(&expr, &mut ctx), Ok(5.0));
}

#[test]
fn test_condition_as_value() {
    let mut ctx = EvalContext::new();
    let truth = Expr::cond("ge", Expr::literal(3), Expr::literal(3));
    let falsity = Expr::cond("gt", Expr::literal(3), Expr::literal(3));

    assert_eq!(evaluate(&truth, &mut ctx), Ok(1.0));
    assert_eq!(evaluate(&falsity, &mut ctx), Ok(0.0));

    let sum = Expr::arith("plus", truth, falsity);
    assert_eq!(evaluate(&sum, &mut ctx), Ok(1.0));
}

#[test]
fn test_unknown_condition_operator() {
    let expr = Expr::if_else(
        Condition::new("between", Expr::literal(1), Expr::literal(2)),
        Expr::literal(1),
        Expr::literal(2),
    );
    assert_eq!(
        evaluate_fresh(&expr),
        Err(EvalError::UnknownOperator {
            op: "between".to_string()
        })
    );
}

#[test]
fn test_error_in_test_skips_both_branches() {
    let mut ctx = EvalContext::new();
    let expr = Expr::if_else(
        Condition::new("lt", Expr::var("missing"), Expr::literal(2)),
        Expr::assign("a", Expr::literal(1)),
        Expr::assign("b", Expr::literal(1)),
    );

    assert!(evaluate(&expr, &mut ctx).is_err());
    assert!(ctx.variables.is_empty());
}

#[test]
fn test_loop_with_branch_in_body() {
    // Count the even numbers below 10
    let mut ctx = EvalContext::new();
    let program = Expr::block(vec![
        Expr::assign("i", Expr::literal(0)),
        Expr::assign("evens", Expr::literal(0)),
        Expr::while_loop(
            Condition::new("lt", Expr::var("i"), Expr::literal(10)),
            Expr::block(vec![
                Expr::if_else(
                    Condition::new(
                        "eq",
                        Expr::arith("mod", Expr::var("i"), Expr::literal(2)),
                        Expr::literal(0),
                    ),
                    Expr::assign("evens", Expr::arith("plus", Expr::var("evens"), Expr::literal(1))),
                    Expr::var("evens"),
                ),
                Expr::assign("i", Expr::arith("plus", Expr::var("i"), Expr::literal(1))),
            ])
            .unwrap(),
        ),
        Expr::var("evens"),
    ])
    .unwrap();

    assert_eq!(evaluate(&program, &mut ctx), Ok(5.0));
    assert_eq!(ctx.variable("i"), Some(10.0));
}
