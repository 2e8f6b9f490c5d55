//! Demonstration programs
//!
//! Each check is a list of expressions evaluated in order against one
//! shared context.

use numlang::{BuildError, Condition, Expr};

/// A named demonstration.
pub struct Check {
    /// Short description shown in the header
    pub title: &'static str,

    /// Builds the expressions to evaluate
    pub build: fn() -> Result<Vec<Expr>, BuildError>,
}

/// All checks, numbered from 1 in this order.
pub const CHECKS: &[Check] = &[
    Check {
        title: "literals",
        build: literal,
    },
    Check {
        title: "arithmetic",
        build: arithmetic,
    },
    Check {
        title: "bad arithmetic operator",
        build: bad_operator,
    },
    Check {
        title: "variables and assignment",
        build: variables,
    },
    Check {
        title: "unbound variable",
        build: unbound_variable,
    },
    Check {
        title: "branching",
        build: branching,
    },
    Check {
        title: "block",
        build: block,
    },
    Check {
        title: "while loop",
        build: while_loop,
    },
    Check {
        title: "function declaration and invocation",
        build: function_call,
    },
    Check {
        title: "undefined function",
        build: undefined_function,
    },
    Check {
        title: "wrong number of arguments",
        build: arity_mismatch,
    },
    Check {
        title: "recursion",
        build: recursion,
    },
];

fn circle_area() -> Expr {
    Expr::arith(
        "mult",
        Expr::var("pi"),
        Expr::arith("mult", Expr::var("r"), Expr::var("r")),
    )
}

fn add_decl() -> Result<Expr, BuildError> {
    Expr::func_decl(
        "add",
        ["i", "j"],
        Expr::arith("plus", Expr::var("i"), Expr::var("j")),
    )
}

fn literal() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::literal(3.1415)])
}

fn arithmetic() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::arith(
        "mult",
        Expr::literal(3.1415),
        Expr::arith("mult", Expr::literal(10.2), Expr::literal(10.2)),
    )])
}

fn bad_operator() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::arith(
        "blah",
        Expr::literal(3.1415),
        Expr::literal(45.0),
    )])
}

fn variables() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![
        Expr::assign("pi", Expr::literal(3.1415)),
        Expr::assign("r", Expr::literal(10.2)),
        circle_area(),
    ])
}

fn unbound_variable() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::var("pi")])
}

fn branching() -> Result<Vec<Expr>, BuildError> {
    let test = Expr::if_else(
        Condition::new("lt", Expr::var("r"), Expr::literal(100)),
        Expr::literal(-1),
        Expr::literal(1),
    );
    Ok(vec![
        Expr::assign("r", Expr::literal(99)),
        test.clone(),
        Expr::assign("r", Expr::literal(101)),
        test,
    ])
}

fn block() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::block(vec![
        Expr::assign("pi", Expr::literal(3.1415)),
        Expr::assign("r", Expr::literal(10.2)),
        Expr::assign("area", circle_area()),
        Expr::arith("plus", Expr::var("area"), Expr::var("area")),
    ])?])
}

fn while_loop() -> Result<Vec<Expr>, BuildError> {
    let body = Expr::block(vec![
        Expr::assign("sum", Expr::arith("plus", Expr::var("sum"), Expr::var("i"))),
        Expr::assign("i", Expr::arith("plus", Expr::var("i"), Expr::literal(1))),
    ])?;

    Ok(vec![Expr::block(vec![
        Expr::assign("i", Expr::literal(0)),
        Expr::assign("sum", Expr::literal(0)),
        Expr::while_loop(
            Condition::new("lt", Expr::var("i"), Expr::literal(100)),
            body,
        ),
        Expr::var("sum"),
    ])?])
}

fn function_call() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::block(vec![
        add_decl()?,
        Expr::invoke("add", vec![Expr::literal(100), Expr::literal(200)]),
    ])?])
}

fn undefined_function() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::invoke("blah", vec![])])
}

fn arity_mismatch() -> Result<Vec<Expr>, BuildError> {
    Ok(vec![Expr::block(vec![
        add_decl()?,
        Expr::invoke(
            "add",
            vec![Expr::literal(10), Expr::literal(20), Expr::literal(30)],
        ),
    ])?])
}

fn recursion() -> Result<Vec<Expr>, BuildError> {
    let fib = |offset: i32| {
        Expr::invoke(
            "fib",
            vec![Expr::arith("sub", Expr::var("n"), Expr::literal(offset))],
        )
    };

    Ok(vec![Expr::block(vec![
        Expr::func_decl(
            "fib",
            ["n"],
            Expr::if_else(
                Condition::new("le", Expr::var("n"), Expr::literal(2)),
                Expr::literal(1),
                Expr::arith("plus", fib(1), fib(2)),
            ),
        )?,
        Expr::invoke("fib", vec![Expr::literal(20)]),
    ])?])
}
