//! `numlang` command-line driver

mod checks;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use numlang::{evaluate, EvalContext, Expr};
use tracing_subscriber::{fmt, EnvFilter};

use checks::CHECKS;

/// Evaluate numlang expression trees
#[derive(Parser, Debug)]
#[command(name = "numlang", version, about)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum function call depth
    #[arg(long, default_value_t = 1000, global = true)]
    max_call_depth: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in demonstration checks
    Checks {
        /// Check numbers to run (default: all)
        numbers: Vec<usize>,
    },

    /// Evaluate a JSON-encoded program
    Run {
        /// File holding one expression, or an array of expressions
        file: PathBuf,
    },
}

/// Decode a program file: a single expression, or an array of them.
///
/// Dispatches on the top-level JSON kind so node validation errors
/// (empty block, duplicate parameter) surface unchanged.
fn decode_program(source: &str) -> serde_json::Result<Vec<Expr>> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<Expr>(value).map(|expr| vec![expr])
    }
}

/// Evaluate `expr` and print it with its outcome. Returns whether it succeeded.
fn report(expr: &Expr, ctx: &mut EvalContext) -> bool {
    match evaluate(expr, ctx) {
        Ok(value) => {
            println!("{}\n=> {:.2}", expr, value);
            true
        }
        Err(err) => {
            println!("{}\n[err] {}", expr, err);
            false
        }
    }
}

fn run_checks(numbers: &[usize], max_call_depth: usize) -> Result<()> {
    let selected: Vec<usize> = if numbers.is_empty() {
        (1..=CHECKS.len()).collect()
    } else {
        numbers.to_vec()
    };

    for number in selected {
        let Some(check) = number.checked_sub(1).and_then(|i| CHECKS.get(i)) else {
            bail!("no check numbered {number} (expected 1..={})", CHECKS.len());
        };
        let exprs = (check.build)().with_context(|| format!("building check {number}"))?;

        println!("# check{number}: {}", check.title);
        let mut ctx = EvalContext::with_max_call_depth(max_call_depth);
        for expr in &exprs {
            report(expr, &mut ctx);
        }
        println!();
    }

    Ok(())
}

fn run_file(path: &Path, max_call_depth: usize) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let exprs = decode_program(&source).with_context(|| format!("decoding {}", path.display()))?;
    tracing::debug!(count = exprs.len(), "loaded program");

    let mut ctx = EvalContext::with_max_call_depth(max_call_depth);
    let failed = exprs.iter().filter(|expr| !report(expr, &mut ctx)).count();

    if failed > 0 {
        bail!("{failed} of {} expression(s) failed", exprs.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise -v flags pick the level, defaulting to warn
    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match &args.command {
        Command::Checks { numbers } => run_checks(numbers, args.max_call_depth),
        Command::Run { file } => run_file(file, args.max_call_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["numlang", "-vv", "checks", "3", "12"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Checks { ref numbers } if numbers == &[3, 12]));
    }

    #[test]
    fn test_program_single_or_many() {
        let one = decode_program(r#"{"literal": 1.0}"#).unwrap();
        assert_eq!(one, vec![Expr::literal(1)]);

        let exprs =
            decode_program(r#"[{"assignment": {"name": "x", "value": {"literal": 2.0}}}, {"variable": "x"}]"#)
                .unwrap();
        assert_eq!(exprs.len(), 2);

        let mut ctx = EvalContext::new();
        assert!(exprs.iter().all(|expr| report(expr, &mut ctx)));
    }

    #[test]
    fn test_program_keeps_validation_messages() {
        let err = decode_program(r#"{"block": []}"#).unwrap_err();
        assert!(err.to_string().contains("at least one expression"), "{err}");

        let err = decode_program(
            r#"[{"function_declaration": {"name": "f", "params": ["a", "a"], "body": {"literal": 0.0}}}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate parameter 'a'"), "{err}");
    }

    #[test]
    fn test_program_rejects_malformed_json() {
        assert!(decode_program("[{\"literal\": 1.0}").is_err());
        assert!(decode_program(r#"{"nonsense": 1.0}"#).is_err());
    }

    #[test]
    fn test_unknown_check_number() {
        assert!(run_checks(&[13], 1000).is_err());
        assert!(run_checks(&[0], 1000).is_err());
    }
}
