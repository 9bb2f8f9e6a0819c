use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::Parser;
use log::LevelFilter;
use rpncalc::{evaluate_with, format_postfix, to_postfix, EvalContext};

/// Evaluate an arithmetic expression of numbers, + - * / and parentheses.
///
/// The expression is streamed, so inputs far larger than memory are fine as
/// long as parentheses do not nest arbitrarily deep.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File holding the expression. Reads standard input if absent or "-".
    file: Option<PathBuf>,

    /// Number of decimal places in the printed result.
    #[arg(short, long, default_value_t = 5)]
    precision: usize,

    /// Print the expression in postfix notation instead of evaluating it.
    #[arg(long)]
    postfix: bool,

    /// Reject unmatched opening parentheses as unbalanced.
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace every token).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            let program = std::env::args().next().unwrap_or_else(|| "rpncalc".to_string());
            eprintln!("{program}: failed to evaluate: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> anyhow::Result<String> {
    let ctx = EvalContext::default()
        .with_strict_parentheses(args.strict)
        .with_trace(args.verbose > 1);
    let input = open_input(args.file.as_deref())?;

    if args.postfix {
        return Ok(format_postfix(to_postfix(input, &ctx))?);
    }

    let value = evaluate_with(input, &ctx)?;
    Ok(format!("{:.*}", args.precision, value))
}

fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|e| anyhow!("cannot open {}: {}", p.display(), e))?;
            Ok(Box::new(file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpncalc::{ErrorKind, EvalError};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rpncalc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let a = args(&[]);
        assert_eq!(a.precision, 5);
        assert!(a.file.is_none());
        assert!(!a.postfix);
        assert!(!a.strict);
        assert_eq!(a.verbose, 0);
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(args(&["-vv"]).verbose, 2);
    }

    #[test]
    fn test_missing_file() {
        let a = args(&["/nonexistent/expression.txt"]);
        let err = run(&a).unwrap_err();
        assert!(err.to_string().starts_with("cannot open /nonexistent/expression.txt"));
    }

    /// Write `expr` to a fresh file under the system temp dir.
    fn expression_file(name: &str, expr: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rpncalc-{}-{}.txt", std::process::id(), name));
        std::fs::write(&path, expr).unwrap();
        path
    }

    fn run_on(name: &str, expr: &str, flags: &[&str]) -> anyhow::Result<String> {
        let path = expression_file(name, expr);
        let path_arg = path.to_str().unwrap().to_string();
        let mut argv = vec![path_arg.as_str()];
        argv.extend_from_slice(flags);
        let result = run(&args(&argv));
        let _ = std::fs::remove_file(&path);
        result
    }

    #[test]
    fn test_run_default_precision() {
        assert_eq!(run_on("default", "2+3*4\n", &[]).unwrap(), "14.00000");
    }

    #[test]
    fn test_run_custom_precision() {
        assert_eq!(run_on("precision", "1 / 3", &["--precision", "2"]).unwrap(), "0.33");
        assert_eq!(run_on("precision-zero", "7 / 2", &["-p", "0"]).unwrap(), "4");
    }

    #[test]
    fn test_run_postfix() {
        assert_eq!(
            run_on("postfix", "2+3*(4-5)", &["--postfix"]).unwrap(),
            "2 3 4 5 - * +"
        );
    }

    #[test]
    fn test_run_strict_rejects_open_paren() {
        let err = run_on("strict", "(1", &["--strict"]).unwrap_err();
        let eval_err = err.downcast_ref::<EvalError>().expect("evaluation error");
        assert_eq!(eval_err.kind(), ErrorKind::UnbalancedParenthesis);
    }

    #[test]
    fn test_run_lenient_open_paren() {
        let err = run_on("lenient", "(1", &[]).unwrap_err();
        let eval_err = err.downcast_ref::<EvalError>().expect("evaluation error");
        assert_eq!(eval_err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_run_division_by_zero() {
        let err = run_on("div-zero", "2/0", &[]).unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
    }
}
