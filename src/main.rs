use std::io::{self, Write};

use algow::parser::parse_expr;
use algow::types::{TypeEnv, infer_with_subst};
use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algow")]
#[command(about = "Hindley-Milner type inference for a small lambda calculus", long_about = None)]
struct Cli {
    /// Expressions to type, e.g. 'let id = \x -> x in id id'
    exprs: Vec<String>,

    /// Run the built-in sample expressions (default when no EXPR is given)
    #[arg(long)]
    demo: bool,

    /// Also print the final substitution of successful inferences
    #[arg(long)]
    subst: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check(out: &mut impl Write, source: &str, show_subst: bool) -> io::Result<()> {
    let expr = match parse_expr(source) {
        Ok(expr) => expr,
        Err(err) => return writeln!(out, "{}\nparse error: {}", source, err),
    };
    match infer_with_subst(&TypeEnv::empty(), &expr) {
        Ok((subst, ty)) => {
            writeln!(out, "{} :: {}", expr, ty)?;
            if show_subst {
                writeln!(out, "  where {}", subst)?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "{}\nerror: {}", expr, err),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.demo || cli.exprs.is_empty() {
        for line in algow::demo::run() {
            writeln!(out, "{}", line).context("failed to write demo report")?;
        }
    }

    for source in &cli.exprs {
        check(&mut out, source, cli.subst)
            .with_context(|| format!("failed to write report for `{}`", source))?;
    }

    Ok(())
}
