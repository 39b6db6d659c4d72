use clap::{builder::RangedU64ValueParser, Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Report, WrapErr};
use scicalc::options::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use scicalc::*;
use std::{fs, io::{self, Write}};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Maximum nesting of parentheses, signs and function arguments
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_LIMIT as u64),
    )]
    max_depth: usize,

    /// Accept `!`, `|x|` and `%` as function names
    #[arg(long, global = true)]
    symbol_aliases: bool,

    /// Fail on a `(` that is never closed
    #[arg(long, global = true)]
    strict_parens: bool,
}

impl From<&EngineArgs> for EvalOptions {
    fn from(args: &EngineArgs) -> Self {
        EvalOptions::new()
            .with_max_depth(args.max_depth)
            .with_symbol_aliases(args.symbol_aliases)
            .with_strict_parens(args.strict_parens)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single expression
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Evaluate every line of a file
    Batch { filename: PathBuf },
    /// Interactive prompt
    Repl,
}

/// Evaluates `input` and attaches it to any failure so the report can point
/// into it.
fn calc(input: &str, options: &EvalOptions) -> Result<f64, Report> {
    evaluate_with(input, options)
        .map_err(|err| Report::new(err).with_source_code(input.to_string()))
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let options = EvalOptions::from(&cli.engine);

    match cli.command {
        Commands::Eval { expression } => {
            let res = calc(&expression, &options)?;
            println!("{res:?}");
        }
        Commands::Batch { filename } => {
            let file_contents = fs::read_to_string(&filename)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading '{}' failed", filename.display()))?;

            for line in file_contents.lines().filter(|line| !line.trim().is_empty()) {
                match calc(line, &options) {
                    Ok(res) => println!("{line} = {res:?}"),
                    Err(e) => eprintln!("{e:?}"),
                }
            }
        }
        Commands::Repl => {
            loop {
                print!("calc> ");
                io::stdout().flush().into_diagnostic()?;

                let mut input = String::new();
                let read = io::stdin()
                    .read_line(&mut input)
                    .into_diagnostic()
                    .wrap_err("reading input failed")?;
                if read == 0 {
                    break;
                }

                let input = input.trim_end_matches(['\n', '\r']);
                if input.trim().is_empty() || input.trim().eq_ignore_ascii_case("clear") {
                    continue;
                }
                if input.trim().eq_ignore_ascii_case("exit") {
                    break;
                }

                match calc(input, &options) {
                    Ok(res) => println!("{res:?}"),
                    Err(e) => eprintln!("{e:?}"),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_expression(args: &[&str]) -> String {
        match Cli::try_parse_from(args.iter().copied()).unwrap().command {
            Commands::Eval { expression } => expression,
            command => panic!("expected eval, got {command:?}"),
        }
    }

    #[test]
    fn test_eval_accepts_leading_minus() {
        assert_eq!(parse_expression(&["scicalc", "eval", "-2^2"]), "-2^2");
        assert_eq!(parse_expression(&["scicalc", "eval", "--5"]), "--5");
        assert_eq!(parse_expression(&["scicalc", "eval", "-1/0"]), "-1/0");
    }

    #[test]
    fn test_eval_leading_minus_evaluates() {
        let expression = parse_expression(&["scicalc", "eval", "-2^2"]);
        assert_eq!(calc(&expression, &EvalOptions::default()).unwrap(), 4.0);
    }

    #[test]
    fn test_max_depth_flag() {
        let cli = Cli::try_parse_from(["scicalc", "--max-depth", "16", "repl"]).unwrap();
        assert_eq!(EvalOptions::from(&cli.engine).max_depth, 16);

        let cli = Cli::try_parse_from(["scicalc", "repl"]).unwrap();
        assert_eq!(EvalOptions::from(&cli.engine).max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_max_depth_flag_out_of_range() {
        let too_deep = (MAX_DEPTH_LIMIT + 1).to_string();
        for depth in [too_deep.as_str(), "1000000", "0"] {
            let parsed = Cli::try_parse_from(["scicalc", "--max-depth", depth, "repl"]);
            assert!(parsed.is_err(), "--max-depth {depth} was accepted");
        }
    }
}
