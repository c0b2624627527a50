use expr_eval::{evaluate_expression_with, ExpressionError, Options};
use log::{debug, error, info};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

const USAGE: &str = "usage: expr-eval (-e <expression> | -f <file> | -i)";

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        debug!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let options = Options::from_env()?;
    debug!("{:?}", options);

    let args = std::env::args().collect::<Vec<String>>();
    let mode = args.get(1).ok_or(USAGE)?;

    match mode.as_str() {
        "-e" => run_expression(args.get(2).ok_or(USAGE)?, &options),
        "-f" => read_from_file(args.get(2).ok_or(USAGE)?, &options),
        "-i" => repl(&options),
        _ => Err(USAGE.into()),
    }
}

const EXPRESSION_FAILED: &str = "failed to evaluate expression";

// The error itself is already logged by `evaluate`.
fn run_expression(input: &str, options: &Options) -> DynResult {
    let value = evaluate(input, options).map_err(|_| EXPRESSION_FAILED)?;
    println!("{}", value);
    Ok(())
}

fn repl(options: &Options) -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(&line)?;
                if let Ok(value) = evaluate(&line, options) {
                    println!("{}", value);
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

/// Evaluates every non-empty line; keeps going past bad lines and fails at the end if any did.
fn read_from_file(file_path: &str, options: &Options) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;

    let mut failed = 0;
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_expression_with(line, options) {
            Ok(value) => println!("{}: {}", index + 1, value),
            Err(err) => {
                report(&err, line, index + 1);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} expression(s) in {} failed", failed, file_path).into());
    }
    Ok(())
}

fn evaluate(input: &str, options: &Options) -> Result<f64, ExpressionError> {
    evaluate_expression_with(input, options).inspect_err(|err| report(err, input, 1))
}

fn report(err: &ExpressionError, input: &str, first_line: usize) {
    match err.get_source_start(input) {
        Some((row, col)) => error!("{} (line {}, column {})", err, first_line + row - 1, col),
        None => error!("{}", err),
    }
}
