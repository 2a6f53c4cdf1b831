mod error;

use argh::FromArgs;
use error::Error;
use polish_compute::Tree;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::{Path, PathBuf}, process::ExitCode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Simplify and differentiate an expression written in prefix notation, such as `+ * 2 x 3`.
struct Options {
    #[argh(positional)]
    /// the expression to process; read from stdin, or interactively, when absent
    expression: Option<String>,

    #[argh(option, short = 'v', default = "'x'")]
    /// the variable to differentiate with respect to (default: x)
    var: char,

    #[argh(option)]
    /// write the DOT graph of the simplified expression to this file
    func_dot: Option<PathBuf>,

    #[argh(option)]
    /// write the DOT graph of the derivative to this file
    deriv_dot: Option<PathBuf>,

    #[argh(switch, short = 's')]
    /// print the rules applied while differentiating
    steps: bool,

    #[argh(switch, short = 'p')]
    /// also print both expressions in prefix notation
    prefix: bool,
}

/// Installs the log subscriber. Logs go to stderr, filtered by `RUST_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Writes the DOT graph of the tree to the given file, if one was requested.
fn write_dot(path: Option<&Path>, tree: &Tree) -> Result<(), Error> {
    let Some(path) = path else {
        return Ok(());
    };

    info!(path = %path.display(), "writing graph");
    fs::write(path, tree.dot().to_string()).map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })
}

/// Parses, simplifies and differentiates the given expression, printing both results.
fn process(input: &str, options: &Options) -> Result<(), Error> {
    let tree = Tree::parse(input)?;
    println!("f({}) = {}", options.var, tree);
    if options.prefix {
        println!("    prefix: {}", tree.prefix());
    }
    write_dot(options.func_dot.as_deref(), &tree)?;

    let derivative = if options.steps {
        let (derivative, steps) = tree.derivative_with_steps(options.var)?;
        for step in steps {
            println!("{}", step);
        }
        derivative
    } else {
        tree.derivative(options.var)?
    };

    println!("f'({}) = {}", options.var, derivative);
    if options.prefix {
        println!("    prefix: {}", derivative.prefix());
    }
    write_dot(options.deriv_dot.as_deref(), &derivative)?;

    Ok(())
}

/// Processes a single expression, reporting any error to stderr.
fn run_once(input: &str, options: &Options) -> ExitCode {
    match process(input.trim_end(), options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(input);
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    init_logging();
    let options: Options = argh::from_env();
    debug!(var = %options.var, "starting");

    if let Some(expression) = &options.expression {
        run_once(expression, &options)
    } else if !io::stdin().is_terminal() {
        // read one expression from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }

        run_once(input.lines().next().unwrap_or_default(), &options)
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };

        fn process_line(rl: &mut DefaultEditor, options: &Options) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            if let Err(err) = process(&input, options) {
                err.report_to_stderr(&input);
            }
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &options) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }

        ExitCode::SUCCESS
    }
}
