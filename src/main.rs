use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{error::ErrorKind, Parser};
use minipl::{
    interpreter::evaluator::core::Interpreter, parse_source, printer::AstPrinter, run,
};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing_subscriber::EnvFilter;

const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;

/// minipl runs Mini-PL programs from a file, or interactively when no file is
/// given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run. Starts an interactive prompt when omitted.
    file: Option<PathBuf>,

    /// `ast` prints the parsed program instead of running it.
    mode: Option<String>,

    /// Log filter, e.g. `debug` or `minipl=trace`. Overrides `RUST_LOG`;
    /// without either only warnings are logged.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EX_USAGE);
        },
    };

    init_tracing(args.log_level.as_deref());

    let print_ast = match args.mode.as_deref() {
        None => false,
        Some(mode) if mode.eq_ignore_ascii_case("ast") => true,
        Some(mode) => {
            eprintln!("Unknown mode '{mode}'. Usage: minipl [FILE] [ast]");
            return ExitCode::from(EX_USAGE);
        },
    };

    match args.file {
        Some(path) => run_file(&path, print_ast),
        None => run_prompt(),
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(true)
                             .init();
}

fn run_file(path: &Path, print_ast: bool) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::from(EX_NOINPUT);
        },
    };
    tracing::debug!(path = %path.display(), bytes = source.len(), "running file");

    let result = if print_ast {
        parse_source(&source).map(|program| println!("{}", AstPrinter::new(2).program(&program)))
    } else {
        run(&source, &mut Interpreter::new())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EX_DATAERR)
        },
    }
}

fn run_prompt() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the prompt: {e}");
            return ExitCode::FAILURE;
        },
    };
    let mut interpreter = Interpreter::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match run(&line, &mut interpreter) {
                    Ok(()) => println!(),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
