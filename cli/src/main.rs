use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use octet::{CompiledProgram, ReadSource, WriteSink, render_error};
use thiserror::Error;

/// Octet - An interpreter for the eight-command tape language
#[derive(Parser, Debug)]
#[command(name = "octet")]
#[command(about = "Run octet programs", long_about = None)]
struct Args {
    /// Print the compiled program as a disassembly listing and exit
    #[arg(long)]
    dump: bool,

    /// Print the program with commentary stripped and exit
    #[arg(long, conflicts_with = "dump")]
    canonical: bool,

    /// Program text given directly on the command line
    #[arg(short = 'e', long = "eval", value_name = "PROGRAM", conflicts_with = "file")]
    eval: Option<String>,

    /// Source file to run
    #[arg(required_unless_present = "eval")]
    file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read program from {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no program given")]
    NoProgram,

    #[error("writing program output failed")]
    Output(#[source] io::Error),
}

fn load_source(args: &Args) -> Result<String> {
    if let Some(program) = &args.eval {
        return Ok(program.clone());
    }
    let path = args.file.as_ref().ok_or(CliError::NoProgram).into_diagnostic()?;
    tracing::debug!(path = %path.display(), "loading program");
    std::fs::read_to_string(path)
        .map_err(|source| CliError::ReadSource {
            path: path.clone(),
            source,
        })
        .into_diagnostic()
}

fn execute(compiled: &CompiledProgram) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = ReadSource::new(stdin.lock());
    let mut output = WriteSink::new(stdout.lock());

    compiled.run(&mut input, &mut output);

    if let Some(err) = output.take_error() {
        return Err(CliError::Output(err)).into_diagnostic();
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use OCTET_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("OCTET_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = load_source(&args)?;

    let compiled = match CompiledProgram::compile(&source) {
        Ok(compiled) => compiled,
        Err(e) => {
            render_error(&e);
            std::process::exit(1);
        }
    };

    if args.dump {
        println!("{:?}", compiled.program());
        return Ok(());
    }

    if args.canonical {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", compiled.program()).into_diagnostic()?;
        return Ok(());
    }

    execute(&compiled)
}
