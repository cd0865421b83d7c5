use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use unique_file_generator::{
    cli::{Args, Invocation},
    run, Outcome, Settings,
};

const DEFAULT_DIRECTIVES: &str = "warn";

fn main() -> ExitCode {
    let args = match Args::invocation_from(std::env::args_os()) {
        Ok(Invocation::Generate(args)) => args,
        Ok(Invocation::Usage(usage)) => {
            print!("{usage}");
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match generate(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("The operation was aborted because an error occurred.");
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: Args) -> anyhow::Result<()> {
    let settings = Settings::try_from(args)?;
    let folder = settings.output_folder().to_path_buf();

    let outcome = run(settings, |settings| {
        confirm(&mut io::stdout(), &mut io::stdin().lock(), settings)
    })
    .with_context(|| format!("generating files in {}", folder.display()))?;
    match outcome {
        Outcome::Completed(summary) => println!("{} files created.", summary.files_written),
        Outcome::Cancelled => println!("Operation cancelled."),
    }
    Ok(())
}

/// Anything but an explicit yes, or a prompt that cannot be shown, declines.
fn confirm<W: Write, R: BufRead>(out: &mut W, input: &mut R, settings: &Settings) -> bool {
    let prompted = write!(
        out,
        "You've requested the creation of many files ({}). Do you want to continue? [y/N] ",
        settings.file_count()
    )
    .and_then(|()| out.flush());
    if prompted.is_err() {
        return false;
    }

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
