use crate::doc::usage;
use crate::error::{Error, Result};
use crate::fs::Permission;
use crate::logger::{Logger, Policies};
use crate::op::{group_programs, parse_pipeline, OpCode};
use crate::program::{run, Program};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, warn};

/// What we decide to do based on CLI arguments
#[derive(PartialEq, Debug)]
pub enum Behavior {
    Help,
    Version,
    UnexpectedArg(String),
    Pipeline { args: Vec<String>, quiet: bool },
}

pub fn parse<S>(args: impl Iterator<Item = S>) -> Behavior
where
    S: AsRef<str>,
{
    let mut pipeline_args: Vec<String> = vec![];
    let mut quiet = false;
    for arg in args {
        match arg.as_ref() {
            "--version" => return Behavior::Version,
            "--help" => return Behavior::Help,
            "--quiet" => quiet = true,
            other => pipeline_args.push(other.to_owned()),
        }
    }

    match pipeline_args.first() {
        None => Behavior::Help,
        Some(first) if OpCode::from_arg(first).is_none() => {
            Behavior::UnexpectedArg(first.to_owned())
        }
        Some(_) => Behavior::Pipeline {
            args: pipeline_args,
            quiet,
        },
    }
}

pub async fn execute(behavior: Behavior, log: &mut Logger) -> ExitCode {
    let result = match behavior {
        Behavior::Help => write!(log.stdout, "{}", usage()).map_err(stdout_error),
        Behavior::Version => {
            writeln!(log.stdout, "{}", env!("CARGO_PKG_VERSION")).map_err(stdout_error)
        }
        Behavior::UnexpectedArg(a) => {
            report(log, format_args!("Unexpected argument: {}", a));
            return ExitCode::from(2);
        }
        Behavior::Pipeline { args, quiet } => {
            if quiet {
                log.pol = Policies::quiet();
            }
            execute_pipeline(args, log).await
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "pipeline failed");
            ExitCode::from(1)
        }
    }
}

async fn execute_pipeline(args: Vec<String>, log: &mut Logger) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| Error::platform(".", e))?;
    let programs = match plan(&args, &cwd) {
        Ok(programs) => programs,
        Err(e) => {
            report(log, format_args!("Failed: {}", e));
            return Err(e);
        }
    };
    run(&Permission::os(), programs, log).await
}

/// Turn CLI args into programs, with relative paths resolved against `cwd`.
fn plan(args: &[String], cwd: &Path) -> Result<Vec<Program>> {
    let groups = group_programs(parse_pipeline(args)?)?;
    Ok(groups
        .into_iter()
        .map(|(root, ops)| {
            let ops = ops.into_iter().map(|op| op.resolved_against(cwd)).collect();
            Program::from_ops(cwd.join(root), ops)
        })
        .collect())
}

/// Write a line to the failure channel. Nothing to fall back on if that fails.
fn report(log: &mut Logger, message: std::fmt::Arguments) {
    if let Err(e) = writeln!(log.failure(), "{}", message) {
        warn!(error = %e, "could not report failure");
    }
}

fn stdout_error(e: std::io::Error) -> Error {
    Error::platform("<stdout>", e)
}
