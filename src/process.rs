use std::io::{BufRead, BufReader};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use anyhow::{Context, Result, bail};
use console::style;

/// One named external command within a setup stage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandStep {
    pub label: &'static str,
    pub argv: Vec<String>,
}

impl CommandStep {
    pub fn new(label: &'static str, argv: &[&str]) -> Self {
        Self {
            label,
            argv: argv.iter().map(|arg| (*arg).to_owned()).collect(),
        }
    }
}

/// Run each step in order, stopping at the first failure.
pub fn run_steps(steps: &[CommandStep]) -> Result<()> {
    for step in steps {
        run_step(step)?;
    }
    Ok(())
}

/// Run a single step to completion, streaming its output.
pub fn run_step(step: &CommandStep) -> Result<()> {
    let render = format_command(&step.argv);
    println!("  {} {} :: {}", style("->").cyan(), step.label, render);

    let status = run_streaming(&step.argv)?;
    tracing::debug!(label = step.label, code = ?status.code(), "external command finished");
    if status.success() {
        println!("     {}", style("[ok]").green());
        Ok(())
    } else {
        bail!(
            "command `{}` failed with exit code {:?}",
            render,
            status.code()
        )
    }
}

fn run_streaming(argv: &[String]) -> Result<ExitStatus> {
    let mut command = Command::new(&argv[0]);
    command.args(&argv[1..]);
    command.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = command
        .spawn()
        .with_context(|| format!("executing `{}`", format_command(argv)))?;

    let stdout = child.stdout.take().map(|pipe| {
        thread::spawn(move || {
            for line in BufReader::new(pipe).lines().map_while(Result::ok) {
                println!("     stdout | {}", line);
            }
        })
    });
    let stderr = child.stderr.take().map(|pipe| {
        thread::spawn(move || {
            for line in BufReader::new(pipe).lines().map_while(Result::ok) {
                println!("     stderr | {}", line);
            }
        })
    });

    if let Some(handle) = stdout {
        let _ = handle.join();
    }
    if let Some(handle) = stderr {
        let _ = handle.join();
    }

    child
        .wait()
        .with_context(|| format!("waiting on `{}`", format_command(argv)))
}

pub fn format_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.chars().any(|c| c.is_whitespace()) {
                format!("\"{}\"", arg.replace('"', "\\\""))
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
