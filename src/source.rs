//! Where report bytes come from

use std::env;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::Command;

/// Environment variable naming the program queried when no file is given.
pub const PROGRAM_ENV: &str = "XRANDR";
pub const DEFAULT_PROGRAM: &str = "xrandr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    File(PathBuf),
    Stdin,
    /// Run `<program> --props` and capture its standard output.
    Command { program: String },
}

impl ReportSource {
    /// The query command, honouring `XRANDR` when it is set and non-empty.
    pub fn from_env() -> Self {
        let program = env::var(PROGRAM_ENV)
            .ok()
            .filter(|program| !program.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        ReportSource::Command { program }
    }

    /// Map a command-line operand: `-` is stdin, anything else a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            ReportSource::Stdin
        } else {
            ReportSource::File(PathBuf::from(arg))
        }
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            ReportSource::File(path) => fs::read(path),
            ReportSource::Stdin => {
                let mut buffer = Vec::new();
                io::stdin().lock().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
            ReportSource::Command { program } => run_query(program),
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::File(path) => write!(f, "{}", path.display()),
            ReportSource::Stdin => write!(f, "<stdin>"),
            ReportSource::Command { program } => write!(f, "{} --props", program),
        }
    }
}

fn run_query(program: &str) -> io::Result<Vec<u8>> {
    tracing::debug!(program, "running query command");
    let output = Command::new(program).arg("--props").output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!(
            "`{} --props` failed ({}): {}",
            program,
            output.status,
            stderr.trim()
        )));
    }
    Ok(output.stdout)
}
