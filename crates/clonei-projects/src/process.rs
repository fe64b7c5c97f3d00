//! Child process boundary
//!
//! Every external command clonei runs (git and the package managers) goes
//! through an [`Executor`], which pairs a [`ToolLocator`] for PATH lookups with
//! a [`CommandRunner`] that actually spawns the process. The production pair
//! inherits the parent's standard streams so prompts, progress bars and colors
//! from the child reach the terminal untouched.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// A single external command with its working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name, resolved through PATH by the runner
    pub program: String,
    /// Arguments passed verbatim
    pub args: Vec<String>,
    /// Working directory of the child
    pub current_dir: Utf8PathBuf,
}

impl Invocation {
    /// Create an invocation of `program` running in `current_dir`
    pub fn new(program: impl Into<String>, current_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.into(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Command line as typed in a shell, e.g. `pnpm install --frozen-lockfile`
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandExit {
    /// Exited with a status code
    Code(i32),
    /// Terminated without a status code (killed by a signal)
    Signal,
}

impl CommandExit {
    /// Whether the child exited with status 0
    pub fn success(self) -> bool {
        self == Self::Code(0)
    }

    /// Exit code, if there is one
    pub fn code(self) -> Option<i32> {
        match self {
            Self::Code(code) => Some(code),
            Self::Signal => None,
        }
    }
}

impl From<std::process::ExitStatus> for CommandExit {
    fn from(status: std::process::ExitStatus) -> Self {
        status.code().map_or(Self::Signal, Self::Code)
    }
}

/// Looks up executables on the execution path
pub trait ToolLocator {
    /// Full path of `program`, or `None` when it is not installed
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Spawns a command and waits for it
pub trait CommandRunner {
    /// Run the invocation to completion
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandExit>;
}

/// [`ToolLocator`] backed by the `which` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// [`CommandRunner`] that spawns real processes with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<CommandExit> {
        debug!("Running: {} (in {})", invocation, invocation.current_dir);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(invocation.current_dir.as_std_path())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(status.into())
    }
}

/// Tool lookup plus process spawning, borrowed for the duration of a run
#[derive(Clone, Copy)]
pub struct Executor<'a> {
    locator: &'a dyn ToolLocator,
    runner: &'a dyn CommandRunner,
}

impl Executor<'static> {
    /// Executor that searches the real PATH and spawns real processes
    pub fn system() -> Self {
        Self {
            locator: &PathLocator,
            runner: &SystemRunner,
        }
    }
}

impl<'a> Executor<'a> {
    /// Executor over custom collaborators
    pub fn new(locator: &'a dyn ToolLocator, runner: &'a dyn CommandRunner) -> Self {
        Self { locator, runner }
    }

    /// Whether `tool` resolves on the execution path
    pub fn is_available(&self, tool: &str) -> bool {
        self.locator.locate(tool).is_some()
    }

    /// Resolve `tool` or fail with [`Error::ToolNotFound`]
    pub fn require(&self, tool: &str) -> Result<PathBuf> {
        let path = self
            .locator
            .locate(tool)
            .ok_or_else(|| Error::tool_not_found(tool))?;
        debug!("Found {} at {}", tool, path.display());
        Ok(path)
    }

    /// Spawn the invocation and wait for it to finish
    pub fn run(&self, invocation: &Invocation) -> Result<CommandExit> {
        self.runner
            .run(invocation)
            .map_err(|e| Error::spawn(invocation.command_line(), e))
    }
}

/// Whether `dir` is an existing directory
pub(crate) fn ensure_directory(dir: &Utf8Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::directory_not_found(dir.as_str()))
    }
}
