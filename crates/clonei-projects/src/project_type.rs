//! Project type definitions
//!
//! A project type pairs one ecosystem's marker file with the command that
//! installs its dependencies. All ecosystems share the same behavior, so they
//! are described by data in [`BUILTIN_PROJECT_TYPES`] rather than by one type
//! per ecosystem.

use camino::Utf8Path;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::process::{ensure_directory, Executor, Invocation};

/// One supported build ecosystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectType {
    /// Canonical lowercase name (e.g., "pnpm")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// File whose presence directly under the project root selects this type
    pub marker: &'static str,
    /// Executable that must be on PATH before installing
    pub executable: &'static str,
    /// Program run to install dependencies
    pub program: &'static str,
    /// Fixed arguments for `program`
    pub args: &'static [&'static str],
}

/// Built-in project types in detection priority order
///
/// Lockfile-based JavaScript types come first so that a pnpm project that also
/// carries a stale `package-lock.json` is installed with pnpm.
pub static BUILTIN_PROJECT_TYPES: &[ProjectType] = &[
    ProjectType {
        name: "pnpm",
        description: "Node.js project managed by pnpm",
        marker: "pnpm-lock.yaml",
        executable: "pnpm",
        program: "pnpm",
        args: &["install", "--frozen-lockfile"],
    },
    ProjectType {
        name: "npm",
        description: "Node.js project managed by npm",
        marker: "package-lock.json",
        executable: "npm",
        program: "npm",
        args: &["ci"],
    },
    ProjectType {
        name: "cargo",
        description: "Rust crate or workspace",
        marker: "Cargo.toml",
        executable: "cargo",
        program: "cargo",
        args: &["fetch"],
    },
    ProjectType {
        name: "maven",
        description: "Java project built with Maven",
        marker: "pom.xml",
        executable: "mvn",
        program: "mvn",
        args: &["dependency:resolve"],
    },
    ProjectType {
        name: "composer",
        description: "PHP project managed by Composer",
        marker: "composer.json",
        executable: "composer",
        program: "composer",
        args: &["install"],
    },
    ProjectType {
        name: "go",
        description: "Go module",
        marker: "go.mod",
        executable: "go",
        program: "go",
        args: &["mod", "tidy"],
    },
];

impl ProjectType {
    /// Whether the marker file exists directly under `dir`
    ///
    /// Symlinks are followed. Anything that cannot be read (missing
    /// permissions, a symlink loop) counts as absent.
    pub fn matches(&self, dir: &Utf8Path) -> bool {
        dir.join(self.marker).is_file()
    }

    /// The install command, to be run inside `dir`
    pub fn invocation(&self, dir: &Utf8Path) -> Invocation {
        Invocation::new(self.program, dir).args(self.args.iter().copied())
    }

    /// Install command as typed in a shell
    pub fn command_line(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Install dependencies for the project rooted at `dir`
    ///
    /// # Errors
    /// Returns error if:
    /// - `dir` is not an existing directory
    /// - The required executable is not on PATH (nothing is spawned)
    /// - The command cannot be started or exits unsuccessfully
    pub fn install(&self, dir: &Utf8Path, executor: &Executor<'_>) -> Result<()> {
        ensure_directory(dir)?;
        executor.require(self.executable)?;

        let invocation = self.invocation(dir);
        info!("Installing {} dependencies: {}", self.name, invocation);

        let exit = executor.run(&invocation)?;
        if !exit.success() {
            return Err(Error::install_failed(
                invocation.command_line(),
                dir.as_str(),
                exit.code(),
            ));
        }

        debug!("{} finished successfully", invocation);
        Ok(())
    }
}
