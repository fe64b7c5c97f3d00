//! # clonei-projects
//!
//! Project handling library for the clonei CLI providing:
//! - Project type detection from marker files (`pnpm-lock.yaml`, `go.mod`, ...)
//! - Dependency installation through the ecosystem's own tool
//! - Git clone through the system `git` binary
//! - User configuration loading
//!
//! # Examples
//!
//! ## Detect and install
//!
//! ```no_run
//! use clonei_projects::{Executor, ProjectRegistry};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ProjectRegistry::with_defaults();
//! let dir = Utf8Path::new("/tmp/my-project");
//!
//! if let Some(project_type) = registry.detect(dir) {
//!     project_type.install(dir, &Executor::system())?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolve a user-supplied type
//!
//! ```
//! use clonei_projects::{ProjectRegistry, Selection};
//!
//! let registry = ProjectRegistry::with_defaults();
//! assert_eq!(registry.selection(Some("AUTO")).unwrap(), Selection::Auto);
//! assert_eq!(registry.resolve("Cargo").map(|t| t.name), Some("cargo"));
//! assert!(registry.selection(Some("gradle")).is_err());
//! ```

pub mod config;
pub mod error;
pub mod git;
pub mod process;
pub mod project_type;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result, Severity};
pub use process::{
    CommandExit, CommandRunner, Executor, Invocation, PathLocator, SystemRunner, ToolLocator,
};
pub use project_type::{ProjectType, BUILTIN_PROJECT_TYPES};
pub use registry::{ProjectRegistry, Selection, AUTO};
