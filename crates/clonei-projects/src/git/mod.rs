//! Git operations module
//!
//! Clones repositories through the system `git` binary.
//!
//! # Examples
//!
//! ```no_run
//! use clonei_projects::git::{clone_repository, CloneOptions};
//! use clonei_projects::Executor;
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = CloneOptions {
//!     depth: Some(1),
//!     branch: Some("main".to_string()),
//! };
//! clone_repository(
//!     "https://github.com/user/repo.git",
//!     Utf8Path::new("/tmp/repo"),
//!     &options,
//!     &Executor::system(),
//! )?;
//! # Ok(())
//! # }
//! ```

mod clone;

pub use clone::{clone_invocation, clone_repository, is_valid_repo_url, repo_name, CloneOptions};
