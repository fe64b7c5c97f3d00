//! Repository cloning

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::process::{Executor, Invocation};

/// Options for cloning a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneOptions {
    /// Shallow clone with specified depth
    pub depth: Option<u32>,
    /// Branch to checkout after clone
    pub branch: Option<String>,
}

/// Build the `git clone` invocation for `url` into `destination`
///
/// The child runs in the parent of `destination` so relative destinations
/// resolve the same way they would for the user.
pub fn clone_invocation(url: &str, destination: &Utf8Path, options: &CloneOptions) -> Invocation {
    let workdir = match destination.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    let target = destination.file_name().unwrap_or(destination.as_str());

    let mut invocation = Invocation::new("git", workdir).arg("clone");

    if let Some(depth) = options.depth {
        invocation = invocation.arg("--depth").arg(depth.to_string());
    }

    if let Some(branch) = &options.branch {
        invocation = invocation.arg("--branch").arg(branch);
    }

    invocation.arg(url).arg(target)
}

/// Clone a repository
///
/// Git inherits the terminal, so credential prompts and progress output reach
/// the user directly.
///
/// # Arguments
/// * `url` - Repository URL to clone
/// * `destination` - Destination directory path
/// * `options` - Clone options
/// * `executor` - Tool lookup and process spawning
///
/// # Returns
/// Path to the cloned repository
///
/// # Errors
/// Returns error if:
/// - Invalid repository URL
/// - Destination already exists
/// - Git is not installed
/// - Parent directory cannot be created
/// - Clone operation fails
pub fn clone_repository(
    url: &str,
    destination: &Utf8Path,
    options: &CloneOptions,
    executor: &Executor<'_>,
) -> Result<Utf8PathBuf> {
    info!("Cloning repository: {} -> {}", url, destination);

    if !is_valid_repo_url(url) {
        return Err(Error::invalid_repo_url(url));
    }

    if destination.exists() {
        return Err(Error::repo_exists(destination.as_str()));
    }

    if !executor.is_available("git") {
        return Err(Error::GitNotFound);
    }

    let invocation = clone_invocation(url, destination, options);
    if !invocation.current_dir.is_dir() {
        debug!("Creating parent directory: {}", invocation.current_dir);
        std::fs::create_dir_all(&invocation.current_dir)?;
    }

    debug!("Running: {}", invocation);
    let exit = executor.run(&invocation)?;

    if !exit.success() {
        return Err(Error::clone_failed(url, exit.code()));
    }

    info!("Repository cloned successfully");
    Ok(destination.to_path_buf())
}

/// Validate if a string looks like a repository URL git can clone
pub fn is_valid_repo_url(url: &str) -> bool {
    const SCHEMES: &[&str] = &["https://", "http://", "ssh://", "git://", "file://"];

    if SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return url.len() > url.find("://").map_or(0, |i| i + 3);
    }

    // scp-like syntax: user@host:path
    match url.split_once(':') {
        Some((host, path)) => host.contains('@') && !host.contains('/') && !path.is_empty(),
        None => false,
    }
}

/// Extract repository name from URL
///
/// # Examples
/// - https://github.com/user/repo.git -> repo
/// - git@github.com:user/repo.git -> repo
/// - git@host:repo.git -> repo
pub fn repo_name(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    let name = trimmed
        .rsplit(['/', ':'])
        .next()
        .ok_or_else(|| Error::invalid_repo_url(url))?;
    let name = name.strip_suffix(".git").unwrap_or(name);

    if name.is_empty() {
        return Err(Error::invalid_repo_url(url));
    }

    Ok(name.to_string())
}
