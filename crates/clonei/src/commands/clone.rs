//! Default command: clone a repository and install its dependencies

use anyhow::{Context, Result};
use camino::Utf8Path;
use clonei_projects::git::{clone_repository, repo_name, CloneOptions};
use clonei_projects::{Config, Executor, ProjectRegistry, Selection};
use tracing::debug;

use super::install::install_project;
use crate::cli::CloneArgs;
use crate::output;

/// Clone the repository, then detect and install its dependencies
pub fn run(args: CloneArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let registry = ProjectRegistry::with_defaults();
    let install = args.install_enabled(&config);
    let cd = args.cd_enabled(&config);

    let repository = args
        .repository
        .context("A repository URL is required")?;

    // Reject an unknown --project before anything lands on disk
    let requested = args.project.as_deref().or(config.project.as_deref());
    let selection = registry.selection(requested)?;

    let project_name = repo_name(&repository)?;
    let destination = args
        .directory
        .unwrap_or_else(|| config.projects_dir().join(&project_name));

    output::header("Clone Project");
    output::kv("Repository", &repository);
    output::kv("Target directory", destination.as_str());
    if let Selection::Explicit(project_type) = selection {
        output::kv("Project type", project_type.name);
    }
    println!();

    let executor = Executor::system();
    let options = CloneOptions {
        depth: args.depth.or(config.depth),
        branch: args.branch,
    };

    output::info("Cloning repository...");
    clone_repository(&repository, &destination, &options, &executor)?;
    output::success("Repository cloned");

    let installed = if install {
        let project_type = registry.select(selection, &destination)?;
        install_project(project_type, &destination, &executor)?;
        Some(project_type.name)
    } else {
        debug!("Dependency installation disabled");
        output::info("Skipping dependency installation");
        None
    };

    println!();
    output::success(&format!("Project {} cloned successfully", project_name));
    output::kv("Project type", installed.unwrap_or("not installed"));
    output::kv("Repository", &repository);
    output::kv("Location", destination.as_str());

    if cd {
        enter_project(&destination)?;
    }

    Ok(())
}

/// Switch into the project directory and point the user at it
///
/// The parent shell keeps its own working directory, so the `cd` hint is what
/// actually moves the user.
fn enter_project(destination: &Utf8Path) -> Result<()> {
    std::env::set_current_dir(destination).with_context(|| {
        format!("Failed to change to project directory {}", destination)
    })?;
    debug!("Working directory is now {}", destination);

    println!();
    output::info("Next steps:");
    println!("  cd {}", destination);
    Ok(())
}
