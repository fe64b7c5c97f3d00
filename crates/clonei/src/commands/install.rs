//! `clonei install` command handler

use anyhow::Result;
use camino::Utf8Path;
use clonei_projects::{Config, Error, Executor, ProjectRegistry, ProjectType};

use crate::cli::InstallArgs;
use crate::output;

/// Install dependencies for an already checked out project
pub fn run(args: InstallArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let registry = ProjectRegistry::with_defaults();

    let requested = args.project.as_deref().or(config.project.as_deref());
    let selection = registry.selection(requested)?;

    if !args.directory.is_dir() {
        return Err(Error::directory_not_found(args.directory.as_str()).into());
    }

    let project_type = registry.select(selection, &args.directory)?;
    install_project(project_type, &args.directory, &Executor::system())
}

/// Run the project type's installer with console progress around it
pub(super) fn install_project(
    project_type: &ProjectType,
    dir: &Utf8Path,
    executor: &Executor<'_>,
) -> Result<()> {
    println!();
    output::info(&format!(
        "Installing dependencies for {} project ({})...",
        project_type.name,
        project_type.command_line()
    ));

    project_type.install(dir, executor)?;

    output::success("Dependencies installed successfully");
    Ok(())
}
