//! `clonei types` command handler

use anyhow::Result;
use clonei_projects::{ProjectRegistry, ProjectType};

use crate::cli::TypesArgs;
use crate::output;

pub fn run(args: TypesArgs) -> Result<()> {
    let registry = ProjectRegistry::with_defaults();

    if args.json {
        let types: Vec<&ProjectType> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    output::header("Supported project types (detection order)");
    for project_type in registry.iter() {
        println!(
            "  {:10} {:18} {}",
            project_type.name,
            project_type.marker,
            project_type.command_line()
        );
    }
    println!();
    output::info("Use --project <TYPE> to skip detection");

    Ok(())
}
