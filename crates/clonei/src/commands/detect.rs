//! `clonei detect` command handler

use anyhow::Result;
use clonei_projects::{Error, ProjectRegistry};
use serde::Serialize;

use crate::cli::DetectArgs;
use crate::output;

/// Machine-readable detection result
#[derive(Debug, Serialize)]
struct DetectReport<'a> {
    directory: &'a str,
    project_type: Option<&'static str>,
    matches: Vec<&'static str>,
}

pub fn run(args: DetectArgs) -> Result<()> {
    let registry = ProjectRegistry::with_defaults();
    let dir = &args.directory;

    if !dir.is_dir() {
        return Err(Error::directory_not_found(dir.as_str()).into());
    }

    let matches = registry.detect_all(dir);

    if args.json {
        let report = DetectReport {
            directory: dir.as_str(),
            project_type: matches.first().map(|t| t.name),
            matches: matches.iter().map(|t| t.name).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some((winner, shadowed)) = matches.split_first() else {
        return Err(Error::no_project_detected(dir.as_str(), registry.available()).into());
    };

    output::success(&format!(
        "Detected {} project ({} found)",
        winner.name, winner.marker
    ));
    output::kv("Install command", &winner.command_line());

    if !shadowed.is_empty() {
        let names: Vec<&str> = shadowed.iter().map(|t| t.name).collect();
        output::kv("Also matched (lower priority)", &names.join(", "));
    }

    Ok(())
}
