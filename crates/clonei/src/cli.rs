//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clonei_projects::Config;

/// clonei - clone a repository and install its dependencies
#[derive(Parser, Debug)]
#[command(name = "clonei")]
#[command(author, version, about)]
#[command(
    long_about = "Clones the given repository with git and installs its dependencies \
                  with the tool matching the project type (pnpm, npm, cargo, maven, \
                  composer, go). The project type is detected from lockfiles and \
                  manifests unless given with --project."
)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (console messages still print)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config file (default: <config dir>/clonei/config.yaml)
    #[arg(long, global = true, env = "CLONEI_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub clone: CloneArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported project types
    Types(TypesArgs),

    /// Detect the project type of an existing directory
    Detect(DetectArgs),

    /// Install dependencies in an existing directory
    Install(InstallArgs),
}

/// Arguments for the default clone-and-install flow
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Repository URL (https://, ssh://, git@host:path, ...)
    #[arg(required = true)]
    pub repository: Option<String>,

    /// Destination directory (default: repository name)
    pub directory: Option<Utf8PathBuf>,

    /// Project type (pnpm, npm, cargo, maven, composer, go) or "auto"
    #[arg(short, long, env = "CLONEI_PROJECT")]
    pub project: Option<String>,

    /// Install dependencies after cloning, even if the config file disables it
    #[arg(long, overrides_with = "no_install")]
    pub install: bool,

    /// Clone only, do not install dependencies
    #[arg(long, overrides_with = "install")]
    pub no_install: bool,

    /// Change into the project directory afterwards, even if the config file disables it
    #[arg(long, overrides_with = "no_cd")]
    pub cd: bool,

    /// Do not change into the project directory afterwards
    #[arg(long, overrides_with = "cd")]
    pub no_cd: bool,

    /// Create a shallow clone with history truncated to this many commits
    #[arg(long)]
    pub depth: Option<u32>,

    /// Branch to checkout after clone
    #[arg(short, long)]
    pub branch: Option<String>,
}

impl CloneArgs {
    /// Whether to install, with the last of `--install`/`--no-install` beating the config
    pub fn install_enabled(&self, config: &Config) -> bool {
        flag_or(self.install, self.no_install, config.install)
    }

    /// Whether to enter the project, with the last of `--cd`/`--no-cd` beating the config
    pub fn cd_enabled(&self, config: &Config) -> bool {
        flag_or(self.cd, self.no_cd, config.cd)
    }
}

fn flag_or(on: bool, off: bool, fallback: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => fallback,
    }
}

#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub directory: Utf8PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub directory: Utf8PathBuf,

    /// Project type (pnpm, npm, cargo, maven, composer, go) or "auto"
    #[arg(short, long, env = "CLONEI_PROJECT")]
    pub project: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_default_clone() {
        let cli = Cli::try_parse_from(["clonei", "https://github.com/user/repo.git"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(
            cli.clone.repository.as_deref(),
            Some("https://github.com/user/repo.git")
        );
        assert!(cli.clone.directory.is_none());
        assert!(!cli.clone.no_install);
        assert!(!cli.clone.no_cd);
    }

    #[test]
    fn test_parse_clone_with_options() {
        let cli = Cli::try_parse_from([
            "clonei",
            "-p",
            "pnpm",
            "--no-install",
            "--no-cd",
            "--depth",
            "1",
            "-b",
            "main",
            "git@github.com:user/repo.git",
            "work/repo",
        ])
        .unwrap();
        assert_eq!(cli.clone.project.as_deref(), Some("pnpm"));
        assert!(cli.clone.no_install);
        assert!(cli.clone.no_cd);
        assert_eq!(cli.clone.depth, Some(1));
        assert_eq!(cli.clone.branch.as_deref(), Some("main"));
        assert_eq!(cli.clone.directory, Some(Utf8PathBuf::from("work/repo")));
    }

    #[test]
    fn test_repository_required_without_subcommand() {
        assert!(Cli::try_parse_from(["clonei"]).is_err());
    }

    #[test]
    fn test_parse_types_subcommand() {
        let cli = Cli::try_parse_from(["clonei", "types", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Types(TypesArgs { json: true }))));
        assert!(cli.clone.repository.is_none());
    }

    #[test]
    fn test_parse_detect_default_directory() {
        let cli = Cli::try_parse_from(["clonei", "detect"]).unwrap();
        match cli.command {
            Some(Commands::Detect(args)) => {
                assert_eq!(args.directory, Utf8PathBuf::from("."));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_install_with_project() {
        let cli = Cli::try_parse_from(["clonei", "install", "app", "--project", "go"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.directory, Utf8PathBuf::from("app"));
                assert_eq!(args.project.as_deref(), Some("go"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["clonei", "types", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["clonei", "-q", "https://example.com/a.git"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_flags_override_config() {
        let disabled = Config {
            install: false,
            cd: false,
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["clonei", "--install", "--cd", "https://example.com/a.git"])
            .unwrap();
        assert!(cli.clone.install_enabled(&disabled));
        assert!(cli.clone.cd_enabled(&disabled));

        let cli = Cli::try_parse_from(["clonei", "--no-install", "--no-cd", "https://example.com/a.git"])
            .unwrap();
        assert!(!cli.clone.install_enabled(&Config::default()));
        assert!(!cli.clone.cd_enabled(&Config::default()));
    }

    #[test]
    fn test_config_applies_without_flags() {
        let cli = Cli::try_parse_from(["clonei", "https://example.com/a.git"]).unwrap();
        let disabled = Config {
            install: false,
            cd: false,
            ..Config::default()
        };
        assert!(!cli.clone.install_enabled(&disabled));
        assert!(!cli.clone.cd_enabled(&disabled));
        assert!(cli.clone.install_enabled(&Config::default()));
        assert!(cli.clone.cd_enabled(&Config::default()));
    }

    #[test]
    fn test_last_install_flag_wins() {
        let cli = Cli::try_parse_from([
            "clonei",
            "--install",
            "--no-install",
            "https://example.com/a.git",
        ])
        .unwrap();
        assert!(!cli.clone.install_enabled(&Config::default()));

        let cli = Cli::try_parse_from([
            "clonei",
            "--no-cd",
            "--cd",
            "https://example.com/a.git",
        ])
        .unwrap();
        let disabled = Config {
            cd: false,
            ..Config::default()
        };
        assert!(cli.clone.cd_enabled(&disabled));
    }

    #[test]
    fn test_clone_flags_rejected_by_subcommand() {
        assert!(Cli::try_parse_from(["clonei", "types", "--no-install"]).is_err());
    }
}
