//! Error types for clonei-projects

use thiserror::Error;

/// Result type alias using clonei-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// How loudly an error should be reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing went wrong, there was just nothing to do
    Info,
    /// The repository is in place but a later step failed
    Warning,
    /// The requested operation could not be carried out
    Error,
}

/// Project detection and installation error types
#[derive(Error, Debug)]
pub enum Error {
    /// Explicitly requested project type is not registered
    #[error("Unsupported project type '{project_type}'. Available project types: {available}")]
    UnknownProjectType {
        project_type: String,
        available: String,
    },

    /// Auto-detection found no marker file
    #[error("Could not detect a project type in {path}. Available project types: {available}")]
    NoProjectDetected { path: String, available: String },

    /// A project type with the same name is already registered
    #[error("Project type '{name}' is already registered")]
    DuplicateProjectType { name: String },

    /// Required executable is not on PATH
    #[error("{tool} not found. Please install {tool} and ensure it is on your PATH")]
    ToolNotFound { tool: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Install command exited unsuccessfully
    #[error("Dependency installation failed ({command}) in {path}: {}", describe_exit(.code))]
    InstallFailed {
        command: String,
        path: String,
        code: Option<i32>,
    },

    /// Child process could not be started
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Target directory missing or not a directory
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// Invalid repository URL
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// Repository already exists
    #[error("Project directory already exists at: {path}")]
    RepoExists { path: String },

    /// Clone failed
    #[error("Failed to clone repository {url}: {}", describe_exit(.code))]
    CloneFailed { url: String, code: Option<i32> },

    /// Invalid configuration
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl Error {
    /// Create an unknown project type error
    pub fn unknown_project_type(
        project_type: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self::UnknownProjectType {
            project_type: project_type.into(),
            available: available.into(),
        }
    }

    /// Create a no project detected error
    pub fn no_project_detected(path: impl Into<String>, available: impl Into<String>) -> Self {
        Self::NoProjectDetected {
            path: path.into(),
            available: available.into(),
        }
    }

    /// Create a duplicate project type error
    pub fn duplicate_project_type(name: impl Into<String>) -> Self {
        Self::DuplicateProjectType { name: name.into() }
    }

    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create an install failed error
    pub fn install_failed(
        command: impl Into<String>,
        path: impl Into<String>,
        code: Option<i32>,
    ) -> Self {
        Self::InstallFailed {
            command: command.into(),
            path: path.into(),
            code,
        }
    }

    /// Create a spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a directory not found error
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a repo exists error
    pub fn repo_exists(path: impl Into<String>) -> Self {
        Self::RepoExists { path: path.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(url: impl Into<String>, code: Option<i32>) -> Self {
        Self::CloneFailed {
            url: url.into(),
            code,
        }
    }

    /// Create a config error
    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Severity used when reporting this error on the console
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoProjectDetected { .. } => Severity::Info,
            Self::ToolNotFound { .. } | Self::InstallFailed { .. } | Self::Spawn { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}
