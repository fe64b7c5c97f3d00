//! Project type registry
//!
//! Holds the known project types in priority order and maps either a
//! directory (auto-detection) or a user-supplied name to exactly one of them.
//! Names are matched case-insensitively everywhere.

use camino::Utf8Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::project_type::{ProjectType, BUILTIN_PROJECT_TYPES};

/// Keyword that requests auto-detection instead of a named type
pub const AUTO: &str = "auto";

/// How the project type should be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'r> {
    /// Scan the directory for marker files
    Auto,
    /// Use this type regardless of marker files
    Explicit(&'r ProjectType),
}

/// Ordered registry of project types
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    types: Vec<ProjectType>,
}

impl ProjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Create a registry populated with the built-in project types
    pub fn with_defaults() -> Self {
        Self {
            types: BUILTIN_PROJECT_TYPES.to_vec(),
        }
    }

    /// Append a project type at the lowest priority
    ///
    /// # Errors
    /// Returns [`Error::DuplicateProjectType`] if a type with the same name
    /// (ignoring case) is already registered.
    pub fn register(&mut self, project_type: ProjectType) -> Result<()> {
        if self.resolve(project_type.name).is_some() {
            return Err(Error::duplicate_project_type(project_type.name));
        }
        self.types.push(project_type);
        Ok(())
    }

    /// Registered types in priority order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectType> {
        self.types.iter()
    }

    /// Registered names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.types.iter().map(|t| t.name).collect()
    }

    /// Registered names joined for help and error text
    pub fn available(&self) -> String {
        self.names().join(", ")
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up a type by name, ignoring ASCII case
    pub fn resolve(&self, name: &str) -> Option<&ProjectType> {
        self.types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// First type whose marker file exists directly under `dir`
    pub fn detect(&self, dir: &Utf8Path) -> Option<&ProjectType> {
        let found = self.types.iter().find(|t| t.matches(dir));
        match found {
            Some(t) => debug!("Detected {} project in {} ({})", t.name, dir, t.marker),
            None => debug!("No marker file found in {}", dir),
        }
        found
    }

    /// Every type whose marker file exists under `dir`, in priority order
    pub fn detect_all(&self, dir: &Utf8Path) -> Vec<&ProjectType> {
        self.types.iter().filter(|t| t.matches(dir)).collect()
    }

    /// Interpret a user request for a project type
    ///
    /// `None` and the keyword `auto` (any case) select auto-detection; any
    /// other value must name a registered type.
    pub fn selection(&self, requested: Option<&str>) -> Result<Selection<'_>> {
        match requested.map(str::trim) {
            None => Ok(Selection::Auto),
            Some(name) if name.eq_ignore_ascii_case(AUTO) => Ok(Selection::Auto),
            Some(name) => self
                .resolve(name)
                .map(Selection::Explicit)
                .ok_or_else(|| Error::unknown_project_type(name, self.available())),
        }
    }

    /// Apply a selection to the project rooted at `dir`
    pub fn select<'r>(&'r self, selection: Selection<'r>, dir: &Utf8Path) -> Result<&'r ProjectType> {
        match selection {
            Selection::Explicit(project_type) => Ok(project_type),
            Selection::Auto => self
                .detect(dir)
                .ok_or_else(|| Error::no_project_detected(dir.as_str(), self.available())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn project_dir(markers: &[&str]) -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        for marker in markers {
            std::fs::write(dir.join(marker), "").unwrap();
        }
        (temp, dir)
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ProjectRegistry::with_defaults();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registration_order_is_pinned() {
        let registry = ProjectRegistry::with_defaults();
        assert_eq!(
            registry.names(),
            vec!["pnpm", "npm", "cargo", "maven", "composer", "go"]
        );
        assert_eq!(registry.available(), "pnpm, npm, cargo, maven, composer, go");
    }

    #[test]
    fn test_resolve_builtin_names() {
        let registry = ProjectRegistry::with_defaults();
        for name in registry.names() {
            assert_eq!(registry.resolve(name).map(|t| t.name), Some(name));
        }
    }

    #[test]
    fn test_resolve_ignores_case() {
        let registry = ProjectRegistry::with_defaults();
        assert_eq!(registry.resolve("PNPM").map(|t| t.name), Some("pnpm"));
        assert_eq!(registry.resolve("Cargo").map(|t| t.name), Some("cargo"));
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ProjectRegistry::with_defaults();
        assert!(registry.resolve("gradle").is_none());
        assert!(registry.resolve("").is_none());
        assert!(registry.resolve("np").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProjectRegistry::new();
        let (_temp, dir) = project_dir(&["package-lock.json"]);
        assert!(registry.is_empty());
        assert!(registry.detect(&dir).is_none());
        assert!(registry.resolve("npm").is_none());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ProjectRegistry::with_defaults();
        let mut npm = *registry.resolve("npm").unwrap();
        npm.name = "NPM";
        let err = registry.register(npm).unwrap_err();
        assert!(matches!(err, Error::DuplicateProjectType { ref name } if name == "NPM"));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_register_appends_lowest_priority() {
        let mut registry = ProjectRegistry::new();
        registry
            .register(ProjectType {
                name: "bundler",
                description: "Ruby project managed by Bundler",
                marker: "Gemfile.lock",
                executable: "bundle",
                program: "bundle",
                args: &["install"],
            })
            .unwrap();
        registry.register(BUILTIN_PROJECT_TYPES[0]).unwrap();
        assert_eq!(registry.names(), vec!["bundler", "pnpm"]);
    }

    #[test]
    fn test_detect_pnpm_only() {
        let registry = ProjectRegistry::with_defaults();
        let (_temp, dir) = project_dir(&["pnpm-lock.yaml"]);
        assert_eq!(registry.detect(&dir).map(|t| t.name), Some("pnpm"));
    }

    #[test]
    fn test_detect_first_registered_wins() {
        let registry = ProjectRegistry::with_defaults();
        let (_temp, dir) = project_dir(&["package-lock.json", "pnpm-lock.yaml"]);
        assert_eq!(registry.detect(&dir).map(|t| t.name), Some("pnpm"));

        let all: Vec<_> = registry.detect_all(&dir).iter().map(|t| t.name).collect();
        assert_eq!(all, vec!["pnpm", "npm"]);
    }

    #[test]
    fn test_detect_each_builtin_marker() {
        let registry = ProjectRegistry::with_defaults();
        for project_type in registry.iter() {
            let (_temp, dir) = project_dir(&[project_type.marker]);
            assert_eq!(
                registry.detect(&dir).map(|t| t.name),
                Some(project_type.name)
            );
        }
    }

    #[test]
    fn test_detect_none() {
        let registry = ProjectRegistry::with_defaults();
        let (_temp, dir) = project_dir(&["README.md", "package.json"]);
        assert!(registry.detect(&dir).is_none());
        assert!(registry.detect_all(&dir).is_empty());
    }

    #[test]
    fn test_detect_ignores_directory_named_like_marker() {
        let registry = ProjectRegistry::with_defaults();
        let (_temp, dir) = project_dir(&[]);
        std::fs::create_dir(dir.join("go.mod")).unwrap();
        assert!(registry.detect(&dir).is_none());
    }

    #[test]
    fn test_selection_auto() {
        let registry = ProjectRegistry::with_defaults();
        assert_eq!(registry.selection(None).unwrap(), Selection::Auto);
        assert_eq!(registry.selection(Some("auto")).unwrap(), Selection::Auto);
        assert_eq!(registry.selection(Some("AUTO")).unwrap(), Selection::Auto);
    }

    #[test]
    fn test_selection_explicit() {
        let registry = ProjectRegistry::with_defaults();
        match registry.selection(Some("Go")).unwrap() {
            Selection::Explicit(t) => assert_eq!(t.name, "go"),
            other => panic!("unexpected selection: {:?}", other),
        }
    }

    #[test]
    fn test_selection_unknown_lists_available() {
        let registry = ProjectRegistry::with_defaults();
        let err = registry.selection(Some("rust")).unwrap_err();
        match err {
            Error::UnknownProjectType {
                project_type,
                available,
            } => {
                assert_eq!(project_type, "rust");
                assert_eq!(available, "pnpm, npm, cargo, maven, composer, go");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_select_explicit_ignores_markers() {
        let registry = ProjectRegistry::with_defaults();
        let (_temp, dir) = project_dir(&["package-lock.json"]);
        let selection = registry.selection(Some("cargo")).unwrap();
        assert_eq!(registry.select(selection, &dir).unwrap().name, "cargo");
    }

    #[test]
    fn test_select_auto_without_marker() {
        let registry = ProjectRegistry::with_defaults();
        let (_temp, dir) = project_dir(&[]);
        let err = registry.select(Selection::Auto, &dir).unwrap_err();
        assert!(matches!(err, Error::NoProjectDetected { .. }));
    }
}
