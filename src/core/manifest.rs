use crate::adapters::LocalStorage;
use crate::domain::model::{GroupSelector, OPTIONAL_TABLE, REQUIRED_GROUP};
use crate::domain::ports::Storage;
use crate::utils::error::{EnvError, Result};
use toml::{Table, Value};

pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Parsed `pyproject.toml`, keeping only its `project` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    project: Table,
}

impl Manifest {
    /// Reads `pyproject.toml` from the storage root.
    pub fn from_storage<S: Storage>(storage: &S) -> Result<Self> {
        let location = storage.location(MANIFEST_FILE);
        let bytes = storage
            .read_file(MANIFEST_FILE)
            .map_err(|e| EnvError::FormatError {
                path: location.clone(),
                message: e.to_string(),
            })?;
        let content = String::from_utf8(bytes).map_err(|e| EnvError::FormatError {
            path: location.clone(),
            message: format!("file is not valid UTF-8: {}", e),
        })?;

        Self::parse(&content, &location)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, MANIFEST_FILE)
    }

    fn parse(content: &str, location: &str) -> Result<Self> {
        let mut document: Table = toml::from_str(content).map_err(|e| EnvError::FormatError {
            path: location.to_string(),
            message: e.to_string(),
        })?;

        match document.remove("project") {
            None => Err(EnvError::schema(
                "expected pyproject.toml to include a project table",
            )),
            Some(Value::Table(project)) => Ok(Self { project }),
            Some(other) => Err(EnvError::schema(format!(
                "expected pyproject.toml's project entry to be a table, but found {}",
                other.type_str()
            ))),
        }
    }

    pub fn project(&self) -> &Table {
        &self.project
    }

    pub fn has_required_group(&self) -> bool {
        self.project().contains_key(REQUIRED_GROUP)
    }

    pub fn has_optional_table(&self) -> bool {
        self.project().contains_key(OPTIONAL_TABLE)
    }

    /// Optional group names in file order. Empty when there is no sub-table.
    pub fn optional_group_names(&self) -> Result<Vec<String>> {
        match self.project().get(OPTIONAL_TABLE) {
            None => Ok(Vec::new()),
            Some(value) => Ok(optional_table(value)?.keys().cloned().collect()),
        }
    }
}

fn optional_table(value: &Value) -> Result<&Table> {
    value.as_table().ok_or_else(|| {
        EnvError::schema(format!(
            "expected project.{} to be a table, but found {}",
            OPTIONAL_TABLE,
            value.type_str()
        ))
    })
}

/// Loads `<input_path>/pyproject.toml`.
pub fn load_manifest(input_path: &str) -> Result<Manifest> {
    let storage = LocalStorage::new(input_path);
    tracing::debug!("Loading manifest from {}", storage.location(MANIFEST_FILE));
    Manifest::from_storage(&storage)
}

/// Returns the dependency strings of one group, in manifest order.
pub fn extract_group(manifest: &Manifest, selector: &GroupSelector) -> Result<Vec<String>> {
    let project = manifest.project();

    let value = match selector {
        GroupSelector::Required => project.get(REQUIRED_GROUP).ok_or_else(|| {
            EnvError::schema(format!(
                "pyproject.toml's project table does not include {} sub-table",
                REQUIRED_GROUP
            ))
        })?,
        GroupSelector::Optional(name) => {
            let table = project.get(OPTIONAL_TABLE).ok_or_else(|| {
                EnvError::schema(format!(
                    "pyproject.toml's project table does not include {} sub-table",
                    OPTIONAL_TABLE
                ))
            })?;
            optional_table(table)?.get(name).ok_or_else(|| {
                EnvError::schema(format!(
                    "requested optional group `{}` not found in {}",
                    name, OPTIONAL_TABLE
                ))
            })?
        }
    };

    string_list(selector.name(), value)
}

fn string_list(group: &str, value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        EnvError::schema(format!(
            "dependency group `{}` must be an array, but found {}",
            group,
            value.type_str()
        ))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                EnvError::schema(format!(
                    "dependency group `{}` must only contain strings, but found {}",
                    group,
                    item.type_str()
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const FULL_MANIFEST: &str = r#"
[project]
name = "demo"
dependencies = ["numpy>=1.24", "pandas", "numpy>=1.24"]

[project.optional-dependencies]
test = ["pytest", "pytest-cov"]
docs = ["sphinx"]
dev = []
"#;

    fn optional(name: &str) -> GroupSelector {
        GroupSelector::Optional(name.to_string())
    }

    #[test]
    fn test_extract_required_group_keeps_order_and_duplicates() {
        let manifest = Manifest::from_toml_str(FULL_MANIFEST).unwrap();
        let deps = extract_group(&manifest, &GroupSelector::Required).unwrap();
        assert_eq!(deps, vec!["numpy>=1.24", "pandas", "numpy>=1.24"]);
    }

    #[test]
    fn test_extract_optional_groups() {
        let manifest = Manifest::from_toml_str(FULL_MANIFEST).unwrap();
        assert_eq!(
            extract_group(&manifest, &optional("test")).unwrap(),
            vec!["pytest", "pytest-cov"]
        );
        assert_eq!(
            extract_group(&manifest, &optional("docs")).unwrap(),
            vec!["sphinx"]
        );
        assert!(extract_group(&manifest, &optional("dev")).unwrap().is_empty());
    }

    #[test]
    fn test_optional_group_names_follow_file_order() {
        let manifest = Manifest::from_toml_str(FULL_MANIFEST).unwrap();
        assert_eq!(
            manifest.optional_group_names().unwrap(),
            vec!["test", "docs", "dev"]
        );
    }

    #[test]
    fn test_missing_project_table() {
        let err = Manifest::from_toml_str("[tool.black]\nline-length = 88\n").unwrap_err();
        assert!(matches!(err, EnvError::SchemaError { .. }));
    }

    #[test]
    fn test_project_not_a_table() {
        let err = Manifest::from_toml_str("project = \"demo\"\n").unwrap_err();
        match err {
            EnvError::SchemaError { message } => assert!(message.contains("string")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_is_format_error() {
        let err = Manifest::from_toml_str("[project\nname = ").unwrap_err();
        assert!(matches!(err, EnvError::FormatError { .. }));
    }

    #[test]
    fn test_missing_dependencies_sub_table() {
        let manifest = Manifest::from_toml_str("[project]\nname = \"demo\"\n").unwrap();
        let err = extract_group(&manifest, &GroupSelector::Required).unwrap_err();
        match err {
            EnvError::SchemaError { message } => {
                assert!(message.contains("does not include dependencies sub-table"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!manifest.has_required_group());
        assert!(manifest.optional_group_names().unwrap().is_empty());
    }

    #[test]
    fn test_missing_optional_table_and_group() {
        let manifest =
            Manifest::from_toml_str("[project]\ndependencies = [\"numpy\"]\n").unwrap();
        let err = extract_group(&manifest, &optional("test")).unwrap_err();
        assert!(err.to_string().contains("optional-dependencies"));

        let manifest = Manifest::from_toml_str(FULL_MANIFEST).unwrap();
        let err = extract_group(&manifest, &optional("optional-x")).unwrap_err();
        match err {
            EnvError::SchemaError { message } => assert!(message.contains("`optional-x` not found")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_string_entries_rejected() {
        let manifest =
            Manifest::from_toml_str("[project]\ndependencies = [\"numpy\", 3]\n").unwrap();
        let err = extract_group(&manifest, &GroupSelector::Required).unwrap_err();
        assert!(matches!(err, EnvError::SchemaError { .. }));
    }

    #[test]
    fn test_load_manifest_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(temp_dir.path().join(MANIFEST_FILE)).unwrap();
        file.write_all(FULL_MANIFEST.as_bytes()).unwrap();

        let manifest = load_manifest(temp_dir.path().to_str().unwrap()).unwrap();
        assert!(manifest.has_required_group());
        assert!(manifest.has_optional_table());
    }

    #[test]
    fn test_load_manifest_missing_file_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_manifest(temp_dir.path().to_str().unwrap()).unwrap_err();
        match err {
            EnvError::FormatError { path, .. } => assert!(path.ends_with("pyproject.toml")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
