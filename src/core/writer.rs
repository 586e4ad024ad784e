use crate::adapters::LocalStorage;
use crate::domain::model::DependencyRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{EnvError, Result};
use crate::utils::validation::validate_group_name;

/// Serializes dependency records to `<name>.yaml` files through a `Storage`.
pub struct EnvironmentWriter<S: Storage> {
    storage: S,
    verbose: bool,
}

impl<S: Storage> EnvironmentWriter<S> {
    pub fn new(storage: S, verbose: bool) -> Self {
        Self { storage, verbose }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes one group, replacing any existing file of the same name.
    pub fn write_group(
        &self,
        group_name: &str,
        dependencies: Vec<String>,
    ) -> Result<DependencyRecord> {
        validate_group_name("group_name", group_name)?;
        self.storage.ensure_root()?;

        let record = DependencyRecord::new(group_name, dependencies);
        let yaml = render_record(&record)?;
        let file_name = record.file_name();
        self.storage.write_file(&file_name, yaml.as_bytes())?;

        let location = self.storage.location(&file_name);
        tracing::debug!(
            "Wrote {} ({} dependencies)",
            location,
            record.dependencies.len()
        );
        if self.verbose {
            println!("{}", status_message(&location, &record));
        }

        Ok(record)
    }

    /// Writes every group in order. Fails before writing when `groups` is empty.
    pub fn write_groups(
        &self,
        groups: Vec<(String, Vec<String>)>,
    ) -> Result<Vec<DependencyRecord>> {
        self.storage.ensure_root()?;

        if groups.is_empty() {
            return Err(EnvError::InputError {
                message: "empty dependency dictionary".to_string(),
            });
        }

        groups
            .into_iter()
            .map(|(name, dependencies)| self.write_group(&name, dependencies))
            .collect()
    }
}

/// Line printed after a verbose write.
pub fn status_message(location: &str, record: &DependencyRecord) -> String {
    format!(
        "Dependency environment created at {} with data: {}.",
        location, record
    )
}

// Plain words that YAML 1.1 loaders (conda's among them) read as booleans.
const YAML11_BOOLS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "on", "On", "ON", "off", "Off",
    "OFF", "true", "True", "TRUE", "false", "False", "FALSE",
];

/// Renders the record as a block mapping, the same layout serde_yaml emits,
/// but with every scalar safe for YAML 1.1 readers.
pub fn render_record(record: &DependencyRecord) -> Result<String> {
    let mut yaml = format!("name: {}\n", render_scalar(&record.name)?);

    if record.dependencies.is_empty() {
        yaml.push_str("dependencies: []\n");
    } else {
        yaml.push_str("dependencies:\n");
        for dependency in &record.dependencies {
            yaml.push_str("- ");
            yaml.push_str(&render_scalar(dependency)?);
            yaml.push('\n');
        }
    }

    Ok(yaml)
}

fn render_scalar(value: &str) -> Result<String> {
    let emitted = serde_yaml::to_string(value)?;
    let scalar = emitted.trim_end_matches('\n');

    if scalar.contains('\n') {
        // Block scalars do not nest inline; a JSON string is a valid double-quoted scalar.
        return Ok(serde_json::to_string(value)?);
    }
    if YAML11_BOOLS.contains(&scalar) {
        return Ok(format!("'{}'", scalar));
    }
    Ok(scalar.to_string())
}

/// Writes `<output_path>/<group_name>.yaml` and returns the record written.
pub fn write_group(
    group_name: &str,
    dependencies: Vec<String>,
    output_path: &str,
    verbose: bool,
) -> Result<DependencyRecord> {
    EnvironmentWriter::new(LocalStorage::new(output_path), verbose)
        .write_group(group_name, dependencies)
}

pub fn write_groups(
    groups: Vec<(String, Vec<String>)>,
    output_path: &str,
    verbose: bool,
) -> Result<Vec<DependencyRecord>> {
    EnvironmentWriter::new(LocalStorage::new(output_path), verbose).write_groups(groups)
}
