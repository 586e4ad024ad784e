use crate::adapters::LocalStorage;
use crate::config::validate_settings;
use crate::core::manifest::{extract_group, load_manifest, Manifest};
use crate::core::writer::EnvironmentWriter;
use crate::domain::model::{DepSelection, DependencyRecord, GroupSelector};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::paths::with_trailing_separator;

/// Loads the manifest once and writes the selected group(s).
///
/// With `dep_type == "all"` the required list is written first (when present),
/// then each optional group in manifest order. The first failure aborts the run;
/// files written before it stay on disk.
pub fn translate<C: ConfigProvider>(config: &C) -> Result<()> {
    run(config).map(|_| ())
}

/// Same as [`translate`] but hands back the records that were written.
pub fn run<C: ConfigProvider>(config: &C) -> Result<Vec<DependencyRecord>> {
    validate_settings(config)?;

    let input_path = with_trailing_separator(config.input_path());
    let output_path = with_trailing_separator(config.output_path());

    let manifest = load_manifest(&input_path)?;
    let writer = EnvironmentWriter::new(LocalStorage::new(&output_path), config.verbose());

    match DepSelection::parse(config.dep_type()) {
        DepSelection::All => {
            let mut records = Vec::new();

            if manifest.has_required_group() {
                records.extend(write_selected(&writer, &manifest, &GroupSelector::Required)?);
            }

            if manifest.has_optional_table() {
                // Keys go through the sentinel rule, so an optional group named
                // `dependencies` rewrites the required list, not its own entry.
                for name in manifest.optional_group_names()? {
                    let selector = GroupSelector::parse(&name);
                    records.extend(write_selected(&writer, &manifest, &selector)?);
                }
            }

            if records.is_empty() {
                tracing::warn!(
                    "No dependency groups found in {}pyproject.toml, nothing written",
                    input_path
                );
            } else {
                tracing::debug!("Wrote {} dependency groups", records.len());
            }
            Ok(records)
        }
        DepSelection::Group(selector) => write_selected(&writer, &manifest, &selector),
    }
}

/// Extracts one group and writes it through the writer's guarded fan-in.
fn write_selected<S: Storage>(
    writer: &EnvironmentWriter<S>,
    manifest: &Manifest,
    selector: &GroupSelector,
) -> Result<Vec<DependencyRecord>> {
    let dependencies = extract_group(manifest, selector)?;
    writer.write_groups(vec![(selector.name().to_string(), dependencies)])
}
