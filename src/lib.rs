pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::TranslateOptions;
pub use crate::core::{
    manifest::{extract_group, load_manifest, Manifest},
    translate::translate,
    writer::{write_group, write_groups, EnvironmentWriter},
};
pub use domain::model::{DepSelection, DependencyRecord, GroupSelector};
pub use domain::ports::{ConfigProvider, Storage};
pub use utils::error::{EnvError, Result};
