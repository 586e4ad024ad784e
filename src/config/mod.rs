#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::REQUIRED_GROUP;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_group_name, validate_path, Validate};

/// Library-side settings for a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    pub input_path: String,
    pub output_path: String,
    pub dep_type: String,
    pub verbose: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            input_path: ".".to_string(),
            output_path: ".".to_string(),
            dep_type: REQUIRED_GROUP.to_string(),
            verbose: true,
        }
    }
}

impl ConfigProvider for TranslateOptions {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn dep_type(&self) -> &str {
        &self.dep_type
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for TranslateOptions {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

pub(crate) fn validate_settings<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("input_path", config.input_path())?;
    validate_path("output_path", config.output_path())?;
    validate_group_name("dep_type", config.dep_type())
}
