use crate::config::validate_settings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pyproject-env")]
#[command(about = "Create environment.yaml files from pyproject.toml")]
pub struct CliConfig {
    /// Directory containing pyproject.toml
    #[arg(long = "input_path", default_value = ".")]
    pub input_path: String,

    /// Directory the environment files are written to
    #[arg(long = "output_path", default_value = "./build_tools")]
    pub output_path: String,

    /// "all", "dependencies", or the name of an optional dependency group
    #[arg(long = "dep_type", default_value = "all")]
    pub dep_type: String,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn dep_type(&self) -> &str {
        &self.dep_type
    }

    // The binary always reports what it wrote.
    fn verbose(&self) -> bool {
        true
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::try_parse_from(["pyproject-env"]).unwrap();
        assert_eq!(config.input_path, ".");
        assert_eq!(config.output_path, "./build_tools");
        assert_eq!(config.dep_type, "all");
        assert!(config.verbose());
    }

    #[test]
    fn test_cli_flags_use_underscores() {
        let config = CliConfig::try_parse_from([
            "pyproject-env",
            "--input_path",
            "proj",
            "--output_path",
            "envs",
            "--dep_type",
            "test",
        ])
        .unwrap();
        assert_eq!(config.input_path, "proj");
        assert_eq!(config.output_path, "envs");
        assert_eq!(config.dep_type, "test");
        assert!(config.validate().is_ok());
    }
}
