use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the required dependency list inside the project table.
pub const REQUIRED_GROUP: &str = "dependencies";
/// Key of the optional dependency sub-table inside the project table.
pub const OPTIONAL_TABLE: &str = "optional-dependencies";
/// `--dep_type` value that selects every group in the manifest.
pub const ALL_GROUPS: &str = "all";

/// One environment file: `name` followed by the ordered `dependencies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    pub dependencies: Vec<String>,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.name)
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

/// Which dependency group to pull out of the project table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    Required,
    Optional(String),
}

impl GroupSelector {
    pub fn parse(value: &str) -> Self {
        if value == REQUIRED_GROUP {
            Self::Required
        } else {
            Self::Optional(value.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Required => REQUIRED_GROUP,
            Self::Optional(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepSelection {
    All,
    Group(GroupSelector),
}

impl DepSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_GROUPS {
            Self::All
        } else {
            Self::Group(GroupSelector::parse(value))
        }
    }
}
