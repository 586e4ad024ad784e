pub mod manifest;
pub mod translate;
pub mod writer;

pub use crate::domain::model::{DepSelection, DependencyRecord, GroupSelector};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
