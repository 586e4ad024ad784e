use crate::utils::error::Result;

/// Byte storage rooted at a directory. Paths passed in are relative to that root.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Creates the root directory if needed. Succeeds when it already exists.
    fn ensure_root(&self) -> Result<()>;
    /// Display form of `path` under the root, used in status messages.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn dep_type(&self) -> &str;
    fn verbose(&self) -> bool;
}
