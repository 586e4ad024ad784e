/// Appends a `/` unless the path already ends with `/` or `\`.
pub fn with_trailing_separator(path: &str) -> String {
    if path.ends_with('/') || path.ends_with('\\') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_trailing_separator() {
        assert_eq!(with_trailing_separator("."), "./");
        assert_eq!(with_trailing_separator("./build_tools"), "./build_tools/");
        assert_eq!(with_trailing_separator("out/"), "out/");
        assert_eq!(with_trailing_separator(r"C:\envs\"), r"C:\envs\");
    }
}
