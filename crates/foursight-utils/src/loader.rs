use std::path::Path;

pub mod error;
pub mod file;
pub mod file_system;

pub use file_system::FileSystemLoader;

const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

pub fn is_yaml<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yaml() {
        assert!(is_yaml("assessments/data-maturity.assessment.yaml"));
        assert!(is_yaml("catalog.yml"));
        assert!(!is_yaml("catalog.json"));
        assert!(!is_yaml("README"));
    }
}
